//! Program account scans: the auctions a wallet bids in, the domains it owns, and auctions about
//! to end.

use name_auction_interface::{
    pack::Pack,
    query::{
        bidder_auctions_filters,
        ending_auctions_filters,
        owned_names_filters,
    },
    state::{
        auction_data::AuctionHeader,
        bidder_pot::BidderPot,
    },
    ProgramConfig,
};
use solana_address::Address;

use crate::rpc::LedgerRpc;

/// Bidder pots of `bidder`, one per auction they have bid in.
pub async fn get_bidder_auctions(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    bidder: &Address,
) -> anyhow::Result<Vec<(Address, BidderPot)>> {
    let accounts = rpc
        .get_program_accounts(&config.auction_program, &bidder_auctions_filters(bidder))
        .await?;

    Ok(decode_all(accounts, |data| {
        BidderPot::unpack(data)
            .ok()
            .filter(|pot| &pot.bidder_wallet == bidder)
    }))
}

/// Name accounts under the configured root domain owned by `owner`.
pub async fn get_owned_domains(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    owner: &Address,
) -> anyhow::Result<Vec<Address>> {
    let filters = owned_names_filters(owner, Some(&config.root_domain));
    let accounts = rpc
        .get_program_accounts(&config.naming_service_program, &filters)
        .await?;

    Ok(accounts.into_iter().map(|(address, _)| address).collect())
}

/// Raw auction program accounts matched by the ending-auction filters for `now..now + interval`:
/// auctions without a bid first, then auctions with one.
///
/// The filters match whole byte buckets, so this can include auctions outside the window. Use
/// [`get_ending_auctions`] for verified results.
pub async fn scan_ending_auctions(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    now: i64,
    interval: i64,
) -> anyhow::Result<Vec<(Address, Vec<u8>)>> {
    let mut accounts = vec![];
    for filters in ending_auctions_filters(now, interval) {
        accounts.extend(
            rpc.get_program_accounts(&config.auction_program, &filters)
                .await?,
        );
    }
    Ok(accounts)
}

/// Auctions scheduled to end within `interval` seconds of `now`, decoded and checked.
pub async fn get_ending_auctions_at(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    now: i64,
    interval: i64,
) -> anyhow::Result<Vec<(Address, AuctionHeader)>> {
    let accounts = scan_ending_auctions(rpc, config, now, interval).await?;
    Ok(decode_all(accounts, |data| {
        AuctionHeader::unpack(data)
            .ok()
            .filter(|auction| auction.ends_within(now, interval))
    }))
}

/// [`get_ending_auctions_at`] from the current wall clock time.
pub async fn get_ending_auctions(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    interval: i64,
) -> anyhow::Result<Vec<(Address, AuctionHeader)>> {
    let now = chrono::Utc::now().timestamp();
    get_ending_auctions_at(rpc, config, now, interval).await
}

fn decode_all<T>(
    accounts: Vec<(Address, Vec<u8>)>,
    decode: impl Fn(&[u8]) -> Option<T>,
) -> Vec<(Address, T)> {
    accounts
        .into_iter()
        .filter_map(|(address, data)| decode(&data).map(|decoded| (address, decoded)))
        .collect()
}
