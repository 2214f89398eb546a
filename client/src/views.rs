//! Read-only view helpers that fetch name auction accounts and decode them into interface types.

use anyhow::Context;
use itertools::Itertools;
use name_auction_interface::{
    pack::Pack,
    seeds::find_reverse_lookup_account,
    state::{
        auction_data::AuctionHeader,
        central_state::CentralState,
        name_auction::NameAuction,
        name_record::NameRecordHeader,
        reselling_state::ResellingState,
        reverse_lookup::ReverseLookup,
    },
    NameAuctionError,
    ProgramConfig,
};
use price::OraclePrice;
use rust_decimal::Decimal;
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;

use crate::{
    context::NameContext,
    rpc::{
        LedgerRpc,
        MAX_MULTIPLE_ACCOUNTS,
    },
};

async fn fetch(
    rpc: &impl LedgerRpc,
    address: &Address,
    commitment: CommitmentConfig,
    missing: NameAuctionError,
) -> anyhow::Result<Vec<u8>> {
    rpc.get_account_data(address, commitment)
        .await?
        .ok_or(missing)
        .with_context(|| format!("Account {address} doesn't exist"))
}

/// Checks if an account at the given address exists on-chain.
pub async fn account_exists(rpc: &impl LedgerRpc, address: &Address) -> anyhow::Result<bool> {
    Ok(rpc
        .get_account_data(address, CommitmentConfig::confirmed())
        .await?
        .is_some())
}

/// Fetches accounts in chunks of [`MAX_MULTIPLE_ACCOUNTS`], one request after another. The result
/// has one entry per address, in input order.
pub async fn get_multiple_accounts_data_batched(
    rpc: &impl LedgerRpc,
    addresses: &[Address],
) -> anyhow::Result<Vec<Option<Vec<u8>>>> {
    let mut accounts = Vec::with_capacity(addresses.len());
    for chunk in addresses.chunks(MAX_MULTIPLE_ACCOUNTS) {
        let fetched = rpc.get_multiple_accounts_data(chunk).await?;
        anyhow::ensure!(
            fetched.len() == chunk.len(),
            "Requested {} accounts but received {}",
            chunk.len(),
            fetched.len()
        );
        accounts.extend(fetched);
    }
    Ok(accounts)
}

/// The auction state of a domain. Read at `processed` so a just-created auction is visible.
pub async fn retrieve_name_auction(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name: &str,
) -> anyhow::Result<NameAuction> {
    let ctx = NameContext::new(config, name);
    let data = fetch(
        rpc,
        &ctx.state,
        CommitmentConfig::processed(),
        NameAuctionError::AuctionNotFound,
    )
    .await?;
    Ok(NameAuction::unpack(&data)?)
}

pub async fn retrieve_reselling_state(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name: &str,
) -> anyhow::Result<ResellingState> {
    let ctx = NameContext::new(config, name);
    let data = fetch(
        rpc,
        &ctx.reselling_state,
        CommitmentConfig::confirmed(),
        NameAuctionError::ResellingStateNotFound,
    )
    .await?;
    Ok(ResellingState::unpack(&data)?)
}

pub async fn retrieve_central_state(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
) -> anyhow::Result<CentralState> {
    let data = fetch(
        rpc,
        &config.central_state,
        CommitmentConfig::confirmed(),
        NameAuctionError::AccountNotFound,
    )
    .await?;
    Ok(CentralState::unpack(&data)?)
}

/// The timing header of an auction program account.
pub async fn retrieve_auction(
    rpc: &impl LedgerRpc,
    auction: &Address,
) -> anyhow::Result<AuctionHeader> {
    let data = fetch(
        rpc,
        auction,
        CommitmentConfig::confirmed(),
        NameAuctionError::AuctionNotFound,
    )
    .await?;
    Ok(AuctionHeader::unpack(&data)?)
}

/// The current owner of a domain under the configured root.
pub async fn domain_owner(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name: &str,
) -> anyhow::Result<Address> {
    let ctx = NameContext::new(config, name);
    let data = fetch(
        rpc,
        &ctx.name_account,
        CommitmentConfig::confirmed(),
        NameAuctionError::AccountNotFound,
    )
    .await?;
    Ok(NameRecordHeader::unpack(&data)?.owner)
}

/// The human readable name of a name account.
pub async fn reverse_lookup(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name_account: &Address,
) -> anyhow::Result<String> {
    let reverse = find_reverse_lookup_account(config, name_account);
    let data = fetch(
        rpc,
        &reverse,
        CommitmentConfig::confirmed(),
        NameAuctionError::AccountNotFound,
    )
    .await
    .with_context(|| format!("No reverse lookup for {name_account}"))?;
    Ok(ReverseLookup::unpack(&data)?.name)
}

/// Reverse lookups of many name accounts at once.
///
/// The output lines up with `name_accounts`. Entries whose reverse lookup is missing or doesn't
/// decode are `None`.
pub async fn batch_reverse_lookup(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name_accounts: &[Address],
) -> anyhow::Result<Vec<Option<String>>> {
    let reverse_accounts = name_accounts
        .iter()
        .map(|name_account| find_reverse_lookup_account(config, name_account))
        .collect_vec();

    let accounts = get_multiple_accounts_data_batched(rpc, &reverse_accounts).await?;

    Ok(accounts
        .into_iter()
        .map(|data| {
            data.and_then(|data| ReverseLookup::unpack(&data).ok())
                .map(|record| record.name)
        })
        .collect_vec())
}

/// The aggregate FIDA/USD price the program quotes fixed-price registrations against.
pub async fn oracle_price(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
) -> anyhow::Result<OraclePrice> {
    let data = fetch(
        rpc,
        &config.price_oracle,
        CommitmentConfig::confirmed(),
        NameAuctionError::AccountNotFound,
    )
    .await
    .context("Unable to retrieve oracle data")?;

    OraclePrice::try_from_bytes(&data)
        .map_err(NameAuctionError::from)
        .context("Invalid oracle account data")
}

/// [`oracle_price`] normalized by its exponent.
pub async fn oracle_price_decimal(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
) -> anyhow::Result<Decimal> {
    let price = oracle_price(rpc, config).await?;
    price
        .to_decimal()
        .ok_or(NameAuctionError::InvalidOracleExponent)
        .with_context(|| {
            format!(
                "Oracle price {} with exponent {} doesn't fit in a decimal",
                price.price, price.exponent
            )
        })
}
