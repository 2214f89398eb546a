//! End-to-end flows that look up whatever on-chain state an operation needs and return a
//! [`PrimedTransaction`] ready for [`LedgerRpc::send_primed_transaction`].

use anyhow::Context;
use name_auction_interface::{
    state::{
        auction_data::BASE_AUCTION_DATA_SIZE,
        name_record::NameRecordHeader,
    },
    ProgramConfig,
    ProtocolVersion,
};
use solana_address::Address;
use solana_sdk::{
    signature::Keypair,
    signer::Signer,
};

use crate::{
    context::{
        init_central_state,
        BuyNow,
        ClaimParams,
        NameContext,
    },
    primed_transaction::PrimedTransaction,
    rpc::LedgerRpc,
    views::{
        retrieve_name_auction,
        retrieve_reselling_state,
    },
};

pub fn init(config: &ProgramConfig, fee_payer: Address) -> anyhow::Result<PrimedTransaction> {
    Ok(PrimedTransaction::from_instruction(init_central_state(
        config, fee_payer,
    )?))
}

/// Starts the first auction of a domain.
///
/// Legacy deployments keep the auction in a new account owned by the auction program. That account
/// is allocated here, rent exempt, and its keypair is returned as a signer.
pub async fn create_name_auction(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name: &str,
    fee_payer: Address,
    quote_mint: Address,
) -> anyhow::Result<PrimedTransaction> {
    let ctx = NameContext::new(config, name);

    match config.version {
        ProtocolVersion::Current => Ok(PrimedTransaction::from_instruction(
            ctx.create_auction(fee_payer, quote_mint)?,
        )),
        ProtocolVersion::Legacy => {
            let auction = Keypair::new();
            let lamports = rpc
                .get_minimum_balance_for_rent_exemption(BASE_AUCTION_DATA_SIZE)
                .await?;
            let allocate_auction = solana_system_interface::instruction::create_account(
                &fee_payer,
                &auction.pubkey(),
                lamports,
                BASE_AUCTION_DATA_SIZE as u64,
                &config.auction_program,
            );
            let create = ctx.legacy_create_auction(fee_payer, quote_mint, auction.pubkey())?;

            Ok(PrimedTransaction::new(
                vec![auction],
                vec![allocate_auction, create],
            ))
        }
    }
}

/// Claims a won auction.
///
/// First auctions pay into the quote mint's vault and create a name account of `space` bytes.
/// Resales pay the reseller's destination account from the reselling state.
pub async fn claim_name(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name: &str,
    params: &ClaimParams,
    space: u32,
) -> anyhow::Result<PrimedTransaction> {
    let ctx = NameContext::new(config, name);
    let auction_state = retrieve_name_auction(rpc, config, name).await?;

    let instruction = match config.version {
        ProtocolVersion::Current => {
            let destination_token = if auction_state.is_resale() {
                retrieve_reselling_state(rpc, config, name)
                    .await
                    .context("Could not retrieve reselling state")?
                    .token_destination_account
            } else {
                config.quote_vault(&auction_state.quote_mint)
            };
            ctx.claim(&auction_state, params, destination_token, space)?
        }
        ProtocolVersion::Legacy => {
            let lamports = rpc
                .get_minimum_balance_for_rent_exemption(NameRecordHeader::LEN + space as usize)
                .await?;
            ctx.legacy_claim(&auction_state, params, lamports, space)?
        }
    };

    Ok(PrimedTransaction::from_instruction(instruction))
}

/// Puts an owned domain up for a resale auction ending at `end_auction_at`. Legacy deployments
/// have no end time or buy now option and ignore both.
#[allow(clippy::too_many_arguments)]
pub fn resell_domain(
    config: &ProgramConfig,
    name: &str,
    name_owner: Address,
    fee_payer: Address,
    destination_token: Address,
    minimum_price: u64,
    end_auction_at: u64,
    buy_now: Option<BuyNow>,
) -> anyhow::Result<PrimedTransaction> {
    let ctx = NameContext::new(config, name);
    let instruction = match config.version {
        ProtocolVersion::Current => ctx.resell(
            name_owner,
            fee_payer,
            destination_token,
            minimum_price,
            end_auction_at,
            buy_now,
        )?,
        ProtocolVersion::Legacy => {
            ctx.legacy_resell(name_owner, fee_payer, destination_token, minimum_price)?
        }
    };
    Ok(PrimedTransaction::from_instruction(instruction))
}

/// Closes a resale auction nobody bid on. The domain goes back to `auction_creator`.
pub async fn end_auction(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    name: &str,
    auction_creator: Address,
) -> anyhow::Result<PrimedTransaction> {
    let ctx = NameContext::new(config, name);
    let reselling_state = retrieve_reselling_state(rpc, config, name)
        .await
        .context("Could not retrieve reselling state")?;

    Ok(PrimedTransaction::from_instruction(ctx.end_auction(
        auction_creator,
        reselling_state.token_destination_account,
    )?))
}

/// Creates the reverse lookup of `name`. For subdomains, `parent` is the parent name account and
/// its owner, who must sign.
pub fn create_reverse_lookup(
    config: &ProgramConfig,
    name: &str,
    fee_payer: Address,
    parent: Option<(Address, Option<Address>)>,
) -> anyhow::Result<PrimedTransaction> {
    let (ctx, parent_name_owner) = match parent {
        Some((parent_name, owner)) => (
            NameContext::new_with_parent(config, name, parent_name),
            owner,
        ),
        None => (NameContext::new(config, name), None),
    };
    Ok(PrimedTransaction::from_instruction(
        ctx.create_reverse(fee_payer, parent_name_owner)?,
    ))
}

/// Registers `name` outright at the fixed oracle price, paid from `buyer_token_source`.
pub fn create_domain(
    config: &ProgramConfig,
    name: &str,
    buyer: Address,
    buyer_token_source: Address,
    space: u32,
) -> anyhow::Result<PrimedTransaction> {
    let ctx = NameContext::new(config, name);
    Ok(PrimedTransaction::from_instruction(ctx.create_v2(
        buyer,
        buyer_token_source,
        space,
    )?))
}

/// Admin only. Takes back a domain held by the central state.
pub fn take_back(config: &ProgramConfig, name: &str) -> anyhow::Result<PrimedTransaction> {
    let ctx = NameContext::new(config, name);
    Ok(PrimedTransaction::from_instruction(ctx.take_back()?))
}
