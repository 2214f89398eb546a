use client::{
    bindings::create_name_auction,
    context::NameContext,
    load_env::{
        payer_keypair,
        program_config,
        rpc_url,
    },
    logs::{
        fmt_sol,
        log_name_accounts,
    },
    print_kv,
    rpc::LedgerRpc,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
    views::account_exists,
    LogColor,
};
use colored::Colorize;
use name_auction_interface::state::auction_data::BASE_AUCTION_DATA_SIZE;
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "my-first-auction".into());

    let rpc = CustomRpcClient::new_from_url(
        &rpc_url(),
        SendTransactionConfig {
            compute_budget: Some(400_000),
            debug_logs: Some(true),
        },
    );
    let config = program_config()?;
    let payer = payer_keypair()?;

    let ctx = NameContext::new(&config, &name);
    log_name_accounts(&name, &ctx.name_account, &ctx.state);

    if account_exists(&rpc, &ctx.name_account).await? {
        print_kv!("Already registered", name, LogColor::Warning);
        return Ok(());
    }

    let rent = rpc
        .get_minimum_balance_for_rent_exemption(BASE_AUCTION_DATA_SIZE)
        .await?;
    print_kv!("Auction account rent", fmt_sol(rent));

    let primed =
        create_name_auction(&rpc, &config, &name, payer.pubkey(), config.usdc_mint).await?;
    let signature = rpc.send_primed_transaction(payer, primed).await?;
    print_kv!("Auction created", signature, LogColor::Header);

    Ok(())
}
