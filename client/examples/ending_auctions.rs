use client::{
    load_env::{
        program_config,
        rpc_url,
    },
    logs::log_header,
    print_kv,
    queries::get_ending_auctions,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
    views::batch_reverse_lookup,
    LogColor,
};
use colored::Colorize;
use itertools::Itertools;

const ONE_HOUR: i64 = 60 * 60;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rpc = CustomRpcClient::new_from_url(&rpc_url(), SendTransactionConfig::default());
    let config = program_config()?;

    let ending = get_ending_auctions(&rpc, &config, ONE_HOUR).await?;
    log_header(&format!("{} auctions ending within the hour", ending.len()));

    let resources = ending.iter().map(|(_, a)| a.resource).collect_vec();
    let names = batch_reverse_lookup(&rpc, &config, &resources).await?;

    for ((auction_account, auction), name) in ending
        .iter()
        .zip(names)
        .sorted_by_key(|((_, a), _)| a.end_auction_at)
    {
        let end = auction
            .end_auction_at
            .and_then(|t| chrono::DateTime::from_timestamp(t, 0))
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        print_kv!(
            name.unwrap_or_else(|| auction.resource.to_string()),
            format!("{end} ({auction_account})"),
            LogColor::Info
        );
    }

    Ok(())
}
