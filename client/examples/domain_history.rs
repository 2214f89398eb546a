use client::{
    context::NameContext,
    history::get_past_instructions,
    load_env::{
        program_config,
        rpc_url,
    },
    logs::log_name_accounts,
    print_kv,
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
    },
    views::{
        domain_owner,
        oracle_price_decimal,
        reverse_lookup,
    },
    LogColor,
};
use colored::Colorize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "bonfida".into());

    let rpc = CustomRpcClient::new_from_url(&rpc_url(), SendTransactionConfig::default());
    let config = program_config()?;

    let ctx = NameContext::new(&config, &name);
    log_name_accounts(&name, &ctx.name_account, &ctx.state);

    print_kv!("Owner", domain_owner(&rpc, &config, &name).await?);
    print_kv!(
        "Reverse lookup",
        reverse_lookup(&rpc, &config, &ctx.name_account).await?
    );
    print_kv!(
        "FIDA price",
        oracle_price_decimal(&rpc, &config).await?,
        LogColor::Highlight
    );

    for past in get_past_instructions(&rpc, &config, &ctx.name_account, 20).await? {
        print_kv!(
            past.instruction.tag(),
            format!("slot {} {}", past.slot, past.signature),
            LogColor::Info
        );
    }

    Ok(())
}
