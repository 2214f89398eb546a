//! Nonblocking RPC client implementing [`LedgerRpc`] against a JSON RPC node, with colored
//! transaction logging.

use std::str::FromStr;

use anyhow::{
    bail,
    Context,
};
use colored::Colorize;
use itertools::Itertools;
use name_auction_interface::query::MemcmpFilter;
use solana_address::Address;
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_client::GetConfirmedSignaturesForAddress2Config,
    rpc_config::{
        RpcProgramAccountsConfig,
        RpcTransactionConfig,
    },
    rpc_filter::{
        Memcmp,
        RpcFilterType,
    },
    rpc_request::RpcRequest,
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::signature::{
    Keypair,
    Signature,
    Signer,
};
use solana_transaction_status::{
    EncodedConfirmedTransactionWithStatusMeta,
    UiTransactionEncoding,
};

use crate::{
    primed_transaction::PrimedTransaction,
    print_kv,
    rpc::{
        LedgerRpc,
        LedgerTransaction,
        MAX_MULTIPLE_ACCOUNTS,
    },
    LogColor,
};

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl CustomRpcClient {
    pub fn new_from_url(url: &str, config: SendTransactionConfig) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
            config,
        }
    }

    fn debug_logs(&self) -> bool {
        matches!(self.config.debug_logs, Some(true))
    }
}

#[derive(Clone)]
pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(true),
        }
    }
}

fn to_rpc_filters(filters: &[MemcmpFilter]) -> Vec<RpcFilterType> {
    filters
        .iter()
        .map(|f| RpcFilterType::Memcmp(Memcmp::new_raw_bytes(f.offset, f.bytes.clone())))
        .collect_vec()
}

impl LedgerRpc for CustomRpcClient {
    async fn get_account_data(
        &self,
        address: &Address,
        commitment: CommitmentConfig,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self
            .client
            .get_account_with_commitment(address, commitment)
            .await
            .with_context(|| format!("Couldn't retrieve account {address}"))?
            .value
            .map(|account| account.data))
    }

    async fn get_multiple_accounts_data(
        &self,
        addresses: &[Address],
    ) -> anyhow::Result<Vec<Option<Vec<u8>>>> {
        if addresses.len() > MAX_MULTIPLE_ACCOUNTS {
            bail!(
                "Requested {} accounts, at most {MAX_MULTIPLE_ACCOUNTS} fit in one request",
                addresses.len()
            );
        }
        let accounts = self
            .client
            .get_multiple_accounts(addresses)
            .await
            .context("Couldn't retrieve multiple accounts")?;

        Ok(accounts
            .into_iter()
            .map(|account| account.map(|a| a.data))
            .collect_vec())
    }

    async fn get_program_accounts(
        &self,
        program: &Address,
        filters: &[MemcmpFilter],
    ) -> anyhow::Result<Vec<(Address, Vec<u8>)>> {
        let config = RpcProgramAccountsConfig {
            filters: Some(to_rpc_filters(filters)),
            ..Default::default()
        };
        let accounts = self
            .client
            .get_program_accounts_with_config(program, config)
            .await
            .with_context(|| format!("Program account scan of {program} failed"))?;

        if self.debug_logs() {
            print_kv!("Scanned", program, LogColor::Info);
            print_kv!("Filters", filters.len(), LogColor::Info);
            print_kv!("Matches", accounts.len(), LogColor::Info);
        }

        Ok(accounts
            .into_iter()
            .map(|(address, account)| (address, account.data))
            .collect_vec())
    }

    async fn get_signatures_for_address(
        &self,
        address: &Address,
        limit: usize,
    ) -> anyhow::Result<Vec<Signature>> {
        let statuses = self
            .client
            .get_signatures_for_address_with_config(
                address,
                GetConfirmedSignaturesForAddress2Config {
                    limit: Some(limit),
                    commitment: Some(CommitmentConfig::confirmed()),
                    ..Default::default()
                },
            )
            .await
            .with_context(|| format!("Couldn't retrieve signatures for {address}"))?;

        statuses
            .iter()
            .map(|status| {
                Signature::from_str(&status.signature)
                    .with_context(|| format!("Invalid signature {}", status.signature))
            })
            .collect()
    }

    async fn get_transaction(
        &self,
        signature: &Signature,
    ) -> anyhow::Result<Option<LedgerTransaction>> {
        let Some(encoded) = fetch_transaction(&self.client, signature).await? else {
            if self.debug_logs() {
                print_kv!("Transaction not found", signature, LogColor::Warning);
            }
            return Ok(None);
        };
        let ledger_tx = into_ledger_transaction(encoded);
        if ledger_tx.is_none() && self.debug_logs() {
            print_kv!("Undecodable transaction", signature, LogColor::Warning);
        }
        Ok(ledger_tx)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> anyhow::Result<u64> {
        self.client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .context("Couldn't retrieve the rent exempt minimum")
    }

    async fn send_primed_transaction(
        &self,
        payer: &Keypair,
        primed: PrimedTransaction,
    ) -> anyhow::Result<Signature> {
        let bh = self
            .client
            .get_latest_blockhash()
            .await
            .context("Couldn't fetch a recent blockhash")?;

        let prefix = self.config.compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        });
        let tx = primed.sign(payer, &prefix, bh)?;

        match self.client.send_and_confirm_transaction(&tx).await {
            Ok(signature) => {
                if self.debug_logs() {
                    print_kv!("Signature", signature, LogColor::Header);
                    print_kv!("Payer", payer.pubkey());
                    print_kv!("Instructions", tx.message.instructions.len());
                    print_kv!("Signers", tx.signatures.len());
                }
                Ok(signature)
            }
            Err(error) => {
                print_kv!("Failed transaction", error, LogColor::Error);
                print_kv!("Payer", payer.pubkey(), LogColor::Error);
                Err(error).context("Failed transaction submission")
            }
        }
    }
}

/// Fetches a transaction, or `None` if the node has no record of it.
async fn fetch_transaction(
    rpc: &RpcClient,
    sig: &Signature,
) -> anyhow::Result<Option<EncodedConfirmedTransactionWithStatusMeta>> {
    let config = RpcTransactionConfig {
        encoding: Some(UiTransactionEncoding::Base64),
        commitment: Some(CommitmentConfig::confirmed()),
        max_supported_transaction_version: Some(0),
    };
    rpc.send(
        RpcRequest::GetTransaction,
        serde_json::json!([sig.to_string(), config]),
    )
    .await
    .with_context(|| format!("Couldn't fetch transaction {sig}"))
}

fn into_ledger_transaction(
    encoded: EncodedConfirmedTransactionWithStatusMeta,
) -> Option<LedgerTransaction> {
    let EncodedConfirmedTransactionWithStatusMeta {
        slot,
        block_time,
        transaction,
    } = encoded;

    let meta = transaction.meta?;
    let decoded = transaction.transaction.decode()?;

    Some(LedgerTransaction {
        slot,
        block_time,
        failed: meta.err.is_some(),
        log_messages: meta.log_messages.unwrap_or(vec![]),
        transaction: decoded,
    })
}
