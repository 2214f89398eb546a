//! The ledger operations the client needs, as a trait.
//!
//! [`crate::transactions::CustomRpcClient`] implements it over a JSON RPC node. Tests implement it
//! over an in-memory account map.

use name_auction_interface::query::MemcmpFilter;
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    signature::{
        Keypair,
        Signature,
    },
    transaction::VersionedTransaction,
};

use crate::primed_transaction::PrimedTransaction;

/// The most accounts a single `getMultipleAccounts` request may ask for.
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

/// A confirmed transaction with the metadata history lookups need.
#[derive(Clone, Debug)]
pub struct LedgerTransaction {
    pub slot: u64,
    pub block_time: Option<i64>,
    /// Whether the transaction was included but failed.
    pub failed: bool,
    pub log_messages: Vec<String>,
    pub transaction: VersionedTransaction,
}

#[allow(async_fn_in_trait)]
pub trait LedgerRpc {
    /// The data of an account, or `None` if it doesn't exist.
    async fn get_account_data(
        &self,
        address: &Address,
        commitment: CommitmentConfig,
    ) -> anyhow::Result<Option<Vec<u8>>>;

    /// The data of up to [`MAX_MULTIPLE_ACCOUNTS`] accounts, in the order requested.
    async fn get_multiple_accounts_data(
        &self,
        addresses: &[Address],
    ) -> anyhow::Result<Vec<Option<Vec<u8>>>>;

    /// Every account owned by `program` whose data matches all of `filters`.
    async fn get_program_accounts(
        &self,
        program: &Address,
        filters: &[MemcmpFilter],
    ) -> anyhow::Result<Vec<(Address, Vec<u8>)>>;

    /// The most recent signatures involving `address`, newest first.
    async fn get_signatures_for_address(
        &self,
        address: &Address,
        limit: usize,
    ) -> anyhow::Result<Vec<Signature>>;

    async fn get_transaction(
        &self,
        signature: &Signature,
    ) -> anyhow::Result<Option<LedgerTransaction>>;

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> anyhow::Result<u64>;

    /// Signs `primed` with `payer` plus its own signers, then sends and confirms it.
    async fn send_primed_transaction(
        &self,
        payer: &Keypair,
        primed: PrimedTransaction,
    ) -> anyhow::Result<Signature>;
}
