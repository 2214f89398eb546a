#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{
        HashMap,
        HashSet,
    },
};

use client::{
    primed_transaction::PrimedTransaction,
    rpc::{
        LedgerRpc,
        LedgerTransaction,
        MAX_MULTIPLE_ACCOUNTS,
    },
};
use name_auction_interface::query::{
    matches_all,
    MemcmpFilter,
};
use solana_address::Address;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    hash::Hash,
    signature::{
        Keypair,
        Signature,
    },
};

pub const RENT_PER_BYTE: u64 = 6_960;

pub fn addr(n: u8) -> Address {
    Address::new_from_array([n; 32])
}

/// An in-memory ledger: accounts keyed by address with their owning program, plus canned
/// transaction history.
#[derive(Default)]
pub struct MockLedger {
    pub accounts: HashMap<Address, (Address, Vec<u8>)>,
    pub signatures: HashMap<Address, Vec<Signature>>,
    pub transactions: HashMap<Signature, LedgerTransaction>,
    /// Signatures whose transaction fetch fails as if the node were unreachable.
    pub unreachable: HashSet<Signature>,
    /// Sizes of every `get_multiple_accounts_data` request, in call order.
    pub multiple_requests: RefCell<Vec<usize>>,
    pub sent: RefCell<Vec<(Address, usize, usize)>>,
}

impl MockLedger {
    pub fn insert(&mut self, address: Address, owner: Address, data: Vec<u8>) {
        self.accounts.insert(address, (owner, data));
    }

    pub fn insert_transaction(&mut self, address: Address, tx: LedgerTransaction) -> Signature {
        let signature = Signature::from([self.transactions.len() as u8 + 1; 64]);
        self.signatures.entry(address).or_default().push(signature);
        self.transactions.insert(signature, tx);
        signature
    }
}

impl LedgerRpc for MockLedger {
    async fn get_account_data(
        &self,
        address: &Address,
        _commitment: CommitmentConfig,
    ) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.accounts.get(address).map(|(_, data)| data.clone()))
    }

    async fn get_multiple_accounts_data(
        &self,
        addresses: &[Address],
    ) -> anyhow::Result<Vec<Option<Vec<u8>>>> {
        anyhow::ensure!(addresses.len() <= MAX_MULTIPLE_ACCOUNTS, "Too many accounts");
        self.multiple_requests.borrow_mut().push(addresses.len());
        Ok(addresses
            .iter()
            .map(|address| self.accounts.get(address).map(|(_, data)| data.clone()))
            .collect())
    }

    async fn get_program_accounts(
        &self,
        program: &Address,
        filters: &[MemcmpFilter],
    ) -> anyhow::Result<Vec<(Address, Vec<u8>)>> {
        let mut matched = self
            .accounts
            .iter()
            .filter(|(_, (owner, data))| owner == program && matches_all(filters, data))
            .map(|(address, (_, data))| (*address, data.clone()))
            .collect::<Vec<_>>();
        matched.sort_by_key(|(address, _)| *address);
        Ok(matched)
    }

    async fn get_signatures_for_address(
        &self,
        address: &Address,
        limit: usize,
    ) -> anyhow::Result<Vec<Signature>> {
        Ok(self
            .signatures
            .get(address)
            .map(|sigs| sigs.iter().rev().take(limit).copied().collect())
            .unwrap_or_default())
    }

    async fn get_transaction(
        &self,
        signature: &Signature,
    ) -> anyhow::Result<Option<LedgerTransaction>> {
        anyhow::ensure!(
            !self.unreachable.contains(signature),
            "Connection refused while fetching {signature}"
        );
        Ok(self.transactions.get(signature).cloned())
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> anyhow::Result<u64> {
        Ok((data_len as u64 + 128) * RENT_PER_BYTE)
    }

    async fn send_primed_transaction(
        &self,
        payer: &Keypair,
        primed: PrimedTransaction,
    ) -> anyhow::Result<Signature> {
        let tx = primed.sign(payer, &[], Hash::default())?;
        self.sent.borrow_mut().push((
            tx.message.account_keys[0],
            tx.signatures.len(),
            tx.message.instructions.len(),
        ));
        Ok(tx.signatures[0])
    }
}
