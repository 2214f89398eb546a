//! Client-side utilities for the name auction program.
//!
//! Builds primed transactions from a [`name_auction_interface::ProgramConfig`], reads and decodes
//! program accounts, scans for auctions and names, and walks a program's transaction history.
//! Everything that touches the network goes through the [`rpc::LedgerRpc`] trait.

pub mod bindings;
pub mod context;
pub mod history;
pub mod load_env;
pub mod logs;
pub mod primed_transaction;
pub mod queries;
pub mod rpc;
pub mod transactions;
pub mod views;

pub use logs::LogColor;
