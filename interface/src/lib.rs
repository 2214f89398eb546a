//! Public interface layer for the name auction program: instruction schemas and their account
//! lists, program state decoders, address derivation, and account-scan filters.
//!
//! Everything in this crate is pure. Fetching accounts and sending transactions lives in the
//! client crate.

pub mod config;
pub mod error;
pub mod instructions;
pub mod pack;
pub mod query;
pub mod seeds;
pub mod state;

pub use config::{ProgramConfig, ProtocolVersion};
pub use error::{ErrorKind, NameAuctionError, NameAuctionResult};
