//! Decoding for the price oracle accounts the name auction program reads its FIDA/USD price
//! from.
//!
//! The oracle is a Pyth v2 price account. Only the header and the aggregate price are decoded;
//! component publisher prices are ignored.

#![no_std]

#[cfg(any(feature = "client", test))]
extern crate std;

#[cfg(any(feature = "client", test))]
mod client_helpers;
#[cfg(any(feature = "client", test))]
pub use client_helpers::*;

mod error;
mod oracle_price;

pub use error::*;
pub use oracle_price::*;
