//! Environment-driven settings for binaries and examples.
//!
//! - `NAME_AUCTION_RPC_URL`: JSON RPC endpoint, defaults to mainnet beta
//! - `NAME_AUCTION_PROGRAM_ID`: overrides the program id of the default deployment
//! - `NAME_AUCTION_PAYER_SECRET_KEY`: fee payer, as a JSON byte array or a base58 string

use std::{
    str::FromStr,
    sync::LazyLock,
};

use anyhow::{
    anyhow,
    Context,
};
use name_auction_interface::ProgramConfig;
use solana_address::Address;
use solana_sdk::signature::Keypair;

pub const RPC_URL_VAR: &str = "NAME_AUCTION_RPC_URL";
pub const PROGRAM_ID_VAR: &str = "NAME_AUCTION_PROGRAM_ID";
pub const PAYER_SECRET_KEY_VAR: &str = "NAME_AUCTION_PAYER_SECRET_KEY";

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

pub fn rpc_url() -> String {
    std::env::var(RPC_URL_VAR).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string())
}

/// The mainnet deployment, with its program id replaced if `NAME_AUCTION_PROGRAM_ID` is set.
pub fn program_config() -> anyhow::Result<ProgramConfig> {
    match std::env::var(PROGRAM_ID_VAR) {
        Ok(id) => {
            let program_id = Address::from_str(id.trim())
                .map_err(|e| anyhow!("{PROGRAM_ID_VAR} is not a valid address: {e}"))?;
            Ok(ProgramConfig::default().with_program_id(program_id))
        }
        Err(_) => Ok(ProgramConfig::default()),
    }
}

pub fn payer_keypair() -> anyhow::Result<&'static Keypair> {
    static KEYPAIR: LazyLock<anyhow::Result<Keypair>> = LazyLock::new(|| {
        let kp_str = std::env::var(PAYER_SECRET_KEY_VAR)
            .with_context(|| format!("Environment variable {PAYER_SECRET_KEY_VAR} must be set"))?;
        parse_keypair(&kp_str)
    });

    LazyLock::force(&KEYPAIR)
        .as_ref()
        .map_err(|e| anyhow!("{e:#}"))
}

/// Parses a secret key from either a JSON byte array or a base58 string.
pub fn parse_keypair(kp_str: &str) -> anyhow::Result<Keypair> {
    let kp_str = kp_str.trim();
    let byte_vec: Vec<u8> = if kp_str.starts_with('[') {
        serde_json::from_str(kp_str).context("Invalid JSON keypair")?
    } else {
        bs58::decode(kp_str)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}
