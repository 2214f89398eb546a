//! Deployment addresses and the protocol version they speak.
//!
//! A [`ProgramConfig`] is passed explicitly to everything that needs a program id or a vault
//! address. There are no implicit globals beyond the fixed runtime ids below.

use solana_address::Address;

use crate::seeds::find_central_state;

pub const SYSTEM_PROGRAM_ID: Address =
    Address::from_str_const("11111111111111111111111111111111");
pub const TOKEN_PROGRAM_ID: Address =
    Address::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const RENT_SYSVAR_ID: Address =
    Address::from_str_const("SysvarRent111111111111111111111111111111111");
pub const CLOCK_SYSVAR_ID: Address =
    Address::from_str_const("SysvarC1ock11111111111111111111111111111111");

pub const MAINNET_PROGRAM_ID: Address =
    Address::from_str_const("jCebN34bUfdeUYJT13J1yG16XWQpt5PDx6Mse9GUqhR");
pub const MAINNET_CENTRAL_STATE: Address =
    Address::from_str_const("33m47vH6Eav6jr5Ry86XjhRft2jRBLDnDgPSHoquXi2Z");
pub const NAMING_SERVICE_PROGRAM_ID: Address =
    Address::from_str_const("namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX");
pub const MAINNET_AUCTION_PROGRAM_ID: Address =
    Address::from_str_const("AVWV7vdWbLqXiLKFaP19GhYurhwxaLp2qRBSjT5tR5vT");
pub const MAINNET_ROOT_DOMAIN: Address =
    Address::from_str_const("58PwtjSDuFHuUkYjH9BYnnQKHfwo9reZhC2zMJv9JPkx");
pub const PYTH_FIDA_PRICE_ACCOUNT: Address =
    Address::from_str_const("ETp9eKXVv1dWwHSpsXRUuXHmw24PwRkttCGVgpZEY9zF");
pub const SOL_VAULT: Address =
    Address::from_str_const("GcWEQ9K78FV7LEHteFVciYApERk5YvQuFDQPk1yYJVXi");
pub const FIDA_VAULT: Address =
    Address::from_str_const("AUoZ3YAhV3b2rZeEH93UMZHXUZcTramBvb4d9YEVySkc");
pub const USDC_VAULT: Address =
    Address::from_str_const("DmSyHDSM9eSLyvoLsPvDr5fRRFZ7Bfr3h3ULvWpgQaq7");
pub const FIDA_MINT: Address =
    Address::from_str_const("EchesyfXePKdLtoiZSL8pBe8Myagyy8ZRqsACNCFGnvp");
pub const USDC_MINT: Address =
    Address::from_str_const("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
pub const ADMIN: Address = Address::from_str_const("VBx642K1hYGLU5Zm1CHW1uRXAtFgxN5mRqyMcXnLZFW");

pub const LEGACY_DEVNET_PROGRAM_ID: Address =
    Address::from_str_const("CrR5iPwBE4wEGe7NS3YA2j5NXityhqEnumvW23MwnTA9");
pub const LEGACY_DEVNET_AUCTION_PROGRAM_ID: Address =
    Address::from_str_const("HLGetPpEUaagthEtF4px9S24hwJrwz3qvgRZxkWTw4ei");
pub const LEGACY_DEVNET_ROOT_DOMAIN: Address =
    Address::from_str_const("4MpujQVQLPPsC8ToEcSepSvtYCf5ZBf2odxZkZ2Qz8QH");

/// The instruction and account schema revision a deployment speaks.
///
/// Decoding under the wrong version can succeed and still produce wrong values, so the version is
/// always chosen by the caller and never guessed from the bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[derive(strum_macros::Display, strum_macros::EnumIter)]
pub enum ProtocolVersion {
    /// The first deployment: hashed-name auction creation and lamport-denominated claims.
    Legacy,
    #[default]
    Current,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProgramConfig {
    pub version: ProtocolVersion,
    pub program_id: Address,
    pub central_state: Address,
    pub naming_service_program: Address,
    pub auction_program: Address,
    pub root_domain: Address,
    pub price_oracle: Address,
    pub sol_vault: Address,
    pub fida_vault: Address,
    pub usdc_vault: Address,
    pub fida_mint: Address,
    pub usdc_mint: Address,
    pub admin: Address,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            version: ProtocolVersion::Current,
            program_id: MAINNET_PROGRAM_ID,
            central_state: MAINNET_CENTRAL_STATE,
            naming_service_program: NAMING_SERVICE_PROGRAM_ID,
            auction_program: MAINNET_AUCTION_PROGRAM_ID,
            root_domain: MAINNET_ROOT_DOMAIN,
            price_oracle: PYTH_FIDA_PRICE_ACCOUNT,
            sol_vault: SOL_VAULT,
            fida_vault: FIDA_VAULT,
            usdc_vault: USDC_VAULT,
            fida_mint: FIDA_MINT,
            usdc_mint: USDC_MINT,
            admin: ADMIN,
        }
    }
}

impl ProgramConfig {
    /// The first devnet deployment, which only understands the legacy schemas.
    pub fn legacy_devnet() -> Self {
        Self {
            version: ProtocolVersion::Legacy,
            auction_program: LEGACY_DEVNET_AUCTION_PROGRAM_ID,
            root_domain: LEGACY_DEVNET_ROOT_DOMAIN,
            ..Self::default()
        }
        .with_program_id(LEGACY_DEVNET_PROGRAM_ID)
    }

    /// Points the config at another deployment of the program. The central state is re-derived
    /// since it is a PDA of the program id.
    pub fn with_program_id(mut self, program_id: Address) -> Self {
        self.program_id = program_id;
        self.central_state = find_central_state(&program_id).0;
        self
    }

    pub fn with_version(mut self, version: ProtocolVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_auction_program(mut self, auction_program: Address) -> Self {
        self.auction_program = auction_program;
        self
    }

    pub fn with_root_domain(mut self, root_domain: Address) -> Self {
        self.root_domain = root_domain;
        self
    }

    /// The program's token vault for bids denominated in `quote_mint`. USDC bids settle into the
    /// USDC vault and everything else into the FIDA vault.
    pub fn quote_vault(&self, quote_mint: &Address) -> Address {
        if quote_mint == &self.usdc_mint {
            self.usdc_vault
        } else {
            self.fida_vault
        }
    }
}
