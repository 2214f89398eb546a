//! Program-derived address seeds for the name auction program, the naming service, and the
//! auction program.
//!
//! Every derivation must match the seed order and marker bytes the on-chain programs use to
//! validate the accounts they receive.

use sha2::{Digest, Sha256};
use solana_address::Address;

use crate::config::ProgramConfig;

/// Prefix hashed in front of every name by the naming service.
pub const HASH_PREFIX: &str = "SPL Name Service";

/// Marker appended to the name account seed for a domain's reselling state.
pub const RESELLING_STATE_MARKER: [u8; 2] = [1, 1];

/// Leading seed for every auction program PDA.
pub const AUCTION_SEED: &[u8] = b"auction";

pub fn hash_name(name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(HASH_PREFIX.as_bytes());
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}

/// Derives a naming service record address. A missing class or parent is seeded as 32 zero
/// bytes.
pub fn find_name_account(
    naming_service_program: &Address,
    hashed_name: &[u8; 32],
    class: Option<&Address>,
    parent: Option<&Address>,
) -> (Address, u8) {
    let zeroes = [0u8; 32];
    let class = class.map_or(&zeroes[..], |c| c.as_ref());
    let parent = parent.map_or(&zeroes[..], |p| p.as_ref());
    Address::find_program_address(&[&hashed_name[..], class, parent], naming_service_program)
}

/// The name account of `name` directly under the configured root domain.
pub fn find_domain_account(config: &ProgramConfig, name: &str) -> Address {
    find_name_account(
        &config.naming_service_program,
        &hash_name(name),
        None,
        Some(&config.root_domain),
    )
    .0
}

/// The reverse lookup record of a name account. It's keyed by the base58 string of the name
/// account and classed under the central state, so only the program can write it.
pub fn find_reverse_lookup_account(config: &ProgramConfig, name_account: &Address) -> Address {
    find_name_account(
        &config.naming_service_program,
        &hash_name(&name_account.to_string()),
        Some(&config.central_state),
        None,
    )
    .0
}

pub fn find_central_state(program_id: &Address) -> (Address, u8) {
    Address::find_program_address(&[program_id.as_ref()], program_id)
}

pub fn find_auction_state(program_id: &Address, name_account: &Address) -> (Address, u8) {
    Address::find_program_address(&[name_account.as_ref()], program_id)
}

pub fn find_reselling_state(program_id: &Address, name_account: &Address) -> (Address, u8) {
    Address::find_program_address(
        &[name_account.as_ref(), &RESELLING_STATE_MARKER[..]],
        program_id,
    )
}

/// The auction account the auction program keeps for a name account's resource.
pub fn find_auction_account(auction_program: &Address, name_account: &Address) -> (Address, u8) {
    Address::find_program_address(
        &[AUCTION_SEED, auction_program.as_ref(), name_account.as_ref()],
        auction_program,
    )
}

pub fn find_bidder_pot(
    auction_program: &Address,
    auction: &Address,
    bidder: &Address,
) -> (Address, u8) {
    Address::find_program_address(
        &[
            AUCTION_SEED,
            auction_program.as_ref(),
            auction.as_ref(),
            bidder.as_ref(),
        ],
        auction_program,
    )
}
