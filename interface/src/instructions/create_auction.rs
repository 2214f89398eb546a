use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{write_string, Pack, Unpacker},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateAuctionInstructionData {
    /// The domain name, without the root domain suffix.
    pub name: String,
}

impl Pack for CreateAuctionInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        write_string(dst, &self.name);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            name: src.read_string()?,
        })
    }
}

/// Starts the first auction for an unregistered domain. The program creates the auction state
/// and the reverse lookup record and prices the minimum bid from the oracle.
///
/// ### Accounts
///   0. `[READ]` Rent sysvar
///   1. `[READ]` Clock sysvar
///   2. `[READ]` Naming service program
///   3. `[READ]` Root domain
///   4. `[READ]` Name account
///   5. `[WRITE]` Reverse lookup account
///   6. `[READ]` System program
///   7. `[READ]` Auction program
///   8. `[WRITE]` Auction account
///   9. `[READ]` Central state
///  10. `[WRITE]` Auction state
///  11. `[WRITE, SIGNER]` Fee payer
///  12. `[READ]` Quote mint
///  13. `[READ]` Price oracle
#[derive(Clone, Debug)]
pub struct CreateAuction {
    pub rent_sysvar: Address,
    pub clock_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub reverse_lookup: Address,
    pub system_program: Address,
    pub auction_program: Address,
    pub auction: Address,
    pub central_state: Address,
    pub state: Address,
    pub fee_payer: Address,
    pub quote_mint: Address,
    pub price_oracle: Address,
}

impl CreateAuction {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.rent_sysvar, false),
            AccountMeta::new_readonly(self.clock_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new_readonly(self.name_account, false),
            AccountMeta::new(self.reverse_lookup, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.auction_program, false),
            AccountMeta::new(self.auction, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.state, false),
            AccountMeta::new(self.fee_payer, true),
            AccountMeta::new_readonly(self.quote_mint, false),
            AccountMeta::new_readonly(self.price_oracle, false),
        ]
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegacyCreateAuctionInstructionData {
    pub hashed_name: [u8; 32],
}

impl Pack for LegacyCreateAuctionInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(&self.hashed_name);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            hashed_name: src.read_array()?,
        })
    }
}

/// The legacy form of [`CreateAuction`]. The auction account is a fresh keypair the caller
/// allocates beforehand, and there is no reverse lookup or oracle.
///
/// ### Accounts
///   0. `[READ]` Rent sysvar
///   1. `[READ]` Clock sysvar
///   2. `[READ]` Naming service program
///   3. `[READ]` Root domain
///   4. `[READ]` Name account
///   5. `[READ]` System program
///   6. `[READ]` Auction program
///   7. `[WRITE]` Auction account
///   8. `[WRITE]` Auction state
///   9. `[WRITE, SIGNER]` Fee payer
///  10. `[READ]` Quote mint
#[derive(Clone, Debug)]
pub struct LegacyCreateAuction {
    pub rent_sysvar: Address,
    pub clock_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub system_program: Address,
    pub auction_program: Address,
    pub auction: Address,
    pub state: Address,
    pub fee_payer: Address,
    pub quote_mint: Address,
}

impl LegacyCreateAuction {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.rent_sysvar, false),
            AccountMeta::new_readonly(self.clock_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new_readonly(self.name_account, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.auction_program, false),
            AccountMeta::new(self.auction, false),
            AccountMeta::new(self.state, false),
            AccountMeta::new(self.fee_payer, true),
            AccountMeta::new_readonly(self.quote_mint, false),
        ]
    }
}
