use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{write_u32, write_u64, Pack, Unpacker},
};

const HASHED_NAME_LEN: usize = 32;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimInstructionData {
    pub hashed_name: [u8; 32],
    /// Space to allocate for the name record's data.
    pub space: u32,
}

impl ClaimInstructionData {
    pub const LEN: usize = 36;
}

impl Pack for ClaimInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        // Instruction data layout:
        //   - [0..32]: the hashed name, 32 bytes
        //   - [32..36]: the u32 `space` as little-endian bytes, 4 bytes
        dst.extend_from_slice(&self.hashed_name);
        write_u32(dst, self.space);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            hashed_name: src.read_array()?,
            space: src.read_u32()?,
        })
    }
}

/// Settles a finished auction: transfers the domain to the winner and pays out the winning bid.
///
/// When the auction was a resale, the bidder wallet doesn't sign; anyone can settle it on the
/// winner's behalf.
///
/// ### Accounts
///   0. `[READ]` Clock sysvar
///   1. `[READ]` Token program
///   2. `[READ]` Naming service program
///   3. `[READ]` Root domain
///   4. `[WRITE]` Name account
///   5. `[READ]` System program
///   6. `[READ]` Auction program
///   7. `[WRITE]` Auction account
///   8. `[READ]` Central state
///   9. `[WRITE]` Auction state
///  10. `[READ]` Reselling state
///  11. `[WRITE, SIGNER]` Fee payer
///  12. `[READ]` Quote mint
///  13. `[WRITE]` Destination token account
///  14. `[READ, SIGNER unless resale]` Bidder wallet
///  15. `[WRITE]` Bidder pot
///  16. `[WRITE]` Bidder pot token account
///  17. `[WRITE]` Quote vault
///  18. `[READ]` Discount account
///  19. `[WRITE]` Buy now account
///  20. `[WRITE]` SOL vault
///  21. `[WRITE]` Referrer token account (optional)
#[derive(Clone, Debug)]
pub struct Claim {
    pub clock_sysvar: Address,
    pub token_program: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub system_program: Address,
    pub auction_program: Address,
    pub auction: Address,
    pub central_state: Address,
    pub state: Address,
    pub reselling_state: Address,
    pub fee_payer: Address,
    pub quote_mint: Address,
    pub destination_token: Address,
    pub bidder_wallet: Address,
    pub bidder_pot: Address,
    pub bidder_pot_token: Address,
    pub quote_vault: Address,
    pub discount_account: Address,
    pub buy_now: Address,
    pub sol_vault: Address,
    pub referrer: Option<Address>,
    pub is_resell: bool,
}

impl Claim {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        let mut metas = vec![
            AccountMeta::new_readonly(self.clock_sysvar, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new(self.name_account, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.auction_program, false),
            AccountMeta::new(self.auction, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.state, false),
            AccountMeta::new_readonly(self.reselling_state, false),
            AccountMeta::new(self.fee_payer, true),
            AccountMeta::new_readonly(self.quote_mint, false),
            AccountMeta::new(self.destination_token, false),
            AccountMeta::new_readonly(self.bidder_wallet, !self.is_resell),
            AccountMeta::new(self.bidder_pot, false),
            AccountMeta::new(self.bidder_pot_token, false),
            AccountMeta::new(self.quote_vault, false),
            AccountMeta::new_readonly(self.discount_account, false),
            AccountMeta::new(self.buy_now, false),
            AccountMeta::new(self.sol_vault, false),
        ];
        if let Some(referrer) = self.referrer {
            metas.push(AccountMeta::new(referrer, false));
        }
        metas
    }
}

/// The legacy program reads the hashed name as a length-prefixed byte vector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegacyClaimInstructionData {
    pub hashed_name: [u8; 32],
    /// Lamports to fund the name record with.
    pub lamports: u64,
    pub space: u32,
}

impl LegacyClaimInstructionData {
    pub const LEN: usize = 4 + HASHED_NAME_LEN + 8 + 4;
}

impl Pack for LegacyClaimInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        // Instruction data layout:
        //   - [0..4]: the hashed name's length (always 32) as little-endian bytes, 4 bytes
        //   - [4..36]: the hashed name, 32 bytes
        //   - [36..44]: the u64 `lamports` as little-endian bytes, 8 bytes
        //   - [44..48]: the u32 `space` as little-endian bytes, 4 bytes
        write_u32(dst, self.hashed_name.len() as u32);
        dst.extend_from_slice(&self.hashed_name);
        write_u64(dst, self.lamports);
        write_u32(dst, self.space);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        if src.read_u32()? != HASHED_NAME_LEN as u32 {
            return Err(NameAuctionError::InvalidStringLength);
        }
        Ok(Self {
            hashed_name: src.read_array()?,
            lamports: src.read_u64()?,
            space: src.read_u32()?,
        })
    }
}

/// The legacy form of [`Claim`]. The bidder always signs.
///
/// ### Accounts
///   0. `[READ]` Token program
///   1. `[READ]` Clock sysvar
///   2. `[READ]` Naming service program
///   3. `[READ]` Root domain
///   4. `[WRITE]` Name account
///   5. `[READ]` System program
///   6. `[READ]` Auction program
///   7. `[WRITE]` Auction account
///   8. `[READ]` Central state
///   9. `[WRITE]` Auction state
///  10. `[WRITE, SIGNER]` Fee payer
///  11. `[READ]` Quote mint
///  12. `[WRITE]` Destination token account
///  13. `[READ, SIGNER]` Bidder wallet
///  14. `[WRITE]` Bidder pot
///  15. `[WRITE]` Bidder pot token account
#[derive(Clone, Debug)]
pub struct LegacyClaim {
    pub token_program: Address,
    pub clock_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub system_program: Address,
    pub auction_program: Address,
    pub auction: Address,
    pub central_state: Address,
    pub state: Address,
    pub fee_payer: Address,
    pub quote_mint: Address,
    pub destination_token: Address,
    pub bidder_wallet: Address,
    pub bidder_pot: Address,
    pub bidder_pot_token: Address,
}

impl LegacyClaim {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.clock_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new(self.name_account, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.auction_program, false),
            AccountMeta::new(self.auction, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.state, false),
            AccountMeta::new(self.fee_payer, true),
            AccountMeta::new_readonly(self.quote_mint, false),
            AccountMeta::new(self.destination_token, false),
            AccountMeta::new_readonly(self.bidder_wallet, true),
            AccountMeta::new(self.bidder_pot, false),
            AccountMeta::new(self.bidder_pot_token, false),
        ]
    }
}
