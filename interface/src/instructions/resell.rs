use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{write_option_u64, write_string, write_u64, Pack, Unpacker},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResellInstructionData {
    pub name: String,
    pub minimum_price: u64,
    /// Unix timestamp the resale auction ends at.
    pub end_auction_at: u64,
    /// A buy now price that ends the auction immediately when bid.
    pub max_price: Option<u64>,
}

impl Pack for ResellInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        write_string(dst, &self.name);
        write_u64(dst, self.minimum_price);
        write_u64(dst, self.end_auction_at);
        write_option_u64(dst, self.max_price);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            name: src.read_string()?,
            minimum_price: src.read_u64()?,
            end_auction_at: src.read_u64()?,
            max_price: src.read_option_u64()?,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegacyResellInstructionData {
    pub name: String,
    pub minimum_price: u64,
}

impl Pack for LegacyResellInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        write_string(dst, &self.name);
        write_u64(dst, self.minimum_price);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            name: src.read_string()?,
            minimum_price: src.read_u64()?,
        })
    }
}

/// Puts an owned domain back up for auction. The owner signs and the winning bid is paid to the
/// destination token account, which is recorded in the reselling state.
///
/// The legacy schema takes the same accounts without the buy now tail.
///
/// ### Accounts
///   0. `[READ]` Rent sysvar
///   1. `[READ]` Clock sysvar
///   2. `[READ]` Naming service program
///   3. `[READ]` Root domain
///   4. `[WRITE]` Name account
///   5. `[READ, SIGNER]` Name owner
///   6. `[WRITE]` Reverse lookup account
///   7. `[READ]` System program
///   8. `[READ]` Auction program
///   9. `[WRITE]` Auction account
///  10. `[READ]` Central state
///  11. `[WRITE]` Auction state
///  12. `[WRITE]` Reselling state
///  13. `[WRITE]` Destination token account
///  14. `[WRITE, SIGNER]` Fee payer
///  15. `[WRITE]` Buy now account (optional)
#[derive(Clone, Debug)]
pub struct Resell {
    pub rent_sysvar: Address,
    pub clock_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub name_owner: Address,
    pub reverse_lookup: Address,
    pub system_program: Address,
    pub auction_program: Address,
    pub auction: Address,
    pub central_state: Address,
    pub state: Address,
    pub reselling_state: Address,
    pub destination_token: Address,
    pub fee_payer: Address,
    pub buy_now: Option<Address>,
}

impl Resell {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        let mut metas = vec![
            AccountMeta::new_readonly(self.rent_sysvar, false),
            AccountMeta::new_readonly(self.clock_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new(self.name_account, false),
            AccountMeta::new_readonly(self.name_owner, true),
            AccountMeta::new(self.reverse_lookup, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.auction_program, false),
            AccountMeta::new(self.auction, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.state, false),
            AccountMeta::new(self.reselling_state, false),
            AccountMeta::new(self.destination_token, false),
            AccountMeta::new(self.fee_payer, true),
        ];
        if let Some(buy_now) = self.buy_now {
            metas.push(AccountMeta::new(buy_now, false));
        }
        metas
    }
}
