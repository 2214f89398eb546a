use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{write_string, write_u32, Pack, Unpacker},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateV2InstructionData {
    pub name: String,
    pub space: u32,
}

impl Pack for CreateV2InstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        write_string(dst, &self.name);
        write_u32(dst, self.space);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            name: src.read_string()?,
            space: src.read_u32()?,
        })
    }
}

/// Registers a domain outright at the oracle-priced fixed price, skipping the auction.
///
/// ### Accounts
///   0. `[READ]` Rent sysvar
///   1. `[READ]` Naming service program
///   2. `[READ]` Root domain
///   3. `[WRITE]` Name account
///   4. `[WRITE]` Reverse lookup account
///   5. `[READ]` System program
///   6. `[READ]` Central state
///   7. `[WRITE, SIGNER]` Buyer
///   8. `[WRITE]` Buyer token source
///   9. `[READ]` Price oracle
///  10. `[WRITE]` Quote vault
///  11. `[READ]` Token program
///  12. `[READ]` Auction state
#[derive(Clone, Debug)]
pub struct CreateV2 {
    pub rent_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub reverse_lookup: Address,
    pub system_program: Address,
    pub central_state: Address,
    pub buyer: Address,
    pub buyer_token_source: Address,
    pub price_oracle: Address,
    pub quote_vault: Address,
    pub token_program: Address,
    pub state: Address,
}

impl CreateV2 {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.rent_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new(self.name_account, false),
            AccountMeta::new(self.reverse_lookup, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.buyer, true),
            AccountMeta::new(self.buyer_token_source, false),
            AccountMeta::new_readonly(self.price_oracle, false),
            AccountMeta::new(self.quote_vault, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.state, false),
        ]
    }
}
