use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{write_string, Pack, Unpacker},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndAuctionInstructionData {
    pub name: String,
}

impl Pack for EndAuctionInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        write_string(dst, &self.name);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            name: src.read_string()?,
        })
    }
}

/// Lets the creator of a resale auction close it when nobody bid.
///
/// ### Accounts
///   0. `[READ]` Clock sysvar
///   1. `[READ]` Naming service program
///   2. `[READ]` Root domain
///   3. `[WRITE]` Name account
///   4. `[READ]` Auction program
///   5. `[WRITE]` Auction account
///   6. `[READ]` Central state
///   7. `[WRITE]` Auction state
///   8. `[WRITE, SIGNER]` Auction creator
///   9. `[WRITE]` Reselling state
///  10. `[WRITE]` Destination token account
///  11. `[WRITE]` SOL vault
///  12. `[READ]` System program
#[derive(Clone, Debug)]
pub struct EndAuction {
    pub clock_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub name_account: Address,
    pub auction_program: Address,
    pub auction: Address,
    pub central_state: Address,
    pub state: Address,
    pub auction_creator: Address,
    pub reselling_state: Address,
    pub destination_token: Address,
    pub sol_vault: Address,
    pub system_program: Address,
}

impl EndAuction {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new_readonly(self.clock_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new(self.name_account, false),
            AccountMeta::new_readonly(self.auction_program, false),
            AccountMeta::new(self.auction, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.state, false),
            AccountMeta::new(self.auction_creator, true),
            AccountMeta::new(self.reselling_state, false),
            AccountMeta::new(self.destination_token, false),
            AccountMeta::new(self.sol_vault, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}
