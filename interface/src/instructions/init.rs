use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitInstructionData {
    /// The bump of the central state PDA.
    pub state_nonce: u8,
}

impl Pack for InitInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.push(self.state_nonce);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            state_nonce: src.read_u8()?,
        })
    }
}

/// Creates the program's central state. Only needs to run once per deployment.
///
/// ### Accounts
///   0. `[WRITE]` Central state
///   1. `[READ]` System program
///   2. `[READ]` Fee payer
///   3. `[READ]` Rent sysvar
#[derive(Clone, Debug)]
pub struct Init {
    pub state: Address,
    pub system_program: Address,
    pub fee_payer: Address,
    pub rent_sysvar: Address,
}

impl Init {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.state, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.fee_payer, false),
            AccountMeta::new_readonly(self.rent_sysvar, false),
        ]
    }
}
