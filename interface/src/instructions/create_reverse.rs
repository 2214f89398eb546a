use solana_address::Address;
use solana_instruction::AccountMeta;

use crate::{
    error::NameAuctionError,
    pack::{write_string, Pack, Unpacker},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateReverseInstructionData {
    pub name: String,
}

impl Pack for CreateReverseInstructionData {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        write_string(dst, &self.name);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            name: src.read_string()?,
        })
    }
}

/// Creates the reverse lookup record of a name, signed by the central state.
///
/// Subdomains pass their parent name account and its owner, who must sign. A parent without an
/// owner is rejected before anything is encoded.
///
/// ### Accounts
///   0. `[READ]` Rent sysvar
///   1. `[READ]` Naming service program
///   2. `[READ]` Root domain
///   3. `[WRITE]` Reverse lookup account
///   4. `[READ]` Default address placeholder
///   5. `[READ]` Central state
///   6. `[WRITE, SIGNER]` Fee payer
///   7. `[WRITE]` Parent name account (optional)
///   8. `[READ, SIGNER]` Parent name owner (required with 7)
#[derive(Clone, Debug)]
pub struct CreateReverse {
    pub rent_sysvar: Address,
    pub naming_service_program: Address,
    pub root_domain: Address,
    pub reverse_lookup: Address,
    pub central_state: Address,
    pub fee_payer: Address,
    pub parent_name: Option<Address>,
    pub parent_name_owner: Option<Address>,
}

impl CreateReverse {
    /// Fails with [`NameAuctionError::MissingParentNameOwner`] when a parent name is given
    /// without its owner.
    pub fn validate(&self) -> Result<(), NameAuctionError> {
        match (self.parent_name, self.parent_name_owner) {
            (Some(_), None) => Err(NameAuctionError::MissingParentNameOwner),
            _ => Ok(()),
        }
    }

    pub fn create_account_metas(&self) -> Result<Vec<AccountMeta>, NameAuctionError> {
        self.validate()?;

        let mut metas = vec![
            AccountMeta::new_readonly(self.rent_sysvar, false),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new_readonly(self.root_domain, false),
            AccountMeta::new(self.reverse_lookup, false),
            AccountMeta::new_readonly(Address::default(), false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new(self.fee_payer, true),
        ];
        if let (Some(parent_name), Some(parent_name_owner)) =
            (self.parent_name, self.parent_name_owner)
        {
            metas.push(AccountMeta::new(parent_name, false));
            metas.push(AccountMeta::new_readonly(parent_name_owner, true));
        }
        Ok(metas)
    }
}
