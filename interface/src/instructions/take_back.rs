use solana_address::Address;
use solana_instruction::AccountMeta;

/// Admin only. Takes back a name account whose owner is the central state. Carries no
/// instruction data beyond the tag.
///
/// ### Accounts
///   0. `[WRITE, SIGNER]` Admin
///   1. `[READ]` Naming service program
///   2. `[WRITE]` Name account
///   3. `[READ]` Central state
///   4. `[READ]` Default address placeholder
///   5. `[READ]` Root domain
#[derive(Clone, Debug)]
pub struct TakeBack {
    pub admin: Address,
    pub naming_service_program: Address,
    pub name_account: Address,
    pub central_state: Address,
    pub root_domain: Address,
}

impl TakeBack {
    pub fn create_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.admin, true),
            AccountMeta::new_readonly(self.naming_service_program, false),
            AccountMeta::new(self.name_account, false),
            AccountMeta::new_readonly(self.central_state, false),
            AccountMeta::new_readonly(Address::default(), false),
            AccountMeta::new_readonly(self.root_domain, false),
        ]
    }
}
