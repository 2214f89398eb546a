//! Instructions paired with the freshly created keypairs that must co-sign them.

use anyhow::Context;
use solana_instruction::Instruction;
use solana_sdk::{
    hash::Hash,
    message::Message,
    signature::Keypair,
    signer::Signer,
    transaction::Transaction,
};

/// A transaction ready to be signed and submitted: the new signers it needs (beyond the payer and
/// any wallets the caller controls) and its instructions, in order.
#[derive(Debug, Default)]
pub struct PrimedTransaction {
    pub signers: Vec<Keypair>,
    pub instructions: Vec<Instruction>,
}

impl PrimedTransaction {
    pub fn new(signers: Vec<Keypair>, instructions: Vec<Instruction>) -> Self {
        Self {
            signers,
            instructions,
        }
    }

    pub fn from_instruction(instruction: Instruction) -> Self {
        Self::new(vec![], vec![instruction])
    }

    /// Appends another primed transaction's signers and instructions after this one's.
    pub fn extend(&mut self, other: PrimedTransaction) {
        self.signers.extend(other.signers);
        self.instructions.extend(other.instructions);
    }

    /// Builds and signs the transaction with `payer` first, then this transaction's signers.
    pub fn sign(
        &self,
        payer: &Keypair,
        prefix: &[Instruction],
        recent_blockhash: Hash,
    ) -> anyhow::Result<Transaction> {
        let instructions = [prefix, self.instructions.as_slice()].concat();
        let msg = Message::new(&instructions, Some(&payer.pubkey()));
        let signers = std::iter::once(payer)
            .chain(self.signers.iter())
            .collect::<Vec<_>>();

        let mut tx = Transaction::new_unsigned(msg);
        tx.try_sign(&signers, recent_blockhash)
            .context("Primed transaction is missing a required signer")?;
        Ok(tx)
    }
}
