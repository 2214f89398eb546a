//! Decoded instruction history of the name auction program.

use name_auction_interface::{
    instructions::NameAuctionInstruction,
    ProgramConfig,
    ProtocolVersion,
};
use solana_address::Address;
use solana_sdk::{
    signature::Signature,
    transaction::VersionedTransaction,
};

use crate::rpc::{
    LedgerRpc,
    LedgerTransaction,
};

/// A program instruction from a confirmed transaction.
#[derive(Clone, Debug)]
pub struct PastInstruction {
    pub signature: Signature,
    pub slot: u64,
    pub block_time: Option<i64>,
    pub fee_payer: Option<Address>,
    /// Position of the instruction among the transaction's top level instructions.
    pub index: usize,
    pub instruction: NameAuctionInstruction,
    pub log_messages: Vec<String>,
}

/// Decodes every top level instruction of `transaction` addressed to `program_id`, skipping
/// instructions whose data doesn't decode under `version`.
pub fn decode_program_instructions(
    transaction: &VersionedTransaction,
    program_id: &Address,
    version: ProtocolVersion,
) -> Vec<(usize, NameAuctionInstruction)> {
    let keys = transaction.message.static_account_keys();
    transaction
        .message
        .instructions()
        .iter()
        .enumerate()
        .filter(|(_, ix)| keys.get(ix.program_id_index as usize) == Some(program_id))
        .filter_map(|(index, ix)| {
            NameAuctionInstruction::unpack(&ix.data, version)
                .ok()
                .map(|decoded| (index, decoded))
        })
        .collect()
}

fn past_instructions(
    signature: Signature,
    ledger_tx: LedgerTransaction,
    config: &ProgramConfig,
) -> Vec<PastInstruction> {
    let fee_payer = ledger_tx
        .transaction
        .message
        .static_account_keys()
        .first()
        .copied();

    decode_program_instructions(&ledger_tx.transaction, &config.program_id, config.version)
        .into_iter()
        .map(|(index, instruction)| PastInstruction {
            signature,
            slot: ledger_tx.slot,
            block_time: ledger_tx.block_time,
            fee_payer,
            index,
            instruction,
            log_messages: ledger_tx.log_messages.clone(),
        })
        .collect()
}

/// The program instructions in the last `limit` successful transactions that touched `address`,
/// newest transaction first.
///
/// Transactions the node has no record of, or that don't decode, are skipped. RPC failures are
/// returned.
pub async fn get_past_instructions(
    rpc: &impl LedgerRpc,
    config: &ProgramConfig,
    address: &Address,
    limit: usize,
) -> anyhow::Result<Vec<PastInstruction>> {
    let signatures = rpc.get_signatures_for_address(address, limit).await?;

    let mut instructions = vec![];
    for signature in signatures {
        let Some(ledger_tx) = rpc.get_transaction(&signature).await? else {
            continue;
        };
        if ledger_tx.failed {
            continue;
        }
        instructions.extend(past_instructions(signature, ledger_tx, config));
    }
    Ok(instructions)
}
