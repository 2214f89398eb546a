mod common;

use client::{
    context::NameContext,
    history::{
        decode_program_instructions,
        get_past_instructions,
    },
    rpc::LedgerTransaction,
};
use common::{
    addr,
    MockLedger,
};
use name_auction_interface::{
    instructions::NameAuctionInstruction,
    ProgramConfig,
    ProtocolVersion,
};
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::{
    message::Message,
    transaction::{
        Transaction,
        VersionedTransaction,
    },
};

fn memo(payer: solana_address::Address) -> Instruction {
    Instruction {
        program_id: addr(77),
        accounts: vec![AccountMeta::new(payer, true)],
        data: vec![1, 2, 3],
    }
}

fn ledger_tx(instructions: &[Instruction], slot: u64, failed: bool) -> LedgerTransaction {
    let message = Message::new(instructions, Some(&addr(1)));
    LedgerTransaction {
        slot,
        block_time: Some(1_700_000_000 + slot as i64),
        failed,
        log_messages: vec![format!("slot {slot}")],
        transaction: VersionedTransaction::from(Transaction::new_unsigned(message)),
    }
}

#[test]
fn decodes_only_program_instructions() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");
    let create = ctx.create_auction(addr(1), config.usdc_mint).unwrap();
    let garbage = Instruction {
        program_id: config.program_id,
        accounts: vec![],
        data: vec![3],
    };

    let tx = ledger_tx(&[memo(addr(1)), create, garbage], 1, false).transaction;
    let decoded = decode_program_instructions(&tx, &config.program_id, config.version);

    assert_eq!(decoded.len(), 1);
    let (index, instruction) = &decoded[0];
    assert_eq!(*index, 1);
    let NameAuctionInstruction::CreateAuction(data) = instruction else {
        panic!("expected create auction");
    };
    assert_eq!(data.name, "bonfida");
}

#[test]
fn nothing_decodes_under_the_wrong_program() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");
    let take_back = ctx.take_back().unwrap();
    let tx = ledger_tx(&[take_back], 1, false).transaction;

    assert!(decode_program_instructions(&tx, &addr(77), ProtocolVersion::Current).is_empty());
}

#[tokio::test]
async fn past_instructions_newest_first() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");

    let mut ledger = MockLedger::default();
    let oldest = ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(&[ctx.create_auction(addr(1), config.usdc_mint).unwrap()], 10, false),
    );
    ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(&[ctx.take_back().unwrap()], 20, true),
    );
    let newest = ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(
            &[
                ctx.end_auction(addr(2), addr(3)).unwrap(),
                memo(addr(1)),
                ctx.take_back().unwrap(),
            ],
            30,
            false,
        ),
    );

    let past = get_past_instructions(&ledger, &config, &ctx.name_account, 10)
        .await
        .unwrap();

    // The failed transaction at slot 20 is skipped.
    assert_eq!(past.len(), 3);
    assert_eq!(past[0].signature, newest);
    assert_eq!(past[0].index, 0);
    assert!(matches!(past[0].instruction, NameAuctionInstruction::EndAuction(_)));
    assert_eq!(past[1].index, 2);
    assert!(matches!(past[1].instruction, NameAuctionInstruction::TakeBack));
    assert_eq!(past[2].signature, oldest);
    assert_eq!(past[2].slot, 10);
    assert_eq!(past[2].block_time, Some(1_700_000_010));
    assert_eq!(past[2].fee_payer, Some(addr(1)));
    assert_eq!(past[2].log_messages, ["slot 10"]);
}

#[tokio::test]
async fn limit_counts_transactions() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");

    let mut ledger = MockLedger::default();
    for slot in 0..5 {
        ledger.insert_transaction(
            ctx.name_account,
            ledger_tx(&[ctx.take_back().unwrap()], slot, false),
        );
    }

    let past = get_past_instructions(&ledger, &config, &ctx.name_account, 2)
        .await
        .unwrap();
    assert_eq!(past.iter().map(|p| p.slot).collect::<Vec<_>>(), [4, 3]);
    assert!(get_past_instructions(&ledger, &config, &addr(5), 10)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn unreachable_transaction_fails_the_history() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");

    let mut ledger = MockLedger::default();
    ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(&[ctx.take_back().unwrap()], 1, false),
    );
    let lost = ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(&[ctx.take_back().unwrap()], 2, false),
    );
    ledger.unreachable.insert(lost);

    let err = get_past_instructions(&ledger, &config, &ctx.name_account, 10)
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Connection refused"));
}

#[tokio::test]
async fn unknown_transaction_is_skipped() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");

    let mut ledger = MockLedger::default();
    ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(&[ctx.take_back().unwrap()], 1, false),
    );
    let pruned = ledger.insert_transaction(
        ctx.name_account,
        ledger_tx(&[ctx.take_back().unwrap()], 2, false),
    );
    ledger.transactions.remove(&pruned);

    let past = get_past_instructions(&ledger, &config, &ctx.name_account, 10)
        .await
        .unwrap();
    assert_eq!(past.iter().map(|p| p.slot).collect::<Vec<_>>(), [1]);
}
