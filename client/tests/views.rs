mod common;

use client::{
    context::NameContext,
    views::{
        batch_reverse_lookup,
        domain_owner,
        get_multiple_accounts_data_batched,
        oracle_price,
        account_exists,
        oracle_price_decimal,
        retrieve_auction,
        retrieve_central_state,
        retrieve_name_auction,
        retrieve_reselling_state,
        reverse_lookup,
    },
};
use common::{
    addr,
    MockLedger,
};
use name_auction_interface::{
    pack::Pack,
    seeds::find_reverse_lookup_account,
    state::{
        auction_data::{
            AuctionHeader,
            BASE_AUCTION_DATA_SIZE,
        },
        central_state::CentralState,
        name_auction::{
            NameAuction,
            NameAuctionStatus,
        },
        name_record::NameRecordHeader,
        reselling_state::ResellingState,
        reverse_lookup::ReverseLookup,
    },
    ErrorKind,
    NameAuctionError,
    ProgramConfig,
};
use price::PriceStatus;
use rust_decimal::Decimal;
use solana_address::Address;

fn reverse_record(config: &ProgramConfig, name: &str) -> Vec<u8> {
    ReverseLookup {
        header: NameRecordHeader {
            parent_name: Address::default(),
            owner: config.central_state,
            class: config.central_state,
        },
        name: name.to_string(),
    }
    .pack()
}

fn not_found_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<NameAuctionError>().map(|e| e.kind())
}

#[tokio::test]
async fn name_auction_round_trip() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");
    let state = NameAuction {
        status: NameAuctionStatus::FirstAuction,
        quote_mint: config.fida_mint,
        signer_nonce: 254,
        auction_account: addr(7),
    };

    let mut ledger = MockLedger::default();
    ledger.insert(ctx.state, config.program_id, state.pack());

    assert_eq!(
        retrieve_name_auction(&ledger, &config, "bonfida").await.unwrap(),
        state
    );
}

#[tokio::test]
async fn missing_accounts_are_not_found_errors() {
    let config = ProgramConfig::default();
    let ledger = MockLedger::default();

    let err = retrieve_name_auction(&ledger, &config, "nobody")
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<NameAuctionError>(),
        Some(&NameAuctionError::AuctionNotFound)
    );
    assert_eq!(not_found_kind(&err), Some(ErrorKind::NotFound));

    let err = retrieve_reselling_state(&ledger, &config, "nobody")
        .await
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<NameAuctionError>(),
        Some(&NameAuctionError::ResellingStateNotFound)
    );
}

#[tokio::test]
async fn truncated_state_is_a_decoding_error() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "short");
    let mut ledger = MockLedger::default();
    ledger.insert(ctx.state, config.program_id, vec![1; 40]);

    let err = retrieve_name_auction(&ledger, &config, "short")
        .await
        .unwrap_err();
    assert_eq!(not_found_kind(&err), Some(ErrorKind::Deserialization));
}

#[tokio::test]
async fn central_state_at_the_configured_address() {
    let config = ProgramConfig::default();
    let mut ledger = MockLedger::default();

    let err = retrieve_central_state(&ledger, &config).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<NameAuctionError>(),
        Some(&NameAuctionError::AccountNotFound)
    );

    let state = CentralState { signer_nonce: 253 };
    ledger.insert(config.central_state, config.program_id, state.pack());
    assert_eq!(retrieve_central_state(&ledger, &config).await.unwrap(), state);
}

#[tokio::test]
async fn auction_header_behind_padding() {
    let header = AuctionHeader {
        authority: addr(1),
        resource: addr(2),
        token_mint: addr(3),
        last_bid: Some(1_700_000_000),
        ended_at: None,
        end_auction_at: Some(1_700_003_600),
        end_auction_gap: Some(300),
    };
    let mut data = header.pack();
    data.resize(BASE_AUCTION_DATA_SIZE, 0);

    let mut ledger = MockLedger::default();
    ledger.insert(addr(8), addr(9), data);

    assert_eq!(retrieve_auction(&ledger, &addr(8)).await.unwrap(), header);
    let err = retrieve_auction(&ledger, &addr(10)).await.unwrap_err();
    assert_eq!(not_found_kind(&err), Some(ErrorKind::NotFound));
    assert_eq!(
        err.downcast_ref::<NameAuctionError>(),
        Some(&NameAuctionError::AuctionNotFound)
    );
}

#[tokio::test]
async fn existence_check() {
    let mut ledger = MockLedger::default();
    ledger.insert(addr(5), Address::default(), vec![]);

    assert!(account_exists(&ledger, &addr(5)).await.unwrap());
    assert!(!account_exists(&ledger, &addr(6)).await.unwrap());
}

#[tokio::test]
async fn reselling_state_and_owner() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "resold");
    let mut ledger = MockLedger::default();
    ledger.insert(
        ctx.reselling_state,
        config.program_id,
        ResellingState {
            token_destination_account: addr(3),
        }
        .pack(),
    );
    let mut record = NameRecordHeader {
        parent_name: config.root_domain,
        owner: addr(4),
        class: Address::default(),
    }
    .pack();
    record.resize(NameRecordHeader::LEN + 1_000, 0);
    ledger.insert(ctx.name_account, config.naming_service_program, record);

    let reselling = retrieve_reselling_state(&ledger, &config, "resold")
        .await
        .unwrap();
    assert_eq!(reselling.token_destination_account, addr(3));
    assert_eq!(
        domain_owner(&ledger, &config, "resold").await.unwrap(),
        addr(4)
    );
}

#[tokio::test]
async fn single_reverse_lookup() {
    let config = ProgramConfig::default();
    let ctx = NameContext::new(&config, "bonfida");
    let mut ledger = MockLedger::default();
    ledger.insert(
        ctx.reverse_lookup,
        config.naming_service_program,
        reverse_record(&config, "bonfida"),
    );

    assert_eq!(
        reverse_lookup(&ledger, &config, &ctx.name_account)
            .await
            .unwrap(),
        "bonfida"
    );
    assert!(reverse_lookup(&ledger, &config, &addr(1)).await.is_err());
}

#[tokio::test]
async fn batch_reverse_lookup_keeps_order_and_gaps() {
    let config = ProgramConfig::default();
    let name_accounts = (0..250u32)
        .map(|i| NameContext::new(&config, &format!("name-{i}")).name_account)
        .collect::<Vec<_>>();

    let mut ledger = MockLedger::default();
    for (i, name_account) in name_accounts.iter().enumerate() {
        let reverse = find_reverse_lookup_account(&config, name_account);
        match i % 10 {
            // No reverse lookup at all.
            3 => continue,
            // A record that doesn't decode.
            7 => ledger.insert(reverse, config.naming_service_program, vec![0; 50]),
            _ => ledger.insert(
                reverse,
                config.naming_service_program,
                reverse_record(&config, &format!("name-{i}")),
            ),
        }
    }

    let names = batch_reverse_lookup(&ledger, &config, &name_accounts)
        .await
        .unwrap();

    assert_eq!(names.len(), name_accounts.len());
    assert_eq!(*ledger.multiple_requests.borrow(), [100, 100, 50]);
    for (i, name) in names.iter().enumerate() {
        match i % 10 {
            3 | 7 => assert_eq!(name, &None, "position {i}"),
            _ => assert_eq!(name.as_deref(), Some(format!("name-{i}").as_str())),
        }
    }
}

#[tokio::test]
async fn batched_fetch_of_nothing() {
    let ledger = MockLedger::default();
    let fetched = get_multiple_accounts_data_batched(&ledger, &[]).await.unwrap();
    assert!(fetched.is_empty());
    assert!(ledger.multiple_requests.borrow().is_empty());
}

fn pyth_price_account(exponent: i32, price: i64, status: u32) -> Vec<u8> {
    let mut data = vec![0u8; 3_312];
    data[0..4].copy_from_slice(&0xa1b2_c3d4u32.to_le_bytes());
    data[4..8].copy_from_slice(&2u32.to_le_bytes());
    data[8..12].copy_from_slice(&3u32.to_le_bytes());
    data[20..24].copy_from_slice(&exponent.to_le_bytes());
    data[208..216].copy_from_slice(&price.to_le_bytes());
    data[216..224].copy_from_slice(&1_000u64.to_le_bytes());
    data[224..228].copy_from_slice(&status.to_le_bytes());
    data[232..240].copy_from_slice(&123_456u64.to_le_bytes());
    data
}

#[tokio::test]
async fn oracle_price_is_normalized() {
    let config = ProgramConfig::default();
    let mut ledger = MockLedger::default();
    ledger.insert(
        config.price_oracle,
        Address::default(),
        pyth_price_account(-6, 1_234_500, 1),
    );

    let price = oracle_price(&ledger, &config).await.unwrap();
    assert_eq!(price.status, PriceStatus::Trading);
    assert_eq!(price.publish_slot, 123_456);
    assert_eq!(
        oracle_price_decimal(&ledger, &config).await.unwrap(),
        Decimal::new(12_345, 4)
    );
}

#[tokio::test]
async fn non_oracle_account_is_rejected() {
    let config = ProgramConfig::default();
    let mut ledger = MockLedger::default();
    let mut data = pyth_price_account(-6, 1, 1);
    data[8..12].copy_from_slice(&1u32.to_le_bytes());
    ledger.insert(config.price_oracle, Address::default(), data);

    let err = oracle_price(&ledger, &config).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<NameAuctionError>(),
        Some(&NameAuctionError::InvalidOracleAccountType)
    );
}

#[tokio::test]
async fn oversized_oracle_price_is_an_error() {
    let config = ProgramConfig::default();
    let mut ledger = MockLedger::default();
    ledger.insert(
        config.price_oracle,
        Address::default(),
        pyth_price_account(28, 10, 1),
    );

    assert_eq!(oracle_price(&ledger, &config).await.unwrap().exponent, 28);
    let err = oracle_price_decimal(&ledger, &config).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<NameAuctionError>(),
        Some(&NameAuctionError::InvalidOracleExponent)
    );
}
