//! Memcmp filters for program-account scans.
//!
//! A filter only compares bytes, so a scan can return accounts a filter matches but that aren't
//! what the caller asked for. Callers decode the results and re-check them; [`MemcmpFilter::matches`]
//! lets them apply the same predicate locally.

use solana_address::Address;

use crate::state::{
    auction_data::{END_AUCTION_AT_OFFSET_WITHOUT_BID, END_AUCTION_AT_OFFSET_WITH_BID, LAST_BID_OFFSET},
    bidder_pot::BIDDER_WALLET_OFFSET,
    name_record::{OWNER_OFFSET, PARENT_NAME_OFFSET},
    U64_SIZE,
};

/// Exact bytes expected at an offset of an account's data.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MemcmpFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    #[inline(always)]
    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.bytes.len())
            .is_some_and(|window| window == self.bytes.as_slice())
    }
}

#[inline(always)]
pub fn matches_all(filters: &[MemcmpFilter], data: &[u8]) -> bool {
    filters.iter().all(|filter| filter.matches(data))
}

/// Bidder pots of the auction program that belong to `bidder`, one per auction they bid in.
pub fn bidder_auctions_filters(bidder: &Address) -> Vec<MemcmpFilter> {
    vec![MemcmpFilter::new(BIDDER_WALLET_OFFSET, bidder.to_bytes())]
}

/// Naming service records owned by `owner`, optionally restricted to children of `parent`.
pub fn owned_names_filters(owner: &Address, parent: Option<&Address>) -> Vec<MemcmpFilter> {
    let mut filters = vec![MemcmpFilter::new(OWNER_OFFSET, owner.to_bytes())];
    if let Some(parent) = parent {
        filters.push(MemcmpFilter::new(PARENT_NAME_OFFSET, parent.to_bytes()));
    }
    filters
}

/// Number of low-order little-endian bytes that differ somewhere between `start` and `end`.
///
/// Every timestamp in `start..=end` shares the remaining high-order bytes with both bounds.
fn varying_low_bytes(start: i64, end: i64) -> usize {
    let xor = (start ^ end) as u64;
    if xor == 0 {
        return 0;
    }
    (64 - xor.leading_zeros() as usize).div_ceil(8)
}

/// The constant high-order bytes of `end_auction_at`, matched right after its presence byte.
fn end_timestamp_filter(presence_offset: usize, now: i64, end: i64) -> Option<MemcmpFilter> {
    let varying = varying_low_bytes(now, end);
    if varying == U64_SIZE {
        return None;
    }
    let le = now.to_le_bytes();
    Some(MemcmpFilter::new(presence_offset + 1 + varying, &le[varying..]))
}

/// Filter sets for auctions whose `end_auction_at` falls in `now..now + interval`.
///
/// Two sets are returned because the end timestamp moves by 8 bytes once a bid is placed:
///   - the first matches auctions without a bid (`last_bid` and `ended_at` absent)
///   - the second matches auctions with a bid (`ended_at` absent)
///
/// Only whole bytes can be compared, so each set matches the entire byte bucket that contains the
/// window. Accounts ending slightly before `now` or after `now + interval` can come back too.
pub fn ending_auctions_filters(now: i64, interval: i64) -> [Vec<MemcmpFilter>; 2] {
    let end = now.saturating_add(interval);

    let mut without_bid = vec![MemcmpFilter::new(LAST_BID_OFFSET, [0, 0, 1])];
    without_bid.extend(end_timestamp_filter(END_AUCTION_AT_OFFSET_WITHOUT_BID, now, end));

    let mut with_bid = vec![
        MemcmpFilter::new(LAST_BID_OFFSET, [1]),
        MemcmpFilter::new(END_AUCTION_AT_OFFSET_WITH_BID - 1, [0, 1]),
    ];
    with_bid.extend(end_timestamp_filter(END_AUCTION_AT_OFFSET_WITH_BID, now, end));

    [without_bid, with_bid]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pack::Pack,
        state::auction_data::{AuctionHeader, BASE_AUCTION_DATA_SIZE},
    };

    fn auction(last_bid: Option<i64>, end_auction_at: i64) -> Vec<u8> {
        let mut data = AuctionHeader {
            authority: Address::new_from_array([1; 32]),
            resource: Address::new_from_array([2; 32]),
            token_mint: Address::new_from_array([3; 32]),
            last_bid,
            ended_at: None,
            end_auction_at: Some(end_auction_at),
            end_auction_gap: None,
        }
        .pack();
        data.resize(BASE_AUCTION_DATA_SIZE, 0);
        data
    }

    fn matched_by(sets: &[Vec<MemcmpFilter>; 2], data: &[u8]) -> bool {
        sets.iter().any(|filters| matches_all(filters, data))
    }

    #[test]
    fn memcmp_bounds() {
        let filter = MemcmpFilter::new(2, [7, 8]);
        assert!(filter.matches(&[0, 0, 7, 8]));
        assert!(filter.matches(&[0, 0, 7, 8, 9]));
        assert!(!filter.matches(&[0, 0, 7]));
        assert!(!filter.matches(&[0, 0, 8, 7]));
    }

    #[test]
    fn owned_names_with_parent() {
        let owner = Address::new_from_array([5; 32]);
        let root = Address::new_from_array([6; 32]);

        let mut record = vec![0u8; 96];
        record[..32].copy_from_slice(&root.to_bytes());
        record[32..64].copy_from_slice(&owner.to_bytes());

        assert!(matches_all(&owned_names_filters(&owner, Some(&root)), &record));
        assert!(matches_all(&owned_names_filters(&owner, None), &record));
        assert!(!matches_all(
            &owned_names_filters(&owner, Some(&Address::default())),
            &record
        ));
    }

    #[test]
    fn bidder_wallet_offset() {
        let bidder = Address::new_from_array([4; 32]);
        let filters = bidder_auctions_filters(&bidder);
        assert_eq!(filters, [MemcmpFilter::new(32, bidder.to_bytes())]);
    }

    #[test]
    fn window_closing_its_byte_bucket() {
        let now = 0x6000_FF00;
        let interval = 0xFF;
        let sets = ending_auctions_filters(now, interval);

        // One low byte varies; the remaining seven are fixed.
        assert_eq!(sets[0][1].offset, 99 + 1);
        assert_eq!(sets[1][2].offset, 107 + 1);
        assert_eq!(sets[0][1].bytes.len(), 7);

        for last_bid in [None, Some(1_000)] {
            assert!(matched_by(&sets, &auction(last_bid, now)));
            assert!(matched_by(&sets, &auction(last_bid, now + interval - 1)));
            assert!(!matched_by(&sets, &auction(last_bid, now + interval + 1)));
        }
    }

    #[test]
    fn sets_are_split_by_bid_presence() {
        let now = 1_700_000_000;
        let [without_bid, with_bid] = ending_auctions_filters(now, 60);

        let unbid = auction(None, now + 10);
        let bid = auction(Some(5), now + 10);
        assert!(matches_all(&without_bid, &unbid) && !matches_all(&with_bid, &unbid));
        assert!(matches_all(&with_bid, &bid) && !matches_all(&without_bid, &bid));
    }

    #[test]
    fn bucket_false_positives() {
        let now = 0x6000_FF10;
        let interval = 0x10;
        let sets = ending_auctions_filters(now, interval);

        // Already past, but in the same 256 second bucket.
        let data = auction(None, 0x6000_FF00);
        assert!(matched_by(&sets, &data));
        assert!(!AuctionHeader::unpack(&data).unwrap().ends_within(now, interval));
    }

    #[test]
    fn window_spanning_every_byte_has_no_timestamp_filter() {
        let [without_bid, with_bid] = ending_auctions_filters(-1, i64::MAX);
        assert_eq!(without_bid.len(), 1);
        assert_eq!(with_bid.len(), 2);
    }

    #[test]
    fn zero_interval() {
        let now = 1_700_000_000;
        let [without_bid, _] = ending_auctions_filters(now, 0);
        assert_eq!(without_bid[1].offset, 99);
        assert_eq!(without_bid[1].bytes, now.to_le_bytes());
    }
}
