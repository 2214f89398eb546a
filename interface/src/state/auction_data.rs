//! The leading fields of the auction program's auction account.
//!
//! Only the fixed header and the timing options are decoded. The bid state after them is owned
//! by the auction program and isn't needed client-side.

use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::NameAuctionError,
    pack::{write_option_u64, Pack, Unpacker},
};

/// Space allocated for a fresh auction account:
/// authority, resource, token mint, four optional timestamps, the price floor, the auction
/// state, and the empty bid state.
pub const BASE_AUCTION_DATA_SIZE: usize = 32 + 32 + 32 + 9 + 9 + 9 + 9 + 1 + 32 + 1 + 8 + 8;

const_assert_eq!(BASE_AUCTION_DATA_SIZE, 182);

/// Presence byte of `last_bid`. Every field after it shifts by 8 bytes once a bid is placed.
pub const LAST_BID_OFFSET: usize = 96;

/// Where `end_auction_at` starts (its presence byte) when no bid has been placed yet.
pub const END_AUCTION_AT_OFFSET_WITHOUT_BID: usize = 98;

/// Where `end_auction_at` starts (its presence byte) once a bid has been placed.
pub const END_AUCTION_AT_OFFSET_WITH_BID: usize = 106;

/// The timing header of an auction account.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionHeader {
    pub authority: Address,
    /// The name account being auctioned.
    pub resource: Address,
    pub token_mint: Address,
    pub last_bid: Option<i64>,
    pub ended_at: Option<i64>,
    pub end_auction_at: Option<i64>,
    pub end_auction_gap: Option<i64>,
}

impl AuctionHeader {
    /// The offset of `end_auction_at`'s presence byte in this auction's account data.
    pub fn end_auction_at_offset(&self) -> usize {
        match self.last_bid {
            Some(_) => END_AUCTION_AT_OFFSET_WITH_BID,
            None => END_AUCTION_AT_OFFSET_WITHOUT_BID,
        }
    }

    /// Whether the auction is still running and is scheduled to end in `[now, now + interval]`.
    ///
    /// Account scans for ending auctions can return false positives, so results should be
    /// checked with this.
    pub fn ends_within(&self, now: i64, interval: i64) -> bool {
        self.ended_at.is_none()
            && self
                .end_auction_at
                .is_some_and(|end| (now..=now.saturating_add(interval)).contains(&end))
    }
}

impl Pack for AuctionHeader {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.authority.as_ref());
        dst.extend_from_slice(self.resource.as_ref());
        dst.extend_from_slice(self.token_mint.as_ref());
        for timestamp in [
            self.last_bid,
            self.ended_at,
            self.end_auction_at,
            self.end_auction_gap,
        ] {
            write_option_u64(dst, timestamp.map(|t| t as u64));
        }
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            authority: src.read_address()?,
            resource: src.read_address()?,
            token_mint: src.read_address()?,
            last_bid: read_timestamp(src)?,
            ended_at: read_timestamp(src)?,
            end_auction_at: read_timestamp(src)?,
            end_auction_gap: read_timestamp(src)?,
        })
    }
}

fn read_timestamp(src: &mut Unpacker<'_>) -> Result<Option<i64>, NameAuctionError> {
    Ok(src.read_option_u64()?.map(|t| t as i64))
}
