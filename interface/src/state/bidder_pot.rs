use solana_address::Address;

use crate::{
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

pub const BIDDER_WALLET_OFFSET: usize = 32;

/// The auction program's per-bidder escrow record.
///
/// ### Layout
///   - [0..32]: bidder pot token account
///   - [32..64]: bidder wallet
///   - [64..96]: auction account
///   - [96]: emptied flag
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidderPot {
    pub bidder_pot_token: Address,
    pub bidder_wallet: Address,
    pub auction: Address,
    pub emptied: bool,
}

impl BidderPot {
    pub const LEN: usize = 97;
}

impl Pack for BidderPot {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.bidder_pot_token.as_ref());
        dst.extend_from_slice(self.bidder_wallet.as_ref());
        dst.extend_from_slice(self.auction.as_ref());
        dst.push(self.emptied as u8);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        if src.remaining() < Self::LEN {
            return Err(NameAuctionError::InsufficientByteLength);
        }
        Ok(Self {
            bidder_pot_token: src.read_address()?,
            bidder_wallet: src.read_address()?,
            auction: src.read_address()?,
            emptied: src.read_u8()? != 0,
        })
    }
}
