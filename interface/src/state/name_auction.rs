use solana_address::Address;

use crate::{
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

/// Lifecycle of a domain's auction state account.
///
/// Legacy deployments stored a plain `is_initialized` flag in the same byte, which decodes as
/// [`NameAuctionStatus::Uninitialized`] or [`NameAuctionStatus::FirstAuction`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[derive(strum_macros::FromRepr, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum NameAuctionStatus {
    Uninitialized = 0,
    /// The domain has never been owned and is in its first auction.
    FirstAuction = 1,
    /// The domain was put back up for sale by its owner.
    SecondaryAuction = 2,
}

/// The auction state PDA of a domain, derived from the domain's name account.
///
/// ### Layout
///   - [0]: status, 1 byte
///   - [1..33]: quote mint, 32 bytes
///   - [33]: signer nonce, 1 byte
///   - [34..66]: auction account, 32 bytes
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameAuction {
    pub status: NameAuctionStatus,
    pub quote_mint: Address,
    pub signer_nonce: u8,
    pub auction_account: Address,
}

impl NameAuction {
    pub const LEN: usize = 66;

    pub fn is_initialized(&self) -> bool {
        self.status != NameAuctionStatus::Uninitialized
    }

    pub fn is_resale(&self) -> bool {
        self.status == NameAuctionStatus::SecondaryAuction
    }
}

impl Pack for NameAuction {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.push(self.status as u8);
        dst.extend_from_slice(self.quote_mint.as_ref());
        dst.push(self.signer_nonce);
        dst.extend_from_slice(self.auction_account.as_ref());
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        if src.remaining() < Self::LEN {
            return Err(NameAuctionError::InsufficientByteLength);
        }
        let status = NameAuctionStatus::from_repr(src.read_u8()?)
            .ok_or(NameAuctionError::InvalidAuctionStatus)?;
        Ok(Self {
            status,
            quote_mint: src.read_address()?,
            signer_nonce: src.read_u8()?,
            auction_account: src.read_address()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn sample(status: NameAuctionStatus) -> NameAuction {
        NameAuction {
            status,
            quote_mint: Address::new_from_array([1; 32]),
            signer_nonce: 254,
            auction_account: Address::new_from_array([2; 32]),
        }
    }

    #[test]
    fn layout() {
        let bytes = sample(NameAuctionStatus::SecondaryAuction).pack();
        assert_eq!(bytes.len(), NameAuction::LEN);
        assert_eq!(bytes[0], 2);
        assert_eq!(&bytes[1..33], &[1; 32]);
        assert_eq!(bytes[33], 254);
        assert_eq!(&bytes[34..66], &[2; 32]);
    }

    #[test]
    fn every_status_decodes() {
        for status in NameAuctionStatus::iter() {
            let decoded = NameAuction::unpack(&sample(status).pack()).unwrap();
            assert_eq!(decoded.status, status);
        }
    }

    #[test]
    fn legacy_initialized_flag_reads_as_first_auction() {
        let mut bytes = sample(NameAuctionStatus::Uninitialized).pack();
        bytes[0] = 1;
        let decoded = NameAuction::unpack(&bytes).unwrap();
        assert!(decoded.is_initialized());
        assert!(!decoded.is_resale());
    }

    #[test]
    fn invalid_status() {
        let mut bytes = sample(NameAuctionStatus::FirstAuction).pack();
        bytes[0] = 3;
        assert_eq!(
            NameAuction::unpack(&bytes),
            Err(NameAuctionError::InvalidAuctionStatus)
        );
    }

    #[test]
    fn truncated() {
        let bytes = sample(NameAuctionStatus::FirstAuction).pack();
        for len in 0..NameAuction::LEN {
            assert_eq!(
                NameAuction::unpack(&bytes[..len]),
                Err(NameAuctionError::InsufficientByteLength)
            );
        }
    }
}
