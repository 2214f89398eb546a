use solana_address::Address;

use crate::{
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

pub const PARENT_NAME_OFFSET: usize = 0;
pub const OWNER_OFFSET: usize = 32;
pub const CLASS_OFFSET: usize = 64;

/// The fixed header at the start of every naming service record. Record data follows it.
///
/// ### Layout
///   - [0..32]: parent name account
///   - [32..64]: owner
///   - [64..96]: class
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameRecordHeader {
    pub parent_name: Address,
    pub owner: Address,
    pub class: Address,
}

impl NameRecordHeader {
    pub const LEN: usize = 96;
}

impl Pack for NameRecordHeader {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.parent_name.as_ref());
        dst.extend_from_slice(self.owner.as_ref());
        dst.extend_from_slice(self.class.as_ref());
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        if src.remaining() < Self::LEN {
            return Err(NameAuctionError::InsufficientByteLength);
        }
        Ok(Self {
            parent_name: src.read_address()?,
            owner: src.read_address()?,
            class: src.read_address()?,
        })
    }
}
