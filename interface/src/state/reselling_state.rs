use solana_address::Address;

use crate::{
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

/// Created when an owner puts a domain back up for auction. Records where the winning bid is
/// paid out to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResellingState {
    pub token_destination_account: Address,
}

impl ResellingState {
    pub const LEN: usize = 32;
}

impl Pack for ResellingState {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.extend_from_slice(self.token_destination_account.as_ref());
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            token_destination_account: src.read_address()?,
        })
    }
}
