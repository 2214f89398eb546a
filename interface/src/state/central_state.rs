use crate::{
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

/// The program's singleton PDA. It signs for, and owns, every reverse lookup record the program
/// creates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CentralState {
    pub signer_nonce: u8,
}

impl CentralState {
    pub const LEN: usize = 1;
}

impl Pack for CentralState {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        dst.push(self.signer_nonce);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            signer_nonce: src.read_u8()?,
        })
    }
}
