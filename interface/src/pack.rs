//! Little-endian byte packing shared by instruction payloads and account records.
//!
//! Layout conventions:
//!   - integers are fixed width little-endian
//!   - strings are a u32 little-endian length followed by that many UTF-8 bytes
//!   - an optional u64 is a presence byte (0 or 1) followed by the value when present
//!   - no padding between fields

use solana_address::Address;

use crate::{
    error::NameAuctionError,
    state::{ADDRESS_SIZE, U32_SIZE, U64_SIZE},
};

/// A record with a fixed field order that can be written to and read back from bytes.
pub trait Pack: Sized {
    fn pack_into(&self, dst: &mut Vec<u8>);

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError>;

    fn pack(&self) -> Vec<u8> {
        let mut dst = Vec::new();
        self.pack_into(&mut dst);
        dst
    }

    /// Decodes a record from the front of `bytes`. Anything after the record is ignored, since
    /// accounts are frequently allocated larger than the data they hold.
    fn unpack(bytes: &[u8]) -> Result<Self, NameAuctionError> {
        Self::unpack_from(&mut Unpacker::new(bytes))
    }

    /// Decodes a record that must span `bytes` exactly.
    fn unpack_exact(bytes: &[u8]) -> Result<Self, NameAuctionError> {
        let mut src = Unpacker::new(bytes);
        let record = Self::unpack_from(&mut src)?;
        src.finish()?;
        Ok(record)
    }
}

#[inline(always)]
pub fn write_u32(dst: &mut Vec<u8>, value: u32) {
    dst.extend_from_slice(&value.to_le_bytes());
}

#[inline(always)]
pub fn write_u64(dst: &mut Vec<u8>, value: u64) {
    dst.extend_from_slice(&value.to_le_bytes());
}

pub fn write_string(dst: &mut Vec<u8>, value: &str) {
    write_u32(dst, value.len() as u32);
    dst.extend_from_slice(value.as_bytes());
}

pub fn write_option_u64(dst: &mut Vec<u8>, value: Option<u64>) {
    match value {
        Some(v) => {
            dst.push(1);
            write_u64(dst, v);
        }
        None => dst.push(0),
    }
}

/// A forward-only cursor over a byte slice. Every read either consumes exactly the bytes of the
/// field or fails without consuming anything.
#[derive(Debug)]
pub struct Unpacker<'a> {
    bytes: &'a [u8],
}

impl<'a> Unpacker<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], NameAuctionError> {
        if self.bytes.len() < len {
            return Err(NameAuctionError::InsufficientByteLength);
        }
        let (head, tail) = self.bytes.split_at(len);
        self.bytes = tail;
        Ok(head)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], NameAuctionError> {
        let bytes = self.read_bytes(N)?;
        <[u8; N]>::try_from(bytes).map_err(|_| NameAuctionError::InsufficientByteLength)
    }

    pub fn read_u8(&mut self) -> Result<u8, NameAuctionError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, NameAuctionError> {
        self.read_array::<U32_SIZE>().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64, NameAuctionError> {
        self.read_array::<U64_SIZE>().map(u64::from_le_bytes)
    }

    pub fn read_address(&mut self) -> Result<Address, NameAuctionError> {
        self.read_array::<ADDRESS_SIZE>().map(Address::new_from_array)
    }

    pub fn read_string(&mut self) -> Result<String, NameAuctionError> {
        let prefix = self.read_array::<U32_SIZE>()?;
        let len = u32::from_le_bytes(prefix) as usize;
        if len > self.bytes.len() {
            return Err(NameAuctionError::InvalidStringLength);
        }
        let bytes = self.read_bytes(len)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| NameAuctionError::InvalidUtf8)
    }

    pub fn read_option_u64(&mut self) -> Result<Option<u64>, NameAuctionError> {
        match self.read_u8()? {
            0 => Ok(None),
            1 => self.read_u64().map(Some),
            _ => Err(NameAuctionError::InvalidOptionTag),
        }
    }

    /// Fails if any bytes are left unread.
    pub fn finish(self) -> Result<(), NameAuctionError> {
        if self.bytes.is_empty() {
            Ok(())
        } else {
            Err(NameAuctionError::TrailingBytes)
        }
    }
}
