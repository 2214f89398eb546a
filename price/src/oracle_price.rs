use static_assertions::const_assert_eq;

use crate::OraclePriceError;

/// Magic number at the start of every Pyth v2 account.
pub const PYTH_MAGIC: u32 = 0xa1b2_c3d4;
pub const PYTH_VERSION_2: u32 = 2;
/// The Pyth account type for price accounts, as opposed to mapping or product accounts.
pub const PYTH_PRICE_ACCOUNT_TYPE: u32 = 3;

pub const MAGIC_OFFSET: usize = 0;
pub const VERSION_OFFSET: usize = 4;
pub const ACCOUNT_TYPE_OFFSET: usize = 8;
pub const EXPONENT_OFFSET: usize = 20;
pub const AGGREGATE_PRICE_OFFSET: usize = 208;
pub const AGGREGATE_CONFIDENCE_OFFSET: usize = 216;
pub const AGGREGATE_STATUS_OFFSET: usize = 224;
pub const AGGREGATE_PUBLISH_SLOT_OFFSET: usize = 232;

/// The size of the aggregate price info: price, confidence, status, corporate action and publish
/// slot.
pub const PRICE_INFO_LEN: usize = 32;

/// The number of leading bytes decoded from a price account.
pub const ORACLE_PRICE_MIN_LEN: usize = AGGREGATE_PRICE_OFFSET + PRICE_INFO_LEN;

const_assert_eq!(ORACLE_PRICE_MIN_LEN, 240);
const_assert_eq!(AGGREGATE_PUBLISH_SLOT_OFFSET + 8, ORACLE_PRICE_MIN_LEN);

/// The largest power of ten a normalized price can be scaled by in either direction.
pub const MAX_EXPONENT_MAGNITUDE: i32 = 28;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(any(test, feature = "client"), derive(strum_macros::Display))]
pub enum PriceStatus {
    Unknown,
    Trading,
    Halted,
    Auction,
    Ignored,
}

impl From<u32> for PriceStatus {
    fn from(value: u32) -> Self {
        match value {
            1 => PriceStatus::Trading,
            2 => PriceStatus::Halted,
            3 => PriceStatus::Auction,
            4 => PriceStatus::Ignored,
            _ => PriceStatus::Unknown,
        }
    }
}

/// The aggregate price of a Pyth v2 price account.
///
/// The real price is `price * 10^exponent`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OraclePrice {
    pub exponent: i32,
    pub price: i64,
    pub confidence: u64,
    pub status: PriceStatus,
    pub publish_slot: u64,
}

impl OraclePrice {
    /// Decodes the aggregate price from raw price account data.
    pub fn try_from_bytes(data: &[u8]) -> Result<Self, OraclePriceError> {
        if data.len() < ORACLE_PRICE_MIN_LEN {
            return Err(OraclePriceError::InsufficientByteLength);
        }
        if read_u32(data, MAGIC_OFFSET) != PYTH_MAGIC {
            return Err(OraclePriceError::InvalidMagic);
        }
        if read_u32(data, VERSION_OFFSET) != PYTH_VERSION_2 {
            return Err(OraclePriceError::UnsupportedVersion);
        }
        if read_u32(data, ACCOUNT_TYPE_OFFSET) != PYTH_PRICE_ACCOUNT_TYPE {
            return Err(OraclePriceError::NotAPriceAccount);
        }

        let exponent = read_u32(data, EXPONENT_OFFSET) as i32;
        if !(-MAX_EXPONENT_MAGNITUDE..=MAX_EXPONENT_MAGNITUDE).contains(&exponent) {
            return Err(OraclePriceError::ExponentOutOfRange);
        }

        Ok(Self {
            exponent,
            price: read_u64(data, AGGREGATE_PRICE_OFFSET) as i64,
            confidence: read_u64(data, AGGREGATE_CONFIDENCE_OFFSET),
            status: read_u32(data, AGGREGATE_STATUS_OFFSET).into(),
            publish_slot: read_u64(data, AGGREGATE_PUBLISH_SLOT_OFFSET),
        })
    }

    pub fn is_trading(&self) -> bool {
        self.status == PriceStatus::Trading
    }
}

// Callers have already checked `data` is at least `ORACLE_PRICE_MIN_LEN` bytes.
#[inline(always)]
fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

#[inline(always)]
fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}
