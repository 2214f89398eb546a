#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(any(test, feature = "client"), derive(strum_macros::Display))]
pub enum OraclePriceError {
    InsufficientByteLength,
    InvalidMagic,
    UnsupportedVersion,
    NotAPriceAccount,
    ExponentOutOfRange,
}

#[cfg(feature = "client")]
impl std::error::Error for OraclePriceError {}
