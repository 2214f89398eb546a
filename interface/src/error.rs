//! Common error types and conversion helpers to represent them as error message strings.

use price::OraclePriceError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[derive(strum_macros::FromRepr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[repr(u8)]
pub enum NameAuctionError {
    MissingParentNameOwner,
    UnsupportedProtocolVersion,
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidStringLength,
    InvalidUtf8,
    InvalidOptionTag,
    InvalidAuctionStatus,
    TrailingBytes,
    InvalidOracleAccount,
    InvalidOracleVersion,
    InvalidOracleAccountType,
    InvalidOracleExponent,
    AccountNotFound,
    AuctionNotFound,
    ResellingStateNotFound,
}

/// The three ways a request can fail in this crate.
///
/// There is no variant for a protocol version mismatch: decoding bytes under the wrong version
/// may well succeed, which is why the version is always an explicit input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller composed an operation the program can't accept. Raised before any encoding.
    Configuration,
    /// Bytes didn't match the schema they were decoded with.
    Deserialization,
    /// An account the request depends on doesn't exist.
    NotFound,
}

impl NameAuctionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NameAuctionError::MissingParentNameOwner
            | NameAuctionError::UnsupportedProtocolVersion => ErrorKind::Configuration,
            NameAuctionError::InvalidInstructionTag
            | NameAuctionError::InsufficientByteLength
            | NameAuctionError::InvalidStringLength
            | NameAuctionError::InvalidUtf8
            | NameAuctionError::InvalidOptionTag
            | NameAuctionError::InvalidAuctionStatus
            | NameAuctionError::TrailingBytes
            | NameAuctionError::InvalidOracleAccount
            | NameAuctionError::InvalidOracleVersion
            | NameAuctionError::InvalidOracleAccountType
            | NameAuctionError::InvalidOracleExponent => ErrorKind::Deserialization,
            NameAuctionError::AccountNotFound
            | NameAuctionError::AuctionNotFound
            | NameAuctionError::ResellingStateNotFound => ErrorKind::NotFound,
        }
    }
}

impl From<OraclePriceError> for NameAuctionError {
    #[inline(always)]
    fn from(oracle_error: OraclePriceError) -> Self {
        match oracle_error {
            OraclePriceError::InsufficientByteLength => NameAuctionError::InsufficientByteLength,
            OraclePriceError::InvalidMagic => NameAuctionError::InvalidOracleAccount,
            OraclePriceError::UnsupportedVersion => NameAuctionError::InvalidOracleVersion,
            OraclePriceError::NotAPriceAccount => NameAuctionError::InvalidOracleAccountType,
            OraclePriceError::ExponentOutOfRange => NameAuctionError::InvalidOracleExponent,
        }
    }
}

impl From<NameAuctionError> for &'static str {
    fn from(value: NameAuctionError) -> Self {
        match value {
            NameAuctionError::MissingParentNameOwner => "Missing parent name owner",
            NameAuctionError::UnsupportedProtocolVersion => {
                "Operation doesn't exist in the configured protocol version"
            }
            NameAuctionError::InvalidInstructionTag => "Invalid instruction tag",
            NameAuctionError::InsufficientByteLength => "Not enough bytes passed",
            NameAuctionError::InvalidStringLength => "String length prefix exceeds remaining bytes",
            NameAuctionError::InvalidUtf8 => "String bytes aren't valid UTF-8",
            NameAuctionError::InvalidOptionTag => "Option presence byte must be 0 or 1",
            NameAuctionError::InvalidAuctionStatus => "Invalid name auction status",
            NameAuctionError::TrailingBytes => "Unexpected bytes after the end of the record",
            NameAuctionError::InvalidOracleAccount => "Account isn't a price oracle account",
            NameAuctionError::InvalidOracleVersion => "Unsupported price oracle version",
            NameAuctionError::InvalidOracleAccountType => "Oracle account isn't a price account",
            NameAuctionError::InvalidOracleExponent => "Oracle price exponent is out of range",
            NameAuctionError::AccountNotFound => "Account not found",
            NameAuctionError::AuctionNotFound => "No name auction found",
            NameAuctionError::ResellingStateNotFound => "Could not retrieve reselling state",
        }
    }
}

impl core::fmt::Display for NameAuctionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self, <&'static str>::from(*self))
    }
}

impl std::error::Error for NameAuctionError {}

pub type NameAuctionResult<T = ()> = Result<T, NameAuctionError>;

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn repr_round_trips_through_from_repr() {
        for variant in NameAuctionError::iter() {
            assert_eq!(NameAuctionError::from_repr(variant as u8), Some(variant));
        }
    }

    #[test]
    fn configuration_errors() {
        assert_eq!(
            NameAuctionError::MissingParentNameOwner.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            NameAuctionError::UnsupportedProtocolVersion.kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn oracle_errors_are_deserialization_errors() {
        let errors = [
            OraclePriceError::InsufficientByteLength,
            OraclePriceError::InvalidMagic,
            OraclePriceError::UnsupportedVersion,
            OraclePriceError::NotAPriceAccount,
            OraclePriceError::ExponentOutOfRange,
        ];
        for e in errors {
            assert_eq!(NameAuctionError::from(e).kind(), ErrorKind::Deserialization);
        }
    }

    #[test]
    fn display_includes_message() {
        let s = NameAuctionError::AuctionNotFound.to_string();
        assert!(s.contains("AuctionNotFound"));
        assert!(s.contains("No name auction found"));
    }
}
