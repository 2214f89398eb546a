use crate::{
    error::NameAuctionError,
    pack::{write_string, Pack, Unpacker},
    state::name_record::NameRecordHeader,
};

/// A naming service record mapping a name account back to its human readable name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReverseLookup {
    pub header: NameRecordHeader,
    pub name: String,
}

impl Pack for ReverseLookup {
    fn pack_into(&self, dst: &mut Vec<u8>) {
        self.header.pack_into(dst);
        write_string(dst, &self.name);
    }

    fn unpack_from(src: &mut Unpacker<'_>) -> Result<Self, NameAuctionError> {
        Ok(Self {
            header: NameRecordHeader::unpack_from(src)?,
            name: src.read_string()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use solana_address::Address;

    use super::*;

    fn record(name: &str) -> ReverseLookup {
        ReverseLookup {
            header: NameRecordHeader {
                parent_name: Address::new_from_array([0; 32]),
                owner: Address::new_from_array([5; 32]),
                class: Address::new_from_array([6; 32]),
            },
            name: name.to_string(),
        }
    }

    #[test]
    fn name_follows_header() {
        let bytes = record("bonfida").pack();
        assert_eq!(&bytes[96..100], &7u32.to_le_bytes());
        assert_eq!(&bytes[100..], b"bonfida");
    }

    #[test]
    fn padded_account_data() {
        let mut bytes = record("sol").pack();
        bytes.resize(bytes.len() + 64, 0);
        assert_eq!(ReverseLookup::unpack(&bytes), Ok(record("sol")));
    }

    #[test]
    fn length_prefix_past_the_end() {
        let mut bytes = record("bonfida").pack();
        bytes.truncate(bytes.len() - 1);
        assert_eq!(
            ReverseLookup::unpack(&bytes),
            Err(NameAuctionError::InvalidStringLength)
        );
    }

    #[test]
    fn header_only() {
        let bytes = record("x").pack();
        assert_eq!(
            ReverseLookup::unpack(&bytes[..NameRecordHeader::LEN]),
            Err(NameAuctionError::InsufficientByteLength)
        );
    }
}
