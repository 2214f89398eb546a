//! Instruction codec for the name auction program.
//!
//! An [`Operation`] pairs an instruction's account list with its data. Three pure functions turn
//! it into wire form: [`encode`] produces the tagged payload, [`accounts`] the ordered account
//! metas, and [`build_instruction`] composes both for a given [`ProgramConfig`].
//!
//! Byte 0 of every payload is the [`InstructionTag`]. Tags 3, 6 and 7 are unused.
//!
//! CreateAuction, Claim and Resell changed shape between protocol versions, so each has a
//! `Legacy` counterpart. The decoded form of a payload is [`NameAuctionInstruction`]; decoding
//! needs the protocol version because the same tag means different layouts in each.

pub mod claim;
pub mod create_auction;
pub mod create_reverse;
pub mod create_v2;
pub mod end_auction;
pub mod init;
pub mod resell;
pub mod take_back;

use solana_instruction::{AccountMeta, Instruction};

use crate::{
    config::{ProgramConfig, ProtocolVersion},
    error::NameAuctionError,
    pack::{Pack, Unpacker},
};

pub use claim::*;
pub use create_auction::*;
pub use create_reverse::*;
pub use create_v2::*;
pub use end_auction::*;
pub use init::*;
pub use resell::*;
pub use take_back::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[derive(strum_macros::Display, strum_macros::FromRepr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum InstructionTag {
    Init = 0,
    CreateAuction = 1,
    Claim = 2,
    Resell = 4,
    CreateReverse = 5,
    EndAuction = 8,
    CreateV2 = 9,
    TakeBack = 10,
}

impl TryFrom<u8> for InstructionTag {
    type Error = NameAuctionError;

    #[inline(always)]
    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        InstructionTag::from_repr(tag).ok_or(NameAuctionError::InvalidInstructionTag)
    }
}

impl InstructionTag {
    /// Whether a deployment speaking `version` understands this tag at all.
    pub fn exists_in(&self, version: ProtocolVersion) -> bool {
        match version {
            ProtocolVersion::Current => true,
            ProtocolVersion::Legacy => matches!(
                self,
                InstructionTag::Init
                    | InstructionTag::CreateAuction
                    | InstructionTag::Claim
                    | InstructionTag::Resell
            ),
        }
    }
}

/// A decoded instruction payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NameAuctionInstruction {
    Init(InitInstructionData),
    CreateAuction(CreateAuctionInstructionData),
    LegacyCreateAuction(LegacyCreateAuctionInstructionData),
    Claim(ClaimInstructionData),
    LegacyClaim(LegacyClaimInstructionData),
    Resell(ResellInstructionData),
    LegacyResell(LegacyResellInstructionData),
    CreateReverse(CreateReverseInstructionData),
    EndAuction(EndAuctionInstructionData),
    CreateV2(CreateV2InstructionData),
    TakeBack,
}

impl NameAuctionInstruction {
    pub fn tag(&self) -> InstructionTag {
        match self {
            Self::Init(_) => InstructionTag::Init,
            Self::CreateAuction(_) | Self::LegacyCreateAuction(_) => InstructionTag::CreateAuction,
            Self::Claim(_) | Self::LegacyClaim(_) => InstructionTag::Claim,
            Self::Resell(_) | Self::LegacyResell(_) => InstructionTag::Resell,
            Self::CreateReverse(_) => InstructionTag::CreateReverse,
            Self::EndAuction(_) => InstructionTag::EndAuction,
            Self::CreateV2(_) => InstructionTag::CreateV2,
            Self::TakeBack => InstructionTag::TakeBack,
        }
    }

    /// Whether this payload layout belongs to `version`. Init is shared by both.
    pub fn is_supported_in(&self, version: ProtocolVersion) -> bool {
        match self {
            Self::Init(_) => true,
            Self::LegacyCreateAuction(_) | Self::LegacyClaim(_) | Self::LegacyResell(_) => {
                version == ProtocolVersion::Legacy
            }
            _ => version == ProtocolVersion::Current,
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = vec![self.tag() as u8];
        match self {
            Self::Init(d) => d.pack_into(&mut data),
            Self::CreateAuction(d) => d.pack_into(&mut data),
            Self::LegacyCreateAuction(d) => d.pack_into(&mut data),
            Self::Claim(d) => d.pack_into(&mut data),
            Self::LegacyClaim(d) => d.pack_into(&mut data),
            Self::Resell(d) => d.pack_into(&mut data),
            Self::LegacyResell(d) => d.pack_into(&mut data),
            Self::CreateReverse(d) => d.pack_into(&mut data),
            Self::EndAuction(d) => d.pack_into(&mut data),
            Self::CreateV2(d) => d.pack_into(&mut data),
            Self::TakeBack => (),
        }
        data
    }

    /// Decodes a full instruction payload using the layouts of `version`.
    ///
    /// The payload must be consumed exactly: truncated data, trailing bytes, and tags that don't
    /// exist in `version` are all errors.
    pub fn unpack(data: &[u8], version: ProtocolVersion) -> Result<Self, NameAuctionError> {
        let (&tag, rest) = data
            .split_first()
            .ok_or(NameAuctionError::InsufficientByteLength)?;
        let tag = InstructionTag::try_from(tag)?;
        if !tag.exists_in(version) {
            return Err(NameAuctionError::InvalidInstructionTag);
        }

        let mut src = Unpacker::new(rest);
        let legacy = version == ProtocolVersion::Legacy;
        let instruction = match tag {
            InstructionTag::Init => Self::Init(InitInstructionData::unpack_from(&mut src)?),
            InstructionTag::CreateAuction if legacy => {
                Self::LegacyCreateAuction(LegacyCreateAuctionInstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::CreateAuction => {
                Self::CreateAuction(CreateAuctionInstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::Claim if legacy => {
                Self::LegacyClaim(LegacyClaimInstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::Claim => Self::Claim(ClaimInstructionData::unpack_from(&mut src)?),
            InstructionTag::Resell if legacy => {
                Self::LegacyResell(LegacyResellInstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::Resell => Self::Resell(ResellInstructionData::unpack_from(&mut src)?),
            InstructionTag::CreateReverse => {
                Self::CreateReverse(CreateReverseInstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::EndAuction => {
                Self::EndAuction(EndAuctionInstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::CreateV2 => {
                Self::CreateV2(CreateV2InstructionData::unpack_from(&mut src)?)
            }
            InstructionTag::TakeBack => Self::TakeBack,
        };
        src.finish()?;

        Ok(instruction)
    }
}

/// A complete request for one program instruction: the accounts it touches and its data.
#[derive(Clone, Debug)]
pub enum Operation {
    Init {
        accounts: Init,
        data: InitInstructionData,
    },
    CreateAuction {
        accounts: CreateAuction,
        data: CreateAuctionInstructionData,
    },
    LegacyCreateAuction {
        accounts: LegacyCreateAuction,
        data: LegacyCreateAuctionInstructionData,
    },
    Claim {
        accounts: Claim,
        data: ClaimInstructionData,
    },
    LegacyClaim {
        accounts: LegacyClaim,
        data: LegacyClaimInstructionData,
    },
    Resell {
        accounts: Resell,
        data: ResellInstructionData,
    },
    /// Shares the [`Resell`] account list, minus the buy now tail.
    LegacyResell {
        accounts: Resell,
        data: LegacyResellInstructionData,
    },
    CreateReverse {
        accounts: CreateReverse,
        data: CreateReverseInstructionData,
    },
    EndAuction {
        accounts: EndAuction,
        data: EndAuctionInstructionData,
    },
    CreateV2 {
        accounts: CreateV2,
        data: CreateV2InstructionData,
    },
    TakeBack {
        accounts: TakeBack,
    },
}

impl Operation {
    pub fn instruction_data(&self) -> NameAuctionInstruction {
        match self {
            Self::Init { data, .. } => NameAuctionInstruction::Init(data.clone()),
            Self::CreateAuction { data, .. } => NameAuctionInstruction::CreateAuction(data.clone()),
            Self::LegacyCreateAuction { data, .. } => {
                NameAuctionInstruction::LegacyCreateAuction(data.clone())
            }
            Self::Claim { data, .. } => NameAuctionInstruction::Claim(data.clone()),
            Self::LegacyClaim { data, .. } => NameAuctionInstruction::LegacyClaim(data.clone()),
            Self::Resell { data, .. } => NameAuctionInstruction::Resell(data.clone()),
            Self::LegacyResell { data, .. } => NameAuctionInstruction::LegacyResell(data.clone()),
            Self::CreateReverse { data, .. } => NameAuctionInstruction::CreateReverse(data.clone()),
            Self::EndAuction { data, .. } => NameAuctionInstruction::EndAuction(data.clone()),
            Self::CreateV2 { data, .. } => NameAuctionInstruction::CreateV2(data.clone()),
            Self::TakeBack { .. } => NameAuctionInstruction::TakeBack,
        }
    }

    /// Checks the caller-composed parts of the operation that the program would otherwise reject:
    /// the optional account tails.
    pub fn validate(&self) -> Result<(), NameAuctionError> {
        match self {
            Self::CreateReverse { accounts, .. } => accounts.validate(),
            Self::LegacyResell { accounts, .. } if accounts.buy_now.is_some() => {
                Err(NameAuctionError::UnsupportedProtocolVersion)
            }
            _ => Ok(()),
        }
    }
}

/// The tagged instruction payload of `operation`.
pub fn encode(operation: &Operation) -> Result<Vec<u8>, NameAuctionError> {
    operation.validate()?;
    Ok(operation.instruction_data().pack())
}

/// The ordered account metas of `operation`, optional tail accounts included.
pub fn accounts(operation: &Operation) -> Result<Vec<AccountMeta>, NameAuctionError> {
    operation.validate()?;
    let metas = match operation {
        Operation::Init { accounts, .. } => accounts.create_account_metas(),
        Operation::CreateAuction { accounts, .. } => accounts.create_account_metas(),
        Operation::LegacyCreateAuction { accounts, .. } => accounts.create_account_metas(),
        Operation::Claim { accounts, .. } => accounts.create_account_metas(),
        Operation::LegacyClaim { accounts, .. } => accounts.create_account_metas(),
        Operation::Resell { accounts, .. } | Operation::LegacyResell { accounts, .. } => {
            accounts.create_account_metas()
        }
        Operation::CreateReverse { accounts, .. } => accounts.create_account_metas()?,
        Operation::EndAuction { accounts, .. } => accounts.create_account_metas(),
        Operation::CreateV2 { accounts, .. } => accounts.create_account_metas(),
        Operation::TakeBack { accounts } => accounts.create_account_metas(),
    };
    Ok(metas)
}

/// Builds the program instruction for `operation` against the deployment in `config`.
///
/// Fails without encoding anything if the operation is malformed or doesn't exist in the
/// configured protocol version.
pub fn build_instruction(
    operation: &Operation,
    config: &ProgramConfig,
) -> Result<Instruction, NameAuctionError> {
    if !operation.instruction_data().is_supported_in(config.version) {
        return Err(NameAuctionError::UnsupportedProtocolVersion);
    }
    let accounts = accounts(operation)?;
    let data = encode(operation)?;

    Ok(Instruction {
        program_id: config.program_id,
        accounts,
        data,
    })
}
