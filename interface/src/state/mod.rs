//! Account state records owned by the name auction program, the naming service, and the auction
//! program, decoded from raw account data.

pub mod auction_data;
pub mod bidder_pot;
pub mod central_state;
pub mod name_auction;
pub mod name_record;
pub mod reselling_state;
pub mod reverse_lookup;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const ADDRESS_SIZE: usize = 32;
