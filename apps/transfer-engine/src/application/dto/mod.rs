//! Data transfer objects for the transport boundary.

mod transfer_dto;

pub use transfer_dto::{TransferRequestDto, TransferResultDto};
