//! Wire DTOs for the intake endpoints.

pub mod checkout_dto;
pub mod interest_dto;

pub use checkout_dto::{CheckoutRequest, CheckoutResponse};
pub use interest_dto::{InterestAckResponse, InterestCountResponse, InterestRequest};
