//! Core domain types: ticket tiers, interest records, and money handling.

pub mod interest;
pub mod money;
pub mod ticket;

pub use interest::{InterestRecord, InterestSubmission, InterestType, UpsertOutcome};
pub use ticket::TicketTier;
