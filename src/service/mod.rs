//! Business logic: interest registration and checkout initiation.

pub mod checkout;
pub mod interest;

pub use checkout::CheckoutService;
pub use interest::InterestService;
