//! Birthday scheduling utilities.
//!
//! Pure date functions used to find when a birthday next comes around and
//! on which working day the contact should be congratulated.

pub mod occurrence;
pub mod rollover;

pub use occurrence::{days_until, next_occurrence};
pub use rollover::{adjust_for_weekend, is_weekend, next_weekday_on_or_after};
