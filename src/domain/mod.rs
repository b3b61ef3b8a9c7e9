//! Pure domain types and logic: mentions, de-duplication, trust scoring,
//! reviews and aggregate stats. No I/O lives here.

pub mod mention;
pub mod review;
pub mod stats;
pub mod trust;
pub mod types;
