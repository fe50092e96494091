//! Compact difficulty encoding and proof-of-work target checks.

pub mod difficulty;
pub mod validation;
