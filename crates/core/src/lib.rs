//! Domain layer for the tally budget service.
//!
//! Holds the pieces with no HTTP or storage dependencies: shared ID types,
//! the domain error enum, and the stateless budget calculation.

pub mod calc;
pub mod error;
pub mod types;
