//! Terzaghi -- Verification of Terzaghi's one-dimensional consolidation problem
//!
//! This crate evaluates the closed-form series solution for the pore-pressure
//! dissipation in a saturated column under a suddenly applied load and compares
//! it with numerical results exported as CSV line samples.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod analytical;
pub mod base;
pub mod util;
