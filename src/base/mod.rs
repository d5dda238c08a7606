//! Implements the base structures: physical parameters and constants

mod constants;
mod parameters;
pub use crate::base::constants::*;
pub use crate::base::parameters::*;
