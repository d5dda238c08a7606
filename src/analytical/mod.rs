//! This module contains the analytical solution used to verify the simulation results

mod consolidation1d;
pub use crate::analytical::consolidation1d::*;
