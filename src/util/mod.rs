//! Contains utility structures to read the simulation output files

mod column_table;
mod data_files;
pub use crate::util::column_table::*;
pub use crate::util::data_files::*;
