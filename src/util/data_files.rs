use super::ColumnTable;
use crate::StrError;
use std::path::Path;

/// The dimensionless times Cv·t/h² at which the simulation exported line samples
pub const DIMENSIONLESS_TIMES: [f64; 6] = [0.001, 0.01, 0.05, 0.1, 0.5, 1.0];

/// Binds each dimensionless time to the CSV file exported at that time
const TIME_TO_FILENAME: [(f64, &str); 6] = [
    (0.001, "terzaghi_csv_line_pf_0010.csv"),
    (0.01, "terzaghi_csv_line_pf_0100.csv"),
    (0.05, "terzaghi_csv_line_pf_0141.csv"),
    (0.1, "terzaghi_csv_line_pf_0191.csv"),
    (0.5, "terzaghi_csv_line_pf_0232.csv"),
    (1.0, "terzaghi_csv_line_pf_0282.csv"),
];

/// Returns the name of the CSV file bound to a dimensionless time
///
/// Every known time maps to exactly one file; an unmapped time is an error.
pub fn consolidation_csv_filename(t: f64) -> Result<&'static str, StrError> {
    TIME_TO_FILENAME
        .iter()
        .find(|(time, _)| *time == t)
        .map(|(_, filename)| *filename)
        .ok_or("unknown dimensionless time: no data file is bound to this value")
}

/// Reads the numerical solution exported at a dimensionless time
///
/// # Input
///
/// * `dir` -- the directory holding the exported CSV files
/// * `t` -- the dimensionless time (must be one of [DIMENSIONLESS_TIMES])
/// * `p0` -- the reference pressure used to normalize the sampled column
///
/// # Output
///
/// Returns `(zz, pp)` where:
///
/// * `zz` -- `= z/h` is the normalized depth of each sample
/// * `pp` -- `= pf/p0` is the normalized pore pressure of each sample
pub fn read_numerical_solution(dir: &str, t: f64, p0: f64) -> Result<(Vec<f64>, Vec<f64>), StrError> {
    let filename = consolidation_csv_filename(t)?;
    let path = Path::new(dir).join(filename);
    let table = ColumnTable::read(&path, Some(&["z", "pf"]))?;
    let zz = table.get("z")?.clone();
    let pp: Vec<_> = table.get("pf")?.iter().map(|pf| pf / p0).collect();
    Ok((zz, pp))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
