use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the physical parameters of the poroelastic column
///
/// The set is fixed at construction time; all derived scalars are computed
/// from these inputs and never cached or mutated.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ParamConsolidation {
    /// Height of the column (thickness of the consolidating layer)
    pub height: f64,

    /// Porosity φ
    pub porosity: f64,

    /// Intrinsic permeability k
    pub permeability: f64,

    /// Fluid dynamic viscosity μ
    pub viscosity: f64,

    /// Fluid bulk modulus Kf
    pub bulk_fluid: f64,

    /// Solid grains bulk modulus Ks
    pub bulk_solid: f64,

    /// Drained bulk modulus K
    pub bulk_drained: f64,

    /// Shear modulus G
    pub shear: f64,
}

impl ParamConsolidation {
    /// Returns the parameter set of the verification problem
    pub fn sample() -> Self {
        ParamConsolidation {
            height: 10.0,
            porosity: 0.1,
            permeability: 1.5,
            viscosity: 1.0,
            bulk_fluid: 8.0,
            bulk_solid: 10.0,
            bulk_drained: 4.0,
            shear: 3.0,
        }
    }

    /// Calculates the Biot coefficient α = 1 - K/Ks
    pub fn alpha(&self) -> f64 {
        1.0 - self.bulk_drained / self.bulk_solid
    }

    /// Calculates the storage coefficient S = φ/Kf + (α - φ)/Ks
    pub fn storage(&self) -> f64 {
        self.porosity / self.bulk_fluid + (self.alpha() - self.porosity) / self.bulk_solid
    }

    /// Calculates the constrained compressibility mv = 1/(K + 4G/3)
    pub fn compressibility_mv(&self) -> f64 {
        1.0 / (self.bulk_drained + 4.0 / 3.0 * self.shear)
    }

    /// Calculates the consolidation coefficient Cv = k/(μ (S + α² mv))
    pub fn coefficient_cv(&self) -> f64 {
        let mv = self.compressibility_mv();
        let alpha = self.alpha();
        self.permeability / (self.viscosity * (self.storage() + alpha * alpha * mv))
    }

    /// Calculates the reference (initial excess) pressure p0 = α mv/(S + α² mv)
    pub fn initial_pressure(&self) -> f64 {
        let mv = self.compressibility_mv();
        let alpha = self.alpha();
        alpha * mv / (self.storage() + alpha * alpha * mv)
    }

    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let param = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(param)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
