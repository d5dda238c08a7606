use crate::base::ParamConsolidation;
use plotpy::linspace;
use russell_lab::math::PI;

/// Number of terms of the truncated series (empirically sufficient for t ≥ 0.001)
const NTERM: usize = 499;

/// Solution of Terzaghi's one-dimensional consolidation problem
///
/// A saturated column of height h is loaded at the top at time zero; the top
/// boundary is drained and the bottom is impermeable. With the normalized
/// depth z ∈ [0, 1] measured from the top (z = 0 at the impermeable base,
/// z = 1 at the drained surface) and the dimensionless time t = Cv·time/h²,
/// the pore-pressure ratio is the truncated Fourier series:
///
/// ```text
///  pf      499  4   (-1)^(k-1)      ⎛ (2k-1) π   ⎞      ⎛  (2k-1)² π²   ⎞
///  ── =    Σ    ─ · ────────── · cos⎜ ──────── z ⎟ · exp⎜ - ────────  t ⎟
///  p0     k=1   π     2k - 1        ⎝    2       ⎠      ⎝      4        ⎠
/// ```
///
/// ```text
///      load
///   ↓↓↓↓↓↓↓↓↓
///   ~~~~~~~~~  ← drained surface (z = 1, pf = 0)
///   :::::::::
///   :::::::::    saturated porous column
///   :::::::::
///   #########  ← impermeable base (z = 0)
/// ```
///
/// # Reference
///
/// 1. Verruijt A (2013) Theory and Problems of Poroelasticity,
///    Delft University of Technology, 266p
pub struct Consolidation1d {
    /// The reference (initial excess) pressure used to normalize numerical results
    p0: f64,
}

impl Consolidation1d {
    /// Allocates a new instance from the physical parameters
    pub fn new(param: &ParamConsolidation) -> Self {
        Consolidation1d {
            p0: param.initial_pressure(),
        }
    }

    /// Returns the reference pressure p0
    pub fn p0(&self) -> f64 {
        self.p0
    }

    /// Calculates the pore-pressure ratio pf/p0 at normalized depth z and dimensionless time t
    ///
    /// The summation order is fixed (ascending k) so that repeated runs are bit-for-bit equal.
    pub fn pressure_ratio(&self, z: f64, t: f64) -> f64 {
        let mut res = 0.0;
        for k in 1..=NTERM {
            let m = 2.0 * (k as f64) - 1.0;
            let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
            res += 4.0 / PI * sign / m * f64::cos(m * PI / 2.0 * z) * f64::exp(-m * m * PI * PI / 4.0 * t);
        }
        res
    }

    /// Calculates the pressure-ratio profile along the column at dimensionless time t
    ///
    /// # Input
    ///
    /// * `t` -- dimensionless time Cv·time/h²
    /// * `np` -- number of points along the depth
    ///
    /// # Output
    ///
    /// Returns `(pp, zz)` where:
    ///
    /// * `pp` -- `= pf/p0` is the pore-pressure ratio
    /// * `zz` -- `= z/h` is the normalized depth from the impermeable base
    pub fn get_pressure_profile(&self, t: f64, np: usize) -> (Vec<f64>, Vec<f64>) {
        let zz = linspace(0.0, 1.0, np);
        let pp: Vec<_> = zz.iter().map(|z| self.pressure_ratio(*z, t)).collect();
        (pp, zz)
    }

    /// Normalizes a sampled pore-pressure column by the reference pressure p0
    pub fn normalize_pressure(&self, pf: &[f64]) -> Vec<f64> {
        pf.iter().map(|p| p / self.p0).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Consolidation1d;
    use crate::base::{ParamConsolidation, DEFAULT_TEST_DIR};
    use plotpy::{Curve, Plot};
    use russell_lab::approx_eq;

    const SAVE_FIGURE: bool = false;

    #[test]
    fn pressure_ratio_works() {
        let ana = Consolidation1d::new(&ParamConsolidation::sample());

        // small time: pressure still near 1 away from the drained surface
        let early = ana.pressure_ratio(0.5, 0.001);
        assert!(early >= 0.99 && early <= 1.0);
        assert!(ana.pressure_ratio(0.0, 0.001) > 0.999);

        // drained surface: pf = 0 at any time
        approx_eq(ana.pressure_ratio(1.0, 0.001), 0.0, 1e-13);
        approx_eq(ana.pressure_ratio(1.0, 0.5), 0.0, 1e-15);

        // large time: mostly dissipated; the slowest mode decays as exp(-π²t/4)
        let (pp, _) = ana.get_pressure_profile(1.0, 11);
        for p in &pp {
            assert!(f64::abs(*p) < 0.11);
        }
        let (pp, _) = ana.get_pressure_profile(5.0, 11);
        for p in &pp {
            assert!(f64::abs(*p) < 0.01);
        }
    }

    #[test]
    fn pressure_ratio_matches_reference_values() {
        // reference values computed with 499 terms in double precision
        let ana = Consolidation1d::new(&ParamConsolidation::sample());
        approx_eq(ana.pressure_ratio(0.0, 0.1), 9.493053626844703e-1, 1e-12);
        approx_eq(ana.pressure_ratio(0.5, 0.1), 7.356513152441901e-1, 1e-12);
        approx_eq(ana.pressure_ratio(0.5, 0.5), 2.6218827557494284e-1, 1e-12);
        approx_eq(ana.pressure_ratio(0.9, 1.0), 1.6891331243017192e-2, 1e-12);
    }

    #[test]
    fn get_pressure_profile_works() {
        let ana = Consolidation1d::new(&ParamConsolidation::sample());
        let np = 5;
        let (pp, zz) = ana.get_pressure_profile(0.01, np);
        assert_eq!(pp.len(), np);
        assert_eq!(zz.len(), np);
        approx_eq(zz[0], 0.0, 1e-15);
        approx_eq(zz[np - 1], 1.0, 1e-15);
        approx_eq(pp[np - 1], 0.0, 1e-13);
        assert!(pp[0] > 0.99);

        if SAVE_FIGURE {
            let mut plot = Plot::new();
            for t in [0.001, 0.01, 0.05, 0.1, 0.5, 1.0] {
                let mut curve = Curve::new();
                curve.set_label(&format!("{}", t));
                let (pp, zz) = ana.get_pressure_profile(t, 101);
                curve.draw(&pp, &zz);
                plot.add(&curve);
            }
            plot.grid_labels_legend("$p_f/p_0$", "$z/h$")
                .set_title("Terzaghi's consolidation problem")
                .save(&format!("{}/consolidation1d_profiles.svg", DEFAULT_TEST_DIR))
                .unwrap();
        }
    }

    #[test]
    fn normalize_pressure_works() {
        let param = ParamConsolidation::sample();
        let ana = Consolidation1d::new(&param);
        let p0 = param.initial_pressure();
        let normalized = ana.normalize_pressure(&[0.0, p0 / 2.0, p0]);
        approx_eq(normalized[0], 0.0, 1e-15);
        approx_eq(normalized[1], 0.5, 1e-15);
        approx_eq(normalized[2], 1.0, 1e-15);
    }
}
