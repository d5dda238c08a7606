use plotpy::{Curve, Plot};
use terzaghi::analytical::Consolidation1d;
use terzaghi::base::{ParamConsolidation, DEFAULT_DATA_DIR, DEFAULT_OUT_DIR};
use terzaghi::util::{read_numerical_solution, DIMENSIONLESS_TIMES};
use terzaghi::StrError;

fn main() -> Result<(), StrError> {
    // physical parameters and analytical solution
    let param = ParamConsolidation::sample();
    let ana = Consolidation1d::new(&param);

    // allocate new plot
    let mut plot = Plot::new();

    // run for each dimensionless time
    for t in DIMENSIONLESS_TIMES {
        // analytical curve (solid line)
        let mut curve_ana = Curve::new();
        curve_ana.set_label(&format!("{}", t)).set_line_width(1.0).set_line_color("#1f77b4");
        let (pp, zz) = ana.get_pressure_profile(t, 100);
        curve_ana.draw(&pp, &zz);
        plot.add(&curve_ana);

        // numerical results (markers only)
        let (zz_num, pp_num) = read_numerical_solution(DEFAULT_DATA_DIR, t, ana.p0())?;
        let mut curve_num = Curve::new();
        curve_num
            .set_line_style("None")
            .set_marker_style("o")
            .set_marker_size(4.0)
            .set_marker_color("black");
        curve_num.draw(&pp_num, &zz_num);
        plot.add(&curve_num);
    }

    // save figure
    plot.grid_and_labels("$p_f/p_0$", "$z/h$")
        .set_title("Terzaghi's consolidation problem")
        .set_figure_size_points(600.0, 500.0)
        .save(&format!("{}/terzaghi.png", DEFAULT_OUT_DIR))?;
    Ok(())
}
