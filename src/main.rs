//! Prints the Lagrange interpolant through 10 fixed nodes on [0, 1],
//! sampled at 100 equally spaced points.

use brook::interpolation::errors::InterpolationError;
use brook::interpolation::lagrange::{interpolate, LagrangeCfg};
use brook::interpolation::table;

const N_SAMPLES: usize = 100;

const NODE_X: [f64; 10] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9];
const NODE_Y: [f64; 10] = [2.3, 4.5, 4.3, 4.1, 6.7, 6.5, 6.2, 10.5, 10.2, 9.8];

fn main() -> Result<(), InterpolationError> {
    let samples: Vec<f64> = (0..N_SAMPLES).map(|i| i as f64 * 0.01).collect();

    let cfg = LagrangeCfg::new()
        .set_x(&NODE_X)?
        .set_y(&NODE_Y)?
        .set_x_eval(&samples)?;

    let report = interpolate(cfg)?;

    print!("{}", table::render(&samples, &report.evaluated));
    Ok(())
}
