//! Lagrange Interpolation
//!
//! Implements global polynomial interpolation in the classical
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial).
//!
//! The interpolant through `n` nodes is the unique polynomial of degree
//! `<= n - 1` passing through all of them, assembled as
//! `P(x) = sum_k L_k(x) * y[k]` where `L_k` is 1 at `x[k]` and 0 at every
//! other node. Basis values are recomputed from scratch for every
//! evaluation point; no caching is needed at the node counts this method
//! is practical for.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two node `x` values;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
///
/// Unlike piecewise methods, node `x` values need not be sorted — only
/// pairwise distinct.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Evaluates the `k`-th Lagrange basis polynomial at `xq`.
///
/// ```text
/// L_k(xq) = prod_{i != k} (xq - x[i]) / (x[k] - x[i])
/// ```
///
/// By construction `L_k(x[k]) = 1` and `L_k(x[i]) = 0` for `i != k`.
/// Distinct node `x` values are a precondition, enforced when the
/// configuration is built; `k` must index into `x`.
#[inline]
pub fn basis(x: &[f64], k: usize, xq: f64) -> f64 {
    debug_assert!(k < x.len());

    let mut ell = 1.0;
    for (i, &xi) in x.iter().enumerate() {
        // skip i == k to avoid the zero denominator
        if i == k {
            continue;
        }
        ell *= (xq - xi) / (x[k] - xi);
    }

    ell
}

#[inline]
fn eval_at(x: &[f64], y: &[f64], xq: f64) -> f64 {
    let mut p = 0.0;
    for k in 0..x.len() {
        p += basis(x, k, xq) * y[k];
    }
    p
}


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Behavior
/// - For each evaluation point `xq` in `cfg.common.x_eval()`, accumulates
///
/// ```text
/// P(xq) = sum_k L_k(xq) * y[k]
/// ```
///
/// - Evaluation points are not bounds-checked: the interpolant is a global
///   polynomial, defined (if increasingly ill-behaved) outside the node
///   range as well.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - Any validation error from [`CommonCfg::validate`] if the configured
///   data is incomplete or mismatched.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let n_provided  = x.len();
    let n_evaluated = evals.len();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        n_provided,
        n_evaluated,
    );
    report.evaluated.reserve(n_evaluated);

    for &xq in evals {
        report.evaluated.push(eval_at(x, y, xq));
    }

    Ok(report)
}


/// A validated node set, evaluable anywhere via [`Interpolator`].
///
/// Borrow-only view over the configured nodes; [`LagrangePolynomial::fit`]
/// runs validation once so that per-point evaluation is infallible.
#[derive(Debug, Clone, Copy)]
pub struct LagrangePolynomial<'a> {
    x: &'a [f64],
    y: &'a [f64],
}

impl<'a> LagrangePolynomial<'a> {
    pub fn fit(cfg: LagrangeCfg<'a>) -> Result<Self, InterpolationError> {
        cfg.common.validate()?;
        Ok(Self { x: cfg.common.x(), y: cfg.common.y() })
    }

    /// polynomial degree bound: `n - 1` for `n` nodes
    pub fn degree(&self) -> usize {
        self.x.len() - 1
    }
}

impl Interpolator for LagrangePolynomial<'_> {
    fn eval(&self, xq: f64) -> Result<f64, InterpolationError> {
        Ok(eval_at(self.x, self.y, xq))
    }
}
