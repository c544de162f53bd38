//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial)
//! with a nearest-center evaluation strategy: each query is expanded from
//! the table row of the sample node closest to it, clamped so the
//! accumulation never leaves the valid triangle.

use crate::interpolation::centering::{clamp_centering_index, nearest_index};
use crate::interpolation::config::NewtonCfg;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::table::DividedDifferenceTable;
use crate::interpolation::traits::Interpolator;

/// A fitted Newton-form polynomial over borrowed sample data.
///
/// # Construction
/// - Use [`NewtonPolynomial::fit`] with a validated [`NewtonCfg`].
///
/// # Degree
/// - The requested degree is clamped to `n - 1` at fit time, so asking
///   for degree 15 over 11 samples behaves exactly like degree 10.
#[derive(Debug, Clone)]
pub struct NewtonPolynomial<'a> {
    x: &'a [f64],
    table: DividedDifferenceTable,
    degree: usize,
}

impl<'a> NewtonPolynomial<'a> {
    /// Builds the divided-difference table and fixes the working degree.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set
    /// - [`InterpolationError::UnequalLength`] on mismatched data
    /// - [`InterpolationError::DuplicateX`] from table construction
    pub fn fit(cfg: NewtonCfg<'a>) -> Result<Self, InterpolationError> {
        let x = cfg.x();
        let y = cfg.y();

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let table  = DividedDifferenceTable::build(x, y, cfg.x_min_spacing())?;
        let degree = cfg.degree().min(x.len() - 1);

        Ok(Self { x, table, degree })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn table(&self) -> &DividedDifferenceTable {
        &self.table
    }
}

impl Interpolator for NewtonPolynomial<'_> {
    /// Nearest-center Newton evaluation.
    ///
    /// ```text
    /// c = clamp(nearest node to xq)
    /// y = table[c][0]
    /// p = 1
    /// for k in 1..=degree { p *= xq - x[c + k - 1]; y += table[c][k] * p }
    /// ```
    fn eval(&self, xq: f64) -> f64 {
        let n = self.x.len();
        let c = clamp_centering_index(nearest_index(self.x, xq), n, self.degree);

        let mut y = self.table.entry(c, 0);
        let mut p = 1.0;
        for k in 1..=self.degree {
            p *= xq - self.x[c + k - 1];
            y += self.table.entry(c, k) * p;
        }

        y
    }
}

/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Fits a [`NewtonPolynomial`] from the configured sample data.
/// - Evaluates it at every point of `cfg.x_eval()`. Query points outside
///   the sample range are legal; the centering clamp keeps the
///   accumulation in bounds, so no out-of-range error exists.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `degree`      : the clamped degree actually used
/// - `n_provided`  : number of (x, y) data points
/// - `n_evaluated` : number of evaluation points
/// - `evaluated`   : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
///   on missing or mismatched data
/// - [`InterpolationError::DuplicateX`] from table construction
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    let poly  = NewtonPolynomial::fit(cfg)?;
    let evals = cfg.x_eval();

    let mut report = InterpolationReport::new(
        poly.degree(),
        cfg.x().len(),
        evals.len(),
    );
    report.evaluated.reserve(evals.len());

    for &xq in evals {
        report.evaluated.push(poly.eval(xq));
    }

    Ok(report)
}
