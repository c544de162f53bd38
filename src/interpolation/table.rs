//! Divided-difference table construction.
//!
//! Implements the standard recurrence
//!
//! ```text
//! table[i][0] = y[i]
//! table[i][j] = (table[i+1][j-1] - table[i][j-1]) / (x[i+j] - x[i])
//! ```
//!
//! Column `j` is computed only after column `j - 1` is complete, since
//! each entry reads an adjacent pair of the previous column. Only entries
//! with `i + j < n` are meaningful; the rest of the dense grid is never
//! read.

use crate::interpolation::errors::InterpolationError;

/// Triangular table of Newton divided differences.
///
/// Flat row-major `n x n` storage; `entry(i, 0)` holds the raw ordinates
/// and `entry(i, j)` the `j`-th order difference starting at row `i`.
/// Built once, read-only afterward.
#[derive(Debug, Clone)]
pub struct DividedDifferenceTable {
    n: usize,
    entries: Vec<f64>,
}

impl DividedDifferenceTable {
    /// Builds the table column by column.
    ///
    /// Every denominator is checked against `x_min_spacing`, so duplicate
    /// or near-duplicate abscissas fail construction here even when the
    /// slices did not pass through [`NewtonCfg::set_x`].
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] on empty slices
    /// - [`InterpolationError::UnequalLength`] on mismatched lengths
    /// - [`InterpolationError::DuplicateX`] when `|x[i+j] - x[i]|` falls
    ///   below `x_min_spacing`
    ///
    /// [`NewtonCfg::set_x`]: crate::interpolation::config::NewtonCfg::set_x
    pub fn build(
        x: &[f64],
        y: &[f64],
        x_min_spacing: f64,
    ) -> Result<Self, InterpolationError> {
        let n = x.len();
        if n == 0 || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if y.len() != n {
            return Err(InterpolationError::UnequalLength { x_len: n, y_len: y.len() });
        }

        let mut entries = vec![0.0; n * n];
        for i in 0..n {
            entries[i * n] = y[i];
        }

        for j in 1..n {
            for i in 0..n - j {
                let dx = x[i + j] - x[i];
                if dx.abs() < x_min_spacing {
                    return Err(InterpolationError::DuplicateX {
                        x1: x[i],
                        x2: x[i + j],
                    });
                }
                let hi = entries[(i + 1) * n + (j - 1)];
                let lo = entries[i * n + (j - 1)];
                entries[i * n + j] = (hi - lo) / dx;
            }
        }

        Ok(Self { n, entries })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// `j`-th order difference starting at row `i`. Valid for `i + j < n`.
    #[inline]
    pub fn entry(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i + j < self.n, "entry ({i}, {j}) outside the valid triangle");
        self.entries[i * self.n + j]
    }
}
