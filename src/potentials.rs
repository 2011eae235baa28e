/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Dual potentials and reduced costs.
//!
//! The potentials `u` (rows) and `v` (columns) satisfy `cost[i][j] = u[i] +
//! v[j]` on every basic cell. The reduced cost (delta) of a non-basic cell
//! is `cost[i][j] - u[i] - v[j]`; the allocation is optimal if no delta is
//! negative.

use crate::allocation::Allocation;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

use either::Either::{self, Left, Right};
use num_traits::{NumAssign, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Row and column potentials.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Potentials<F> {
    /// The row potentials, `None` if unknown.
    pub u: Vec<Option<F>>,
    /// The column potentials, `None` if unknown.
    pub v: Vec<Option<F>>,
}

impl<F> Potentials<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// Compute the potentials of an independent, non-degenerate basis.
    ///
    /// The row or column with the most basic cells is anchored at zero (rows
    /// first on ties). The remaining potentials are derived from the basic
    /// cells by back-substitution.
    ///
    /// Returns [`Error::InconsistentPotentials`] if some potential cannot be
    /// determined, which means the basis is not connected.
    pub fn compute(allocation: &Allocation<F>, costs: &Matrix<F>) -> Result<Self> {
        let nrows = allocation.num_rows();
        let ncols = allocation.num_cols();
        let mut u = vec![None; nrows];
        let mut v = vec![None; ncols];

        match anchor(allocation) {
            Some(Left(i)) => u[i] = Some(F::zero()),
            Some(Right(j)) => v[j] = Some(F::zero()),
            None => return Ok(Potentials { u, v }),
        }

        let basic = allocation.basic_cells().collect::<Vec<_>>();
        let mut nknown = 1;
        for _ in 0..nrows + ncols {
            if nknown == nrows + ncols {
                break;
            }
            let mut changed = false;
            for &(i, j) in &basic {
                match (u[i], v[j]) {
                    (Some(ui), None) => {
                        v[j] = Some(costs[(i, j)] - ui);
                        nknown += 1;
                        changed = true;
                    }
                    (None, Some(vj)) => {
                        u[i] = Some(costs[(i, j)] - vj);
                        nknown += 1;
                        changed = true;
                    }
                    _ => (),
                }
            }
            if !changed {
                break;
            }
        }

        if nknown < nrows + ncols {
            return Err(Error::InconsistentPotentials);
        }

        Ok(Potentials { u, v })
    }

    /// Return the reduced costs of all non-basic cells.
    ///
    /// Basic cells and cells with an unknown potential get `None`.
    pub fn deltas(&self, allocation: &Allocation<F>, costs: &Matrix<F>) -> Matrix<Option<F>> {
        Matrix::from_fn(allocation.num_rows(), allocation.num_cols(), |i, j| {
            if allocation.is_basic(i, j) {
                None
            } else {
                match (self.u[i], self.v[j]) {
                    (Some(ui), Some(vj)) => Some(costs[(i, j)] - ui - vj),
                    _ => None,
                }
            }
        })
    }
}

/// Return the line with the most basic cells.
fn anchor<F>(allocation: &Allocation<F>) -> Option<Either<usize, usize>>
where
    F: NumAssign + PartialOrd + Copy,
{
    let nrows = allocation.num_rows();
    let ncols = allocation.num_cols();
    let row_counts = (0..nrows).map(|i| (0..ncols).filter(|&j| allocation.is_basic(i, j)).count());
    let col_counts = (0..ncols).map(|j| (0..nrows).filter(|&i| allocation.is_basic(i, j)).count());

    let mut best: Option<(Either<usize, usize>, usize)> = None;
    for (line, cnt) in row_counts
        .enumerate()
        .map(|(i, c)| (Left(i), c))
        .chain(col_counts.enumerate().map(|(j, c)| (Right(j), c)))
    {
        if best.map(|(_, b)| cnt > b).unwrap_or(true) {
            best = Some((line, cnt));
        }
    }

    best.map(|(line, _)| line)
}

/// Return the non-basic cell with the most negative reduced cost.
///
/// Only deltas below `-zero` are considered. Ties are broken in row-major
/// order. Returns `None` if the allocation is optimal.
pub fn entering_cell<F>(deltas: &Matrix<Option<F>>, zero: F) -> Option<((usize, usize), F)>
where
    F: NumAssign + PartialOrd + Copy + Signed,
{
    let mut best = None;
    let mut min_delta = -zero;
    for (pos, &d) in deltas.iter() {
        if let Some(d) = d {
            if d < min_delta {
                min_delta = d;
                best = Some((pos, d));
            }
        }
    }
    best
}
