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

//! Vogel's approximation method.
//!
//! The *penalty* of a row (column) is the difference between the two
//! smallest costs among its eligible cells, i.e. the cells whose column
//! (row) still has remaining demand (supply). It is the regret of not
//! using the cheapest cell. In each step the line with the largest penalty
//! is chosen and its cheapest eligible cell receives as much as possible.
//!
//! Ties are broken in favor of rows, then in favor of smaller indices.

use super::{InitialStep, Penalties, Tableau};
use crate::allocation::Allocation;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::problem::Problem;

use either::Either::{self, Left, Right};
use log::{debug, trace};
use num_traits::{NumAssign, NumCast};

/// Compute an initial allocation with Vogel's approximation method.
///
/// The problem must be balanced. Remaining quantities of at most
/// [`tolerance`](crate::problem::tolerance) count as exhausted. Returns
/// [`Error::InitialStalled`] if quantity remains that cannot be allocated,
/// which happens only if total supply and demand do not match.
pub fn vogel<F>(problem: &Problem<F>) -> Result<(Allocation<F>, Vec<InitialStep<F>>)>
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    let costs = problem.costs();
    let mut tab = Tableau::new(problem);
    let mut penalties = compute_penalties(&tab, costs);
    tab.record(Some(penalties.clone()));

    let mut niter = 0;
    loop {
        let rows = (0..costs.num_rows()).filter(|&i| tab.has_supply(i)).collect::<Vec<_>>();
        let cols = (0..costs.num_cols()).filter(|&j| tab.has_demand(j)).collect::<Vec<_>>();
        if rows.is_empty() && cols.is_empty() {
            break;
        }

        let (i, j) = match max_penalty(&penalties) {
            Some(Left(i)) => (i, cheapest(cols.iter().map(|&j| (j, costs[(i, j)])))),
            Some(Right(j)) => (cheapest(rows.iter().map(|&i| (i, costs[(i, j)]))), j),
            None => {
                // No penalty can be computed, the only remaining
                // possibility is a single eligible cell.
                if rows.len() == 1 && cols.len() == 1 {
                    (rows[0], cols[0])
                } else {
                    return Err(Error::InitialStalled {
                        row: rows.first().copied(),
                        col: cols.first().copied(),
                    });
                }
            }
        };

        niter += 1;
        trace!("Vogel step {}: penalty line {:?}, cell ({},{})", niter, max_penalty(&penalties), i, j);
        tab.ship(i, j);
        penalties = compute_penalties(&tab, costs);
        tab.record(Some(penalties.clone()));
    }

    debug!("Vogel's method allocated {} cells in {} steps", tab.allocation.num_basic(), niter);

    Ok(tab.finish())
}

/// Compute the penalties of all rows and columns.
fn compute_penalties<F>(tab: &Tableau<F>, costs: &Matrix<F>) -> Penalties<F>
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    let nrows = costs.num_rows();
    let ncols = costs.num_cols();
    Penalties {
        rows: (0..nrows)
            .map(|i| {
                if tab.has_supply(i) {
                    penalty((0..ncols).filter(|&j| tab.has_demand(j)).map(|j| costs[(i, j)]))
                } else {
                    None
                }
            })
            .collect(),
        cols: (0..ncols)
            .map(|j| {
                if tab.has_demand(j) {
                    penalty((0..nrows).filter(|&i| tab.has_supply(i)).map(|i| costs[(i, j)]))
                } else {
                    None
                }
            })
            .collect(),
    }
}

/// The difference between the second smallest and the smallest value.
///
/// Returns `None` if there are less than two values.
fn penalty<F, I>(costs: I) -> Option<F>
where
    F: NumAssign + PartialOrd + Copy,
    I: Iterator<Item = F>,
{
    let mut first: Option<F> = None;
    let mut second: Option<F> = None;
    for c in costs {
        match first {
            Some(f) if c < f => {
                second = first;
                first = Some(c);
            }
            Some(_) => {
                if second.map(|s| c < s).unwrap_or(true) {
                    second = Some(c);
                }
            }
            None => first = Some(c),
        }
    }
    match (first, second) {
        (Some(f), Some(s)) => Some(s - f),
        _ => None,
    }
}

/// Return the line with the largest penalty.
///
/// Rows take precedence over columns with the same penalty.
fn max_penalty<F>(penalties: &Penalties<F>) -> Option<Either<usize, usize>>
where
    F: PartialOrd + Copy,
{
    let rows = penalties.rows.iter().enumerate().map(|(i, &p)| (Left(i), p));
    let cols = penalties.cols.iter().enumerate().map(|(j, &p)| (Right(j), p));
    let mut best: Option<(Either<usize, usize>, F)> = None;
    for (line, p) in rows.chain(cols) {
        if let Some(p) = p {
            if best.map(|(_, q)| p > q).unwrap_or(true) {
                best = Some((line, p));
            }
        }
    }
    best.map(|(line, _)| line)
}

/// Return the index of the cheapest cell, the first one on ties.
fn cheapest<F, I>(cells: I) -> usize
where
    F: PartialOrd + Copy,
    I: Iterator<Item = (usize, F)>,
{
    let mut best: Option<(usize, F)> = None;
    for (k, c) in cells {
        if best.map(|(_, b)| c < b).unwrap_or(true) {
            best = Some((k, c));
        }
    }
    // a line with a penalty has at least two eligible cells
    best.map(|(k, _)| k).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{max_penalty, penalty, vogel};
    use crate::error::Error;
    use crate::initial::{northwest_corner, Penalties};
    use crate::Problem;
    use either::Either::{Left, Right};

    #[test]
    fn test_penalty() {
        assert_eq!(penalty(vec![4, 2, 7].into_iter()), Some(2));
        assert_eq!(penalty(vec![3, 3, 9].into_iter()), Some(0));
        assert_eq!(penalty(vec![9, 3, 3].into_iter()), Some(0));
        assert_eq!(penalty(vec![5].into_iter()), None);
        assert_eq!(penalty(Vec::<i32>::new().into_iter()), None);
    }

    #[test]
    fn test_max_penalty_prefers_rows() {
        let p = Penalties {
            rows: vec![Some(1), Some(3), None],
            cols: vec![Some(3), None],
        };
        assert_eq!(max_penalty(&p), Some(Left(1)));

        let p = Penalties {
            rows: vec![Some(1), None],
            cols: vec![Some(0), Some(2), Some(2)],
        };
        assert_eq!(max_penalty(&p), Some(Right(1)));

        let p: Penalties<i32> = Penalties {
            rows: vec![None],
            cols: vec![None],
        };
        assert_eq!(max_penalty(&p), None);
    }

    #[test]
    fn test_vogel() {
        let p = Problem::from_rows(
            vec![vec![3, 2, 7, 6], vec![7, 5, 2, 3], vec![2, 5, 4, 5]],
            vec![5000, 6000, 2500],
            vec![6000, 4000, 2000, 1500],
        )
        .unwrap();
        let (alloc, trace) = vogel(&p).unwrap();
        assert_eq!(
            alloc.quantities().to_rows(),
            vec![vec![1000, 4000, 0, 0], vec![2500, 0, 2000, 1500], vec![2500, 0, 0, 0]]
        );
        assert_eq!(alloc.cost(p.costs()), 42000);

        let (nw, _) = northwest_corner(&p);
        assert!(alloc.cost(p.costs()) <= nw.cost(p.costs()));

        let first = trace[0].penalties.as_ref().unwrap();
        assert_eq!(first.rows, vec![Some(1), Some(1), Some(2)]);
        assert_eq!(first.cols, vec![Some(1), Some(3), Some(2), Some(2)]);

        let last = trace.last().unwrap().penalties.as_ref().unwrap();
        assert!(last.rows.iter().chain(last.cols.iter()).all(Option::is_none));
    }

    #[test]
    fn test_textbook() {
        let p = Problem::from_rows(
            vec![vec![19, 30, 50, 10], vec![70, 30, 40, 60], vec![40, 8, 70, 20]],
            vec![7, 9, 18],
            vec![5, 8, 7, 14],
        )
        .unwrap();
        let (alloc, _) = vogel(&p).unwrap();
        assert_eq!(
            alloc.quantities().to_rows(),
            vec![vec![5, 0, 0, 2], vec![0, 0, 7, 2], vec![0, 8, 0, 10]]
        );
        assert_eq!(alloc.cost(p.costs()), 779);
    }

    #[test]
    fn test_float_residue() {
        // 0.1 + 0.2 leaves a tiny residue after shipping 0.1 and 0.2.
        let p: Problem<f64> = Problem::from_rows(vec![vec![0.3, 0.6]], vec![0.1 + 0.2], vec![0.1, 0.2]).unwrap();
        let (alloc, trace) = vogel(&p).unwrap();
        assert_eq!(alloc.num_basic(), 2);
        assert!((alloc.cost(p.costs()) - 0.15).abs() < 1e-12);
        let last = trace.last().unwrap();
        assert!(last.supply.iter().chain(last.demand.iter()).all(|&x| x == 0.0));
    }

    #[test]
    fn test_stalled() {
        let p = Problem::from_rows(vec![vec![1, 2]], vec![4], vec![1, 2]).unwrap();
        assert_eq!(
            vogel(&p),
            Err(Error::InitialStalled {
                row: Some(0),
                col: None
            })
        );
    }
}
