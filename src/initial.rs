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

//! Initial feasible allocations.
//!
//! All methods fill the allocation greedily: each step ships as much as
//! possible on one cell, i.e. the minimum of the remaining supply of its
//! row and the remaining demand of its column. The methods differ in the
//! choice of that cell.
//!
//! - [`northwest`]: walk from the top-left to the bottom-right corner,
//! - [`vogel`]: Vogel's approximation, choose by regret penalties,
//! - [`leastcost`]: choose the cheapest remaining cell.
//!
//! # Example
//!
//! ```
//! use rs_transport::{solve_initial, Problem, Strategy};
//!
//! let problem = Problem::from_rows(
//!     vec![vec![12, 13, 4, 6], vec![6, 4, 10, 11], vec![10, 9, 12, 4]],
//!     vec![500, 700, 800],
//!     vec![400, 900, 200, 500],
//! )
//! .unwrap();
//!
//! let (alloc, trace) = solve_initial(&problem, Strategy::NorthwestCorner).unwrap();
//! assert_eq!(
//!     alloc.quantities().to_rows(),
//!     vec![vec![400, 100, 0, 0], vec![0, 700, 0, 0], vec![0, 100, 200, 500]]
//! );
//! assert_eq!(alloc.cost(problem.costs()), 14200);
//! assert_eq!(trace.len(), 7);
//!
//! let (alloc, _) = solve_initial(&problem, Strategy::Vogel).unwrap();
//! assert_eq!(alloc.cost(problem.costs()), 12000);
//! ```

pub mod leastcost;
pub mod northwest;
pub mod vogel;

pub use self::leastcost::least_cost;
pub use self::northwest::northwest_corner;
pub use self::vogel::vogel;

use crate::allocation::Allocation;
use crate::error::{Error, Result};
use crate::problem::{tolerance, Problem};

use num_traits::{NumAssign, NumCast};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Method for computing an initial allocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Northwest-Corner rule.
    NorthwestCorner,
    /// Vogel's approximation method.
    Vogel,
    /// Least-Cost rule.
    LeastCost,
}

/// Row and column penalties of Vogel's method.
///
/// `None` marks a row or column for which no penalty can be computed
/// because it is exhausted or has fewer than two eligible cells.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Penalties<F> {
    pub rows: Vec<Option<F>>,
    pub cols: Vec<Option<F>>,
}

/// Snapshot of an initial solution method.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct InitialStep<F> {
    /// The allocation so far.
    pub allocation: Allocation<F>,
    /// The remaining supply of each origin.
    pub supply: Vec<F>,
    /// The remaining demand of each destination.
    pub demand: Vec<F>,
    /// The penalties of the tableau (Vogel's method only).
    pub penalties: Option<Penalties<F>>,
}

/// Compute an initial allocation for a balanced problem.
///
/// Returns the allocation and the sequence of intermediate tableaus, the
/// first one being the empty allocation.
pub fn solve_initial<F>(problem: &Problem<F>, strategy: Strategy) -> Result<(Allocation<F>, Vec<InitialStep<F>>)>
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    if !problem.is_balanced() {
        return Err(Error::Unbalanced);
    }

    match strategy {
        Strategy::NorthwestCorner => Ok(northwest_corner(problem)),
        Strategy::Vogel => vogel(problem),
        Strategy::LeastCost => Ok(least_cost(problem)),
    }
}

/// The working tableau shared by all initial methods.
///
/// A remaining supply or demand of at most `zero` is exhausted.
pub(crate) struct Tableau<F> {
    pub(crate) supply: Vec<F>,
    pub(crate) demand: Vec<F>,
    pub(crate) allocation: Allocation<F>,
    pub(crate) trace: Vec<InitialStep<F>>,
    zero: F,
}

impl<F> Tableau<F>
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    pub(crate) fn new(problem: &Problem<F>) -> Self {
        let zero = tolerance();
        let snap = |x: &F| if *x <= zero { F::zero() } else { *x };
        Tableau {
            supply: problem.supply().iter().map(snap).collect(),
            demand: problem.demand().iter().map(snap).collect(),
            allocation: Allocation::new(problem.num_origins(), problem.num_destinations()),
            trace: vec![],
            zero,
        }
    }

    pub(crate) fn has_supply(&self, i: usize) -> bool {
        self.supply[i] > F::zero()
    }

    pub(crate) fn has_demand(&self, j: usize) -> bool {
        self.demand[j] > F::zero()
    }

    /// Ship as much as possible on cell `(i,j)`.
    ///
    /// The exhausted side is set to exactly zero. So is the other side if
    /// its remainder is at most `zero`, in which case both are exhausted.
    pub(crate) fn ship(&mut self, i: usize, j: usize) -> F {
        let s = self.supply[i];
        let d = self.demand[j];
        let q = if s <= d {
            self.demand[j] = self.snap(d - s);
            self.supply[i] = F::zero();
            s
        } else {
            self.supply[i] = self.snap(s - d);
            self.demand[j] = F::zero();
            d
        };
        self.allocation.allocate(i, j, q);
        q
    }

    fn snap(&self, x: F) -> F {
        if x <= self.zero {
            F::zero()
        } else {
            x
        }
    }

    pub(crate) fn record(&mut self, penalties: Option<Penalties<F>>) {
        self.trace.push(InitialStep {
            allocation: self.allocation.clone(),
            supply: self.supply.clone(),
            demand: self.demand.clone(),
            penalties,
        });
    }

    pub(crate) fn finish(self) -> (Allocation<F>, Vec<InitialStep<F>>) {
        (self.allocation, self.trace)
    }
}
