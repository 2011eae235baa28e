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

//! Improving cycles.
//!
//! Adding the entering cell to an independent basis closes exactly one
//! cycle of basic cells that alternates between horizontal and vertical
//! moves. Shifting a quantity θ along this cycle (adding on the entering
//! cell and every second cell, subtracting on the others) keeps all row and
//! column sums unchanged.
//!
//! Two searches are available:
//!
//! - [`restricted`]: uses the elimination of the basis test; only the cells
//!   on the cycle survive, so the cycle is a simple walk.
//! - [`zigzag`]: a depth-first search over alternating moves.
//!
//! Both return the same cells, possibly in reverse order. Since the cycle has
//! even length the signs of the cells do not depend on the direction.
//!
//! # Example
//!
//! ```
//! use rs_transport::cycle::{apply_cycle, find_cycle, CycleSearch};
//! use rs_transport::Allocation;
//!
//! let mut alloc = Allocation::from_rows(vec![
//!     vec![400, 100, 0, 0],
//!     vec![0, 700, 0, 0],
//!     vec![0, 100, 200, 500],
//! ])
//! .unwrap();
//!
//! let cycle = find_cycle(&alloc, (0, 2), CycleSearch::Restricted).unwrap();
//! assert_eq!(cycle.cells, vec![(0, 2), (2, 2), (2, 1), (0, 1)]);
//!
//! let theta = apply_cycle(&mut alloc, &cycle, 0);
//! assert_eq!(theta, 100);
//! assert_eq!(
//!     alloc.quantities().to_rows(),
//!     vec![vec![400, 0, 100, 0], vec![0, 700, 0, 0], vec![0, 200, 100, 500]]
//! );
//! ```

pub mod restricted;
pub mod zigzag;

use crate::allocation::{Allocation, Cell};
use crate::error::Result;
use crate::matrix::Matrix;

use log::trace;
use num_traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The method used to find the cycle of the entering cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum CycleSearch {
    /// Walk the cells that survive the basis elimination.
    Restricted,
    /// Depth-first search over alternating moves.
    ZigZag,
}

impl Default for CycleSearch {
    fn default() -> Self {
        CycleSearch::Restricted
    }
}

/// A closed cycle of cells.
///
/// The first cell is the entering cell. Cells at even positions gain, cells
/// at odd positions lose quantity. Two consecutive cells (including the last
/// and the first one) share a row or a column.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Cycle {
    pub cells: Vec<(usize, usize)>,
}

impl Cycle {
    /// The entering cell.
    pub fn entering(&self) -> (usize, usize) {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells receiving quantity, starting with the entering cell.
    pub fn gaining(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied().step_by(2)
    }

    /// The cells giving up quantity.
    pub fn losing(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied().skip(1).step_by(2)
    }
}

/// Find the cycle closed by adding `entering` to the basis.
///
/// Returns [`Error::CycleNotFound`](crate::Error::CycleNotFound) if the
/// basic cells do not connect the row and the column of `entering`.
pub fn find_cycle<F>(allocation: &Allocation<F>, entering: (usize, usize), search: CycleSearch) -> Result<Cycle>
where
    F: NumAssign + PartialOrd + Copy,
{
    let cycle = match search {
        CycleSearch::Restricted => restricted::find(allocation, entering)?,
        CycleSearch::ZigZag => zigzag::find(allocation, entering)?,
    };
    trace!("Cycle of ({},{}): {:?}", entering.0, entering.1, cycle.cells);
    Ok(cycle)
}

/// Shift the largest feasible quantity along `cycle`.
///
/// θ is the smallest quantity on a losing cell, a degenerate cell counting as
/// zero. If θ is positive all gaining cells receive θ and all losing cells
/// give up θ; cells left with at most `zero` become empty. If θ is zero the
/// limiting degenerate cell leaves the basis and the entering cell becomes
/// degenerate instead, so the allocation stays the same.
///
/// Returns θ.
pub fn apply_cycle<F>(allocation: &mut Allocation<F>, cycle: &Cycle, zero: F) -> F
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut limit: Option<((usize, usize), F)> = None;
    for (i, j) in cycle.losing() {
        let q = allocation.quantity(i, j);
        if limit.map(|(_, t)| q < t).unwrap_or(true) {
            limit = Some(((i, j), q));
        }
    }

    let ((li, lj), theta) = match limit {
        Some(limit) => limit,
        None => return F::zero(),
    };

    if theta > F::zero() {
        for (i, j) in cycle.gaining() {
            let q = allocation.quantity(i, j);
            allocation.allocate(i, j, q + theta);
        }
        for (i, j) in cycle.losing() {
            let q = allocation.quantity(i, j) - theta;
            if q <= zero {
                allocation.set(i, j, Cell::Empty);
            } else {
                allocation.allocate(i, j, q);
            }
        }
        theta
    } else {
        let (ei, ej) = cycle.entering();
        allocation.set(li, lj, Cell::Empty);
        allocation.set(ei, ej, Cell::Degenerate);
        F::zero()
    }
}

/// Return the cost change of shifting one unit along `cycle`.
///
/// For an independent basis this equals the reduced cost of the entering
/// cell.
pub fn cycle_cost<F>(cycle: &Cycle, costs: &Matrix<F>) -> F
where
    F: NumAssign + Copy,
{
    let gain = cycle.gaining().fold(F::zero(), |acc, p| acc + costs[p]);
    let loss = cycle.losing().fold(F::zero(), |acc, p| acc + costs[p]);
    gain - loss
}
