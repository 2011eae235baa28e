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

//! Structure of the basic cells.
//!
//! The basic cells of an allocation correspond to the edges of a bipartite
//! graph between origins and destinations. The basis is *independent* if
//! this graph contains no cycle and *degenerate* if it has fewer than
//! `M+N-1` edges, i.e. if it is not a spanning tree.
//!
//! Independence is tested by repeatedly eliminating rows and columns with
//! less than two basic cells among the remaining lines (leaves of the
//! graph). Exactly the lines on cycles survive.

use crate::allocation::{Allocation, Cell};
use crate::error::{Error, Result};

use log::debug;
use num_traits::NumAssign;

/// Result of the independence test.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Independence {
    /// `true` if all rows and columns have been eliminated.
    pub independent: bool,
    /// The eliminated rows.
    pub eliminated_rows: Vec<bool>,
    /// The eliminated columns.
    pub eliminated_cols: Vec<bool>,
}

impl Independence {
    /// The rows that survived elimination.
    pub fn remaining_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.eliminated_rows.iter().enumerate().filter(|&(_, &e)| !e).map(|(i, _)| i)
    }

    /// The columns that survived elimination.
    pub fn remaining_cols(&self) -> impl Iterator<Item = usize> + '_ {
        self.eliminated_cols.iter().enumerate().filter(|&(_, &e)| !e).map(|(j, _)| j)
    }
}

/// Test whether the basic cells of `allocation` are independent.
pub fn check_independence<F>(allocation: &Allocation<F>) -> Independence
where
    F: NumAssign + PartialOrd + Copy,
{
    eliminate(allocation, None)
}

/// Run the elimination with `extra` treated as an additional basic cell.
pub(crate) fn eliminate<F>(allocation: &Allocation<F>, extra: Option<(usize, usize)>) -> Independence
where
    F: NumAssign + PartialOrd + Copy,
{
    let nrows = allocation.num_rows();
    let ncols = allocation.num_cols();
    let is_basic = |i: usize, j: usize| allocation.is_basic(i, j) || extra == Some((i, j));

    let mut elim_rows = vec![false; nrows];
    let mut elim_cols = vec![false; ncols];

    loop {
        let mut changed = false;

        for i in 0..nrows {
            if !elim_rows[i] && (0..ncols).filter(|&j| !elim_cols[j] && is_basic(i, j)).count() < 2 {
                elim_rows[i] = true;
                changed = true;
            }
        }

        for j in 0..ncols {
            if !elim_cols[j] && (0..nrows).filter(|&i| !elim_rows[i] && is_basic(i, j)).count() < 2 {
                elim_cols[j] = true;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    Independence {
        independent: elim_rows.iter().chain(elim_cols.iter()).all(|&e| e),
        eliminated_rows: elim_rows,
        eliminated_cols: elim_cols,
    }
}

/// Return `true` if the number of basic cells differs from `M+N-1`.
pub fn is_degenerate<F>(allocation: &Allocation<F>) -> bool
where
    F: NumAssign + PartialOrd + Copy,
{
    allocation.num_basic() != allocation.basis_size()
}

/// Add one degenerate basic cell.
///
/// The empty cells are tried in row-major order. The first cell that keeps
/// the basis independent is marked [`Cell::Degenerate`] and returned. The
/// total cost does not change.
///
/// Returns [`Error::DegenerateBasisUnresolvable`] if no such cell exists.
pub fn resolve_degeneracy<F>(allocation: &mut Allocation<F>) -> Result<(usize, usize)>
where
    F: NumAssign + PartialOrd + Copy,
{
    let candidates = allocation.empty_cells().collect::<Vec<_>>();
    for (i, j) in candidates {
        allocation.set(i, j, Cell::Degenerate);
        if check_independence(allocation).independent {
            debug!("Degenerate basic cell inserted at ({},{})", i, j);
            return Ok((i, j));
        }
        allocation.set(i, j, Cell::Empty);
    }

    Err(Error::DegenerateBasisUnresolvable)
}
