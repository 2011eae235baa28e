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

//! Zig-zag cycle search.
//!
//! A depth-first search over basic cells with an explicit stack. The path
//! starts at the entering cell with a horizontal move and then alternates
//! between vertical and horizontal moves. It closes with a vertical move
//! back onto the entering cell once it contains at least three basic cells.
//! Candidates are tried in increasing index order, hence the first cycle
//! found is the lexicographically smallest one.

use super::Cycle;
use crate::allocation::Allocation;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

use num_traits::NumAssign;

/// Find the cycle of `entering` by depth-first search.
pub fn find<F>(allocation: &Allocation<F>, entering: (usize, usize)) -> Result<Cycle>
where
    F: NumAssign + PartialOrd + Copy,
{
    let nrows = allocation.num_rows();
    let ncols = allocation.num_cols();
    let (_, ej) = entering;

    let mut on_path = Matrix::new(nrows, ncols, false);
    on_path[entering] = true;
    // the path and, for each cell on it, the next candidate index
    let mut path = vec![entering];
    let mut next = vec![0];

    while let Some(&(i, j)) = path.last() {
        let depth = path.len() - 1;
        let horizontal = depth % 2 == 0;

        if !horizontal && depth >= 3 && j == ej {
            return Ok(Cycle { cells: path });
        }

        let limit = if horizontal { ncols } else { nrows };
        let mut k = next[depth];
        let mut found = None;
        while k < limit {
            let cell = if horizontal { (i, k) } else { (k, j) };
            k += 1;
            if !on_path[cell] && allocation.is_basic(cell.0, cell.1) {
                found = Some(cell);
                break;
            }
        }
        next[depth] = k;

        if let Some(cell) = found {
            on_path[cell] = true;
            path.push(cell);
            next.push(0);
        } else {
            on_path[(i, j)] = false;
            path.pop();
            next.pop();
        }
    }

    Err(Error::CycleNotFound {
        row: entering.0,
        col: entering.1,
    })
}
