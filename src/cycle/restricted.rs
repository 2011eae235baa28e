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

//! Cycle search restricted to the surviving lines of the basis elimination.

use super::Cycle;
use crate::allocation::Allocation;
use crate::basis::eliminate;
use crate::error::{Error, Result};

use num_traits::NumAssign;

/// Find the cycle of `entering` by walking the surviving cells.
///
/// With the entering cell counted as basic, the elimination removes all
/// rows and columns not on a cycle. For an independent basis exactly the
/// cycle through `entering` remains and every surviving line contains two
/// surviving cells. The walk starts with a vertical move and alternates
/// until it is back at `entering`.
pub fn find<F>(allocation: &Allocation<F>, entering: (usize, usize)) -> Result<Cycle>
where
    F: NumAssign + PartialOrd + Copy,
{
    let (ei, ej) = entering;
    let not_found = Error::CycleNotFound { row: ei, col: ej };

    let ind = eliminate(allocation, Some(entering));
    if ind.eliminated_rows[ei] || ind.eliminated_cols[ej] {
        return Err(not_found);
    }

    let nrows = allocation.num_rows();
    let ncols = allocation.num_cols();
    let survives = |i: usize, j: usize| {
        !ind.eliminated_rows[i] && !ind.eliminated_cols[j] && (allocation.is_basic(i, j) || (i, j) == entering)
    };

    let mut cells = vec![entering];
    let (mut i, mut j) = entering;
    let mut vertical = true;
    // a cycle visits each line at most once
    for _ in 0..nrows + ncols {
        let next = if vertical {
            (0..nrows).find(|&k| k != i && survives(k, j)).map(|k| (k, j))
        } else {
            (0..ncols).find(|&k| k != j && survives(i, k)).map(|k| (i, k))
        };

        match next {
            Some(cell) if cell == entering => return Ok(Cycle { cells }),
            Some(cell) => {
                cells.push(cell);
                i = cell.0;
                j = cell.1;
                vertical = !vertical;
            }
            None => break,
        }
    }

    Err(not_found)
}

#[cfg(test)]
mod tests {
    use super::find;
    use crate::allocation::{Allocation, Cell};

    #[test]
    fn test_four_cells() {
        let a = Allocation::from_rows(vec![vec![400, 100, 0, 0], vec![0, 700, 0, 0], vec![0, 100, 200, 500]]).unwrap();
        let cycle = find(&a, (0, 2)).unwrap();
        assert_eq!(cycle.cells, vec![(0, 2), (2, 2), (2, 1), (0, 1)]);
        assert_eq!(cycle.entering(), (0, 2));
        assert_eq!(cycle.losing().collect::<Vec<_>>(), vec![(2, 2), (0, 1)]);
    }

    #[test]
    fn test_degenerate_cells_on_cycle() {
        let mut a = Allocation::from_rows(vec![vec![5, 0], vec![0, 5]]).unwrap();
        a.set(0, 1, Cell::Degenerate);
        let cycle = find(&a, (1, 0)).unwrap();
        assert_eq!(cycle.cells, vec![(1, 0), (0, 0), (0, 1), (1, 1)]);
    }
}
