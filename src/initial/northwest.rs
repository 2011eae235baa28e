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

//! The Northwest-Corner rule.

use super::{InitialStep, Tableau};
use crate::allocation::Allocation;
use crate::problem::Problem;

use log::debug;
use num_traits::{NumAssign, NumCast};

/// Compute an initial allocation with the Northwest-Corner rule.
///
/// The problem must be balanced. The rule starts in the top-left cell and
/// ships as much as possible. Then it moves to the next row if the supply
/// is exhausted or to the next column if the demand is exhausted. If both
/// are exhausted at the same time it moves diagonally, so at most `M+N-1`
/// cells are allocated.
pub fn northwest_corner<F>(problem: &Problem<F>) -> (Allocation<F>, Vec<InitialStep<F>>)
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    let nrows = problem.num_origins();
    let ncols = problem.num_destinations();
    let mut tab = Tableau::new(problem);
    tab.record(None);

    let (mut i, mut j) = (0, 0);
    while i < nrows && j < ncols {
        tab.ship(i, j);
        tab.record(None);

        match (tab.has_supply(i), tab.has_demand(j)) {
            (false, false) => {
                i += 1;
                j += 1;
            }
            (false, true) => i += 1,
            _ => j += 1,
        }
    }

    debug!("Northwest-Corner rule allocated {} cells", tab.allocation.num_basic());

    tab.finish()
}

#[cfg(test)]
mod tests {
    use super::northwest_corner;
    use crate::Problem;

    #[test]
    fn test_northwest() {
        let p = Problem::from_rows(
            vec![vec![3, 2, 7, 6], vec![7, 5, 2, 3], vec![2, 5, 4, 5]],
            vec![5000, 6000, 2500],
            vec![6000, 4000, 2000, 1500],
        )
        .unwrap();
        let (alloc, trace) = northwest_corner(&p);
        assert_eq!(
            alloc.quantities().to_rows(),
            vec![vec![5000, 0, 0, 0], vec![1000, 4000, 1000, 0], vec![0, 0, 1000, 1500]]
        );
        assert_eq!(alloc.cost(p.costs()), 55500);
        assert_eq!(trace[0].allocation.num_basic(), 0);
        assert_eq!(trace[1].supply, vec![0, 6000, 2500]);
        assert_eq!(trace[1].demand, vec![1000, 4000, 2000, 1500]);
    }

    #[test]
    fn test_diagonal_step() {
        // Supply and demand exhaust simultaneously in the first cell.
        let p = Problem::from_rows(vec![vec![1, 1], vec![1, 1]], vec![5, 5], vec![5, 5]).unwrap();
        let (alloc, trace) = northwest_corner(&p);
        assert_eq!(alloc.quantities().to_rows(), vec![vec![5, 0], vec![0, 5]]);
        assert_eq!(alloc.num_basic(), 2);
        assert_eq!(trace.len(), 3);
    }
}
