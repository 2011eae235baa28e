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

//! Stepping-stone pricing.
//!
//! Instead of potentials, every empty cell is priced directly by the signed
//! cost of its zig-zag cycle. For an independent basis this is the same
//! value as the reduced cost, but it needs one cycle search per empty cell.

use crate::allocation::Allocation;
use crate::cycle::{cycle_cost, zigzag, Cycle};
use crate::error::Result;
use crate::matrix::Matrix;

use num_traits::NumAssign;

/// Prices of the empty cells together with their cycles.
pub struct Prices<F> {
    /// The cycle cost of each empty cell, `None` for basic cells.
    pub deltas: Matrix<Option<F>>,
    /// The cycle of each empty cell.
    pub cycles: Matrix<Option<Cycle>>,
}

/// Price all empty cells of `allocation`.
///
/// Fails with [`Error::CycleNotFound`](crate::Error::CycleNotFound) if an
/// empty cell has no cycle, i.e. if the basis is not a spanning tree.
pub fn prices<F>(allocation: &Allocation<F>, costs: &Matrix<F>) -> Result<Prices<F>>
where
    F: NumAssign + PartialOrd + Copy,
{
    let nrows = allocation.num_rows();
    let ncols = allocation.num_cols();
    let mut deltas = Matrix::new(nrows, ncols, None);
    let mut cycles = Matrix::new(nrows, ncols, None);

    for pos in allocation.empty_cells() {
        let cycle = zigzag::find(allocation, pos)?;
        deltas[pos] = Some(cycle_cost(&cycle, costs));
        cycles[pos] = Some(cycle);
    }

    Ok(Prices { deltas, cycles })
}

#[cfg(test)]
mod tests {
    use super::prices;
    use crate::allocation::Allocation;
    use crate::potentials::Potentials;
    use crate::Matrix;

    #[test]
    fn test_same_as_potentials() {
        let costs = Matrix::from_rows(vec![vec![12, 13, 4, 6], vec![6, 4, 10, 11], vec![10, 9, 12, 4]]).unwrap();
        let a = Allocation::from_rows(vec![vec![400, 100, 0, 0], vec![0, 700, 0, 0], vec![0, 100, 200, 500]]).unwrap();

        let p = prices(&a, &costs).unwrap();
        let deltas = Potentials::compute(&a, &costs).unwrap().deltas(&a, &costs);
        assert_eq!(p.deltas, deltas);
        assert_eq!(p.deltas[(0, 2)], Some(-12));
        assert!(p.cycles[(0, 0)].is_none());
        assert_eq!(p.cycles[(1, 0)].as_ref().map(|c| c.len()), Some(4));
    }
}
