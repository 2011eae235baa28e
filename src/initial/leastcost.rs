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

//! The Least-Cost rule.

use super::{InitialStep, Tableau};
use crate::allocation::Allocation;
use crate::problem::Problem;

use log::debug;
use num_traits::{NumAssign, NumCast};

/// Compute an initial allocation with the Least-Cost rule.
///
/// The problem must be balanced. In each step the cheapest cell whose row
/// has remaining supply and whose column has remaining demand receives as
/// much as possible. Ties are broken in row-major order.
pub fn least_cost<F>(problem: &Problem<F>) -> (Allocation<F>, Vec<InitialStep<F>>)
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    let costs = problem.costs();
    let mut tab = Tableau::new(problem);
    tab.record(None);

    loop {
        let mut best: Option<((usize, usize), F)> = None;
        for i in (0..costs.num_rows()).filter(|&i| tab.has_supply(i)) {
            for j in (0..costs.num_cols()).filter(|&j| tab.has_demand(j)) {
                let c = costs[(i, j)];
                if best.map(|(_, b)| c < b).unwrap_or(true) {
                    best = Some(((i, j), c));
                }
            }
        }

        if let Some(((i, j), _)) = best {
            tab.ship(i, j);
            tab.record(None);
        } else {
            break;
        }
    }

    debug!("Least-Cost rule allocated {} cells", tab.allocation.num_basic());

    tab.finish()
}
