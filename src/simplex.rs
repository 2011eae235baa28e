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

//! The transportation simplex (MODI) method.
//!
//! Starting from a feasible allocation the method repeatedly
//!
//! 1. completes a degenerate basis with zero-quantity cells,
//! 2. prices the empty cells (by potentials or by stepping stones),
//! 3. stops if no price is negative, and otherwise
//! 4. shifts quantity along the cycle of the most negative cell.
//!
//! # Example
//!
//! ```
//! use rs_transport::{solve, Problem, SolutionState, Strategy};
//!
//! let problem = Problem::from_rows(
//!     vec![vec![12, 13, 4, 6], vec![6, 4, 10, 11], vec![10, 9, 12, 4]],
//!     vec![500, 700, 800],
//!     vec![400, 900, 200, 500],
//! )
//! .unwrap();
//!
//! let (solution, balancing) = solve(problem, Strategy::NorthwestCorner).unwrap();
//! assert!(balancing.is_balanced());
//! assert_eq!(solution.state, SolutionState::Optimal);
//! assert_eq!(solution.cost, 12000);
//! assert_eq!(solution.iterations, 2);
//! ```

use crate::allocation::Allocation;
use crate::basis::{check_independence, resolve_degeneracy};
use crate::cycle::{apply_cycle, find_cycle, Cycle, CycleSearch};
use crate::error::{Error, Result};
use crate::initial::{solve_initial, Strategy};
use crate::matrix::Matrix;
use crate::potentials::{entering_cell, Potentials};
use crate::problem::{tolerance, Balancing, Problem};
use crate::steppingstone;

use log::{debug, info, warn};
use num_traits::{NumAssign, NumCast, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// How the empty cells are priced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Pricing {
    /// Reduced costs from row and column potentials.
    Potentials,
    /// Signed cost of the cycle of each empty cell.
    SteppingStone,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The allocation is optimal
    Optimal,
    /// The iteration limit has been reached before optimality
    IterationLimit,
}

/// A record of the optimization.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Step<F> {
    /// A degenerate cell has been added to the basis.
    Degeneracy {
        cell: (usize, usize),
        allocation: Allocation<F>,
    },
    /// A pricing round.
    ///
    /// `allocation` and `cost` are the values before the cycle is applied.
    /// The last round of an optimal solution has no entering cell.
    Iteration {
        potentials: Option<Potentials<F>>,
        deltas: Matrix<Option<F>>,
        allocation: Allocation<F>,
        cost: F,
        entering: Option<((usize, usize), F)>,
        cycle: Option<Cycle>,
    },
}

/// The result of an optimization.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution<F> {
    pub state: SolutionState,
    pub allocation: Allocation<F>,
    pub cost: F,
    /// The number of applied cycles.
    pub iterations: usize,
    pub trace: Vec<Step<F>>,
}

/// The transportation simplex algorithm.
pub struct TransportSimplex<F> {
    costs: Matrix<F>,
    allocation: Allocation<F>,

    /// The pricing rule. Defaults to `Pricing::Potentials`.
    pub pricing: Pricing,
    /// The cycle search. Only used with `Pricing::Potentials`, stepping
    /// stones always use the zig-zag search.
    pub search: CycleSearch,
    /// The maximal number of cycles to apply. Defaults to 100.
    pub max_iterations: usize,
    /// The value to be considered zero.
    ///
    /// Quantities not larger than this are removed from the basis and
    /// prices must be below `-zero` to enter. Defaults to `1e-10` converted
    /// to `F`, which is zero for integer types.
    pub zero: F,
    /// Whether to record the steps of the optimization. Defaults to `true`.
    pub record_trace: bool,

    niter: usize,
    solution_state: SolutionState,
    trace: Vec<Step<F>>,
}

impl<F> TransportSimplex<F>
where
    F: NumAssign + NumCast + PartialOrd + Copy + Signed,
{
    /// Create a solver for `allocation` with the given cost matrix.
    ///
    /// The allocation must be feasible for the (balanced) problem.
    pub fn new(costs: Matrix<F>, allocation: Allocation<F>) -> Result<Self> {
        if costs.num_rows() != allocation.num_rows() || costs.num_cols() != allocation.num_cols() {
            return Err(Error::Dimension {
                msg: format!(
                    "allocation is {}x{}, costs are {}x{}",
                    allocation.num_rows(),
                    allocation.num_cols(),
                    costs.num_rows(),
                    costs.num_cols()
                ),
            });
        }

        Ok(TransportSimplex {
            costs,
            allocation,
            pricing: Pricing::Potentials,
            search: CycleSearch::default(),
            max_iterations: 100,
            zero: tolerance(),
            record_trace: true,
            niter: 0,
            solution_state: SolutionState::Unknown,
            trace: vec![],
        })
    }

    pub fn costs(&self) -> &Matrix<F> {
        &self.costs
    }

    /// The current allocation.
    pub fn allocation(&self) -> &Allocation<F> {
        &self.allocation
    }

    /// Return the cost of the current allocation.
    pub fn value(&self) -> F {
        self.allocation.cost(&self.costs)
    }

    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    /// Return the solution state of the latest computation.
    pub fn solution_state(&self) -> SolutionState {
        self.solution_state
    }

    pub fn trace(&self) -> &[Step<F>] {
        &self.trace
    }

    /// Optimize the allocation.
    ///
    /// Returns `SolutionState::Optimal` if no empty cell has a negative
    /// price and `SolutionState::IterationLimit` if `max_iterations` cycles
    /// have been applied without reaching optimality. In both cases the
    /// allocation is feasible.
    pub fn solve(&mut self) -> Result<SolutionState> {
        self.niter = 0;
        self.solution_state = SolutionState::Unknown;
        self.trace.clear();

        self.check_basis()?;

        loop {
            self.fix_degeneracy()?;

            let (potentials, deltas, mut cycles) = match self.pricing {
                Pricing::Potentials => {
                    let potentials = Potentials::compute(&self.allocation, &self.costs)?;
                    let deltas = potentials.deltas(&self.allocation, &self.costs);
                    (Some(potentials), deltas, None)
                }
                Pricing::SteppingStone => {
                    let prices = steppingstone::prices(&self.allocation, &self.costs)?;
                    (None, prices.deltas, Some(prices.cycles))
                }
            };

            let entering = entering_cell(&deltas, self.zero);
            let cell = match entering {
                Some((cell, _)) => cell,
                None => {
                    self.record_iteration(potentials, deltas, None, None);
                    self.solution_state = SolutionState::Optimal;
                    info!("Optimal allocation found after {} iterations", self.niter);
                    return Ok(self.solution_state);
                }
            };

            if self.niter >= self.max_iterations {
                self.record_iteration(potentials, deltas, entering, None);
                self.solution_state = SolutionState::IterationLimit;
                warn!("Iteration limit {} reached", self.max_iterations);
                return Ok(self.solution_state);
            }

            let cycle = match cycles.as_mut().and_then(|cycles| cycles[cell].take()) {
                Some(cycle) => cycle,
                None => find_cycle(&self.allocation, cell, self.search)?,
            };

            self.record_iteration(potentials, deltas, entering, Some(cycle.clone()));
            let theta = apply_cycle(&mut self.allocation, &cycle, self.zero);
            self.niter += 1;

            debug!(
                "Iteration {}: entering ({},{}), cycle of length {}{}",
                self.niter,
                cell.0,
                cell.1,
                cycle.len(),
                if theta.is_zero() { ", degenerate" } else { "" }
            );
        }
    }

    /// Consume the solver and return its solution.
    pub fn into_solution(self) -> Solution<F> {
        let cost = self.value();
        Solution {
            state: self.solution_state,
            allocation: self.allocation,
            cost,
            iterations: self.niter,
            trace: self.trace,
        }
    }

    fn check_basis(&self) -> Result<()> {
        let num_basic = self.allocation.num_basic();
        let required = self.allocation.basis_size();
        if num_basic > required || !check_independence(&self.allocation).independent {
            return Err(Error::NonIndependentBasis { num_basic, required });
        }
        Ok(())
    }

    fn fix_degeneracy(&mut self) -> Result<()> {
        while self.allocation.num_basic() < self.allocation.basis_size() {
            let cell = resolve_degeneracy(&mut self.allocation)?;
            debug!("Degenerate basis completed at ({},{})", cell.0, cell.1);
            if self.record_trace {
                self.trace.push(Step::Degeneracy {
                    cell,
                    allocation: self.allocation.clone(),
                });
            }
        }
        Ok(())
    }

    fn record_iteration(
        &mut self,
        potentials: Option<Potentials<F>>,
        deltas: Matrix<Option<F>>,
        entering: Option<((usize, usize), F)>,
        cycle: Option<Cycle>,
    ) {
        if self.record_trace {
            self.trace.push(Step::Iteration {
                potentials,
                deltas,
                allocation: self.allocation.clone(),
                cost: self.value(),
                entering,
                cycle,
            });
        }
    }
}

/// Optimize a feasible allocation with the default settings.
///
/// `IterationLimit` in the returned state flags a non-optimal result.
pub fn optimize<F>(costs: &Matrix<F>, allocation: Allocation<F>) -> Result<Solution<F>>
where
    F: NumAssign + NumCast + PartialOrd + Copy + Signed,
{
    let mut spx = TransportSimplex::new(costs.clone(), allocation)?;
    spx.solve()?;
    Ok(spx.into_solution())
}

/// Balance, build an initial allocation and optimize.
///
/// The returned allocation includes the dummy row or column added by the
/// balancing.
pub fn solve<F>(problem: Problem<F>, strategy: Strategy) -> Result<(Solution<F>, Balancing<F>)>
where
    F: NumAssign + NumCast + PartialOrd + Copy + Signed,
{
    let (problem, balancing) = problem.balance();
    let (allocation, _) = solve_initial(&problem, strategy)?;
    debug!(
        "Initial allocation by {:?} with {} basic cells",
        strategy,
        allocation.num_basic()
    );
    let solution = optimize(problem.costs(), allocation)?;
    Ok((solution, balancing))
}
