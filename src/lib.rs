// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! A library for solving the classical transportation problem.
//!
//! A [`Problem`] consists of a cost matrix, the supply of each origin and
//! the demand of each destination. Unbalanced problems are balanced by a
//! dummy origin or destination with zero costs. An initial allocation is
//! computed by one of the [`Strategy`] rules and then improved by the
//! transportation simplex ([`TransportSimplex`]) until no empty cell has a
//! negative reduced cost.
//!
//! ```
//! use rs_transport::{solve, Balancing, Problem, SolutionState, Strategy};
//!
//! let problem = Problem::from_rows(vec![vec![1], vec![2]], vec![10, 20], vec![25]).unwrap();
//! let (solution, balancing) = solve(problem, Strategy::Vogel).unwrap();
//!
//! assert_eq!(balancing, Balancing::DummyDestination(5));
//! assert_eq!(solution.state, SolutionState::Optimal);
//! assert_eq!(solution.allocation.quantities().to_rows(), vec![vec![10, 0], vec![15, 5]]);
//! assert_eq!(solution.cost, 40);
//! ```

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod matrix;
pub use self::matrix::Matrix;

pub mod problem;
pub use self::problem::{Balancing, Problem};

pub mod allocation;
pub use self::allocation::{total_cost, Allocation, Cell};

// # Algorithms

pub mod initial;
pub use self::initial::{solve_initial, InitialStep, Strategy};

pub mod basis;
pub mod cycle;
pub mod potentials;
pub mod steppingstone;
pub use self::cycle::{Cycle, CycleSearch};
pub use self::potentials::Potentials;

pub mod simplex;
pub use self::simplex::{optimize, solve, Pricing, Solution, SolutionState, Step, TransportSimplex};

// # File formats

#[cfg(feature = "dimacs")]
pub mod dimacs;
