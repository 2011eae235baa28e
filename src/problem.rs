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

//! Transportation problem instances.
//!
//! A [`Problem`] consists of a cost matrix with one row per origin and one
//! column per destination, the supply of each origin and the demand of each
//! destination. If total supply and total demand differ, [`Problem::balance`]
//! adds a dummy origin or destination with zero costs.
//!
//! # Example
//!
//! ```
//! use rs_transport::{Balancing, Matrix, Problem};
//!
//! let costs = Matrix::from_rows(vec![vec![1], vec![2]]).unwrap();
//! let problem = Problem::new(costs, vec![10, 20], vec![25]).unwrap();
//! let (problem, balancing) = problem.balance();
//!
//! assert_eq!(balancing, Balancing::DummyDestination(5));
//! assert_eq!(problem.demand(), &[25, 5]);
//! assert_eq!(problem.costs().to_rows(), vec![vec![1, 0], vec![2, 0]]);
//! ```

use crate::error::{Error, Result};
use crate::matrix::Matrix;

use num_traits::{NumAssign, NumCast, Zero};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// How a problem has been balanced.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Balancing<F> {
    /// Total supply equals total demand, nothing has been added.
    Balanced,
    /// A dummy origin with the given supply has been appended as last row.
    DummyOrigin(F),
    /// A dummy destination with the given demand has been appended as last column.
    DummyDestination(F),
}

impl<F> Balancing<F> {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Balancing::Balanced)
    }
}

/// A transportation problem.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Problem<F> {
    costs: Matrix<F>,
    supply: Vec<F>,
    demand: Vec<F>,
}

impl<F> Problem<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// Create a new problem.
    ///
    /// The cost matrix must have one row per supply and one column per
    /// demand value. All values must be non-negative.
    pub fn new(costs: Matrix<F>, supply: Vec<F>, demand: Vec<F>) -> Result<Self> {
        if costs.num_rows() != supply.len() {
            return Err(Error::Dimension {
                msg: format!("{} cost rows but {} supply values", costs.num_rows(), supply.len()),
            });
        }
        if costs.num_cols() != demand.len() {
            return Err(Error::Dimension {
                msg: format!("{} cost columns but {} demand values", costs.num_cols(), demand.len()),
            });
        }
        if let Some(index) = supply.iter().position(|&s| s < F::zero()) {
            return Err(Error::NegativeValue { what: "supply", index });
        }
        if let Some(index) = demand.iter().position(|&d| d < F::zero()) {
            return Err(Error::NegativeValue { what: "demand", index });
        }
        if let Some(((i, j), _)) = costs.iter().find(|(_, c)| **c < F::zero()) {
            return Err(Error::NegativeValue {
                what: "cost",
                index: i * costs.num_cols() + j,
            });
        }

        Ok(Problem { costs, supply, demand })
    }

    /// Create a new problem from nested cost rows.
    pub fn from_rows(costs: Vec<Vec<F>>, supply: Vec<F>, demand: Vec<F>) -> Result<Self> {
        Problem::new(Matrix::from_rows(costs)?, supply, demand)
    }

    pub fn num_origins(&self) -> usize {
        self.supply.len()
    }

    pub fn num_destinations(&self) -> usize {
        self.demand.len()
    }

    pub fn costs(&self) -> &Matrix<F> {
        &self.costs
    }

    pub fn supply(&self) -> &[F] {
        &self.supply
    }

    pub fn demand(&self) -> &[F] {
        &self.demand
    }

    pub fn total_supply(&self) -> F {
        sum(&self.supply)
    }

    pub fn total_demand(&self) -> F {
        sum(&self.demand)
    }
}

impl<F> Problem<F>
where
    F: NumAssign + NumCast + PartialOrd + Copy,
{
    /// Return `true` if total supply and total demand agree up to
    /// [`tolerance`].
    pub fn is_balanced(&self) -> bool {
        let zero = tolerance::<F>();
        let (s, d) = (self.total_supply(), self.total_demand());
        if s >= d {
            s - d <= zero
        } else {
            d - s <= zero
        }
    }

    /// Balance the problem.
    ///
    /// If total supply exceeds total demand a dummy destination receiving
    /// the excess is added, otherwise a dummy origin providing the shortfall.
    /// The dummy row or column has cost zero everywhere. Totals differing by
    /// at most [`tolerance`] count as balanced.
    pub fn balance(mut self) -> (Self, Balancing<F>) {
        if self.is_balanced() {
            return (self, Balancing::Balanced);
        }

        let total_supply = self.total_supply();
        let total_demand = self.total_demand();
        if total_supply > total_demand {
            let excess = total_supply - total_demand;
            self.costs.push_col(F::zero());
            self.demand.push(excess);
            (self, Balancing::DummyDestination(excess))
        } else {
            let shortfall = total_demand - total_supply;
            self.costs.push_row(F::zero());
            self.supply.push(shortfall);
            (self, Balancing::DummyOrigin(shortfall))
        }
    }
}

/// The default threshold below which a quantity counts as zero.
///
/// This is `1e-10` converted to `F`, which is zero for integer types.
pub fn tolerance<F>() -> F
where
    F: NumCast + Zero,
{
    F::from(1e-10).unwrap_or_else(F::zero)
}

fn sum<F>(values: &[F]) -> F
where
    F: NumAssign + Copy,
{
    values.iter().fold(F::zero(), |acc, &x| acc + x)
}
