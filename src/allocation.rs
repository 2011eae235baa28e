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

//! Allocations of a transportation problem.
//!
//! An [`Allocation`] assigns a [`Cell`] state to each (origin,
//! destination) pair. The *basic* cells are the non-empty ones; a
//! [`Cell::Degenerate`] cell is basic although it ships nothing.

use crate::error::Result;
use crate::matrix::Matrix;

use num_traits::NumAssign;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::ops::Index;

/// The state of a single cell.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Cell<F> {
    /// Non-basic, nothing shipped.
    Empty,
    /// Basic with the given (positive) quantity.
    Allocated(F),
    /// Basic with zero quantity.
    Degenerate,
}

impl<F> Cell<F> {
    pub fn is_basic(&self) -> bool {
        !matches!(self, Cell::Empty)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Cell::Degenerate)
    }
}

impl<F> Cell<F>
where
    F: NumAssign + Copy,
{
    /// The quantity shipped, zero for empty and degenerate cells.
    pub fn quantity(&self) -> F {
        match *self {
            Cell::Allocated(q) => q,
            _ => F::zero(),
        }
    }
}

impl<F> Default for Cell<F> {
    fn default() -> Self {
        Cell::Empty
    }
}

/// An allocation of shipped quantities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Allocation<F> {
    cells: Matrix<Cell<F>>,
}

impl<F> Allocation<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    /// An allocation with all cells empty.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Allocation {
            cells: Matrix::new(nrows, ncols, Cell::Empty),
        }
    }

    /// Create an allocation from plain quantities.
    ///
    /// Zero entries become empty cells.
    pub fn from_quantities(quantities: &Matrix<F>) -> Self {
        Allocation {
            cells: quantities.map(|&q| if q.is_zero() { Cell::Empty } else { Cell::Allocated(q) }),
        }
    }

    /// Create an allocation from nested rows of quantities.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        Ok(Allocation::from_quantities(&Matrix::from_rows(rows)?))
    }

    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    pub fn num_cols(&self) -> usize {
        self.cells.num_cols()
    }

    pub fn cells(&self) -> &Matrix<Cell<F>> {
        &self.cells
    }

    pub fn get(&self, i: usize, j: usize) -> Cell<F> {
        self.cells[(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, cell: Cell<F>) {
        self.cells[(i, j)] = cell;
    }

    /// Allocate quantity `q` at `(i,j)`.
    ///
    /// A zero quantity leaves the cell empty.
    pub fn allocate(&mut self, i: usize, j: usize, q: F) {
        self.cells[(i, j)] = if q.is_zero() { Cell::Empty } else { Cell::Allocated(q) };
    }

    pub fn quantity(&self, i: usize, j: usize) -> F {
        self.cells[(i, j)].quantity()
    }

    pub fn is_basic(&self, i: usize, j: usize) -> bool {
        self.cells[(i, j)].is_basic()
    }

    /// The number of basic cells (including degenerate ones).
    pub fn num_basic(&self) -> usize {
        self.cells.iter().filter(|(_, c)| c.is_basic()).count()
    }

    /// The number of basic cells of a non-degenerate basis, `M+N-1`.
    pub fn basis_size(&self) -> usize {
        (self.num_rows() + self.num_cols()).saturating_sub(1)
    }

    /// Iterate over the positions of all basic cells in row-major order.
    pub fn basic_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().filter(|(_, c)| c.is_basic()).map(|(p, _)| p)
    }

    /// Iterate over the positions of all empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().filter(|(_, c)| c.is_empty()).map(|(p, _)| p)
    }

    /// The total quantity shipped from origin `i`.
    pub fn row_sum(&self, i: usize) -> F {
        self.cells.row(i).iter().fold(F::zero(), |acc, c| acc + c.quantity())
    }

    /// The total quantity shipped to destination `j`.
    pub fn col_sum(&self, j: usize) -> F {
        self.cells.col(j).fold(F::zero(), |acc, c| acc + c.quantity())
    }

    /// Return the shipped quantities, degenerate cells are zero.
    pub fn quantities(&self) -> Matrix<F> {
        self.cells.map(Cell::quantity)
    }

    /// Return the total cost of this allocation.
    pub fn cost(&self, costs: &Matrix<F>) -> F {
        total_cost(self, costs)
    }
}

impl<F> Index<(usize, usize)> for Allocation<F> {
    type Output = Cell<F>;

    fn index(&self, pos: (usize, usize)) -> &Cell<F> {
        &self.cells[pos]
    }
}

/// Return the total cost `Σ allocation[i][j] * cost[i][j]`.
///
/// Degenerate cells ship nothing and do not contribute.
///
/// # Example
///
/// ```
/// use rs_transport::{total_cost, Allocation, Matrix};
///
/// let costs = Matrix::from_rows(vec![vec![3, 1], vec![2, 5]]).unwrap();
/// let alloc = Allocation::from_rows(vec![vec![4, 0], vec![1, 6]]).unwrap();
/// assert_eq!(total_cost(&alloc, &costs), 4 * 3 + 2 + 6 * 5);
/// ```
pub fn total_cost<F>(allocation: &Allocation<F>, costs: &Matrix<F>) -> F
where
    F: NumAssign + PartialOrd + Copy,
{
    let mut value = F::zero();
    for ((i, j), cell) in allocation.cells().iter() {
        if let Cell::Allocated(q) = *cell {
            value += q * costs[(i, j)];
        }
    }
    value
}
