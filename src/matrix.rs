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

//! A dense row-major matrix.
//!
//! All tableau data (costs, allocations, reduced costs) is stored in a
//! [`Matrix`] indexed by `(row, column)`.
//!
//! # Example
//!
//! ```
//! use rs_transport::Matrix;
//!
//! let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! m.push_col(0);
//! assert_eq!(m.num_cols(), 3);
//! assert_eq!(m[(1, 0)], 3);
//! assert_eq!(m.row(1), &[3, 4, 0]);
//! assert_eq!(m.col(1).copied().collect::<Vec<_>>(), vec![2, 4]);
//! ```

use crate::error::{Error, Result};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::ops::{Index, IndexMut};

/// A dense matrix stored row by row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Create a matrix with all entries equal to `value`.
    pub fn new(nrows: usize, ncols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Matrix {
            nrows,
            ncols,
            data: vec![value; nrows * ncols],
        }
    }

    /// Create a matrix whose entry `(i,j)` is `f(i,j)`.
    pub fn from_fn<Fs>(nrows: usize, ncols: usize, mut f: Fs) -> Self
    where
        Fs: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Matrix { nrows, ncols, data }
    }

    /// Create a matrix from a list of rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::Dimension {
                    msg: format!("row {} has {} entries, expected {}", i, row.len(), ncols),
                });
            }
            data.extend(row);
        }
        Ok(Matrix { nrows, ncols, data })
    }

    pub fn num_rows(&self) -> usize {
        self.nrows
    }

    pub fn num_cols(&self) -> usize {
        self.ncols
    }

    /// The entries of row `i`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// The entries of column `j` from top to bottom.
    pub fn col(&self, j: usize) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().skip(j).step_by(self.ncols.max(1)).take(self.nrows)
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// Iterate over all entries in row-major order together with their position.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let ncols = self.ncols;
        self.data.iter().enumerate().map(move |(k, x)| ((k / ncols, k % ncols), x))
    }

    /// Append a row with all entries equal to `value`.
    pub fn push_row(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat(value).take(self.ncols));
        self.nrows += 1;
    }

    /// Append a column with all entries equal to `value`.
    pub fn push_col(&mut self, value: T)
    where
        T: Clone,
    {
        let ncols = self.ncols + 1;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for (k, x) in self.data.drain(..).enumerate() {
            data.push(x);
            if (k + 1) % self.ncols.max(1) == 0 {
                data.push(value.clone());
            }
        }
        if self.ncols == 0 {
            data = vec![value; self.nrows];
        }
        self.data = data;
        self.ncols = ncols;
    }

    /// Return a new matrix with `f` applied to every entry.
    pub fn map<U, Fs>(&self, mut f: Fs) -> Matrix<U>
    where
        Fs: FnMut(&T) -> U,
    {
        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().map(|x| f(x)).collect(),
        }
    }

    /// Return the matrix as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        debug_assert!(i < self.nrows && j < self.ncols);
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        debug_assert!(i < self.nrows && j < self.ncols);
        &mut self.data[i * self.ncols + j]
    }
}
