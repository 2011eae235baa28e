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

//! Errors raised while setting up or solving a transportation problem.

use std::error;
use std::fmt;

/// Error of the transportation solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input structures do not fit together.
    Dimension { msg: String },
    /// A cost, supply or demand value is negative.
    NegativeValue { what: &'static str, index: usize },
    /// The operation requires a balanced problem.
    Unbalanced,
    /// Vogel's method ran out of eligible rows and columns while supply or
    /// demand above the tolerance remained.
    InitialStalled { row: Option<usize>, col: Option<usize> },
    /// No empty cell restores an independent basis.
    DegenerateBasisUnresolvable,
    /// The basic cells contain a cycle.
    NonIndependentBasis { num_basic: usize, required: usize },
    /// No closed cycle through the entering cell exists.
    CycleNotFound { row: usize, col: usize },
    /// The potentials could not be propagated to all rows and columns.
    InconsistentPotentials,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            Dimension { msg } => write!(fmt, "Dimension mismatch: {}", msg),
            NegativeValue { what, index } => write!(fmt, "Negative {} value at index {}", what, index),
            Unbalanced => write!(fmt, "Total supply differs from total demand"),
            InitialStalled { row, col } => write!(
                fmt,
                "Initial solution stalled with remaining quantity (row {:?}, column {:?})",
                row, col
            ),
            DegenerateBasisUnresolvable => write!(fmt, "Degenerate basis cannot be completed to an independent basis"),
            NonIndependentBasis { num_basic, required } => write!(
                fmt,
                "Basic cells are not independent ({} basic cells, {} required)",
                num_basic, required
            ),
            CycleNotFound { row, col } => write!(fmt, "No closed cycle through cell ({},{})", row, col),
            InconsistentPotentials => write!(fmt, "Potentials could not be determined for all rows and columns"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
