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

//! This module implements read and write functions for transportation
//! problems. A file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p tp <m> <n>`,
//!    where `<m>` is the number of origins and `<n>` the number of
//!    destinations.
//! 4. after the problem line there follow origin lines `o <i> <supply>`,
//!    destination lines `d <j> <demand>` and cost lines `a <i> <j> <cost>`
//!    in any order. Indices are 1-based. Origins and destinations that are
//!    not specified have zero supply or demand. Every cell must have
//!    exactly one cost line.
//!
//! Solutions consist of one line `s <value>` with the total cost and one
//! line `f <i> <j> <quantity>` for each cell with positive quantity.

use super::{DimacsReader, Error, Result};
use crate::allocation::{Allocation, Cell};
use crate::matrix::Matrix;
use crate::problem::Problem;

use num_traits::NumAssign;
use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

/// Read a transportation problem.
pub fn read<R: Read, T>(r: R) -> Result<Problem<T>>
where
    T: FromStr + NumAssign + PartialOrd + Copy,
    T::Err: Display,
{
    let mut reader = DimacsReader::new(r);

    // Read the problem line.
    let mut pline = reader.expect_line("p")?;
    pline.expect("tp")?;
    let nrows = pline.number()?;
    let ncols = pline.number()?;
    pline.end()?;

    let mut supply = vec![T::zero(); nrows];
    let mut demand = vec![T::zero(); ncols];
    let mut costs: Matrix<Option<T>> = Matrix::new(nrows, ncols, None);

    while let Some((d, mut toks)) = reader.read_one_line_of(&["o", "d", "a"])? {
        match d {
            "o" => {
                let i = toks.index("origin", nrows)?;
                supply[i] = toks.number()?;
            }
            "d" => {
                let j = toks.index("destination", ncols)?;
                demand[j] = toks.number()?;
            }
            _ => {
                let i = toks.index("origin", nrows)?;
                let j = toks.index("destination", ncols)?;
                if costs[(i, j)].is_some() {
                    return Err(Error::Data {
                        line: toks.line,
                        msg: format!("duplicate cost for cell ({},{})", i + 1, j + 1),
                    });
                }
                costs[(i, j)] = Some(toks.number()?);
            }
        }
        toks.end()?;
    }

    let line = reader.line_number();
    if let Some(((i, j), _)) = costs.iter().find(|(_, c)| c.is_none()) {
        return Err(Error::Data {
            line,
            msg: format!("missing cost for cell ({},{})", i + 1, j + 1),
        });
    }

    Problem::new(costs.map(|c| c.unwrap_or_else(T::zero)), supply, demand).map_err(|err| Error::Data {
        line,
        msg: err.to_string(),
    })
}

pub fn read_from_file<T>(filename: &str) -> Result<Problem<T>>
where
    T: FromStr + NumAssign + PartialOrd + Copy,
    T::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a transportation problem.
pub fn write<W, T>(mut w: W, problem: &Problem<T>) -> std::io::Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    writeln!(w, "p tp {} {}", problem.num_origins(), problem.num_destinations())?;
    for (i, s) in problem.supply().iter().enumerate() {
        writeln!(w, "o {} {}", i + 1, s)?;
    }
    for (j, d) in problem.demand().iter().enumerate() {
        writeln!(w, "d {} {}", j + 1, d)?;
    }
    for ((i, j), c) in problem.costs().iter() {
        writeln!(w, "a {} {} {}", i + 1, j + 1, c)?;
    }

    Ok(())
}

/// Write a transportation problem to a named file.
pub fn write_to_file<T>(filename: &str, problem: &Problem<T>) -> std::io::Result<()>
where
    T: NumAssign + PartialOrd + Copy + Display,
{
    write(&mut std::fs::File::create(filename)?, problem)
}

/// Write a solution of a transportation problem.
///
/// Degenerate cells are not written.
pub fn write_solution<W, T>(mut w: W, allocation: &Allocation<T>, value: T) -> std::io::Result<()>
where
    W: Write,
    T: NumAssign + PartialOrd + Copy + Display,
{
    writeln!(w, "s {}", value)?;
    for ((i, j), cell) in allocation.cells().iter() {
        if let Cell::Allocated(q) = cell {
            writeln!(w, "f {} {} {}", i + 1, j + 1, q)?;
        }
    }

    Ok(())
}

/// Read a solution of a transportation problem.
///
/// Returns the value and the list of `(origin, destination, quantity)`
/// with 0-based indices.
pub fn read_solution<R, T>(r: R) -> Result<(T, Vec<(usize, usize, T)>)>
where
    R: Read,
    T: FromStr,
    T::Err: Display,
{
    let mut reader = DimacsReader::new(r);
    let mut flows = vec![];
    let mut sol = None;

    while let Some((d, mut toks)) = reader.read_one_line_of(&["f", "s"])? {
        if d == "f" {
            let i = toks.index("origin", usize::MAX)?;
            let j = toks.index("destination", usize::MAX)?;
            flows.push((i, j, toks.number()?));
        } else {
            if sol.is_some() {
                return Err(Error::Format {
                    line: toks.line,
                    msg: "The solution value must be specified exactly once".to_string(),
                });
            }
            sol = Some(toks.number()?);
        }
        toks.end()?;
    }

    Ok((
        sol.ok_or_else(|| Error::Format {
            line: reader.line_number(),
            msg: "Missing solution value".to_string(),
        })?,
        flows,
    ))
}

/// Read a solution of a transportation problem from a named file.
pub fn read_solution_from_file<T>(filename: &str) -> Result<(T, Vec<(usize, usize, T)>)>
where
    T: FromStr,
    T::Err: Display,
{
    read_solution(std::fs::File::open(filename)?)
}

#[cfg(test)]
mod tests {
    use crate::dimacs;
    use crate::{Allocation, Cell, Problem};
    use std::io::Cursor;

    #[test]
    fn parse_file_test() {
        let file = "c scenario 1

p tp 3 4
o 1 500
o 2 700
o 3 800
d 1 400
d 2 900
d 3 200
d 4 500

c there might be empty lines

a 1 1 12
a 1 2 13
a 1 3 4
a 1 4 6
a 2 1 6
a 2 2 4
a 2 3 10
a 2 4 11
a 3 1 10
a 3 2 9
a 3 3 12
a 3 4 4
";
        let p: Problem<i64> = dimacs::transport::read(Cursor::new(file)).unwrap();
        assert_eq!(p.num_origins(), 3);
        assert_eq!(p.num_destinations(), 4);
        assert_eq!(p.supply(), &[500, 700, 800]);
        assert_eq!(p.demand(), &[400, 900, 200, 500]);
        assert_eq!(p.costs().row(1), &[6, 4, 10, 11]);
    }

    #[test]
    fn missing_cost() {
        let file = "p tp 1 2\no 1 3\nd 1 1\nd 2 2\na 1 1 5\n";
        let err = dimacs::transport::read::<_, i32>(Cursor::new(file)).unwrap_err();
        assert!(matches!(err, dimacs::Error::Data { .. }));
        assert!(err.to_string().contains("missing cost for cell (1,2)"));
    }

    #[test]
    fn invalid_index() {
        let file = "p tp 1 1\no 2 3\n";
        let err = dimacs::transport::read::<_, i32>(Cursor::new(file)).unwrap_err();
        match err {
            dimacs::Error::Data { line, .. } => assert_eq!(line, 2),
            _ => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn negative_value() {
        let file = "p tp 1 1\no 1 -3\nd 1 3\na 1 1 1\n";
        let err = dimacs::transport::read::<_, i32>(Cursor::new(file)).unwrap_err();
        assert!(matches!(err, dimacs::Error::Data { .. }));
    }

    #[test]
    fn write_test_file() {
        let p = Problem::from_rows(vec![vec![1.5, 2.0]], vec![3.0], vec![1.0, 2.0]).unwrap();
        let mut buf = Cursor::new(Vec::new());
        dimacs::transport::write(&mut buf, &p).unwrap();
        assert_eq!(
            String::from_utf8(buf.into_inner()).unwrap(),
            "p tp 1 2
o 1 3
d 1 1
d 2 2
a 1 1 1.5
a 1 2 2
"
        );
    }

    #[test]
    fn write_solution_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut alloc = Allocation::from_rows(vec![vec![3, 0], vec![1, 4]])?;
        alloc.set(0, 1, Cell::Degenerate);

        let mut buf = Cursor::new(Vec::new());
        dimacs::transport::write_solution(&mut buf, &alloc, 17)?;

        let soltxt = String::from_utf8(buf.into_inner())?;
        assert_eq!(soltxt, "s 17\nf 1 1 3\nf 2 1 1\nf 2 2 4\n");

        let (value, flows) = dimacs::transport::read_solution::<_, i32>(Cursor::new(soltxt))?;
        assert_eq!(value, 17);
        assert_eq!(flows, vec![(0, 0, 3), (1, 0, 1), (1, 1, 4)]);

        Ok(())
    }
}
