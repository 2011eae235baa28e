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

use num_traits::{NumAssign, NumCast, Signed, ToPrimitive};
use rs_transport::dimacs;
use rs_transport::{solve_initial, CycleSearch, Pricing, Strategy, TransportSimplex};
use std::error::Error;
use std::fmt::{Debug, Display};
use std::io::Write;
use std::path::PathBuf;
use std::result::Result;
use std::str::FromStr;

use rustop::opts;
use time::OffsetDateTime;

trait ZeroValue {
    fn zero() -> Self;
}

impl ZeroValue for i64 {
    fn zero() -> i64 {
        0
    }
}

impl ZeroValue for f64 {
    fn zero() -> f64 {
        1e-9
    }
}

fn run<F>(filename: &str, strategy: Strategy, pricing: Pricing, search: CycleSearch) -> Result<(), Box<dyn Error>>
where
    F: NumCast + NumAssign + PartialOrd + Copy + ToPrimitive + Signed + FromStr + Display + Debug + ZeroValue,
    F::Err: Display,
{
    let tstart = OffsetDateTime::now_utc();
    let problem = dimacs::transport::read_from_file::<F>(filename)?;
    let tend = OffsetDateTime::now_utc();

    println!("Instance            : {}", filename);
    println!("Read Time (seconds) : {}", (tend - tstart).as_seconds_f64());
    println!("Value type          : {}", std::any::type_name::<F>());
    println!("Number of origins   : {}", problem.num_origins());
    println!("Number of dest.     : {}", problem.num_destinations());

    let (problem, balancing) = problem.balance();
    println!("Balancing           : {:?}", balancing);

    let tstart = OffsetDateTime::now_utc();
    let (start, _) = solve_initial(&problem, strategy)?;
    let initial_value = start.cost(problem.costs());

    let mut spx = TransportSimplex::new(problem.costs().clone(), start)?;
    spx.pricing = pricing;
    spx.search = search;
    spx.zero = ZeroValue::zero();
    spx.record_trace = false;
    let state = spx.solve()?;
    let tend = OffsetDateTime::now_utc();
    let soltime = (tend - tstart).as_seconds_f64();

    println!();
    println!("Initial method      : {:?}", strategy);
    println!("Initial value       : {:.2}", initial_value.to_f64().unwrap_or(f64::NAN));
    println!("Solution state      : {:?}", state);
    println!("Value               : {:.2}", spx.value().to_f64().unwrap_or(f64::NAN));
    println!("Time (seconds)      : {:.2}", soltime);
    println!("Iterations (total)  : {}", spx.num_iterations());
    println!();
    println!("Write solution to   : {}.sol", filename);

    let solfile = PathBuf::from(format!("{}.sol", filename));
    let f = &mut std::fs::File::create(&solfile)?;
    let fname = solfile
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "".into());
    writeln!(f, "c Solved with the transportation simplex")?;
    writeln!(f, "c instance            : {}", fname)?;
    writeln!(f, "c initial method      : {:?}", strategy)?;
    writeln!(f, "c solution time       : {:.2} seconds", soltime)?;
    writeln!(f, "c number of iterations: {}", spx.num_iterations())?;
    dimacs::transport::write_solution(f, spx.allocation(), spx.value())?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Solve a transportation problem with the transportation simplex.";
        param file:String, desc:"Instance file name";
        opt northwest:bool, desc:"Northwest-Corner initial allocation";
        opt least_cost:bool, desc:"Least-Cost initial allocation";
        opt stepping_stone:bool, desc:"Stepping-stone pricing";
        opt zigzag:bool, desc:"Zig-zag cycle search";
        opt floating_point:bool, desc:"Use floating point values";
    }
    .parse_or_exit();

    let strategy = if args.northwest {
        Strategy::NorthwestCorner
    } else if args.least_cost {
        Strategy::LeastCost
    } else {
        Strategy::Vogel
    };

    let pricing = if args.stepping_stone {
        Pricing::SteppingStone
    } else {
        Pricing::Potentials
    };

    let search = if args.zigzag {
        CycleSearch::ZigZag
    } else {
        CycleSearch::Restricted
    };

    if args.floating_point {
        run::<f64>(&args.file, strategy, pricing, search)
    } else {
        run::<i64>(&args.file, strategy, pricing, search)
    }
}
