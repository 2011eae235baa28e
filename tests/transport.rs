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

use std::collections::HashMap;
use std::error::Error;
use std::fs::read_dir;
use std::path::Path;

use rs_transport::dimacs;
use rs_transport::{solve, CycleSearch, Pricing, SolutionState, Strategy, TransportSimplex};
use rs_transport::{solve_initial, Allocation};

fn read_values() -> Result<HashMap<String, i64>, Box<dyn Error>> {
    let mut values = HashMap::new();
    for entry in read_dir(Path::new("tests/transport"))? {
        let entry = entry?;
        if entry.path().extension().map(|ext| ext == "sol").unwrap_or(false) {
            let (value, _) = dimacs::transport::read_solution_from_file::<i64>(&entry.path().to_string_lossy())?;
            if let Some(file_stem) = entry.path().file_stem().map(|s| s.to_string_lossy().to_string()) {
                values.insert(file_stem, value);
            }
        }
    }
    Ok(values)
}

#[test]
fn test_transport_simplex() -> Result<(), Box<dyn Error>> {
    let values = read_values()?;
    let mut ninstances = 0;

    for entry in read_dir(Path::new("tests/transport"))? {
        let entry = entry?;
        if entry.path().extension().map(|ext| ext != "tp").unwrap_or(true) {
            continue;
        }

        let value = entry
            .path()
            .file_stem()
            .and_then(|s| values.get(s.to_string_lossy().as_ref()))
            .copied()
            .unwrap_or_else(|| panic!("Can't find solution file for {:?}", entry.path()));

        let problem = dimacs::transport::read_from_file::<i64>(&entry.path().to_string_lossy())?;
        let (problem, _) = problem.balance();

        for &strategy in &[Strategy::NorthwestCorner, Strategy::Vogel, Strategy::LeastCost] {
            let (start, _) = solve_initial(&problem, strategy)?;
            for &(pricing, search) in &[
                (Pricing::Potentials, CycleSearch::Restricted),
                (Pricing::Potentials, CycleSearch::ZigZag),
                (Pricing::SteppingStone, CycleSearch::ZigZag),
            ] {
                let mut spx = TransportSimplex::new(problem.costs().clone(), start.clone())?;
                spx.pricing = pricing;
                spx.search = search;
                assert_eq!(spx.solve()?, SolutionState::Optimal);
                assert_eq!(
                    spx.value(),
                    value,
                    "{:?}: {:?}/{:?}/{:?}",
                    entry.path(),
                    strategy,
                    pricing,
                    search
                );
                check_feasible(spx.allocation(), problem.supply(), problem.demand());
            }
        }
        ninstances += 1;
    }

    assert_eq!(ninstances, values.len());

    Ok(())
}

#[test]
fn test_solution_files_are_optimal() -> Result<(), Box<dyn Error>> {
    for name in &["scenario1", "scenario2", "textbook", "second", "unbalanced"] {
        let problem = dimacs::transport::read_from_file::<i64>(&format!("tests/transport/{}.tp", name))?;
        let (value, flows) = dimacs::transport::read_solution_from_file::<i64>(&format!("tests/transport/{}.sol", name))?;

        let (solution, _) = solve(problem.clone(), Strategy::Vogel)?;
        assert_eq!(solution.cost, value);

        // the solution files refer to the balanced problem
        let (balanced, _) = problem.balance();
        let mut alloc = Allocation::new(balanced.num_origins(), balanced.num_destinations());
        for (i, j, q) in flows {
            alloc.allocate(i, j, q);
        }
        assert_eq!(alloc.cost(balanced.costs()), value);
        check_feasible(&alloc, balanced.supply(), balanced.demand());
    }

    Ok(())
}

#[test]
fn test_write_read_problem() -> Result<(), Box<dyn Error>> {
    let problem = dimacs::transport::read_from_file::<i64>("tests/transport/textbook.tp")?;
    let mut buf = Vec::new();
    dimacs::transport::write(&mut buf, &problem)?;
    let copy = dimacs::transport::read::<_, i64>(buf.as_slice())?;
    assert_eq!(copy, problem);
    Ok(())
}

fn check_feasible(alloc: &Allocation<i64>, supply: &[i64], demand: &[i64]) {
    for (i, &s) in supply.iter().enumerate() {
        assert_eq!(alloc.row_sum(i), s);
    }
    for (j, &d) in demand.iter().enumerate() {
        assert_eq!(alloc.col_sum(j), d);
    }
}
