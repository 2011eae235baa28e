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

use rs_transport::basis::{check_independence, is_degenerate};
use rs_transport::{optimize, solve, solve_initial};
use rs_transport::{Allocation, Balancing, Cell, Matrix, Problem, SolutionState, Step, Strategy};

fn scenario1() -> Problem<i64> {
    Problem::from_rows(
        vec![vec![12, 13, 4, 6], vec![6, 4, 10, 11], vec![10, 9, 12, 4]],
        vec![500, 700, 800],
        vec![400, 900, 200, 500],
    )
    .unwrap()
}

fn scenario2() -> Problem<i64> {
    Problem::from_rows(
        vec![vec![3, 2, 7, 6], vec![7, 5, 2, 3], vec![2, 5, 4, 5]],
        vec![5000, 6000, 2500],
        vec![6000, 4000, 2000, 1500],
    )
    .unwrap()
}

fn check_sums(alloc: &Allocation<i64>, problem: &Problem<i64>) {
    for i in 0..problem.num_origins() {
        assert_eq!(alloc.row_sum(i), problem.supply()[i]);
    }
    for j in 0..problem.num_destinations() {
        assert_eq!(alloc.col_sum(j), problem.demand()[j]);
    }
}

#[test]
fn scenario1_northwest() {
    let p = scenario1();
    let (start, _) = solve_initial(&p, Strategy::NorthwestCorner).unwrap();
    assert_eq!(
        start.quantities().to_rows(),
        vec![vec![400, 100, 0, 0], vec![0, 700, 0, 0], vec![0, 100, 200, 500]]
    );

    let sol = optimize(p.costs(), start).unwrap();
    assert_eq!(sol.state, SolutionState::Optimal);
    assert_eq!(sol.cost, 12000);
    check_sums(&sol.allocation, &p);
}

#[test]
fn scenario2_vogel_not_worse() {
    let p = scenario2();
    let (nw, _) = solve_initial(&p, Strategy::NorthwestCorner).unwrap();
    let (vam, _) = solve_initial(&p, Strategy::Vogel).unwrap();
    assert!(vam.cost(p.costs()) <= nw.cost(p.costs()));

    let from_nw = optimize(p.costs(), nw).unwrap();
    let from_vam = optimize(p.costs(), vam).unwrap();
    assert_eq!(from_nw.cost, 39500);
    assert_eq!(from_vam.cost, 39500);
    assert!(from_vam.iterations <= from_nw.iterations);
}

#[test]
fn scenario3_dummy_destination() {
    let p = Problem::from_rows(vec![vec![1], vec![2]], vec![10, 20], vec![25]).unwrap();
    for &strategy in &[Strategy::NorthwestCorner, Strategy::Vogel, Strategy::LeastCost] {
        let (sol, balancing) = solve(p.clone(), strategy).unwrap();
        assert_eq!(balancing, Balancing::DummyDestination(5));
        assert_eq!(sol.allocation.num_cols(), 2);
        assert_eq!(sol.allocation.col_sum(1), 5);
        assert_eq!(sol.cost, 40);
    }
}

#[test]
fn scenario4_degenerate() {
    let p = Problem::from_rows(vec![vec![4, 4], vec![4, 4]], vec![5, 5], vec![5, 5]).unwrap();
    let (start, _) = solve_initial(&p, Strategy::NorthwestCorner).unwrap();
    assert_eq!(start.num_basic(), 2);
    assert!(is_degenerate(&start));
    let cost = start.cost(p.costs());

    let sol = optimize(p.costs(), start).unwrap();
    let fixes = sol
        .trace
        .iter()
        .filter_map(|step| match step {
            Step::Degeneracy { cell, allocation } => Some((*cell, allocation.cost(p.costs()))),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(fixes, vec![((0, 1), cost)]);
    assert_eq!(sol.allocation[(0, 1)], Cell::Degenerate);
    assert_eq!(sol.cost, cost);
    assert!(check_independence(&sol.allocation).independent);
}

#[test]
fn scenario4_single_cell() {
    // supply and demand are exhausted by the first cell
    let p = Problem::from_rows(vec![vec![4, 4], vec![4, 4]], vec![10, 0], vec![10, 0]).unwrap();
    let (start, _) = solve_initial(&p, Strategy::NorthwestCorner).unwrap();
    assert_eq!(start.num_basic(), 1);

    let sol = optimize(p.costs(), start).unwrap();
    let fixes = sol
        .trace
        .iter()
        .filter(|step| matches!(step, Step::Degeneracy { .. }))
        .count();
    assert_eq!(fixes, 2);
    assert_eq!(sol.cost, 40);
    assert_eq!(sol.allocation.num_basic(), 3);
}

#[test]
fn feasible_and_monotone_trace() {
    for p in &[scenario1(), scenario2()] {
        let (start, _) = solve_initial(p, Strategy::NorthwestCorner).unwrap();
        let sol = optimize(p.costs(), start).unwrap();

        let mut last = None;
        for step in &sol.trace {
            if let Step::Iteration { allocation, cost, .. } = step {
                check_sums(allocation, p);
                assert_eq!(allocation.cost(p.costs()), *cost);
                if let Some(last) = last {
                    assert!(*cost <= last);
                }
                last = Some(*cost);
            }
        }
        assert_eq!(last, Some(sol.cost));
    }
}

#[test]
fn float_quantities() {
    let p: Problem<f64> = Problem::from_rows(
        vec![vec![12.0, 13.0, 4.0, 6.0], vec![6.0, 4.0, 10.0, 11.0], vec![10.0, 9.0, 12.0, 4.0]],
        vec![5.0, 7.0, 8.0],
        vec![4.0, 9.0, 2.0, 5.0],
    )
    .unwrap();
    let (sol, _) = solve(p, Strategy::NorthwestCorner).unwrap();
    assert_eq!(sol.state, SolutionState::Optimal);
    assert!((sol.cost - 120.0).abs() < 1e-9);
}

#[test]
fn float_dummy_origin() {
    let p: Problem<f64> = Problem::from_rows(vec![vec![1.5, 2.5]], vec![2.0], vec![1.25, 1.25]).unwrap();
    let (sol, balancing) = solve(p, Strategy::LeastCost).unwrap();
    assert_eq!(balancing, Balancing::DummyOrigin(0.5));
    assert_eq!(sol.allocation.num_rows(), 2);
    // the real origin serves the cheap destination first
    assert_eq!(sol.allocation.quantity(0, 0), 1.25);
    assert_eq!(sol.allocation.quantity(0, 1), 0.75);
    assert!((sol.cost - (1.25 * 1.5 + 0.75 * 2.5)).abs() < 1e-9);
}

#[test]
fn float_vogel_with_dummy_destination() {
    let p: Problem<f64> = Problem::from_rows(vec![vec![0.3, 0.6]], vec![0.5], vec![0.1, 0.3]).unwrap();
    let (sol, balancing) = solve(p, Strategy::Vogel).unwrap();
    match balancing {
        Balancing::DummyDestination(excess) => assert!((excess - 0.1).abs() < 1e-9),
        b => panic!("unexpected balancing {:?}", b),
    }
    assert_eq!(sol.state, SolutionState::Optimal);
    assert!((sol.allocation.quantity(0, 0) - 0.1).abs() < 1e-9);
    assert!((sol.allocation.quantity(0, 1) - 0.3).abs() < 1e-9);
    assert!((sol.cost - 0.21).abs() < 1e-9);
}

#[test]
fn float_balancing_with_rounding() {
    // The dummy demand 1.8 - 0.4 does not sum back to 1.8 exactly.
    for &strategy in &[Strategy::NorthwestCorner, Strategy::Vogel, Strategy::LeastCost] {
        let p: Problem<f64> =
            Problem::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]], vec![0.9, 0.2, 0.7], vec![0.4]).unwrap();
        let (sol, balancing) = solve(p, strategy).unwrap();
        match balancing {
            Balancing::DummyDestination(excess) => assert!((excess - 1.4).abs() < 1e-9),
            b => panic!("unexpected balancing {:?}", b),
        }
        assert_eq!(sol.state, SolutionState::Optimal, "{:?}", strategy);
        assert!((sol.allocation.quantity(0, 0) - 0.4).abs() < 1e-9, "{:?}", strategy);
        assert!((sol.cost - 0.4).abs() < 1e-9, "{:?}", strategy);
    }
}

#[test]
fn empty_problem() {
    let p: Problem<i32> = Problem::new(Matrix::new(0, 0, 0), vec![], vec![]).unwrap();
    let (sol, balancing) = solve(p, Strategy::Vogel).unwrap();
    assert!(balancing.is_balanced());
    assert_eq!(sol.state, SolutionState::Optimal);
    assert_eq!(sol.cost, 0);
}

#[cfg(feature = "serialize")]
#[test]
fn serialize_solution() {
    let (sol, _) = solve(scenario1(), Strategy::Vogel).unwrap();
    let json = serde_json::to_string(&sol).unwrap();
    let copy: rs_transport::Solution<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(copy, sol);
}
