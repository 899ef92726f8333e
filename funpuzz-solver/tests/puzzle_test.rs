#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use std::ops::ControlFlow;

use funpuzz_solver::branching::value_selection::InDomainMin;
use funpuzz_solver::branching::value_selection::ValueSelection;
use funpuzz_solver::branching::variable_selection::InputOrder;
use funpuzz_solver::branching::variable_selection::VariableSelection;
use funpuzz_solver::model::binary_ne_grid;
use funpuzz_solver::model::caged_csp_model;
use funpuzz_solver::model::nary_ad_grid;
use funpuzz_solver::model::Board;
use funpuzz_solver::model::GridEncoding;
use funpuzz_solver::propagation::GeneralisedArcConsistency;
use funpuzz_solver::propagation::PropagatorKind;
use funpuzz_solver::search::termination::Indefinite;
use funpuzz_solver::search::BacktrackingSearch;
use funpuzz_solver::search::EnumerationStatus;
use funpuzz_solver::search::SatisfactionResult;
use funpuzz_solver::search::SearchOptions;
use funpuzz_solver::Csp;
use funpuzz_solver::Solution;
use helpers::check_solution;
use helpers::load_puzzle;
use helpers::Grid;

const PROPAGATORS: [PropagatorKind; 3] = [
    PropagatorKind::Backtracking,
    PropagatorKind::ForwardChecking,
    PropagatorKind::Gac,
];

const ENCODINGS: [GridEncoding; 2] = [GridEncoding::BinaryNotEqual, GridEncoding::AllDifferent];

fn to_grid(board: &Board, solution: &Solution) -> Grid {
    board
        .iter()
        .map(|row| row.iter().map(|&cell| solution.value(cell)).collect())
        .collect()
}

fn options(propagator: PropagatorKind) -> SearchOptions {
    SearchOptions {
        propagator,
        variable_selection: VariableSelection::InputOrder,
        value_selection: ValueSelection::InDomainMin,
        ..Default::default()
    }
}

fn all_solutions(csp: &mut Csp, board: &Board, options: SearchOptions) -> Vec<Grid> {
    let mut search = BacktrackingSearch::new(csp, options);
    let mut solutions = Vec::new();

    let status = search.enumerate_solutions(csp, &mut Indefinite, |solution| {
        solutions.push(to_grid(board, solution));
        ControlFlow::Continue(())
    });
    assert_eq!(status, EnumerationStatus::Exhausted);

    solutions
}

#[test]
fn every_propagator_solves_the_puzzle() {
    let puzzle = load_puzzle("unique_4x4.txt");

    for encoding in ENCODINGS {
        for propagator in PROPAGATORS {
            let (mut csp, board) = caged_csp_model(&puzzle, encoding).expect("valid model");
            let mut search = BacktrackingSearch::new(&csp, options(propagator));

            let SatisfactionResult::Satisfiable(solution) =
                search.satisfy(&mut csp, &mut Indefinite)
            else {
                panic!("{propagator} with {encoding} did not find a solution");
            };

            assert_eq!(
                to_grid(&board, &solution),
                vec![
                    vec![1, 2, 3, 4],
                    vec![3, 4, 1, 2],
                    vec![4, 1, 2, 3],
                    vec![2, 3, 4, 1],
                ]
            );
        }
    }
}

#[test]
fn random_value_order_finds_a_valid_solution() {
    let puzzle = load_puzzle("unique_4x4.txt");

    for seed in [1, 7, 42] {
        let (mut csp, board) =
            caged_csp_model(&puzzle, GridEncoding::BinaryNotEqual).expect("valid model");
        let options = SearchOptions {
            value_selection: ValueSelection::InDomainRandom,
            random_seed: seed,
            ..Default::default()
        };
        let mut search = BacktrackingSearch::new(&csp, options);

        let SatisfactionResult::Satisfiable(solution) = search.satisfy(&mut csp, &mut Indefinite)
        else {
            panic!("no solution with seed {seed}");
        };

        check_solution(&puzzle, &to_grid(&board, &solution), true).expect("valid solution");
    }
}

#[test]
fn every_propagator_enumerates_the_same_solutions() {
    let puzzle = load_puzzle("two_solutions_3x3.txt");

    for encoding in ENCODINGS {
        for propagator in PROPAGATORS {
            let (mut csp, board) = caged_csp_model(&puzzle, encoding).expect("valid model");

            let solutions = all_solutions(&mut csp, &board, options(propagator));

            assert_eq!(
                solutions,
                vec![
                    vec![vec![1, 3, 2], vec![2, 1, 3], vec![3, 2, 1]],
                    vec![vec![2, 1, 3], vec![1, 3, 2], vec![3, 2, 1]],
                ],
                "{propagator} with {encoding}"
            );
        }
    }
}

#[test]
fn grid_models_count_the_latin_squares() {
    let puzzle = load_puzzle("two_solutions_3x3.txt");

    for propagator in PROPAGATORS {
        let (mut csp, board) = binary_ne_grid(&puzzle).expect("valid model");
        let binary = all_solutions(&mut csp, &board, options(propagator));

        let (mut csp, board) = nary_ad_grid(&puzzle).expect("valid model");
        let nary = all_solutions(&mut csp, &board, options(propagator));

        assert_eq!(binary.len(), 12);
        assert_eq!(binary, nary);
        for grid in &binary {
            check_solution(&puzzle, grid, false).expect("a latin square");
        }
    }
}

#[test]
fn contradicting_givens_are_unsatisfiable() {
    let puzzle = load_puzzle("unsatisfiable_2x2.txt");

    for encoding in ENCODINGS {
        for propagator in PROPAGATORS {
            let (mut csp, _) = caged_csp_model(&puzzle, encoding).expect("valid model");
            let mut search = BacktrackingSearch::new(&csp, options(propagator));

            assert_eq!(
                search.satisfy(&mut csp, &mut Indefinite),
                SatisfactionResult::Unsatisfiable,
                "{propagator} with {encoding}"
            );
        }
    }
}

#[test]
fn stronger_propagation_explores_fewer_nodes() {
    let puzzle = load_puzzle("unique_4x4.txt");

    let decisions = |propagator| {
        let (mut csp, _) =
            caged_csp_model(&puzzle, GridEncoding::BinaryNotEqual).expect("valid model");
        let mut search = BacktrackingSearch::new(&csp, options(propagator));
        let _ = search.satisfy(&mut csp, &mut Indefinite);
        search.statistics().num_decisions
    };

    let backtracking = decisions(PropagatorKind::Backtracking);
    let forward_checking = decisions(PropagatorKind::ForwardChecking);
    let gac = decisions(PropagatorKind::Gac);

    assert!(gac <= forward_checking, "{gac} > {forward_checking}");
    assert!(forward_checking <= backtracking, "{forward_checking} > {backtracking}");
}

#[test]
fn deduplicating_gac_reaches_the_same_solutions() {
    let puzzle = load_puzzle("two_solutions_3x3.txt");
    let (mut csp, board) =
        caged_csp_model(&puzzle, GridEncoding::AllDifferent).expect("valid model");
    let variables = csp.variables().collect::<Vec<_>>();

    let mut search = BacktrackingSearch::with_components(
        Box::new(GeneralisedArcConsistency::with_deduplication()),
        Box::new(InputOrder::new(&variables)),
        Box::new(InDomainMin),
    );

    let mut solutions = Vec::new();
    let _ = search.enumerate_solutions(&mut csp, &mut Indefinite, |solution| {
        solutions.push(to_grid(&board, solution));
        ControlFlow::Continue(())
    });

    let expected = all_solutions(&mut csp, &board, options(PropagatorKind::Gac));
    assert_eq!(solutions, expected);
}
