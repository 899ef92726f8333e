//! # FunPuzz solver
//! Models FunPuzz puzzles as constraint satisfaction problems and solves them with the
//! propagation engine of [`funpuzz_core`].
//!
//! A FunPuzz puzzle is an n×n grid which has to be filled with the values `1..=n` such that every
//! row and every column contains each value exactly once. The grid is partitioned into cages;
//! the values of the cells in a cage have to produce the target of the cage under the operation
//! of the cage.
//!
//! # Example
//! ```rust
//! # use funpuzz_solver::model::caged_csp_model;
//! # use funpuzz_solver::model::GridEncoding;
//! # use funpuzz_solver::puzzle::Puzzle;
//! # use funpuzz_solver::search::BacktrackingSearch;
//! # use funpuzz_solver::search::SatisfactionResult;
//! # use funpuzz_solver::search::SearchOptions;
//! # use funpuzz_solver::search::termination::Indefinite;
//! let puzzle: Puzzle = "[[3],[11,21,3,0],[12,22,2,1],[13,23,33,6,3],[31,32,5,0]]"
//!     .parse()
//!     .expect("valid puzzle");
//!
//! let (mut csp, board) =
//!     caged_csp_model(&puzzle, GridEncoding::BinaryNotEqual).expect("valid model");
//!
//! let mut search = BacktrackingSearch::new(&csp, SearchOptions::default());
//! let SatisfactionResult::Satisfiable(solution) = search.satisfy(&mut csp, &mut Indefinite) else {
//!     panic!("the puzzle has a solution");
//! };
//!
//! // The first cage adds up to 3.
//! assert_eq!(solution.value(board[0][0]) + solution.value(board[1][0]), 3);
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable the more expensive assertions in the core.
pub mod model;
pub mod puzzle;

pub use funpuzz_core::*;
