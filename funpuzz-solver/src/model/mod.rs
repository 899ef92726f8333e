//! Builders which turn a [`Puzzle`] into a [`Csp`].
//!
//! Every builder creates one variable per cell, with domain `1..=n`, in row-major order and
//! returns it together with the [`Board`] of those variables.
mod cages;
mod grid;

use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

pub use cages::cage_tuples;
pub use grid::binary_ne_grid;
pub use grid::nary_ad_grid;

use crate::puzzle::Cage;
use crate::puzzle::Puzzle;
use crate::Constraint;
use crate::ConstraintOperationError;
use crate::Csp;
use crate::VariableId;

/// The variables of the cells, indexed as `board[row][column]`.
pub type Board = Vec<Vec<VariableId>>;

/// How the row and column constraints of the grid are encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GridEncoding {
    /// A binary not-equal constraint between every pair of cells in a row or a column.
    #[default]
    BinaryNotEqual,
    /// A single all-different constraint per row and per column.
    AllDifferent,
}

impl Display for GridEncoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GridEncoding::BinaryNotEqual => write!(f, "binary-not-equal"),
            GridEncoding::AllDifferent => write!(f, "all-different"),
        }
    }
}

/// The full model of the puzzle: the grid encoded with `encoding`, plus one table constraint per
/// cage.
pub fn caged_csp_model(
    puzzle: &Puzzle,
    encoding: GridEncoding,
) -> Result<(Csp, Board), ConstraintOperationError> {
    let (mut csp, board) = match encoding {
        GridEncoding::BinaryNotEqual => binary_ne_grid(puzzle)?,
        GridEncoding::AllDifferent => nary_ad_grid(puzzle)?,
    };

    for cage in puzzle.cages() {
        let constraint = match cage {
            Cage::Given { cell, value } => Constraint::unary(
                format!("given-{cell}"),
                board[cell.row][cell.column],
                [*value],
            ),
            Cage::Arithmetic {
                cells,
                target,
                operation,
            } => {
                let name = format!("cage-{}", cells.iter().join("-"));
                let scope = cells.iter().map(|cell| board[cell.row][cell.column]);
                let tuples = cage_tuples(puzzle.size(), cells, *target, *operation);

                Constraint::new(name, scope, tuples)
            }
        };

        let _ = csp.add_constraint(constraint)?;
    }

    Ok((csp, board))
}

/// Create the variables of an empty grid.
fn new_board(csp: &mut Csp, size: usize) -> Board {
    let domain = 1..=size as i32;

    (0..size)
        .map(|row| {
            (0..size)
                .map(|column| {
                    csp.new_variable(format!("cell{}{}", row + 1, column + 1), domain.clone())
                })
                .collect()
        })
        .collect()
}
