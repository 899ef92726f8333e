use itertools::Itertools;

use super::new_board;
use super::Board;
use crate::puzzle::Puzzle;
use crate::Constraint;
use crate::ConstraintOperationError;
use crate::Csp;
use crate::VariableId;

/// The grid of the puzzle, with a binary not-equal constraint between every pair of cells which
/// share a row or a column. The cages are not modelled.
pub fn binary_ne_grid(puzzle: &Puzzle) -> Result<(Csp, Board), ConstraintOperationError> {
    let size = puzzle.size();
    let mut csp = Csp::new("binary-not-equal-grid");
    let board = new_board(&mut csp, size);

    let not_equal = (1..=size as i32).permutations(2).collect::<Vec<_>>();

    for (index, line) in lines(&board).enumerate() {
        let kind = if index < size { "row" } else { "col" };

        for (&a, &b) in line.iter().tuple_combinations() {
            let name = format!("{kind}-{}-{}", csp.variable_name(a), csp.variable_name(b));
            let _ = csp.add_constraint(Constraint::new(name, [a, b], &not_equal))?;
        }
    }

    Ok((csp, board))
}

/// The grid of the puzzle, with an all-different constraint over every row and every column.
/// The cages are not modelled.
pub fn nary_ad_grid(puzzle: &Puzzle) -> Result<(Csp, Board), ConstraintOperationError> {
    let size = puzzle.size();
    let mut csp = Csp::new("all-different-grid");
    let board = new_board(&mut csp, size);

    let all_different = (1..=size as i32).permutations(size).collect::<Vec<_>>();

    for (index, line) in lines(&board).enumerate() {
        let name = if index < size {
            format!("row-{}", index + 1)
        } else {
            format!("col-{}", index - size + 1)
        };

        let _ = csp.add_constraint(Constraint::new(name, line, &all_different))?;
    }

    Ok((csp, board))
}

/// The rows of the board followed by its columns.
fn lines(board: &Board) -> impl Iterator<Item = Vec<VariableId>> + '_ {
    let rows = board.iter().cloned();
    let columns = (0..board.len())
        .map(move |column| board.iter().map(|row| row[column]).collect::<Vec<_>>());

    rows.chain(columns)
}
