//! The FunPuzz instance format.
//!
//! An instance is a bracketed list whose first element is the header `[n]` with the grid size,
//! followed by the cages. Cells are written as two-digit codes `rc`, with the 1-based row `r`
//! and column `c`. A cage is either
//! - `[cell, value]`, which fixes the value of a single cell, or
//! - `[cell, ..., cell, target, operation]`, with operation `0` (add), `1` (subtract), `2`
//!   (divide) or `3` (multiply).
//!
//! The list is written as JSON; lines starting with `%` are comments.
mod error;
mod parser;

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use itertools::Itertools;
use log::debug;

pub use error::PuzzleParseError;

/// The largest supported grid; a cell code has one digit for its row and one for its column.
pub const MAX_SIZE: usize = 9;

/// A cell of the grid, with 0-based coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    /// Decode the two-digit cell code `rc` of an instance file.
    fn from_code(code: i64, size: usize) -> Result<Cell, PuzzleParseError> {
        let in_grid = |digit: i64| (1..=size as i64).contains(&digit);
        let (row, column) = (code / 10, code % 10);

        if !(10..100).contains(&code) || !in_grid(row) || !in_grid(column) {
            return Err(PuzzleParseError::CellOutsideGrid(code));
        }

        Ok(Cell {
            row: row as usize - 1,
            column: column as usize - 1,
        })
    }

    /// The two-digit code of the cell as used in instance files.
    pub fn code(&self) -> usize {
        (self.row + 1) * 10 + self.column + 1
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The arithmetic operation of a cage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operation {
    fn from_code(code: i64) -> Result<Operation, PuzzleParseError> {
        match code {
            0 => Ok(Operation::Add),
            1 => Ok(Operation::Subtract),
            2 => Ok(Operation::Divide),
            3 => Ok(Operation::Multiply),
            _ => Err(PuzzleParseError::UnknownOperation(code)),
        }
    }

    /// Whether the values, taken in some order, produce `target`.
    ///
    /// Subtraction and division are applied left to right, `a - b - c` and `a / b / c`; division
    /// has to be exact.
    pub fn is_satisfied_by(self, values: &[i32], target: i32) -> bool {
        let target = i64::from(target);

        match self {
            Operation::Add => values.iter().map(|&value| i64::from(value)).sum::<i64>() == target,
            Operation::Multiply => {
                values
                    .iter()
                    .map(|&value| i64::from(value))
                    .product::<i64>()
                    == target
            }
            Operation::Subtract => values.iter().enumerate().any(|(index, &first)| {
                let rest = values
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != index)
                    .map(|(_, &value)| i64::from(value))
                    .sum::<i64>();
                i64::from(first) - rest == target
            }),
            Operation::Divide => values.iter().enumerate().any(|(index, &first)| {
                let rest = values
                    .iter()
                    .enumerate()
                    .filter(|&(other, _)| other != index)
                    .map(|(_, &value)| i64::from(value))
                    .product::<i64>();
                i64::from(first) == target * rest
            }),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "+"),
            Operation::Subtract => write!(f, "-"),
            Operation::Divide => write!(f, "/"),
            Operation::Multiply => write!(f, "*"),
        }
    }
}

/// A group of cells with a constraint on their values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cage {
    /// The cell has the given value.
    Given { cell: Cell, value: i32 },
    /// The values of the cells produce `target` under `operation`.
    Arithmetic {
        cells: Vec<Cell>,
        target: i32,
        operation: Operation,
    },
}

impl Cage {
    pub fn cells(&self) -> &[Cell] {
        match self {
            Cage::Given { cell, .. } => std::slice::from_ref(cell),
            Cage::Arithmetic { cells, .. } => cells,
        }
    }
}

/// A parsed FunPuzz instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    size: usize,
    cages: Vec<Cage>,
}

impl Puzzle {
    /// The number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    fn from_lists(lists: Vec<Vec<i64>>) -> Result<Puzzle, PuzzleParseError> {
        let mut lists = lists.into_iter();

        let size = match lists.next().as_deref() {
            Some(&[size]) => size,
            _ => return Err(PuzzleParseError::MissingHeader),
        };
        if !(1..=MAX_SIZE as i64).contains(&size) {
            return Err(PuzzleParseError::SizeOutOfRange(size));
        }
        let size = size as usize;

        let mut covered = vec![false; size * size];
        let mut cages = Vec::new();

        for (index, list) in lists.enumerate() {
            let cage = parse_cage(index, &list, size)?;

            for cell in cage.cells() {
                let position = cell.row * size + cell.column;
                if covered[position] {
                    return Err(PuzzleParseError::CellInTwoCages(cell.code() as i64));
                }
                covered[position] = true;
            }

            cages.push(cage);
        }

        debug!("Read a {size}x{size} puzzle with {} cages", cages.len());

        Ok(Puzzle { size, cages })
    }
}

fn parse_cage(index: usize, list: &[i64], size: usize) -> Result<Cage, PuzzleParseError> {
    let malformed = |reason: &str| PuzzleParseError::MalformedCage {
        index,
        reason: reason.to_owned(),
    };
    let value = |raw: i64| i32::try_from(raw).map_err(|_| malformed("the target is too large"));

    match list {
        [] | [_] => Err(malformed("expected at least a cell and a value")),
        &[cell, given] => Ok(Cage::Given {
            cell: Cell::from_code(cell, size)?,
            value: value(given)?,
        }),
        [cells @ .., target, operation] => {
            let operation = Operation::from_code(*operation)?;
            let cells = cells
                .iter()
                .map(|&code| Cell::from_code(code, size))
                .collect::<Result<Vec<_>, _>>()?;

            if !cells.iter().all_unique() {
                return Err(malformed("a cell occurs more than once"));
            }

            Ok(Cage::Arithmetic {
                cells,
                target: value(*target)?,
                operation,
            })
        }
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Puzzle::from_lists(parser::parse_lists(source)?)
    }
}
