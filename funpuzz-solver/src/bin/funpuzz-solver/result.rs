use funpuzz_solver::puzzle::PuzzleParseError;
use funpuzz_solver::ConstraintOperationError;
use thiserror::Error;

pub(crate) type FunPuzzResult<T> = Result<T, FunPuzzError>;

#[derive(Error, Debug)]
pub(crate) enum FunPuzzError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("The puzzle file was invalid, more details: {0}")]
    InvalidPuzzle(#[from] PuzzleParseError),
    #[error("Failed to build the model, more details: {0}")]
    InvalidModel(#[from] ConstraintOperationError),
}
