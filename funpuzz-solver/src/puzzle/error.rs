use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleParseError {
    #[error("the instance is not a list of integer lists: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("missing puzzle header, expected the grid size as '[n]'")]
    MissingHeader,

    #[error("the grid size {0} is not in the range 1..=9")]
    SizeOutOfRange(i64),

    #[error("cage {index} is malformed: {reason}")]
    MalformedCage { index: usize, reason: String },

    #[error("cell {0} is outside of the grid")]
    CellOutsideGrid(i64),

    #[error("'{0}' is not a known cage operation")]
    UnknownOperation(i64),

    #[error("cell {0} is part of more than one cage")]
    CellInTwoCages(i64),
}
