//! Errors from reading puzzle inputs.

use thiserror::Error;

use crate::point::Point;

/// The puzzle input could not be understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("unexpected {found:?} at {point}")]
    UnexpectedChar { found: char, point: Point },

    /// Line and column are 1-based.
    #[error("unknown direction {found:?} at line {line}, column {column}")]
    UnknownDirection {
        found: String,
        line: usize,
        column: usize,
    },
}
