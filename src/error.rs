// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use thiserror::Error;

/// Failures of a resultant construction.
///
/// Degenerate algebraic outcomes (a zero determinant, an empty column
/// partition, a submatrix with more columns than rows) are not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResultantError {
    /// The caller supplied input the construction is not defined for,
    /// e.g. a Dixon system whose polynomial count is not the variable count plus one.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An expected-exact division left a remainder, or a bounded search ran out.
    #[error("internal consistency error: {0}")]
    InternalConsistency(String),
    #[error("determinant of a non-square {rows}x{cols} matrix")]
    NonSquareMatrix { rows: usize, cols: usize },
}

impl ResultantError {
    pub(crate) fn invalid_input<T: Into<String>>(message: T) -> Self {
        ResultantError::InvalidInput(message.into())
    }
    pub(crate) fn internal<T: Into<String>>(message: T) -> Self {
        ResultantError::InternalConsistency(message.into())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("error parsing polynomial at offset {position}: {message}")]
pub struct ParsePolynomialError {
    pub position: usize,
    pub message: String,
}

impl ParsePolynomialError {
    pub(crate) fn new<T: Into<String>>(position: usize, message: T) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}
