//! Error types for the expression seams.

use thiserror::Error;

/// Failure to parse parameter text into an expression tree.
///
/// The refactoring operations never surface this error: a parameter whose
/// text does not parse is skipped exactly like one the validator rejects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// The source text is not a well-formed expression.
    #[error("syntax error at byte {offset}: {message}")]
    Syntax {
        /// Byte offset of the first offending character.
        offset: usize,
        /// Human-readable description.
        message: String,
    },
}
