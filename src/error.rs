//! Errors raised while composing programs.

use thiserror::Error;

/// Errors that can occur when putting a program together.
///
/// Most malformed compositions are rejected by the compiler. What remains are
/// checks on parts supplied at runtime, such as closures handed to
/// [`FnProgram::builder`](crate::FnProgram::builder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ComposeError {
    #[error("program.{field} must be provided")]
    MissingField { field: &'static str },
}
