use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while lexing a field or turning the
/// token stream into program steps. These are detected before any step runs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program executes:
/// stack underflow, type mismatches, division by zero, domain violations and
/// unrecognised cast targets.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while lexing, building or running a program.
///
/// Embedding callers receive this instead of a process exit, so a failed
/// evaluation can be reported and recovered from.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be turned into program steps.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A program step failed while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
