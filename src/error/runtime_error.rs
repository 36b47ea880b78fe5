use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while a program runs.
pub enum RuntimeError {
    /// An operator needed more operands than the stack held.
    #[error("{operator}: stack underflow (needs {needed}, found {found}).")]
    StackUnderflow {
        /// Spelling of the operator.
        operator: &'static str,
        /// Number of operands the operator consumes.
        needed:   usize,
        /// Number of values on the stack.
        found:    usize,
    },
    /// An operand had a kind the operator does not accept.
    #[error("Type mismatch: {details}")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
    },
    /// Integer division or remainder with a zero divisor.
    #[error("Integer divide by zero: {lhs} / {rhs}")]
    DivideByZero {
        /// The dividend, rendered in its display format.
        lhs: String,
        /// The divisor, rendered in its display format.
        rhs: String,
    },
    /// An operand lies outside the operator's domain.
    #[error("{details}")]
    Domain {
        /// Which precondition was violated.
        details: String,
    },
    /// `cast` or `as` was given a name that is neither a kind nor a format.
    #[error("Unknown cast target '{name}'.")]
    UnknownCastTarget {
        /// The unrecognised name.
        name: String,
    },
    /// Writing output for `end`, `sep` or `info` failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl RuntimeError {
    /// Builds a [`RuntimeError::TypeMismatch`] for an operator that rejected
    /// an operand kind.
    pub(crate) fn type_mismatch(operator: &str, found: &str) -> Self {
        Self::TypeMismatch { details: format!("{operator}: unexpected {found} operand") }
    }
}
