use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that can occur while lexing and building a program.
pub enum ParseError {
    /// No token could be recognised at the given position.
    #[error("Lex error at offset {position}: could not recognise '{text}'.")]
    Lex {
        /// The unrecognised text.
        text:     String,
        /// Byte offset of the text inside the field being lexed.
        position: usize,
    },
    /// A based literal has more significant digits than any supported width
    /// can hold.
    #[error("Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The offending literal.
        literal: String,
    },
    /// A based literal sets bits above the active bit width.
    #[error("Literal '{literal}' does not fit in {bits} bits.")]
    LiteralTooWide {
        /// The offending literal.
        literal: String,
        /// The active bit width.
        bits:    u32,
    },
    /// A run of operator symbols matched no registered spelling.
    #[error("Unknown operator '{name}'.")]
    UnknownOperator {
        /// The unrecognised spelling.
        name: String,
    },
    /// Parentheses only belong to infix expressions.
    #[error("Unexpected '{paren}': parentheses are not valid in RPN programs.")]
    UnexpectedParen {
        /// The parenthesis that was found.
        paren: char,
    },
    /// Growing the program failed to allocate.
    #[error("Out of memory while building the program ({details}).")]
    OutOfMemory {
        /// Details of the failed allocation.
        details: String,
    },
}
