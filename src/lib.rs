//! # hd
//!
//! hd is a hex/decimal/ASCII calculator built around a small Reverse Polish
//! Notation interpreter. Programs are whitespace-separated literals,
//! constants and operators evaluated against a stack of typed values at a
//! chosen bit width.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::debug;

use crate::{
    config::{BitWidth, Config},
    error::Error,
    interpreter::{
        evaluator::core::{Evaluator, Session},
        width::{W8, W16, W32, W64, Width},
    },
};

/// Evaluation options.
///
/// Holds the `Config` passed to every evaluation and the `BitWidth` selector
/// that picks which width the interpreter is instantiated at.
pub mod config;
/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while lexing a field,
/// building a program, or executing it. Every variant carries the offending
/// text or operands so that callers can report precise messages.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, builder, evaluator).
/// - Combines them into a single `Error` returned by the public entry points.
pub mod error;
/// Orchestrates the lexer, value model, operator registry and evaluator.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, values, operators and the stack
///   machine.
/// - Provides the width-generic building blocks behind [`evaluate`].
pub mod interpreter;
/// General utilities shared by the interpreter and the CLI.
///
/// # Responsibilities
/// - Wrapping integer helpers and bit manipulation.
/// - ASCII names and the ASCII table.
/// - Stripping magnitude separators from raw input.
pub mod util;

/// Evaluates an RPN program given as whitespace-separated fields and returns
/// the rendered value left on top of the stack.
///
/// Each field may itself hold several tokens. Output from `end`, `sep` and
/// `info` is written to `out`. An empty stack at the end yields `None`.
///
/// # Errors
/// Returns an error if a field cannot be lexed, or if any step fails while
/// running.
///
/// # Parameters
/// - `fields`: The program, one or more tokens per field.
/// - `config`: Bit width and output options.
/// - `out`: Sink for the output operators.
///
/// # Returns
/// The rendered result, or `None` when the program leaves the stack empty.
///
/// # Example
/// ```
/// use hd::{config::Config, evaluate};
///
/// let fields = ["3", "4", "add", "dec", "as"].map(String::from);
/// let result = evaluate(&fields, &Config::default(), &mut std::io::sink()).unwrap();
/// assert_eq!(result.as_deref(), Some("7"));
///
/// // `div` by an integer zero is an error, not a crash.
/// let fields = ["5", "0", "div"].map(String::from);
/// assert!(evaluate(&fields, &Config::default(), &mut std::io::sink()).is_err());
/// ```
pub fn evaluate(fields: &[String],
                config: &Config,
                out: &mut dyn Write)
                -> Result<Option<String>, Error> {
    match config.width {
        BitWidth::W8 => run_program::<W8>(fields, config, out),
        BitWidth::W16 => run_program::<W16>(fields, config, out),
        BitWidth::W32 => run_program::<W32>(fields, config, out),
        BitWidth::W64 => run_program::<W64>(fields, config, out),
    }
}

fn run_program<W: Width>(fields: &[String],
                         config: &Config,
                         out: &mut dyn Write)
                         -> Result<Option<String>, Error> {
    let mut evaluator = Evaluator::<W>::new(Session::new(config));
    for field in fields {
        evaluator.push_source(field)?;
    }
    debug!(steps = evaluator.program().len(), width = %config.width, "built program");

    let long_form = evaluator.session().long_form;
    let result = evaluator.run(out)?;
    Ok(result.map(|value| value.render(long_form)))
}
