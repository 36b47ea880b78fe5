use std::io::Write;

use tracing::{debug, trace, warn};

use crate::{
    config::Config,
    error::{ParseError, RuntimeError},
    interpreter::{
        constants::ConstantTable,
        lexer::{Token, TokenKind, tokenize},
        operator::Operation,
        value::core::{Number, Value},
        width::Width,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// State owned by one evaluation: the named constants and the output
/// options.
#[derive(Debug, Clone)]
pub struct Session<W: Width> {
    /// Named constants, including any added with `save`.
    pub constants: ConstantTable<W>,
    /// Whether each applied operator and each failure is logged.
    pub verbose:   bool,
    /// Whether output is padded to the full width.
    pub long_form: bool,
}

impl<W: Width> Session<W> {
    /// Creates a session with the initial constant table for the width.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { constants: ConstantTable::new(),
               verbose:   config.verbose,
               long_form: config.long_form, }
    }
}

impl<W: Width> Default for Session<W> {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// One program step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<W: Width> {
    /// Push a literal, resolving it against the constants first.
    Push(Value<W>),
    /// Pop operands, apply an operator and push its result.
    Apply(Operation),
}

/// An RPN stack machine.
///
/// Steps are appended while building, then [`Evaluator::run`] consumes the
/// evaluator and executes them once, in order.
///
/// # Example
/// ```
/// use hd::interpreter::{
///     evaluator::core::{Evaluator, Session},
///     value::core::Value,
///     width::W64,
/// };
///
/// let mut evaluator = Evaluator::<W64>::new(Session::default());
/// evaluator.push_source("2 3 + 4 *").unwrap();
///
/// let result = evaluator.run(&mut std::io::sink()).unwrap();
/// assert_eq!(result, Some(Value::uint(20)));
/// ```
#[derive(Debug)]
pub struct Evaluator<W: Width> {
    program: Vec<Step<W>>,
    stack:   Vec<Value<W>>,
    session: Session<W>,
}

impl<W: Width> Evaluator<W> {
    /// Creates an evaluator with an empty program.
    ///
    /// # Parameters
    /// - `session`: The constants and options the program runs with.
    ///
    /// # Returns
    /// An evaluator with no steps and an empty stack.
    #[must_use]
    pub const fn new(session: Session<W>) -> Self {
        Self { program: Vec::new(),
               stack: Vec::new(),
               session }
    }

    /// The session this evaluator runs in.
    #[must_use]
    pub const fn session(&self) -> &Session<W> {
        &self.session
    }

    /// The steps built so far.
    #[must_use]
    pub fn program(&self) -> &[Step<W>] {
        &self.program
    }

    /// Appends the step a token denotes.
    ///
    /// Literals become pushes and operators become applications. The end of
    /// input adds nothing. Parentheses are rejected.
    ///
    /// # Parameters
    /// - `token`: The classified token.
    ///
    /// # Returns
    /// `Ok(())` once the step is appended. Parentheses give `UnexpectedParen`,
    /// literals too wide for the width give `LiteralTooWide`, and a failed
    /// allocation gives `OutOfMemory`.
    pub fn push_token(&mut self, token: &Token<'_>) -> Result<(), ParseError> {
        let step = match token.kind {
            TokenKind::Literal(literal) => Step::Push(Value::from_literal(&literal, token.text)?),
            TokenKind::UnaryOp(operation) | TokenKind::BinaryOp(operation) => {
                Step::Apply(operation)
            },
            TokenKind::LeftParen => return Err(ParseError::UnexpectedParen { paren: '(' }),
            TokenKind::RightParen => return Err(ParseError::UnexpectedParen { paren: ')' }),
            TokenKind::EndOfInput => return Ok(()),
        };

        self.program
            .try_reserve(1)
            .map_err(|error| ParseError::OutOfMemory { details: error.to_string() })?;
        self.program.push(step);
        Ok(())
    }

    /// Lexes a field or line and appends its steps.
    ///
    /// # Parameters
    /// - `source`: The text of one field or line.
    ///
    /// # Returns
    /// `Ok(())` once every token is appended, or the first lexing or building
    /// error.
    pub fn push_source(&mut self, source: &str) -> Result<(), ParseError> {
        for token in tokenize(source)? {
            self.push_token(&token)?;
        }
        Ok(())
    }

    /// Executes the program and returns the value left on top of the stack,
    /// if any.
    ///
    /// Output from `end`, `sep` and `info` is written to `out`. The first
    /// failing step aborts the run.
    ///
    /// # Parameters
    /// - `out`: Sink for the output operators.
    ///
    /// # Returns
    /// The top of the stack, `None` if the stack ended empty, or the first
    /// `RuntimeError`.
    pub fn run(mut self, out: &mut dyn Write) -> EvalResult<Option<Value<W>>> {
        let program = std::mem::take(&mut self.program);
        debug!(steps = program.len(), bits = W::BITS, "running program");

        let mut steps = program.into_iter().peekable();
        while let Some(step) = steps.next() {
            trace!(?step, depth = self.stack.len(), "executing step");

            match step {
                Step::Push(value) => {
                    let names_next =
                        matches!(steps.peek(), Some(Step::Apply(operation)) if operation.takes_name());
                    self.push_literal(value, names_next);
                },
                Step::Apply(operation) => {
                    if let Err(error) = self.apply(operation, out) {
                        if self.session.verbose {
                            warn!(operator = operation.name(), %error, "evaluation failed");
                        }
                        return Err(error);
                    }
                },
            }
        }

        Ok(self.stack.pop())
    }

    /// Pushes a literal. A word naming a constant is replaced by the
    /// constant's current value unless it is the name operand of the next
    /// step.
    fn push_literal(&mut self, value: Value<W>, names_next: bool) {
        let resolved = match &value.number {
            Number::String(name) if !names_next => self.session.constants.get(name).cloned(),
            _ => None,
        };
        self.stack.push(resolved.unwrap_or(value));
    }

    fn apply(&mut self, operation: Operation, out: &mut dyn Write) -> EvalResult<()> {
        let needed = operation.arity();
        if self.stack.len() < needed {
            return Err(RuntimeError::StackUnderflow { operator: operation.name(),
                                                      needed,
                                                      found: self.stack.len() });
        }

        let result = match operation {
            Operation::Unary(op) => {
                let value = self.pop(operation)?;
                let result = self.session.eval_unary(op, value, out)?;
                if op.suppresses_result() {
                    if self.session.verbose {
                        debug!(operator = operation.name(), "applied operator");
                    }
                    return Ok(());
                }
                result
            },
            Operation::Binary(op) => {
                let rhs = self.pop(operation)?;
                let lhs = self.pop(operation)?;
                self.session.eval_binary(op, lhs, rhs)?
            },
        };

        if self.session.verbose {
            debug!(operator = operation.name(), %result, "applied operator");
        }
        self.stack.push(result);
        Ok(())
    }

    fn pop(&mut self, operation: Operation) -> EvalResult<Value<W>> {
        self.stack.pop().ok_or_else(|| RuntimeError::StackUnderflow { operator: operation.name(),
                                                                      needed:   operation.arity(),
                                                                      found:    0, })
    }
}
