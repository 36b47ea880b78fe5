use logos::{Lexer, Logos};
use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::operator::{self, Operation},
};

/// Why the raw lexer rejected a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexFailure {
    /// Nothing matched.
    #[default]
    NoMatch,
    /// A based literal has more than 128 significant bits.
    TooLarge,
}

/// The raw token stream produced by `logos`.
///
/// Longest match wins, and ties go to the higher priority: literals beat
/// operator symbols, which beat bare words. A bare word is any run of
/// characters other than whitespace and parentheses, so `5x` is one word
/// rather than a number followed by a word.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexFailure)]
pub enum RawToken<'s> {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Float literals such as `2.5`, `-.5` or `1e10`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float, priority = 6)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_float, priority = 6)]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", parse_float, priority = 6)]
    Float(f64),
    /// Decimal integers with an explicit sign, such as `-5`.
    #[regex(r"[+-][0-9]+", parse_signed, priority = 5)]
    Signed(i64),
    /// Decimal integers without a sign.
    #[regex(r"[0-9]+", parse_unsigned, priority = 5)]
    Unsigned(u64),
    /// `0x` literals.
    #[regex(r"0[xX][0-9a-fA-F_]*[0-9a-fA-F][0-9a-fA-F_]*", |lex| parse_radix(lex, 16), priority = 6)]
    Hex(u128),
    /// `0o` literals.
    #[regex(r"0[oO][0-7_]*[0-7][0-7_]*", |lex| parse_radix(lex, 8), priority = 6)]
    Octal(u128),
    /// `0b` literals.
    #[regex(r"0[bB][01_]*[01][01_]*", parse_binary, priority = 6)]
    Binary(u128),
    /// A run of operator symbols such as `>=` or `&~`.
    #[regex(r"[+\-*/%^&|!~<>=;,]+", |lex| lex.slice(), priority = 3)]
    Symbol(&'s str),
    /// Anything else up to the next whitespace or parenthesis.
    #[regex(r"[^\s()]+", |lex| lex.slice(), priority = 1)]
    Word(&'s str),
}

fn parse_float<'s>(lex: &Lexer<'s, RawToken<'s>>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Accumulates decimal digits, wrapping at 64 bits.
fn decimal_wrapping(digits: &str) -> u64 {
    digits.bytes()
          .fold(0u64, |acc, digit| acc.wrapping_mul(10).wrapping_add(u64::from(digit - b'0')))
}

#[allow(clippy::cast_possible_wrap)]
fn parse_signed<'s>(lex: &Lexer<'s, RawToken<'s>>) -> i64 {
    let slice = lex.slice();
    let magnitude = decimal_wrapping(&slice[1..]) as i64;
    if slice.starts_with('-') { magnitude.wrapping_neg() } else { magnitude }
}

fn parse_unsigned<'s>(lex: &Lexer<'s, RawToken<'s>>) -> u64 {
    decimal_wrapping(lex.slice())
}

fn parse_radix<'s>(lex: &Lexer<'s, RawToken<'s>>, radix: u32) -> Result<u128, LexFailure> {
    lex.slice()[2..].chars()
                    .filter(|&c| c != '_')
                    .try_fold(0u128, |acc, c| {
                        let digit = c.to_digit(radix).ok_or(LexFailure::NoMatch)?;
                        acc.checked_mul(u128::from(radix))
                           .and_then(|acc| acc.checked_add(u128::from(digit)))
                           .ok_or(LexFailure::TooLarge)
                    })
}

/// Reads the digits right to left, setting bit `i` when the `i`-th digit from
/// the end is `1`.
fn parse_binary<'s>(lex: &Lexer<'s, RawToken<'s>>) -> Result<u128, LexFailure> {
    lex.slice()[2..].chars()
                    .rev()
                    .filter(|&c| c != '_')
                    .enumerate()
                    .try_fold(0u128, |acc, (bit, c)| match c {
                        '0' => Ok(acc),
                        '1' if bit < 128 => Ok(acc | (1 << bit)),
                        '1' => Err(LexFailure::TooLarge),
                        _ => Err(LexFailure::NoMatch),
                    })
}

/// A literal payload, before it is narrowed to a bit width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    /// A float literal.
    Float(f64),
    /// A decimal integer written with a sign.
    Signed(i64),
    /// A decimal integer written without a sign.
    Unsigned(u64),
    /// A hex, octal or binary literal.
    Based(u128),
    /// A bare word; its text is the token's text.
    Word,
}

/// What a token is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A value to push.
    Literal(Literal),
    /// An operator taking one operand.
    UnaryOp(Operation),
    /// An operator taking two operands.
    BinaryOp(Operation),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// No more input.
    EndOfInput,
}

/// A classified span of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'s> {
    /// What the span denotes.
    pub kind:       TokenKind,
    /// The source text.
    pub text:       &'s str,
    /// Binding strength for infix parsing.
    pub precedence: u16,
}

/// Precedence of parentheses in the infix grammar.
const PAREN_PRECEDENCE: u16 = 500;
/// Precedence of values in the infix grammar.
const VALUE_PRECEDENCE: u16 = 1;
/// Precedence of the end of input in the infix grammar.
const END_PRECEDENCE: u16 = 2;

impl<'s> Token<'s> {
    const fn new(kind: TokenKind, text: &'s str, precedence: u16) -> Self {
        Self { kind,
               text,
               precedence }
    }

    fn operation(operation: Operation, text: &'s str) -> Self {
        let kind = if operator::is_unary(operation) {
            TokenKind::UnaryOp(operation)
        } else {
            TokenKind::BinaryOp(operation)
        };
        Self::new(kind, text, operation.precedence())
    }

    fn literal(literal: Literal, text: &'s str) -> Self {
        Self::new(TokenKind::Literal(literal), text, VALUE_PRECEDENCE)
    }

    /// Classifies a raw token, consulting the operator registry for symbols
    /// and words.
    fn classify(raw: RawToken<'s>, text: &'s str) -> Result<Self, ParseError> {
        let token = match raw {
            RawToken::LParen => Self::new(TokenKind::LeftParen, text, PAREN_PRECEDENCE),
            RawToken::RParen => Self::new(TokenKind::RightParen, text, PAREN_PRECEDENCE),
            RawToken::Float(f) => Self::literal(Literal::Float(f), text),
            RawToken::Signed(i) => Self::literal(Literal::Signed(i), text),
            RawToken::Unsigned(u) => Self::literal(Literal::Unsigned(u), text),
            RawToken::Hex(bits) | RawToken::Octal(bits) | RawToken::Binary(bits) => {
                Self::literal(Literal::Based(bits), text)
            },
            RawToken::Symbol(symbol) => {
                let operation = operator::lookup(symbol).ok_or_else(|| {
                                    ParseError::UnknownOperator { name: symbol.to_string() }
                                })?;
                Self::operation(operation, text)
            },
            RawToken::Word(word) => match operator::lookup(word) {
                Some(operation) => Self::operation(operation, text),
                None => Self::literal(Literal::Word, text),
            },
        };
        Ok(token)
    }
}

/// Recognises one token at the head of `input`.
///
/// Returns the token and the number of bytes consumed, including any leading
/// whitespace. Blank input yields [`TokenKind::EndOfInput`].
///
/// # Parameters
/// - `input`: The text to read from.
///
/// # Returns
/// The token and the bytes consumed, or the lexing error.
///
/// # Example
/// ```
/// use hd::interpreter::lexer::{lex_one, Literal, TokenKind};
///
/// let (token, consumed) = lex_one("  0x1F rest").unwrap();
/// assert_eq!(token.kind, TokenKind::Literal(Literal::Based(31)));
/// assert_eq!(consumed, 6);
///
/// let (token, _) = lex_one("   ").unwrap();
/// assert_eq!(token.kind, TokenKind::EndOfInput);
/// ```
pub fn lex_one(input: &str) -> Result<(Token<'_>, usize), ParseError> {
    let mut lexer = RawToken::lexer(input);

    let Some(next) = lexer.next() else {
        return Ok((Token::new(TokenKind::EndOfInput, "", END_PRECEDENCE), input.len()));
    };

    let span = lexer.span();
    let text = lexer.slice();
    let raw = next.map_err(|failure| match failure {
                      LexFailure::NoMatch => ParseError::Lex { text:     text.to_string(),
                                                               position: span.start, },
                      LexFailure::TooLarge => {
                          ParseError::LiteralTooLarge { literal: text.to_string() }
                      },
                  })?;

    let token = Token::classify(raw, text)?;
    trace!(?token, "lexed token");
    Ok((token, span.end))
}

/// Splits a whole field or line into tokens.
///
/// # Parameters
/// - `input`: The field or line.
///
/// # Returns
/// Every token in order. Lexing error positions are relative to `input`.
///
/// # Example
/// ```
/// use hd::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("3 4 + 2 **").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["3", "4", "+", "2", "**"]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    loop {
        let (token, consumed) = lex_one(&input[offset..]).map_err(|error| match error {
                                    ParseError::Lex { text, position } => {
                                        ParseError::Lex { text,
                                                          position: position + offset }
                                    },
                                    other => other,
                                })?;
        if token.kind == TokenKind::EndOfInput {
            return Ok(tokens);
        }
        tokens.push(token);
        offset += consumed;
    }
}
