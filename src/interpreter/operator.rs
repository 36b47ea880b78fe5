use crate::interpreter::{
    constants::ConstantTable,
    value::core::{Format, Kind},
    width::Width,
};

/// Operators that consume one operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical not.
    Not,
    /// Bitwise complement.
    Invert,
    /// Print followed by a newline.
    End,
    /// Print followed by a space.
    Sep,
    /// Discard.
    Quiet,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Abs,
    Sgn,
    Floor,
    Round,
    Ceil,
    Trunc,
    /// Code of the first character.
    Ord,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    /// Print the float bit fields.
    Info,
    Fsgn,
    Fexp,
    Fmantissa,
    Factorial,
    /// `x^-1`
    Inverse,
}

/// Comparison operators. Their result is `1` or `0` in the coerced kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    /// Applies the comparison. Any comparison involving `NaN` is false except
    /// `Neq`.
    ///
    /// # Example
    /// ```
    /// use hd::interpreter::operator::Comparison;
    ///
    /// assert!(Comparison::Gte.test(3, 3));
    /// assert!(Comparison::Neq.test(f64::NAN, f64::NAN));
    /// assert!(!Comparison::Eq.test(f64::NAN, f64::NAN));
    /// ```
    #[must_use]
    pub fn test<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Neq => lhs != rhs,
            Self::Gt => lhs > rhs,
            Self::Gte => lhs >= rhs,
            Self::Lt => lhs < rhs,
            Self::Lte => lhs <= rhs,
        }
    }
}

/// Operators that consume two operands. The stack top is the right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    BitXor,
    BitAnd,
    BitOr,
    /// `a & ~b`
    BitAndInv,
    /// Logical and.
    And,
    /// Logical or.
    Or,
    Shl,
    Shr,
    Ror,
    Rol,
    Compare(Comparison),
    /// Numeric conversion to a named kind.
    Cast,
    /// Bit reinterpretation to a named kind, or a display format change.
    As,
    Gcd,
    Lcm,
    Ncr,
    Npr,
    Min,
    Max,
    Atan2,
    /// Store the left operand under the name on the right.
    Save,
}

/// A registered operation, tagged by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Pops one value.
    Unary(UnaryOp),
    /// Pops two values.
    Binary(BinaryOp),
}

impl Operation {
    /// The canonical (word) spelling, used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        OPERATORS.iter()
                 .find(|entry| entry.operation == self)
                 .and_then(|entry| entry.spellings.last().copied())
                 .unwrap_or("?")
    }

    /// Number of operands consumed.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }

    /// Whether the right operand is a name rather than a value, so a word in
    /// that position must not be replaced by a constant.
    #[must_use]
    pub const fn takes_name(self) -> bool {
        matches!(self, Self::Binary(BinaryOp::Save | BinaryOp::Cast | BinaryOp::As))
    }

    /// Binding strength in the infix grammar. Not used by RPN evaluation.
    #[must_use]
    pub const fn precedence(self) -> u16 {
        match self {
            Self::Unary(UnaryOp::End | UnaryOp::Sep | UnaryOp::Quiet) => 130,
            Self::Unary(UnaryOp::Not | UnaryOp::Invert) => 370,
            Self::Unary(_) => 400,
            Self::Binary(op) => match op {
                BinaryOp::Cast | BinaryOp::As => 350,
                BinaryOp::Pow => 300,
                BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 295,
                BinaryOp::Add
                | BinaryOp::Sub
                | BinaryOp::BitXor
                | BinaryOp::BitAnd
                | BinaryOp::BitOr
                | BinaryOp::BitAndInv
                | BinaryOp::Shl
                | BinaryOp::Shr => 250,
                BinaryOp::Compare(_) => 200,
                BinaryOp::And => 190,
                BinaryOp::Or => 180,
                _ => 400,
            },
        }
    }
}

/// Returns `true` for operations that pop a single operand.
#[must_use]
pub const fn is_unary(operation: Operation) -> bool {
    matches!(operation, Operation::Unary(_))
}

impl UnaryOp {
    /// Whether the result is dropped instead of pushed. Only the output
    /// operators behave this way.
    #[must_use]
    pub const fn suppresses_result(self) -> bool {
        matches!(self, Self::End | Self::Sep | Self::Quiet)
    }
}

/// One registry entry: every spelling of an operation and a short
/// description for the help text.
#[derive(Debug, Clone, Copy)]
pub struct OperatorEntry {
    /// Spellings, symbol forms first. The last one is the canonical name.
    pub spellings: &'static [&'static str],
    /// The operation they denote.
    pub operation: Operation,
    /// One-line description.
    pub summary:   &'static str,
}

macro_rules! operators {
    ($($kind:ident($op:expr) => [$($spelling:literal),+ $(,)?], $summary:literal;)*) => {
        /// Every registered operator.
        pub static OPERATORS: &[OperatorEntry] = &[
            $(OperatorEntry { spellings: &[$($spelling),+],
                              operation: Operation::$kind($op),
                              summary:   $summary, },)*
        ];
    };
}

operators! {
    Binary(BinaryOp::Add) => ["+", "add"], "a + b";
    Binary(BinaryOp::Sub) => ["-", "sub"], "a - b";
    Binary(BinaryOp::Mul) => ["*", "mul"], "a * b";
    Binary(BinaryOp::Div) => ["/", "div"], "a / b (integer division by zero is an error)";
    Binary(BinaryOp::Mod) => ["%", "mod"], "a % b";
    Binary(BinaryOp::Pow) => ["**", "pow"], "a raised to b";
    Binary(BinaryOp::BitXor) => ["^", "^^", "bitxor", "xor"], "bitwise exclusive or";
    Binary(BinaryOp::BitAnd) => ["&", "bitand"], "bitwise and";
    Binary(BinaryOp::BitOr) => ["|", "bitor"], "bitwise or";
    Binary(BinaryOp::BitAndInv) => ["&~", "bitclear", "bitandinv"], "a & ~b";
    Binary(BinaryOp::And) => ["&&", "and"], "logical and";
    Binary(BinaryOp::Or) => ["||", "or"], "logical or";
    Binary(BinaryOp::Shl) => ["<<", "lsh", "shl"], "shift left";
    Binary(BinaryOp::Shr) => [">>", "rsh", "shr"], "shift right (arithmetic for int)";
    Binary(BinaryOp::Ror) => ["ror"], "rotate right, modulo the bit width";
    Binary(BinaryOp::Rol) => ["rol"], "rotate left, modulo the bit width";
    Binary(BinaryOp::Compare(Comparison::Eq)) => ["==", "equ", "eq"], "equal";
    Binary(BinaryOp::Compare(Comparison::Neq)) => ["!=", "neq"], "not equal";
    Binary(BinaryOp::Compare(Comparison::Gt)) => [">", "gt"], "greater than";
    Binary(BinaryOp::Compare(Comparison::Gte)) => [">=", "gte"], "greater than or equal";
    Binary(BinaryOp::Compare(Comparison::Lt)) => ["<", "lt"], "less than";
    Binary(BinaryOp::Compare(Comparison::Lte)) => ["<=", "lte"], "less than or equal";
    Binary(BinaryOp::Cast) => ["to", "cast"], "convert the value to a kind: 5 float cast";
    Binary(BinaryOp::As) => ["pun", "as"], "reinterpret the bits as a kind, or set a format: 1.5 uint as, 255 bin as";
    Binary(BinaryOp::Gcd) => ["gcd"], "greatest common divisor";
    Binary(BinaryOp::Lcm) => ["lcm"], "least common multiple";
    Binary(BinaryOp::Ncr) => ["ncr"], "combinations of n taken r";
    Binary(BinaryOp::Npr) => ["npr"], "permutations of n taken r";
    Binary(BinaryOp::Min) => ["min"], "smaller of a and b";
    Binary(BinaryOp::Max) => ["max"], "larger of a and b";
    Binary(BinaryOp::Atan2) => ["atan2"], "arc tangent of a / b";
    Binary(BinaryOp::Save) => ["save"], "store a under the name b and keep a";
    Unary(UnaryOp::Not) => ["!", "not"], "logical not";
    Unary(UnaryOp::Invert) => ["~", "inv"], "bitwise complement";
    Unary(UnaryOp::End) => [";", "end"], "print the value and a newline";
    Unary(UnaryOp::Sep) => [",", "sep"], "print the value and a space";
    Unary(UnaryOp::Quiet) => ["quiet"], "discard the value";
    Unary(UnaryOp::Sqrt) => ["sqrt"], "square root";
    Unary(UnaryOp::Sin) => ["sin"], "sine";
    Unary(UnaryOp::Cos) => ["cos"], "cosine";
    Unary(UnaryOp::Tan) => ["tan"], "tangent";
    Unary(UnaryOp::Asin) => ["asin"], "arc sine";
    Unary(UnaryOp::Acos) => ["acos"], "arc cosine";
    Unary(UnaryOp::Atan) => ["atan"], "arc tangent";
    Unary(UnaryOp::Abs) => ["abs"], "absolute value";
    Unary(UnaryOp::Sgn) => ["sgn"], "sign: -1, 0 or 1";
    Unary(UnaryOp::Floor) => ["floor"], "round down";
    Unary(UnaryOp::Round) => ["round"], "round half away from zero";
    Unary(UnaryOp::Ceil) => ["ceil"], "round up";
    Unary(UnaryOp::Trunc) => ["trunc"], "round toward zero";
    Unary(UnaryOp::Ord) => ["ord"], "code of the first character";
    Unary(UnaryOp::Ln) => ["ln"], "natural logarithm";
    Unary(UnaryOp::Log) => ["log"], "base-10 logarithm";
    Unary(UnaryOp::Info) => ["info"], "print the sign, exponent and mantissa";
    Unary(UnaryOp::Fsgn) => ["fsgn"], "float sign bit";
    Unary(UnaryOp::Fexp) => ["fexp"], "float exponent field";
    Unary(UnaryOp::Fmantissa) => ["fmantissa"], "float mantissa field";
    Unary(UnaryOp::Factorial) => ["fact", "factorial"], "product 2..=n";
    Unary(UnaryOp::Inverse) => ["inverse"], "x^-1";
}

/// Finds the operation spelled exactly `spelling` (case-sensitive).
///
/// # Example
/// ```
/// use hd::interpreter::operator::{lookup, BinaryOp, Comparison, Operation};
///
/// assert_eq!(lookup("+"), Some(Operation::Binary(BinaryOp::Add)));
/// assert_eq!(lookup(">="), Some(Operation::Binary(BinaryOp::Compare(Comparison::Gte))));
/// assert_eq!(lookup("ADD"), None);
/// ```
#[must_use]
pub fn lookup(spelling: &str) -> Option<Operation> {
    OPERATORS.iter()
             .find(|entry| entry.spellings.contains(&spelling))
             .map(|entry| entry.operation)
}

const CAST_VERSUS_AS: &str = "`cast` converts the number (1.9 int cast is 1); `as` keeps the \
                              bits and changes how they are read (1.0 uint as is \
                              0x3FF0000000000000), or sets a display format (255 bin as).";

/// Builds the user-facing description of operators, kinds, formats and
/// constants.
#[must_use]
pub fn help_text<W: Width>(constants: &ConstantTable<W>) -> String {
    let kinds: Vec<&str> = Kind::ALL.iter().map(|kind| kind.name()).collect();
    let formats: Vec<&str> = Format::ALL.iter().map(|format| format.name()).collect();
    let names: Vec<&str> = constants.names().collect();

    let mut lines = vec!["Operators (the top of the stack is the right operand):".to_string()];
    lines.extend(OPERATORS.iter().map(|entry| {
                                     format!("  {:<28} {}", entry.spellings.join(" "), entry.summary)
                                 }));
    lines.push(String::new());
    lines.push(format!("Types:     {}", kinds.join(" ")));
    lines.push(format!("Formats:   {}", formats.join(" ")));
    lines.push(format!("Constants: {}", names.join(" ")));
    lines.push(String::new());
    lines.push(CAST_VERSUS_AS.to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
