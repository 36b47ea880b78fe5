use std::{
    fs, io,
    sync::{Arc, Mutex},
};

use hd::{
    config::{BitWidth, Config},
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        constants::ConstantTable,
        lexer::{Literal, TokenKind, tokenize},
        operator::{BinaryOp, Operation, help_text},
        width::W64,
    },
    util::ascii::ascii_table,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (program, expected)) in extract_hd_blocks(&content).into_iter().enumerate() {
            count += 1;
            match run(BitWidth::W64, false, &program) {
                Ok(result) => assert_eq!(result.unwrap_or_default(),
                                         expected,
                                         "example {} in {:?}:\n{}",
                                         i + 1,
                                         path,
                                         program),
                Err(e) => panic!("hd example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 program,
                                 e),
            }
        }
    }

    assert!(count > 0, "No hd examples found in book/src");
}

/// Collects `(program, expected)` pairs from ```hd blocks. Lines starting
/// with `=>` give the expected output; every other line is program text.
fn extract_hd_blocks(content: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut program = String::new();
    let mut expected = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```hd") {
            inside = true;
            program.clear();
            expected.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push((program.clone(), expected.clone()));
            continue;
        }
        if inside {
            if let Some(result) = trimmed.strip_prefix("=>") {
                expected = result.trim().to_string();
            } else {
                program.push_str(line);
                program.push('\n');
            }
        }
    }

    blocks
}

fn run(width: BitWidth, long_form: bool, program: &str) -> Result<Option<String>, Error> {
    let config = Config { width,
                          verbose: false,
                          long_form };
    evaluate(&[program.to_string()], &config, &mut std::io::sink())
}

fn render(width: BitWidth, program: &str) -> String {
    match run(width, false, program) {
        Ok(Some(result)) => result,
        Ok(None) => panic!("'{program}' left an empty stack"),
        Err(e) => panic!("'{program}' failed: {e}"),
    }
}

fn render_long(width: BitWidth, program: &str) -> String {
    match run(width, true, program) {
        Ok(Some(result)) => result,
        Ok(None) => panic!("'{program}' left an empty stack"),
        Err(e) => panic!("'{program}' failed: {e}"),
    }
}

fn eval64(program: &str) -> String {
    render(BitWidth::W64, program)
}

/// Runs `program` at 64 bits and returns what it printed along with its
/// result.
fn output64(program: &str) -> (String, Option<String>) {
    let mut out = Vec::new();
    let result = evaluate(&[program.to_string()], &Config::default(), &mut out)
        .unwrap_or_else(|e| panic!("'{program}' failed: {e}"));
    (String::from_utf8(out).expect("output is UTF-8"), result)
}

fn failure(width: BitWidth, program: &str) -> Error {
    match run(width, false, program) {
        Ok(result) => panic!("'{program}' succeeded with {result:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_failure(program: &str) -> Error {
    failure(BitWidth::W64, program)
}

#[test]
fn scenario_float_minus_sum() {
    assert_eq!(eval64("200.1 128 64 + -"), "8.100000");
}

#[test]
fn scenario_binary_literal() {
    assert_eq!(eval64("0b00010000"), "16");
    assert_eq!(eval64("0b00010000 type as"), "uint");
}

#[test]
fn scenario_divide_by_zero() {
    let error = assert_failure("5 0 div");
    assert!(matches!(error, Error::Runtime(RuntimeError::DivideByZero { .. })), "{error:?}");
    assert_eq!(error.to_string(), "Integer divide by zero: 0x5 / 0x0");

    assert!(matches!(assert_failure("5 0 mod"),
                     Error::Runtime(RuntimeError::DivideByZero { .. })));
}

#[test]
fn scenario_save_and_reuse() {
    assert_eq!(eval64("3 x save x add"), "6");
    assert_eq!(eval64("3 x save quiet x x add"), "6");
}

#[test]
fn scenario_abs_and_cast() {
    assert_eq!(eval64("-5 abs"), "5");
    assert_eq!(eval64("5 uint cast"), "5");
    assert_eq!(eval64("5 uint cast type as"), "uint");
}

#[test]
fn scenario_gcd_and_lcm() {
    assert_eq!(eval64("5 0 gcd"), "5");
    assert_eq!(eval64("4 6 lcm"), "12");
    assert_eq!(eval64("-12 18 gcd"), "6");
    assert_eq!(eval64("0 7 lcm"), "0");
}

#[test]
fn arithmetic() {
    assert_eq!(eval64("2 3 + 4 *"), "20");
    assert_eq!(eval64("2 3 add 4 mul"), "20");
    assert_eq!(eval64("7 2 /"), "3");
    assert_eq!(eval64("7 2 %"), "1");
    assert_eq!(eval64("-7 2 /"), "-3");
    assert_eq!(eval64("3 5 -"), "18446744073709551614");
    assert_eq!(eval64("-3 5 -"), "-8");
    assert_eq!(eval64("2 10 pow"), "1024");
    assert_eq!(eval64("2 10 **"), "1024");
    assert_eq!(eval64("2 -3 pow"), "8");
    assert_eq!(eval64("2.5 2 *"), "5.000000");
    assert_eq!(eval64("5.5 2 %"), "1.500000");
    assert_eq!(eval64("1.0 0.0 /"), "inf");
    assert_eq!(eval64("2.0 0.5 pow"), "1.414214");
}

#[test]
fn integer_results_wrap_at_the_width() {
    assert_eq!(render(BitWidth::W8, "200 100 +"), "44");
    assert_eq!(render(BitWidth::W8, "-128 1 -"), "127");
    assert_eq!(render(BitWidth::W16, "0xFFFF 1 +"), "0");
    assert_eq!(render(BitWidth::W32, "0x10000 0x10000 *"), "0");
    assert_eq!(render(BitWidth::W8, "2 8 pow"), "0");
}

#[test]
fn bitwise() {
    assert_eq!(eval64("0xF0 0x3C &"), "48");
    assert_eq!(eval64("0xF0 0x3C bitand"), "48");
    assert_eq!(eval64("0xF0 0x3C |"), "252");
    assert_eq!(eval64("0xF0 0x3C ^"), "204");
    assert_eq!(eval64("0xF0 0x3C xor"), "204");
    assert_eq!(eval64("0xF0 0x3C ^^"), "204");
    assert_eq!(eval64("0xFF 0x0F &~"), "240");
    assert_eq!(eval64("0xFF 0x0F bitclear"), "240");
    assert_eq!(render(BitWidth::W8, "0x0F ~"), "240");
    assert_eq!(render(BitWidth::W8, "0 inv"), "255");
}

#[test]
fn bitwise_on_floats_goes_through_the_bit_pattern() {
    assert_eq!(eval64("1.0 0x8000000000000000 xor"), "-1.000000");
    assert_eq!(eval64("-2.5 0x8000000000000000 bitclear"), "2.500000");
}

#[test]
fn shifts_and_rotations() {
    assert_eq!(eval64("1 4 <<"), "16");
    assert_eq!(eval64("1 4 lsh"), "16");
    assert_eq!(eval64("256 4 >>"), "16");
    assert_eq!(eval64("256 4 rsh"), "16");
    assert_eq!(eval64("-16 2 >>"), "-4");
    assert_eq!(eval64("1 65 shl"), "2");
    assert_eq!(render(BitWidth::W8, "1 1 ror"), "128");
    assert_eq!(render(BitWidth::W8, "1 9 ror"), "128");
    assert_eq!(render(BitWidth::W8, "0x81 1 rol"), "3");
    assert_eq!(render(BitWidth::W16, "0x8001 4 rol hex as"), "0x18");
}

#[test]
fn logic() {
    assert_eq!(eval64("1 0 and"), "0");
    assert_eq!(eval64("1 0 &&"), "0");
    assert_eq!(eval64("1 0 or"), "1");
    assert_eq!(eval64("0 0 ||"), "0");
    assert_eq!(eval64("0 not"), "1");
    assert_eq!(eval64("5 !"), "0");
    assert_eq!(eval64("0.0 not"), "1.000000");
    assert_eq!(eval64("-0.0 not"), "1.000000");
}

#[test]
fn comparisons() {
    assert_eq!(eval64("3 5 <"), "1");
    assert_eq!(eval64("3 5 lt"), "1");
    assert_eq!(eval64("-1 5 <"), "1");
    assert_eq!(eval64("2 2 >="), "1");
    assert_eq!(eval64("2 2 >"), "0");
    assert_eq!(eval64("2 3 <="), "1");
    assert_eq!(eval64("2 2 =="), "1");
    assert_eq!(eval64("2 2 equ"), "1");
    assert_eq!(eval64("2 3 !="), "1");
    assert_eq!(eval64("2.5 2 gt"), "1.000000");
    assert_eq!(eval64("nan nan =="), "0.000000");
    assert_eq!(eval64("nan nan !="), "1.000000");
    assert_eq!(eval64("nan 1.0 <"), "0.000000");
}

#[test]
fn min_and_max() {
    assert_eq!(eval64("3 -7 min"), "-7");
    assert_eq!(eval64("3 7 max"), "7");
    assert_eq!(eval64("1.5 2 max"), "2.000000");
}

#[test]
fn math_functions() {
    assert_eq!(eval64("9 sqrt"), "3.000000");
    assert_eq!(eval64("0 sin"), "0.000000");
    assert_eq!(eval64("0 cos"), "1.000000");
    assert_eq!(eval64("0 tan"), "0.000000");
    assert_eq!(eval64("1 asin"), "1.570796");
    assert_eq!(eval64("1 acos"), "0.000000");
    assert_eq!(eval64("1 atan"), "0.785398");
    assert_eq!(eval64("1 1 atan2"), "0.785398");
    assert_eq!(eval64("100 log"), "2.000000");
    assert_eq!(eval64("1 ln"), "0.000000");
    assert_eq!(eval64("e ln"), "1.000000");
    assert_eq!(eval64("4 inverse"), "0.250000");
}

#[test]
fn rounding_is_identity_on_integers() {
    assert_eq!(eval64("2.5 floor"), "2.000000");
    assert_eq!(eval64("2.5 round"), "3.000000");
    assert_eq!(eval64("-2.5 ceil"), "-2.000000");
    assert_eq!(eval64("-2.7 trunc"), "-2.000000");
    assert_eq!(eval64("7 floor"), "7");
    assert_eq!(eval64("-7 round"), "-7");
    assert_eq!(eval64("7 ceil type as"), "uint");
}

#[test]
fn abs_and_sgn() {
    assert_eq!(eval64("-5 sgn"), "-1");
    assert_eq!(eval64("0 sgn"), "0");
    assert_eq!(eval64("9 sgn"), "1");
    assert_eq!(eval64("-3.5 sgn"), "-1.000000");
    assert_eq!(eval64("-3.5 abs"), "3.500000");
    assert_eq!(render(BitWidth::W8, "-128 abs"), "-128");
}

#[test]
fn factorial_and_combinatorics() {
    assert_eq!(eval64("5 factorial"), "120");
    assert_eq!(eval64("5 fact"), "120");
    assert_eq!(eval64("0 fact"), "1");
    assert_eq!(eval64("3.5 fact"), "6.000000");
    assert_eq!(render(BitWidth::W8, "6 fact"), "208");
    assert_eq!(eval64("5 2 ncr"), "10");
    assert_eq!(eval64("5 2 npr"), "20");
    assert_eq!(eval64("60 30 ncr"), "118264581564861424");
    assert_eq!(eval64("5.0 2 ncr"), "10.000000");
    assert_eq!(eval64("5 5 ncr"), "1");
    assert_eq!(eval64("5 0 npr"), "1");
}

#[test]
fn domain_errors() {
    for program in ["-1 fact", "-1.5 factorial", "2 5 ncr", "2 5 npr", "5 -1 ncr"] {
        assert!(matches!(assert_failure(program), Error::Runtime(RuntimeError::Domain { .. })),
                "{program}");
    }
}

#[test]
fn ord() {
    assert_eq!(eval64("A ord"), "65");
    assert_eq!(eval64("-3 ord"), "45");
    assert_eq!(eval64("0 ord"), "48");
}

#[test]
fn cast_converts_the_value() {
    assert_eq!(eval64("2.9 int cast"), "2");
    assert_eq!(eval64("-2.9 int to"), "-2");
    assert_eq!(eval64("-1 uint cast"), "18446744073709551615");
    assert_eq!(eval64("5 float cast"), "5.000000");
    assert_eq!(render(BitWidth::W32, "16777217 float cast"), "16777216.000000");
}

#[test]
fn as_reinterprets_the_bits() {
    assert_eq!(render(BitWidth::W32, "1.0 uint as"), "1065353216");
    assert_eq!(render(BitWidth::W32, "1.0 uint pun hex as"), "0x3F800000");
    assert_eq!(eval64("1.0 uint as float as"), "1.000000");
    assert_eq!(eval64("-1 uint as"), "18446744073709551615");
}

#[test]
fn cast_and_as_reject_unknown_targets() {
    for program in ["5 bogus cast", "5 hex cast", "5 bogus as"] {
        assert!(matches!(assert_failure(program),
                         Error::Runtime(RuntimeError::UnknownCastTarget { .. })),
                "{program}");
    }
    assert!(matches!(assert_failure("5 string cast"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("5 6 cast"), Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn display_formats() {
    assert_eq!(eval64("255"), "0xFF");
    assert_eq!(eval64("-1"), "0xFFFFFFFFFFFFFFFF");
    assert_eq!(eval64("0xFF"), "255");
    assert_eq!(eval64("255 dec as"), "255");
    assert_eq!(eval64("255 bin as"), "0b11111111");
    assert_eq!(eval64("8 oct as"), "0o10");
    assert_eq!(eval64("0x41 chr as"), "A");
    assert_eq!(eval64("10 chr as"), "\\n");
    assert_eq!(eval64("65 type as"), "uint");
    assert_eq!(eval64("-1 type as"), "int");
    assert_eq!(eval64("1.5 type as"), "float");
    assert_eq!(eval64("hello type as"), "string");
}

#[test]
fn byte_order_formats() {
    let (big, little) = if cfg!(target_endian = "little") {
        ("0x3412", "0x1234")
    } else {
        ("0x1234", "0x3412")
    };
    assert_eq!(render(BitWidth::W16, "0x1234 big as"), big);
    assert_eq!(render(BitWidth::W16, "0x1234 little as"), little);
}

#[test]
fn long_form_pads_to_the_width() {
    assert_eq!(render_long(BitWidth::W16, "255"), "0x00FF");
    assert_eq!(render_long(BitWidth::W8, "5 bin as"), "0b00000101");
    assert_eq!(render_long(BitWidth::W8, "8 oct as"), "0o010");
    assert_eq!(render_long(BitWidth::W64, "1.5"), "1.50000000000000000000");
    assert_eq!(render_long(BitWidth::W32, "1.5"), "1.5000000000");
    assert_eq!(render_long(BitWidth::W64, "42 dec as"), "42");
}

#[test]
fn literals() {
    assert_eq!(eval64("0x1F"), "31");
    assert_eq!(eval64("0o17"), "15");
    assert_eq!(eval64("0b101"), "5");
    assert_eq!(eval64("0xFF_FF"), "65535");
    assert_eq!(eval64("1e3"), "1000.000000");
    assert_eq!(eval64("-.5"), "-0.500000");
    assert_eq!(eval64("+5 type as"), "int");
    assert_eq!(eval64("5 type as"), "uint");
    assert_eq!(render(BitWidth::W8, "300"), "0x2C");
}

#[test]
fn based_literals_must_fit_the_width() {
    assert!(matches!(failure(BitWidth::W8, "0x1FF"),
                     Error::Parse(ParseError::LiteralTooWide { bits: 8, .. })));
    assert!(matches!(failure(BitWidth::W16, "0x10000"),
                     Error::Parse(ParseError::LiteralTooWide { bits: 16, .. })));
    assert_eq!(render(BitWidth::W16, "0xFFFF"), "65535");
    assert!(matches!(assert_failure("0x1_0000_0000_0000_0000_0000_0000_0000_0000"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn constants() {
    assert_eq!(eval64("pi"), "3.141593");
    assert_eq!(eval64("PI"), "3.141593");
    assert_eq!(eval64("e"), "2.718282");
    assert_eq!(eval64("%e"), "2.718282");
    assert_eq!(eval64("inf"), "inf");
    assert_eq!(eval64("-inf"), "-inf");
    assert_eq!(eval64("nan"), "NaN");
    assert_eq!(eval64("true"), "1");
    assert_eq!(eval64("false"), "0");
    assert_eq!(render(BitWidth::W8, "intmax"), "127");
    assert_eq!(render(BitWidth::W16, "uintmax"), "65535");
    assert_eq!(render(BitWidth::W32, "bitmax"), "31");
    assert_eq!(render(BitWidth::W32, "fmantmask"), "8388607");
    assert_eq!(eval64("fexpmask"), "2047");
    assert_eq!(eval64("fexpbit"), "52");
}

#[test]
fn save_overwrites_constants_for_the_rest_of_the_run() {
    assert_eq!(eval64("10 pi save quiet pi 1 +"), "11");
    assert_eq!(eval64("2 Answer save quiet answer answer *"), "4");
}

#[test]
fn save_needs_a_name() {
    assert!(matches!(assert_failure("1 2 save"), Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn strings() {
    assert_eq!(eval64("hello"), "hello");
    assert!(matches!(assert_failure("hello 1 +"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
    assert!(matches!(assert_failure("hello sqrt"),
                     Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn stack_underflow() {
    match assert_failure("+") {
        Error::Runtime(RuntimeError::StackUnderflow { needed, found, .. }) => {
            assert_eq!((needed, found), (2, 0));
        },
        other => panic!("unexpected error {other:?}"),
    }
    match assert_failure("1 add") {
        Error::Runtime(RuntimeError::StackUnderflow { operator, needed, found }) => {
            assert_eq!((operator, needed, found), ("add", 2, 1));
        },
        other => panic!("unexpected error {other:?}"),
    }
    assert!(matches!(assert_failure("abs"),
                     Error::Runtime(RuntimeError::StackUnderflow { needed: 1, .. })));
}

#[test]
fn result_is_the_top_of_the_stack() {
    assert_eq!(eval64("1 2 3"), "0x3");
    assert_eq!(run(BitWidth::W64, false, "").unwrap(), None);
    assert_eq!(run(BitWidth::W64, false, "5 quiet").unwrap(), None);
}

#[test]
fn fields_are_concatenated() {
    let fields = ["3", "4 +", "dec as"].map(String::from);
    let result = evaluate(&fields, &Config::default(), &mut std::io::sink()).unwrap();
    assert_eq!(result.as_deref(), Some("7"));
}

#[test]
fn lexing_errors() {
    assert!(matches!(assert_failure("1 2 =>"),
                     Error::Parse(ParseError::UnknownOperator { .. })));
    assert!(matches!(assert_failure("( 1 )"),
                     Error::Parse(ParseError::UnexpectedParen { paren: '(' })));
}

#[test]
fn end_and_sep_print_without_pushing() {
    assert_eq!(output64("1 end 2 end"), ("0x1\n0x2\n".to_string(), None));
    assert_eq!(output64("1 sep 2 ,"), ("0x1 0x2 ".to_string(), None));
    assert_eq!(output64("3 dec as ; 4"), ("3\n".to_string(), Some("0x4".to_string())));
}

#[test]
fn float_introspection() {
    assert_eq!(output64("1.0 info"),
               ("0, 1023, 0\n0, 0x3FF, 0x0\n".to_string(), Some("1.000000".to_string())));
    assert_eq!(output64("7 dec as info"), ("7\n".to_string(), Some("7".to_string())));
    assert_eq!(eval64("1.5 fmantissa"), "2251799813685248");
    assert_eq!(eval64("1.5 fexp"), "1023");
    assert_eq!(eval64("-1.5 fsgn"), "1");
    assert_eq!(render(BitWidth::W32, "-2.0 fexp"), "128");
}

#[test]
fn minifloat_follows_integer_rules() {
    assert_eq!(render(BitWidth::W8, "1.5"), "1");
    assert_eq!(render(BitWidth::W8, "7 2.0 /"), "3");
    assert_eq!(render(BitWidth::W16, "3.0 4 *"), "12");
    assert!(matches!(failure(BitWidth::W8, "1 0.0 /"),
                     Error::Runtime(RuntimeError::DivideByZero { .. })));
}

#[test]
fn tokens_carry_infix_precedence() {
    let tokens = tokenize("( 2 + 3 ) * 4").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds[0], TokenKind::LeftParen);
    assert_eq!(kinds[2], TokenKind::BinaryOp(Operation::Binary(BinaryOp::Add)));
    assert_eq!(kinds[4], TokenKind::RightParen);
    assert!(tokens[5].precedence > tokens[2].precedence);
    assert!(tokens[0].precedence > tokens[5].precedence);
}

#[test]
fn float_factorial_stops_at_infinity() {
    assert_eq!(eval64("5.0 2.0 npr"), "20.000000");
    assert_eq!(eval64("200.0 fact"), "inf");
    assert_eq!(render(BitWidth::W32, "40.0 fact"), "inf");
}

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `program` at 64 bits under a debug-level subscriber and returns the
/// log text.
fn logs_for(program: &str, verbose: bool) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt().with_writer(move || writer.clone())
                                              .with_ansi(false)
                                              .with_max_level(tracing::Level::DEBUG)
                                              .finish();
    let config = Config { verbose,
                          ..Config::default() };

    tracing::subscriber::with_default(subscriber, || {
        let _ = evaluate(&[program.to_string()], &config, &mut io::sink());
    });

    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn verbose_logs_each_operator() {
    let logs = logs_for("2 3 + 4 *", true);
    assert_eq!(logs.matches("applied operator").count(), 2, "{logs}");
    assert!(logs.contains("result=20"), "{logs}");

    let quiet = logs_for("2 3 + 4 *", false);
    assert!(!quiet.contains("applied operator"), "{quiet}");
}

#[test]
fn verbose_logs_failures() {
    let logs = logs_for("1 0 /", true);
    assert!(logs.contains("evaluation failed"), "{logs}");
    assert!(logs.contains("operator=div"), "{logs}");

    assert!(!logs_for("1 0 /", false).contains("evaluation failed"));
}

#[test]
fn help_and_ascii_tables() {
    let help = help_text(&ConstantTable::<W64>::new());
    assert!(help.starts_with("Operators (the top of the stack is the right operand):\n"));
    assert!(help.lines().any(|line| line.trim_start().starts_with("+ add")), "{help}");
    assert!(help.contains("\nTypes:     int uint float string\n"), "{help}");
    assert!(help.contains("Constants: pi e %e inf"), "{help}");
    assert!(help.ends_with("(255 bin as).\n"), "{help}");

    let table = ascii_table(false);
    assert_eq!(table.lines().count(), 32);
    assert!(table.ends_with('\n'));
    assert!(table.lines().next().unwrap().starts_with("  0  0 000   NUL"));
    assert_eq!(ascii_table(true).lines().count(), 64);
}

#[test]
fn bare_words_lex_as_one_token() {
    let tokens = tokenize("5x pi %e 0xFF").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, ["5x", "pi", "%e", "0xFF"]);

    for token in &tokens[..3] {
        assert_eq!(token.kind, TokenKind::Literal(Literal::Word), "{}", token.text);
    }
    assert_eq!(tokens[3].kind, TokenKind::Literal(Literal::Based(255)));
}
