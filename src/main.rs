use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use hd::{
    config::{BitWidth, Config},
    evaluate,
    interpreter::{constants::ConstantTable, operator::help_text, width::W64},
    util::{
        ascii::{ascii_name, ascii_table},
        text::strip_magnitude_separators,
    },
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// hd is a hex/decimal/ASCII calculator. The program is a Reverse Polish
/// Notation expression: `hd 3 4 add` prints `7`, `hd 255` prints `0xFF`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Width of every value, in bits: 8, 16, 32 or 64.
    #[arg(short, long, default_value_t = BitWidth::W64)]
    bits: BitWidth,

    /// Report errors on stderr instead of failing silently.
    #[arg(short, long)]
    verbose: bool,

    /// Pad hex, octal and binary output to the full width and print floats
    /// with more decimals.
    #[arg(short, long)]
    long: bool,

    /// Print the ASCII name of a character code.
    #[arg(long, value_name = "CODE")]
    chr: Option<String>,

    /// Print the code of the first character of the text.
    #[arg(long, value_name = "TEXT")]
    ord: Option<String>,

    /// Print the ASCII table for codes 0 to 127.
    #[arg(long)]
    table: bool,

    /// Print the ASCII table for codes 0 to 255.
    #[arg(long)]
    extable: bool,

    /// List every operator, type, format and constant.
    #[arg(long)]
    operators: bool,

    /// The RPN program.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    program: Vec<String>,
}

/// Logs go to stderr, filtered by `HD_LOG`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("HD_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(true))
                                  .with(filter)
                                  .init();
}

/// Reads a character code written in decimal or with a `0x` prefix.
fn parse_code(text: &str) -> Option<i128> {
    let text = strip_magnitude_separators(text);
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => i128::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn run(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.operators {
        write!(out, "{}", help_text(&ConstantTable::<W64>::new()))?;
    }
    if args.table || args.extable {
        write!(out, "{}", ascii_table(args.extable))?;
    }
    if let Some(code) = &args.chr {
        let code = parse_code(code).ok_or_else(|| format!("invalid character code '{code}'"))?;
        writeln!(out, "{}", ascii_name(code))?;
    }
    if let Some(text) = &args.ord {
        let code = text.chars().next().map_or(0, u32::from);
        writeln!(out, "{code}")?;
    }

    if args.program.is_empty() {
        return Ok(());
    }

    let fields: Vec<String> = args.program
                                  .iter()
                                  .map(|field| strip_magnitude_separators(field).into_owned())
                                  .collect();

    if let Some(result) = evaluate(&fields, config, &mut out)? {
        writeln!(out, "{result}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = Config { width:     args.bits,
                          verbose:   args.verbose,
                          long_form: args.long, };

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if config.verbose {
                eprintln!("hd: {error}");
            }
            ExitCode::FAILURE
        },
    }
}
