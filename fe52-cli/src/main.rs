//! `fe52`: encode 5x52 field element limb dumps as big-endian bytes.
//!
//! Each input is the `Debug` rendering of a field element, e.g.
//! `FieldElement5x52([1, 0, 0, 0, 0])`. Inputs come from the command line or,
//! when none are given, from standard input one per line.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use fe52::{FieldElement5x52, hex};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fe52", version, about = "Encode 5x52 field element limbs as big-endian hex", long_about = None)]
struct Args {
    /// Limb dumps such as `FieldElement5x52([1, 0, 0, 0, 0])` (reads stdin when absent)
    inputs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Lower)]
    format: Format,

    /// Reject limbs outside the normalized budget (2^52 for limbs 0-3, 2^48 for limb 4)
    #[arg(long)]
    strict: bool,

    /// Keep encoding after a malformed input
    #[arg(short = 'k', long)]
    keep_going: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Lowercase hex
    Lower,
    /// Uppercase hex
    Upper,
    /// Decimal byte list
    Bytes,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn encode(text: &str, args: &Args) -> Result<String> {
    let fe: FieldElement5x52 = text
        .parse()
        .with_context(|| format!("cannot read limbs from {text:?}"))?;

    if !bool::from(fe.is_normalized()) {
        if args.strict {
            bail!("limbs {:?} exceed the normalized 5x52 budget", fe.limbs());
        }
        warn!(limbs = ?fe.limbs(), "limbs are not normalized; high bits will be dropped");
    }

    let bytes = fe.to_bytes();
    Ok(match args.format {
        Format::Lower => hex::to_hex(&bytes),
        Format::Upper => hex::to_hex_upper(&bytes),
        Format::Bytes => format!("{bytes:?}"),
    })
}

/// Encodes one input, writing the result to `out` or the failure to stderr.
fn process<W: Write>(out: &mut W, origin: &str, text: &str, args: &Args) -> Result<bool> {
    debug!(origin, text, "encoding");
    match encode(text, args) {
        Ok(encoded) => {
            writeln!(out, "{encoded}").context("failed to write output")?;
            Ok(true)
        }
        Err(err) => {
            eprintln!("fe52: {origin}: {err:#}");
            Ok(false)
        }
    }
}

fn run(args: &Args) -> Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ok = true;

    if args.inputs.is_empty() {
        info!("reading limb dumps from stdin");
        // Raw lines, so a line that is not UTF-8 fails on its own
        for (i, line) in io::stdin().lock().split(b'\n').enumerate() {
            let mut line = line.context("failed to read standard input")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let origin = format!("line {}", i + 1);
            ok &= match String::from_utf8(line) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => process(&mut out, &origin, &text, args)?,
                Err(err) => {
                    eprintln!("fe52: {origin}: {}", err.utf8_error());
                    false
                }
            };
            if !ok && !args.keep_going {
                break;
            }
        }
    } else {
        for (i, text) in args.inputs.iter().enumerate() {
            ok &= process(&mut out, &format!("argument {}", i + 1), text, args)?;
            if !ok && !args.keep_going {
                break;
            }
        }
    }

    out.flush().context("failed to write output")?;
    Ok(ok)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("fe52: {err:#}");
            ExitCode::FAILURE
        }
    }
}
