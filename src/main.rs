//! Command-line front-end: parses expressions and prints their canonical form.

use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use exprparse::{format_error, ExprParser};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exprparse")]
#[command(version, about = "Parse expressions and print their canonical S-expression form", long_about = None)]
struct Cli {
    /// Expressions to parse
    exprs: Vec<String>,

    /// Parse every non-empty line of a file
    #[arg(short, long, conflicts_with = "exprs")]
    file: Option<PathBuf>,

    /// Print the tree's Debug form instead of the canonical rendering
    #[arg(long)]
    debug: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parses every input; returns whether all of them parsed.
fn run(cli: &Cli) -> Result<bool> {
    let parser = ExprParser::default();

    let (origin, inputs) = if let Some(path) = &cli.file {
        let contents = read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (path.display().to_string(), non_empty_lines(contents.lines()))
    } else if !cli.exprs.is_empty() {
        (String::from("<arg>"), cli.exprs.clone())
    } else {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("failed to read stdin")?;
        (String::from("<stdin>"), non_empty_lines(lines.iter().map(String::as_str)))
    };

    info!(count = inputs.len(), origin = %origin, "parsing inputs");

    let all_ok = parse_inputs(
        &parser,
        &origin,
        &inputs,
        cli.debug,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .context("failed to write output")?;

    Ok(all_ok)
}

/// Writes each input's rendering to `out`, or its diagnostic to `err`.
/// Returns whether every input parsed.
fn parse_inputs(
    parser: &ExprParser,
    origin: &str,
    inputs: &[String],
    debug: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut all_ok = true;
    for input in inputs {
        match parser.parse_expr(input.as_bytes()) {
            Ok(expr) if debug => writeln!(out, "{:#?}", expr)?,
            Ok(expr) => writeln!(out, "{}", expr)?,
            Err(error) => {
                all_ok = false;
                writeln!(err, "{}", format_error(&error, input, origin))?;
            }
        }
    }

    Ok(all_ok)
}

fn non_empty_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
