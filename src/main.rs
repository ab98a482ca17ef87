use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::iter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use regex::Regex;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sort_timer_rs::{registry, BenchError, Pattern};

const MIN_ELEMENTS: usize = 1_000;
const MAX_ELEMENTS: usize = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "sort_timer")]
#[command(version)]
#[command(about = "Times classic sort algorithms on generated integer arrays", long_about = None)]
struct Args {
    /// Number of elements to sort, asked for on stdin when omitted
    #[arg(short = 'n', long, value_name = "COUNT")]
    len: Option<usize>,

    /// Run every size from 1,000 up to 10,000,000 elements, growing by a factor of 10
    #[arg(long, conflicts_with = "len")]
    sweep: bool,

    /// Initial order of the arrays: ordered, reversed, mostly_ordered or random
    #[arg(short, long, default_value_t = Pattern::Random)]
    pattern: Pattern,

    /// Only run sorts whose name matches this regular expression
    #[arg(short, long, value_name = "REGEX")]
    filter: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Error, Debug)]
enum DriverError {
    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("invalid filter: {0}")]
    Filter(#[from] regex::Error),

    #[error("invalid element count '{0}', expected a non-negative integer")]
    InvalidCount(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DriverError {
    fn exit_code(&self) -> ExitCode {
        match self {
            DriverError::Bench(err) if err.is_verification_failure() => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn read_len() -> Result<usize, DriverError> {
    println!("Please enter the number of elements you want to insert into an array: ");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();

    line.parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| DriverError::InvalidCount(line.to_owned()))
}

fn run_all(
    out: &mut dyn Write,
    len: usize,
    pattern: Pattern,
    filter: Option<&Regex>,
) -> Result<(), DriverError> {
    let selected = registry::entries()
        .iter()
        .filter(|entry| filter.map_or(true, |re| re.is_match(&entry.name)));

    for entry in selected {
        let result = entry.run(len, pattern)?;
        writeln!(out, "{} elapsed time: {:.3}ms", entry.name, result.millis())?;
    }

    out.flush()?;
    Ok(())
}

fn run(args: &Args) -> Result<(), DriverError> {
    let filter = args.filter.as_deref().map(Regex::new).transpose()?;

    let sizes: Vec<usize> = if args.sweep {
        iter::successors(Some(MIN_ELEMENTS), |n| Some(n * 10))
            .take_while(|&n| n <= MAX_ELEMENTS)
            .collect()
    } else {
        match args.len {
            Some(len) => vec![len],
            None => vec![read_len()?],
        }
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    for len in sizes {
        tracing::info!(len, pattern = %args.pattern, "running benchmarks");

        if args.sweep {
            writeln!(out, "n = {len}")?;
        }

        run_all(&mut out, len, args.pattern, filter.as_ref())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Encountered error: {err}");
            err.exit_code()
        }
    }
}
