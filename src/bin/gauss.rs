//! Gaussian elimination solver CLI.
//!
//! Builds a random system from a seed, solves it, optionally verifies the
//! solution against a regenerated copy of the system, and reports timing.

use clap::{ArgAction, CommandFactory, Parser};
use gauss::prelude::*;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "gauss",
    about = "Gaussian Elimination Solver",
    disable_help_flag = true
)]
struct Cli {
    /// Seed for the random number generator
    #[arg(short = 'r', long = "seed", default_value_t = 411)]
    seed: u64,

    /// Number of rows in the matrix
    #[arg(short = 'n', long = "size", default_value_t = 2048)]
    size: usize,

    /// Range for values in the matrix
    #[arg(short = 'g', long = "range", default_value_t = 65536)]
    range: u32,

    /// Toggle verbose output (default false)
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// Toggle parallel mode (default false)
    #[arg(short = 'p', action = ArgAction::Count)]
    parallel: u8,

    /// Toggle verifying the result (default true)
    #[arg(short = 'c', action = ArgAction::Count)]
    check: u8,

    /// Worker threads in parallel mode (default: one per core)
    #[arg(short = 't', long = "threads")]
    threads: Option<usize>,

    /// Log solver internals to stderr
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    debug: bool,

    /// Print this message
    #[arg(short = 'h', action = ArgAction::Count)]
    help: u8,
}

/// Effective run settings once flag toggles are resolved
#[derive(Debug, Clone, Copy)]
struct RunConfig {
    seed: u64,
    size: usize,
    range: u32,
    verbose: bool,
    parallel: bool,
    check: bool,
    threads: Option<usize>,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        // Every occurrence of a toggle flips it
        Self {
            seed: cli.seed,
            size: cli.size,
            range: cli.range,
            verbose: cli.verbose % 2 == 1,
            parallel: cli.parallel % 2 == 1,
            check: cli.check % 2 == 0,
            threads: cli.threads,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.debug);

    if cli.help > 0 {
        print_usage();
    }

    match run(RunConfig::from(&cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match failure_report(&err) {
                Report::Stdout(message) => println!("{message}"),
                Report::Stderr(message) => eprintln!("{message}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Where a failed run reports itself
#[derive(Debug, PartialEq)]
enum Report {
    Stdout(String),
    Stderr(String),
}

/// Message for a run that ended in `err`; every failure exits non-zero.
///
/// A singular system is an expected outcome of a random seed and is reported
/// on stdout alongside the rest of the run's output.
fn failure_report(err: &Error) -> Report {
    match err {
        Error::SingularMatrix { column } => {
            tracing::debug!(column, "aborting on singular system");
            Report::Stdout("The matrix is singular!".to_string())
        }
        err => Report::Stderr(format!("error: {err}")),
    }
}

fn run(config: RunConfig) -> Result<()> {
    // Configuration echo, kept machine-parseable for scripted experiments
    println!(
        "r,n,g,p = {}, {}, {}, {}",
        config.seed,
        config.size,
        config.range,
        u8::from(config.parallel)
    );

    let (mut a, mut b) = initialize_from_seed(config.seed, config.size, config.range)?;

    if config.verbose {
        println!("Matrix (A) | B");
        print_system(&a, &b);
    }

    let client = if config.parallel {
        SolverClient::parallel().try_with_parallelism(ParallelismConfig::new(config.threads, None))?
    } else {
        SolverClient::new()
    };

    let start = Instant::now();
    let x = client.solve(&mut a, &mut b)?;
    let elapsed = start.elapsed();

    if config.verbose {
        println!("Result X");
        let values: Vec<String> = x.as_slice().iter().map(|&v| format_value(v)).collect();
        println!("{}\n", values.join(" "));
    }

    if config.check {
        // Elimination destroyed A and B; regenerate them from the seed
        fill_from_seed(config.seed, &mut a, &mut b, config.range)?;
        println!("{}", verify(&a, &b, &x)?);
    }

    println!("Total execution time: {} seconds", elapsed.as_secs_f64());
    Ok(())
}

fn print_system(a: &Matrix, b: &Vector) {
    for (row, rhs) in a.rows().zip(b.as_slice()) {
        let mut line = String::new();
        for value in row {
            line.push_str(&format_value(*value));
            line.push('\t');
        }
        println!("{line} | {}", format_value(*rhs));
    }
    println!();
}

/// Fixed six-decimal rendering keeps wide dumps readable
fn format_value(value: f64) -> String {
    format!("{value:.6}")
}

fn print_usage() {
    let _ = Cli::command().print_help();
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
