//! Command-line front-end for the solver.
//!
//! Reads polynomial coefficients from the arguments (or stdin when none are
//! given), highest degree first, and prints one root per line as `re,im`.
//!
//! Exit codes: 0 when the iteration converged, 1 when the iteration ran out
//! of iterations (roots are still printed), 2 on invalid input.

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use durand_kerner::{num::complex::Complex64, roots};

#[derive(Parser, Debug)]
#[command(name = "durand-kerner", version, about = "Find all complex roots of a polynomial")]
struct Args {
    /// Coefficients from the highest degree down, each `re` or `re,im`
    coeffs: Vec<String>,

    /// Stopping tolerance on the largest per-root update of an iteration
    #[arg(long, default_value_t = roots::DEFAULT_EPSILON)]
    tolerance: f64,

    /// Iteration cap
    #[arg(long, default_value_t = roots::DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Log solver diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_complex(token: &str) -> anyhow::Result<Complex64> {
    let token = token.trim();
    let parsed = match token.split_once(',') {
        Some((re, im)) => Complex64::new(re.trim().parse()?, im.trim().parse()?),
        None => Complex64::new(token.parse()?, 0.0),
    };
    Ok(parsed)
}

fn read_coeffs(args: &Args) -> anyhow::Result<Vec<Complex64>> {
    let tokens: Vec<String> = if args.coeffs.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read coefficients from stdin")?;
        input.split_whitespace().map(str::to_owned).collect()
    } else {
        args.coeffs.clone()
    };

    tokens
        .iter()
        .map(|token| {
            parse_complex(token).with_context(|| format!("invalid coefficient {token:?}"))
        })
        .collect()
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::Level::Warn,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    let _ = simple_logger::init_with_level(level);

    let coeffs = match read_coeffs(&args) {
        Ok(coeffs) => coeffs,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    match roots::solve(&coeffs, Some(args.tolerance), Some(args.max_iter)) {
        Ok(solution) => {
            for root in solution.roots() {
                println!("{},{}", root.re, root.im);
            }
            if solution.converged() {
                ExitCode::SUCCESS
            } else {
                log::warn!(
                    "did not converge within {} iterations, roots are approximate",
                    solution.iterations()
                );
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
