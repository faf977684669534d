//! XIRR CLI
//!
//! Computes the XIRR of a single `date,amount` CSV file.
//! Supports JSON output via --json. Solver settings may also come from
//! XIRR_TOLERANCE and XIRR_MAX_ITERATIONS.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use xirr::payment::load_payments;
use xirr::solver::{DEFAULT_MAX_ITERATIONS, MAX_ERROR};
use xirr::{compute_with_config, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "xirr", version, about = "Extended internal rate of return for dated cash flows")]
struct Cli {
    /// CSV file of `YYYY-MM-DD,amount` rows (no header)
    file: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Convergence threshold between successive iterates
    #[arg(long, env = "XIRR_TOLERANCE", default_value_t = MAX_ERROR)]
    tolerance: f64,

    /// Newton iterations allowed per initial guess
    #[arg(long, env = "XIRR_MAX_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
}

#[derive(Serialize)]
struct XirrResponse {
    rate: Option<f64>,
    payments: usize,
    converged: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SolverConfig::default()
        .with_tolerance(cli.tolerance)
        .with_max_iterations(cli.max_iterations);

    let payments = load_payments(&cli.file)
        .map_err(|e| anyhow!("Failed to load payments from {}: {}", cli.file.display(), e))?;
    log::debug!("Loaded {} payments from {}", payments.len(), cli.file.display());

    let rate = compute_with_config(&payments, &config)
        .with_context(|| format!("Cannot compute XIRR for {}", cli.file.display()))?;

    if cli.json {
        let response = XirrResponse {
            rate: (!rate.is_nan()).then_some(rate),
            payments: payments.len(),
            converged: !rate.is_nan(),
        };
        println!("{}", serde_json::to_string(&response)?);
    } else if rate.is_nan() {
        println!("No convergent rate found");
    } else {
        println!("{:.10}", rate);
    }

    Ok(())
}
