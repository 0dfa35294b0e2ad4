//! MACE Estimate CLI Tool
//!
//! Run one simulated risk estimation over a patient intake record.
//!
//! Usage:
//!   mace-estimate <input.json> [--seed <n>] [--pretty]
//!   cat input.json | mace-estimate -
//!
//! The input is a `PatientInput` JSON object, e.g.:
//!   {"age": 65, "sex": "male", "medical_history": ["Previous Cardiac Event"]}
//!
//! Incomplete input (missing age or sex) exits non-zero with the error on
//! stderr, matching the form's validation behavior.

use clap::Parser;
use mace_core::{PatientInput, RiskEstimator};
use std::fs;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "mace-estimate")]
#[command(version = "0.1.0")]
#[command(about = "Simulated MACE risk estimation over a patient JSON record", long_about = None)]
struct Cli {
    /// Path to the patient JSON file, or '-' for stdin
    input: String,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the result JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let raw = if cli.input == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let input: PatientInput = serde_json::from_str(&raw)?;

    let estimator = match cli.seed {
        Some(seed) => RiskEstimator::seeded(seed),
        None => RiskEstimator::new(),
    };
    let result = estimator.estimate(&input)?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
