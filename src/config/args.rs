//! Command-line argument parsing for the test-input generator

use clap::Parser;

/// Generate randomized input files for nuclear-attraction integral tests
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML configuration file supplying any of the options below
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output file name
    #[arg(long, required_unless_present = "config")]
    pub filename: Option<String>,

    /// Maximum AM of the basis functions
    #[arg(long, required_unless_present = "config")]
    pub max_am: Option<u32>,

    /// Maximum power of the exponent (range will be 1e-x to 1e+x)
    #[arg(long, required_unless_present = "config")]
    pub alpha_power: Option<i32>,

    /// Maximum power of the coordinates (range will be -1e+x to 1e+x)
    #[arg(long, required_unless_present = "config")]
    pub xyz_power: Option<i32>,

    /// Seed to use for the pseudo-random number generator
    #[arg(long, required_unless_present = "config")]
    pub seed: Option<u64>,

    /// Number of digits for the sampled values
    #[arg(long, required_unless_present = "config")]
    pub ndigits: Option<usize>,

    /// Number of tests to generate
    #[arg(long, required_unless_present = "config")]
    pub ntests: Option<usize>,
}
