//! Test-Input Generator Command-Line Interface
//!
//! This is the main entry point for generating randomized nuclear-attraction
//! integral test inputs, with optional YAML configuration.

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use tracing::info;

use enucgen::config::{Args, Config, GeneratorParams};
use enucgen::generator;
use enucgen::io::setup_logging;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    setup_logging();

    // Load and parse the optional configuration file
    let config = match &args.config {
        Some(path) => {
            info!("Reading configuration from: {}", path);
            let config_content = fs::read_to_string(path)
                .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;
            Some(
                serde_yml::from_str::<Config>(&config_content)
                    .wrap_err("Failed to parse configuration file")?,
            )
        }
        None => None,
    };

    // Command-line options always win over the configuration file
    let params = GeneratorParams::resolve(&args, config.as_ref())?;
    info!("Generator parameters:\n{:?}", params);

    let invocation = std::env::args().collect::<Vec<_>>().join(" ");
    generator::generate(&params, &invocation)?;

    info!("Wrote {} test cases to {}", params.ntests, params.filename);
    Ok(())
}
