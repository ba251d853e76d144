//! Configuration management for the test-input generator
//!
//! This module handles the optional YAML configuration file and the merging
//! of command-line overrides into a fully resolved parameter set.

mod args;

pub use args::Args;

use color_eyre::eyre::{eyre, Result};
use serde::{Deserialize, Serialize};

/// Optional YAML configuration mirroring the command-line options
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub filename: Option<String>,
    pub max_am: Option<u32>,
    pub alpha_power: Option<i32>,
    pub xyz_power: Option<i32>,
    pub seed: Option<u64>,
    pub ndigits: Option<usize>,
    pub ntests: Option<usize>,
}

/// Fully resolved parameters for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorParams {
    pub filename: String,
    pub max_am: u32,
    pub alpha_power: i32,
    pub xyz_power: i32,
    pub seed: u64,
    pub ndigits: usize,
    pub ntests: usize,
}

impl GeneratorParams {
    /// Merge command-line arguments over the configuration file.
    /// Command-line values always win; any parameter left unset by both
    /// sources is an error.
    pub fn resolve(args: &Args, config: Option<&Config>) -> Result<Self> {
        let defaults = Config::default();
        let config = config.unwrap_or(&defaults);

        let params = GeneratorParams {
            filename: args
                .filename
                .clone()
                .or_else(|| config.filename.clone())
                .ok_or_else(|| eyre!("Missing required option: filename"))?,
            max_am: args
                .max_am
                .or(config.max_am)
                .ok_or_else(|| eyre!("Missing required option: max-am"))?,
            alpha_power: args
                .alpha_power
                .or(config.alpha_power)
                .ok_or_else(|| eyre!("Missing required option: alpha-power"))?,
            xyz_power: args
                .xyz_power
                .or(config.xyz_power)
                .ok_or_else(|| eyre!("Missing required option: xyz-power"))?,
            seed: args
                .seed
                .or(config.seed)
                .ok_or_else(|| eyre!("Missing required option: seed"))?,
            ndigits: args
                .ndigits
                .or(config.ndigits)
                .ok_or_else(|| eyre!("Missing required option: ndigits"))?,
            ntests: args
                .ntests
                .or(config.ntests)
                .ok_or_else(|| eyre!("Missing required option: ntests"))?,
        };

        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        if self.ndigits == 0 {
            return Err(eyre!("ndigits must be a positive digit count"));
        }
        if self.alpha_power < 0 {
            return Err(eyre!("alpha-power must be non-negative"));
        }
        if self.xyz_power < 0 {
            return Err(eyre!("xyz-power must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn full_args() -> Args {
        Args::parse_from([
            "enucgen",
            "--filename",
            "out.inp",
            "--max-am",
            "2",
            "--alpha-power",
            "3",
            "--xyz-power",
            "2",
            "--seed",
            "42",
            "--ndigits",
            "15",
            "--ntests",
            "5",
        ])
    }

    #[test]
    fn resolve_from_args_only() {
        let params = GeneratorParams::resolve(&full_args(), None).unwrap();
        assert_eq!(params.filename, "out.inp");
        assert_eq!(params.max_am, 2);
        assert_eq!(params.alpha_power, 3);
        assert_eq!(params.xyz_power, 2);
        assert_eq!(params.seed, 42);
        assert_eq!(params.ndigits, 15);
        assert_eq!(params.ntests, 5);
    }

    #[test]
    fn args_override_config() {
        let config = Config {
            filename: Some("from_config.inp".to_string()),
            max_am: Some(4),
            alpha_power: Some(1),
            xyz_power: Some(1),
            seed: Some(7),
            ndigits: Some(10),
            ntests: Some(100),
        };
        let params = GeneratorParams::resolve(&full_args(), Some(&config)).unwrap();
        // Everything came from the command line, not the file
        assert_eq!(params.filename, "out.inp");
        assert_eq!(params.seed, 42);
        assert_eq!(params.ntests, 5);
    }

    #[test]
    fn config_fills_missing_args() {
        let args = Args::parse_from(["enucgen", "--config", "cfg.yaml", "--seed", "9"]);
        let config = Config {
            filename: Some("from_config.inp".to_string()),
            max_am: Some(4),
            alpha_power: Some(1),
            xyz_power: Some(1),
            seed: Some(7),
            ndigits: Some(10),
            ntests: Some(100),
        };
        let params = GeneratorParams::resolve(&args, Some(&config)).unwrap();
        assert_eq!(params.filename, "from_config.inp");
        assert_eq!(params.max_am, 4);
        // The command line still overrides individual fields
        assert_eq!(params.seed, 9);
    }

    #[test]
    fn missing_parameter_is_an_error() {
        let args = Args::parse_from(["enucgen", "--config", "cfg.yaml"]);
        let config = Config {
            filename: Some("from_config.inp".to_string()),
            ..Config::default()
        };
        let err = GeneratorParams::resolve(&args, Some(&config)).unwrap_err();
        assert!(err.to_string().contains("max-am"));
    }

    #[test]
    fn zero_ndigits_is_rejected() {
        let mut args = full_args();
        args.ndigits = Some(0);
        let err = GeneratorParams::resolve(&args, None).unwrap_err();
        assert!(err.to_string().contains("ndigits"));
    }

    #[test]
    fn flags_are_required_without_config() {
        let result = Args::try_parse_from(["enucgen", "--filename", "out.inp"]);
        assert!(result.is_err());
    }
}
