//! CLI Module
//!
//! Command-line interface for the RC filter response engine.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::filter::Topology;

/// RC Filter Analyzer - frequency response of a fixed single-pole RC filter
#[derive(Parser, Debug)]
#[command(name = "rcfilter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, rounded for display
    #[default]
    Text,
    /// Full-precision JSON response bodies
    Json,
    /// Comma-separated values (sweeps only; other commands print text)
    Csv,
}

/// Parse a filter topology through its wire name
fn parse_topology(value: &str) -> Result<Topology, String> {
    value.parse().map_err(|e: crate::error::RcFilterError| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute magnitude, gain and output voltage at one frequency
    #[command(name = "gain")]
    Gain {
        /// Filter topology (low-pass, high-pass)
        #[arg(short = 't', long = "filter", value_parser = parse_topology)]
        filter: Topology,

        /// Input frequency in Hz (must be > 0)
        #[arg(short = 'q', long, allow_negative_numbers = true)]
        frequency: f64,
    },

    /// Gain over the fixed 1 Hz - 100 kHz band
    #[command(name = "sweep")]
    Sweep {
        /// Filter topology (low-pass, high-pass)
        #[arg(short = 't', long = "filter", value_parser = parse_topology)]
        filter: Topology,

        /// Accepted for request compatibility; does not change the band
        #[arg(short = 'q', long, allow_negative_numbers = true)]
        frequency: Option<f64>,
    },

    /// Print the circuit constants and cutoff frequency
    #[command(name = "info")]
    Info,

    /// Run a JSON request body through an endpoint handler
    #[command(name = "request")]
    Request {
        /// Endpoint name or path (rc-gain, sweep, health)
        endpoint: String,

        /// File holding the request body (reads stdin when omitted)
        #[arg(short, long)]
        body: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gain() {
        let cli = Cli::parse_from([
            "rcfilter", "gain", "--filter", "high-pass", "--frequency", "1591.55",
        ]);
        match cli.command {
            Some(Commands::Gain { filter, frequency }) => {
                assert_eq!(filter, Topology::HighPass);
                assert_eq!(frequency, 1591.55);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_negative_frequency_reaches_engine() {
        let cli = Cli::parse_from(["rcfilter", "gain", "-t", "low-pass", "-q", "-1"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Gain { frequency, .. }) if frequency == -1.0
        ));
    }

    #[test]
    fn test_parse_sweep_global_format() {
        let cli = Cli::parse_from(["rcfilter", "sweep", "--filter", "low-pass", "--format", "csv"]);
        assert_eq!(cli.format, OutputFormat::Csv);
        assert!(matches!(
            cli.command,
            Some(Commands::Sweep { frequency: None, .. })
        ));
    }

    #[test]
    fn test_parse_topology_messages() {
        assert_eq!(parse_topology("low-pass"), Ok(Topology::LowPass));
        let err = parse_topology("notch").unwrap_err();
        assert!(err.contains("Unknown filter type: 'notch'"));
    }

    #[test]
    fn test_rejects_unknown_filter() {
        let result = Cli::try_parse_from(["rcfilter", "gain", "--filter", "notch", "-q", "10"]);
        assert!(result.is_err());
    }
}
