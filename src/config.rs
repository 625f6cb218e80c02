//! Command line configuration.
//!
//! Flags may also come from the environment, and a `.env` file in the
//! working directory is loaded before parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the collapsed networks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One network per line, with prefix and suffix.
    #[default]
    Text,
    /// A JSON object with `ipv4` and `ipv6` lists.
    Json,
}

/// Convert IP address ranges and networks into a minimal list of CIDR blocks.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Input files with one range (`start-end`) or network (`addr/len`) per line. `-` reads stdin.
    #[arg(required = true, value_name = "FILENAME")]
    pub files: Vec<PathBuf>,

    /// Text written before every network.
    #[arg(short, long, env = "IPRANGE2CIDR_PREFIX", default_value = "")]
    pub prefix: String,

    /// Text written after every network.
    #[arg(short, long, env = "IPRANGE2CIDR_SUFFIX", default_value = "")]
    pub suffix: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// log4rs YAML configuration file, overrides -v.
    #[arg(long, env = "IPRANGE2CIDR_LOG_CONFIG", value_name = "FILE")]
    pub log_config: Option<PathBuf>,

    /// Disable coloured diagnostics.
    #[arg(long)]
    pub no_color: bool,
}

impl Config {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
