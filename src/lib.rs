//! Convert IP address ranges and networks into the minimal set of CIDR blocks.
//!
//! Ranges are summarized into aligned blocks, pooled with explicit networks
//! per address family, and each pool is collapsed to its minimal form.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::{Config, OutputFormat};
use processing::{pool_records, Pools};
use std::error::Error;
use std::io::Write;
use std::path::Path;

pub use error::CidrError;

/// Read `files` and return the collapsed networks of both families.
///
/// Invalid lines are logged and skipped, only I/O failures are errors.
pub fn cidrs_from_files<P: AsRef<Path>>(files: &[P]) -> Result<Pools, Box<dyn Error>> {
    let input = input::read_files(files)?;
    log::info!(
        "Read {} records, skipped {} invalid lines",
        input.records.len(),
        input.skipped
    );
    Ok(pool_records(input.records).collapse())
}

/// Run the whole conversion and write the result to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), Box<dyn Error>> {
    let pools = cidrs_from_files(config.files.as_slice())?;
    match config.format {
        OutputFormat::Text => {
            output::write_networks(out, pools.iter(), &config.prefix, &config.suffix)?
        }
        OutputFormat::Json => output::write_json(out, &pools)?,
    }
    Ok(())
}
