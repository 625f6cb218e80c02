//! JSON output.

use crate::processing::Pools;
use std::error::Error;
use std::io::Write;

/// Write both pools as `{"ipv4": [...], "ipv6": [...]}`.
pub fn write_json<W: Write>(out: &mut W, pools: &Pools) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, pools)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
