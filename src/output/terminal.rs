//! Plain text output.

use crate::models::Network;
use std::error::Error;
use std::io::Write;

/// Render a network as `<prefix><base>/<len><suffix>`.
///
/// # Examples
/// ```
/// use iprange2cidr::models::Network;
/// use iprange2cidr::output::render;
/// let net: Network = "10.0.0.0/8".parse().unwrap();
/// assert_eq!(render(&net, "allow ", ";"), "allow 10.0.0.0/8;");
/// ```
pub fn render(network: &Network, prefix: &str, suffix: &str) -> String {
    format!("{prefix}{network}{suffix}")
}

/// Write one rendered network per line.
pub fn write_networks<'a, W, I>(
    out: &mut W,
    networks: I,
    prefix: &str,
    suffix: &str,
) -> Result<(), Box<dyn Error>>
where
    W: Write,
    I: IntoIterator<Item = &'a Network>,
{
    for network in networks {
        writeln!(out, "{}", render(network, prefix, suffix))?;
    }
    out.flush()?;
    Ok(())
}
