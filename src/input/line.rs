//! Line classification.
//!
//! Turns one input line into an explicit network, a start/end range, or
//! nothing at all.

use crate::error::CidrError;
use crate::models::{IpRange, Network};
use regex::Regex;
use std::sync::OnceLock;

/// Separators allowed between the start and end address of a range.
static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_separator_regex() -> &'static Regex {
    SEPARATOR_REGEX.get_or_init(|| Regex::new(r"[,;\s\-_@|]+").expect("Invalid Regex"))
}

/// One useful input line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Record {
    Network(Network),
    Range(IpRange),
}

/// Classify a line.
///
/// # Returns
/// * `Ok(Some(record))` - an explicit network or a valid range
/// * `Ok(None)` - blank line, comment, or not two tokens
/// * `Err` - the line looks like a network or range but does not parse
pub fn parse_line(line: &str) -> Result<Option<Record>, CidrError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if line.contains('/') {
        return line.parse::<Network>().map(|n| Some(Record::Network(n)));
    }

    let tokens: Vec<&str> = get_separator_regex().split(line).collect();
    match tokens.as_slice() {
        [start, end] => IpRange::parse(start, end)
            .map(|r| Some(Record::Range(r)))
            .map_err(|e| match e {
                // report the pair, not just the half that failed
                CidrError::InvalidAddress(addr) => {
                    CidrError::range(start, end, format!("invalid address {addr}"))
                }
                other => other,
            }),
        _ => {
            log::debug!("ignoring line with {} tokens: {line}", tokens.len());
            Ok(None)
        }
    }
}
