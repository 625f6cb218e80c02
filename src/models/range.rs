//! Validated start/end address ranges.

use super::{Address, Family};
use crate::error::CidrError;
use std::fmt;

/// An inclusive range of addresses of one family with `start <= end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IpRange {
    start: Address,
    end: Address,
}

impl IpRange {
    /// Validate a start/end pair.
    pub fn new(start: Address, end: Address) -> Result<IpRange, CidrError> {
        if start.family() != end.family() {
            return Err(CidrError::range(
                start,
                end,
                format!("{} and {} addresses", start.family(), end.family()),
            ));
        }
        if start.bits() > end.bits() {
            return Err(CidrError::range(start, end, "start is after end"));
        }
        Ok(IpRange { start, end })
    }

    /// Parse both tokens and validate them as a range.
    pub fn parse(start: &str, end: &str) -> Result<IpRange, CidrError> {
        IpRange::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }
}

impl fmt::Display for IpRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range() {
        let r = IpRange::parse("10.0.0.1", "10.0.0.10").unwrap();
        assert_eq!(r.family(), Family::V4);
        assert_eq!(r.to_string(), "10.0.0.1-10.0.0.10");

        let single = IpRange::parse("10.0.0.5", "10.0.0.5").unwrap();
        assert_eq!(single.start(), single.end());
    }

    #[test]
    fn test_start_after_end() {
        let err = IpRange::parse("10.0.0.10", "10.0.0.1").unwrap_err();
        assert!(matches!(err, CidrError::InvalidRange { .. }));
    }

    #[test]
    fn test_mixed_family() {
        let err = IpRange::parse("10.0.0.1", "::1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid range 10.0.0.1-::1: IPv4 and IPv6 addresses"
        );
    }

    #[test]
    fn test_bad_address() {
        let err = IpRange::parse("10.0.0.1", "10.0.0.x").unwrap_err();
        assert_eq!(err, CidrError::InvalidAddress("10.0.0.x".to_string()));
    }
}
