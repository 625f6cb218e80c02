//! Address range to CIDR summarization.
//!
//! Splits an inclusive range into the fewest aligned blocks that cover it
//! exactly, taking the largest block the current address is aligned to
//! that still fits in what is left of the range.

use crate::error::CidrError;
use crate::models::{Address, Family, IpRange, Network};

/// Lazy iterator over the CIDR blocks of one [`IpRange`], in ascending order.
#[derive(Debug, Clone)]
pub struct Summarize {
    family: Family,
    /// Next uncovered address, `None` once the range is exhausted.
    cur: Option<u128>,
    end: u128,
}

/// Summarize a validated range into CIDR blocks.
pub fn summarize(range: &IpRange) -> Summarize {
    Summarize {
        family: range.family(),
        cur: Some(range.start().bits()),
        end: range.end().bits(),
    }
}

/// Validate `start`/`end` as a range and summarize it.
pub fn summarize_address_range(start: Address, end: Address) -> Result<Summarize, CidrError> {
    let range = IpRange::new(start, end)?;
    Ok(summarize(&range))
}

/// Exponent of the largest power of two not above `end - cur + 1`.
fn size_bits(cur: u128, end: u128) -> u8 {
    match (end - cur).checked_add(1) {
        Some(remaining) => (127 - remaining.leading_zeros()) as u8,
        // the whole IPv6 space, 2^128 addresses
        None => 128,
    }
}

impl Iterator for Summarize {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        let cur = self.cur?;
        let width = self.family.width();

        let align_bits = (cur.trailing_zeros() as u8).min(width);
        let block_bits = align_bits.min(size_bits(cur, self.end));
        let network = Network::from_aligned(self.family, cur, width - block_bits);

        self.cur = match block_bits {
            128 => None,
            _ => cur
                .checked_add(1u128 << block_bits)
                .filter(|next| *next <= self.end),
        };
        Some(network)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cur {
            None => (0, Some(0)),
            // a range never needs more than two blocks per bit
            Some(_) => (1, Some(2 * self.family.width() as usize)),
        }
    }
}

impl std::iter::FusedIterator for Summarize {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn sum(start: &str, end: &str) -> Vec<String> {
        let range = IpRange::parse(start, end).unwrap();
        summarize(&range).map(|n| n.to_string()).collect()
    }

    /// Check the blocks are ascending, contiguous and cover exactly start..=end.
    fn assert_exact_cover(start: &str, end: &str) {
        let range = IpRange::parse(start, end).unwrap();
        let nets: Vec<Network> = summarize(&range).collect();
        assert!(!nets.is_empty());
        assert_eq!(nets[0].first(), range.start().bits());
        assert_eq!(nets[nets.len() - 1].last(), range.end().bits());
        for (a, b) in nets.iter().tuple_windows() {
            assert_eq!(a.last() + 1, b.first(), "gap or overlap between {a} and {b}");
            assert!(
                !a.is_lower_sibling_of(b),
                "{a} and {b} should have been one block"
            );
        }
    }

    #[test]
    fn test_single_host() {
        assert_eq!(sum("10.0.0.5", "10.0.0.5"), vec!["10.0.0.5/32"]);
        assert_eq!(sum("::1", "::1"), vec!["::1/128"]);
    }

    #[test]
    fn test_full_space() {
        assert_eq!(sum("0.0.0.0", "255.255.255.255"), vec!["0.0.0.0/0"]);
        assert_eq!(
            sum("::", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            vec!["::/0"]
        );
    }

    #[test]
    fn test_misaligned() {
        assert_eq!(
            sum("10.0.0.1", "10.0.0.10"),
            vec![
                "10.0.0.1/32",
                "10.0.0.2/31",
                "10.0.0.4/30",
                "10.0.0.8/31",
                "10.0.0.10/32"
            ]
        );
    }

    #[test]
    fn test_aligned_block() {
        assert_eq!(sum("192.168.0.0", "192.168.255.255"), vec!["192.168.0.0/16"]);
        assert_eq!(
            sum("192.168.0.0", "192.168.2.255"),
            vec!["192.168.0.0/23", "192.168.2.0/24"]
        );
    }

    #[test]
    fn test_top_of_address_space() {
        assert_eq!(
            sum("255.255.255.254", "255.255.255.255"),
            vec!["255.255.255.254/31"]
        );
        assert_eq!(
            sum("255.255.255.253", "255.255.255.255"),
            vec!["255.255.255.253/32", "255.255.255.254/31"]
        );
        assert_eq!(
            sum("128.0.0.0", "255.255.255.255"),
            vec!["128.0.0.0/1"]
        );
        assert_eq!(
            sum("ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"),
            vec!["ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe/127"]
        );
    }

    #[test]
    fn test_from_zero() {
        assert_eq!(
            sum("0.0.0.0", "0.0.0.2"),
            vec!["0.0.0.0/31", "0.0.0.2/32"]
        );
        assert_eq!(
            sum("0.0.0.0", "254.255.255.255"),
            vec!["0.0.0.0/1", "128.0.0.0/2", "192.0.0.0/3", "224.0.0.0/4", "240.0.0.0/5",
                 "248.0.0.0/6", "252.0.0.0/7", "254.0.0.0/8"]
        );
    }

    #[test]
    fn test_exact_cover() {
        assert_exact_cover("10.0.0.1", "10.0.0.10");
        assert_exact_cover("1.2.3.4", "200.100.50.25");
        assert_exact_cover("0.0.0.1", "255.255.255.254");
        assert_exact_cover("2001:db8::7", "2001:db8:0:1::3");
        assert_exact_cover("::1", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:fffe");
    }

    #[test]
    fn test_invalid_range() {
        let start: Address = "10.0.0.10".parse().unwrap();
        let end: Address = "10.0.0.1".parse().unwrap();
        let err = summarize_address_range(start, end).unwrap_err();
        assert!(matches!(err, CidrError::InvalidRange { .. }));

        let v6: Address = "::1".parse().unwrap();
        assert!(summarize_address_range(start, v6).is_err());
    }

    #[test]
    fn test_fused() {
        let range = IpRange::parse("10.0.0.0", "10.0.0.0").unwrap();
        let mut it = summarize(&range);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
