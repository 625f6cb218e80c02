//! CIDR network blocks.
//!
//! Provides [`Network`], an aligned block of addresses described by a base
//! address and prefix length, for either address family.

use super::{host_mask, Address, Family};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// A CIDR block whose base address is aligned to its prefix length.
///
/// Orders by base address, then by prefix length, so a larger block sorts
/// before the smaller blocks that start at the same address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    base: Address,
    prefix_len: u8,
}

impl Network {
    /// Create a network, rejecting prefix lengths wider than the family and
    /// bases with host bits set.
    pub fn new(base: Address, prefix_len: u8) -> Result<Network, CidrError> {
        let width = base.family().width();
        if prefix_len > width {
            return Err(CidrError::network(
                format!("{base}/{prefix_len}"),
                format!("prefix length is longer than {width}"),
            ));
        }
        if base.bits() & host_mask(width - prefix_len) != 0 {
            return Err(CidrError::network(
                format!("{base}/{prefix_len}"),
                "host bits set",
            ));
        }
        Ok(Network { base, prefix_len })
    }

    /// Build a network from an already aligned integer base.
    pub(crate) fn from_aligned(family: Family, base: u128, prefix_len: u8) -> Network {
        debug_assert!(prefix_len <= family.width());
        debug_assert_eq!(base & host_mask(family.width() - prefix_len), 0);
        Network {
            base: Address::from_bits(family, base),
            prefix_len,
        }
    }

    pub fn base(&self) -> Address {
        self.base
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn family(&self) -> Family {
        self.base.family()
    }

    /// Number of host bits, `width - prefix_len`.
    pub fn host_bits(&self) -> u8 {
        self.family().width() - self.prefix_len
    }

    /// Lowest address value in the block.
    pub fn first(&self) -> u128 {
        self.base.bits()
    }

    /// Highest address value in the block.
    pub fn last(&self) -> u128 {
        self.base.bits() | host_mask(self.host_bits())
    }

    /// Highest address in the block.
    pub fn broadcast(&self) -> Address {
        Address::from_bits(self.family(), self.last())
    }

    /// True when every address of `other` lies inside this network.
    pub fn contains(&self, other: &Network) -> bool {
        self.family() == other.family()
            && self.first() <= other.first()
            && other.last() <= self.last()
    }

    /// True when `addr` lies inside this network.
    pub fn contains_addr(&self, addr: Address) -> bool {
        self.family() == addr.family() && self.first() <= addr.bits() && addr.bits() <= self.last()
    }

    /// The enclosing block one bit shorter, or `None` for a `/0`.
    pub fn supernet(&self) -> Option<Network> {
        let prefix_len = self.prefix_len.checked_sub(1)?;
        let base = self.first() & !host_mask(self.host_bits() + 1);
        Some(Network::from_aligned(self.family(), base, prefix_len))
    }

    /// True when `self` is the lower half and `other` the upper half of the
    /// same parent block.
    pub fn is_lower_sibling_of(&self, other: &Network) -> bool {
        if self.family() != other.family() || self.prefix_len != other.prefix_len {
            return false;
        }
        if self.prefix_len == 0 {
            return false;
        }
        let bit = 1u128 << self.host_bits();
        self.first() & bit == 0 && other.first() == self.first() | bit
    }
}

/// Parse the part after the `/`: a decimal prefix length, or for IPv4 a
/// dotted netmask (`255.255.0.0`) or hostmask (`0.0.255.255`).
fn parse_prefix_len(s: &str, family: Family) -> Option<u8> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse::<u8>().ok();
    }
    if family != Family::V4 {
        return None;
    }
    let mask = u32::from(s.parse::<Ipv4Addr>().ok()?);
    [mask, !mask].into_iter().find_map(|m| {
        let len = m.leading_ones();
        (len + m.trailing_zeros() == 32).then_some(len as u8)
    })
}

impl FromStr for Network {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (addr, len) = s
            .split_once('/')
            .ok_or_else(|| CidrError::network(s, "missing '/'"))?;
        let base: Address = addr
            .parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| CidrError::network(s, format!("invalid address {addr}")))?;
        let prefix_len = parse_prefix_len(len, base.family())
            .ok_or_else(|| CidrError::network(s, format!("invalid prefix length {len}")))?;
        Network::new(base, prefix_len).map_err(|e| match e {
            CidrError::InvalidNetwork { reason, .. } => CidrError::network(s, reason),
            other => other,
        })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.prefix_len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}
