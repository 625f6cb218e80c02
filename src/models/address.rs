//! IPv4/IPv6 address values.
//!
//! Provides [`Address`], a tagged integer per address family, along with
//! the bit-level helpers used by the summarizer and collapser.

use crate::error::CidrError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family of an [`Address`] or network.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// Highest address value representable in this family.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Mask with the low `bits` bits set.
///
/// # Examples
/// ```
/// use iprange2cidr::models::host_mask;
/// assert_eq!(host_mask(8), 0xFF);
/// assert_eq!(host_mask(128), u128::MAX);
/// ```
pub fn host_mask(bits: u8) -> u128 {
    if bits >= 128 {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

/// An IP address as a fixed-width integer tagged with its family.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    V4(u32),
    V6(u128),
}

impl Address {
    /// Build an address of `family` from its integer value.
    ///
    /// Values wider than the family are truncated to its low bits.
    pub fn from_bits(family: Family, value: u128) -> Address {
        match family {
            Family::V4 => Address::V4(value as u32),
            Family::V6 => Address::V6(value),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    /// The address value widened to `u128`.
    pub fn bits(&self) -> u128 {
        match *self {
            Address::V4(v) => v as u128,
            Address::V6(v) => v,
        }
    }

    /// Number of trailing zero bits, or the family width for the zero address.
    pub fn trailing_zeros(&self) -> u8 {
        let width = self.family().width();
        (self.bits().trailing_zeros() as u8).min(width)
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Address::V4(u32::from(v4)),
            IpAddr::V6(v6) => Address::V6(u128::from(v6)),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address::V4(u32::from(addr))
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address::V6(u128::from(addr))
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(v) => IpAddr::V4(Ipv4Addr::from(v)),
            Address::V6(v) => IpAddr::V6(Ipv6Addr::from(v)),
        }
    }
}

impl FromStr for Address {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| CidrError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", IpAddr::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v4_and_v6() {
        let a: Address = "10.0.0.5".parse().unwrap();
        assert_eq!(a, Address::V4(0x0A000005));
        assert_eq!(a.family(), Family::V4);

        let b: Address = "2001:db8::1".parse().unwrap();
        assert_eq!(b.family(), Family::V6);
        assert_eq!(b.bits(), 0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert_eq!(b.to_string(), "2001:db8::1");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "10.0.0.256".parse::<Address>(),
            Err(CidrError::InvalidAddress("10.0.0.256".to_string()))
        );
        assert!("banana".parse::<Address>().is_err());
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(Address::V4(0).trailing_zeros(), 32);
        assert_eq!(Address::V6(0).trailing_zeros(), 128);
        assert_eq!("10.0.0.8".parse::<Address>().unwrap().trailing_zeros(), 3);
        assert_eq!("10.0.0.1".parse::<Address>().unwrap().trailing_zeros(), 0);
        assert_eq!("10.0.0.0".parse::<Address>().unwrap().trailing_zeros(), 25);
    }

    #[test]
    fn test_from_bits_roundtrip_display() {
        let a = Address::from_bits(Family::V4, 0xC0A80001);
        assert_eq!(a.to_string(), "192.168.0.1");
        assert_eq!(Address::from_bits(Family::V6, 1).to_string(), "::1");
    }

    #[test]
    fn test_family_width() {
        assert_eq!(Family::V4.width(), 32);
        assert_eq!(Family::V6.width(), 128);
        assert_eq!(Family::V4.max_value(), 0xFFFF_FFFF);
        assert_eq!(host_mask(0), 0);
        assert_eq!(host_mask(32), 0xFFFF_FFFF);
    }
}
