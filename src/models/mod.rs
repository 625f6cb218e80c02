//! Address, range and network value types.
//!
//! - [`Address`] and [`Family`] - an IPv4/IPv6 address as a tagged integer
//! - [`IpRange`] - a validated inclusive start/end range
//! - [`Network`] - an aligned CIDR block

mod address;
mod network;
mod range;

pub use address::{host_mask, Address, Family};
pub use network::Network;
pub use range::IpRange;
