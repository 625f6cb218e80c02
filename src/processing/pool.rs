//! Per-family pooling of input records.
//!
//! Ranges are expanded into networks and everything is split by address
//! family, so each family can be collapsed on its own.

use super::{collapse, summarize};
use crate::input::Record;
use crate::models::{Family, Network};
use itertools::{Either, Itertools};
use serde::Serialize;

/// Networks of both address families, kept apart.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Pools {
    pub ipv4: Vec<Network>,
    pub ipv6: Vec<Network>,
}

impl Pools {
    /// Collapse each family independently.
    pub fn collapse(self) -> Pools {
        log::info!(
            "Collapsing {} IPv4 and {} IPv6 networks",
            self.ipv4.len(),
            self.ipv6.len()
        );
        let pools = Pools {
            ipv4: collapse(self.ipv4),
            ipv6: collapse(self.ipv6),
        };
        log::info!(
            "Collapsed to {} IPv4 and {} IPv6 networks",
            pools.ipv4.len(),
            pools.ipv6.len()
        );
        pools
    }

    /// All networks, IPv4 first.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.ipv4.iter().chain(self.ipv6.iter())
    }

    pub fn len(&self) -> usize {
        self.ipv4.len() + self.ipv6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}

/// Expand ranges and split all resulting networks by family.
pub fn pool_records<I>(records: I) -> Pools
where
    I: IntoIterator<Item = Record>,
{
    let (ipv4, ipv6): (Vec<Network>, Vec<Network>) = records
        .into_iter()
        .flat_map(|record| match record {
            Record::Network(network) => Either::Left(std::iter::once(network)),
            Record::Range(range) => Either::Right(summarize(&range)),
        })
        .partition_map(|network| match network.family() {
            Family::V4 => Either::Left(network),
            Family::V6 => Either::Right(network),
        });
    Pools { ipv4, ipv6 }
}
