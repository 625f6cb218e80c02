//! Network collapsing.
//!
//! Reduces a pool of CIDR blocks of one address family to the smallest
//! sorted set of non-overlapping blocks covering the same addresses.

use crate::models::Network;
use itertools::Itertools;

/// Collapse `networks` into the minimal sorted, non-overlapping equivalent.
///
/// # Panics
/// * If the input mixes IPv4 and IPv6 networks. Pools must be split by
///   family before collapsing.
pub fn collapse<I>(networks: I) -> Vec<Network>
where
    I: IntoIterator<Item = Network>,
{
    let sorted: Vec<Network> = networks.into_iter().sorted().collect();
    if let Some(first) = sorted.first() {
        let family = first.family();
        assert!(
            sorted.iter().all(|n| n.family() == family),
            "collapse() called with mixed address families, pools must be split by family"
        );
    }

    let mut result = drop_subsumed(sorted);
    log::trace!("collapse: {} networks after subsumption", result.len());

    let mut passes = 0;
    loop {
        passes += 1;
        let (merged, changed) = merge_siblings(&result);
        result = merged;
        if !changed {
            break;
        }
    }
    log::trace!(
        "collapse: {} networks after {} merge passes",
        result.len(),
        passes
    );
    result
}

/// Drop every network contained in the last kept one. Input must be sorted.
fn drop_subsumed(sorted: Vec<Network>) -> Vec<Network> {
    let mut kept: Vec<Network> = Vec::with_capacity(sorted.len());
    for candidate in sorted {
        match kept.last() {
            Some(last) if last.contains(&candidate) => {
                log::trace!("drop {candidate}, contained in {last}");
            }
            _ => kept.push(candidate),
        }
    }
    kept
}

/// One left to right pass joining adjacent sibling pairs into their parent.
///
/// Returns the new list and whether anything was merged.
fn merge_siblings(networks: &[Network]) -> (Vec<Network>, bool) {
    let mut out = Vec::with_capacity(networks.len());
    let mut changed = false;
    let mut i = 0;
    while i < networks.len() {
        let current = networks[i];
        let parent = networks
            .get(i + 1)
            .filter(|next| current.is_lower_sibling_of(next))
            .and_then(|_| current.supernet());
        match parent {
            Some(parent) => {
                out.push(parent);
                changed = true;
                i += 2;
            }
            None => {
                out.push(current);
                i += 1;
            }
        }
    }
    (out, changed)
}
