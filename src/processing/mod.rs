//! CIDR processing logic.
//!
//! - [`summarize`] - Expanding an address range into CIDR blocks
//! - [`collapse`] - Minimizing a pool of CIDR blocks of one family
//! - [`pool_records`] - Splitting input records into per-family pools

mod collapse;
mod pool;
mod summarize;

// Re-export public functions
pub use collapse::collapse;
pub use pool::{pool_records, Pools};
pub use summarize::{summarize, summarize_address_range, Summarize};
