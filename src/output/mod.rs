//! Output formatting for collapsed networks.
//!
//! This module handles writing the result:
//! - [`terminal`] - One decorated network per line
//! - [`json`] - A JSON document with one list per address family

mod json;
mod terminal;

pub use json::write_json;
pub use terminal::{render, write_networks};
