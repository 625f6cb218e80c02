//! Input reading and line classification.
//!
//! - [`line`] - Classifying a single line as network, range or nothing
//! - [`file`] - Reading files and stdin, reporting skipped lines

mod file;
mod line;

pub use file::{read_files, read_records, skipped_message, Input, STDIN_NAME};
pub use line::{parse_line, Record};
