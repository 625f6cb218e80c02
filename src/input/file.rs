//! Reading input files.

use super::line::{parse_line, Record};
use crate::error::CidrError;
use colored::Colorize;
use std::borrow::Cow;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// File name that reads from standard input.
pub const STDIN_NAME: &str = "-";

/// Records read from the input, and how many lines were skipped as invalid.
#[derive(Debug, Default)]
pub struct Input {
    pub records: Vec<Record>,
    pub skipped: usize,
}

/// Diagnostic line for a skipped record, naming the offending input.
pub fn skipped_message(err: &CidrError) -> String {
    match err {
        CidrError::InvalidNetwork { network, .. } => format!("skipping invalid network: {network}"),
        CidrError::InvalidRange { start, end, .. } => {
            format!("skipping invalid range: {start},{end}")
        }
        CidrError::InvalidAddress(addr) => format!("skipping invalid address: {addr}"),
    }
}

/// Log a skipped record on the diagnostic stream.
fn report_skipped(source: &str, line_no: usize, err: &CidrError) {
    log::warn!("{}", skipped_message(err).yellow());
    log::debug!("{source}:{line_no}: {err}");
}

/// Classify every line of `reader`, appending valid records to `input`.
///
/// Lines that are not valid UTF-8 are decoded lossily, so a stray Latin-1
/// comment does not stop the run. Only read failures are errors.
pub fn read_records<R: BufRead>(
    mut reader: R,
    source: &str,
    input: &mut Input,
) -> Result<(), Box<dyn Error>> {
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| format!("Error reading {source}: {e}"))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            log::debug!("{source}:{line_no}: line is not valid UTF-8");
        }
        match parse_line(&line) {
            Ok(Some(record)) => input.records.push(record),
            Ok(None) => {}
            Err(e) => {
                report_skipped(source, line_no, &e);
                input.skipped += 1;
            }
        }
    }
    Ok(())
}

/// Read all files in order. `-` reads standard input.
///
/// # Returns
/// * `Ok(Input)` - all valid records
/// * `Err` - if a file cannot be opened or read
pub fn read_files<P: AsRef<Path>>(files: &[P]) -> Result<Input, Box<dyn Error>> {
    let mut input = Input::default();
    for file in files {
        let path = file.as_ref();
        let source = path.display().to_string();
        let before = input.records.len();

        if source == STDIN_NAME {
            log::info!("Reading from stdin");
            read_records(io::stdin().lock(), "<stdin>", &mut input)?;
        } else {
            log::info!("Reading from file: {source}");
            let f = File::open(path).map_err(|e| format!("Error opening {source}: {e}"))?;
            read_records(BufReader::new(f), &source, &mut input)?;
        }

        log::debug!(
            "{source}: {} records",
            input.records.len() - before
        );
    }

    if input.skipped > 0 {
        log::info!("Skipped {} invalid lines", input.skipped);
    }
    Ok(input)
}
