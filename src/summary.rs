use crate::error::StatsError;
use crate::stats::FastaStats;
use std::fs::File;
use std::io::{BufRead, BufReader};

const HEADER_MARKER: u8 = b'>';

/// Collects fragment lines into the currently open record and folds each completed
/// record into a `FastaStats`.
pub struct SequenceAccumulator {
    stats: FastaStats,
    current: Vec<u8>,
    open: bool,
}

impl SequenceAccumulator {
    pub fn new() -> Self {
        Self {
            stats: FastaStats::new(),
            current: Vec::new(),
            open: false,
        }
    }

    /// Classifies a single line, with its terminator already removed.
    ///
    /// A header line closes the open record (if any) and opens a new one. Any other
    /// line is appended verbatim to the open record; a fragment before the first
    /// header opens an implicit record.
    pub fn push_line(&mut self, line: &[u8]) {
        if line.first() == Some(&HEADER_MARKER) {
            self.close_record();
            self.open = true;
        } else {
            self.current.extend_from_slice(line);
            self.open = true;
        }
    }

    fn close_record(&mut self) {
        if !self.open {
            return;
        }
        trace!(
            "Record {} finalized with length {}",
            self.stats.num_records + 1,
            self.current.len()
        );
        self.stats.add_record(&self.current);
        self.current.clear();
        self.open = false;
    }

    /// Closes the last open record and computes the derived mean.
    pub fn finish(mut self) -> FastaStats {
        self.close_record();
        self.stats.finalize();
        self.stats
    }
}

/// Strips a trailing `\n`, then a trailing `\r`.
fn trim_line_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Runs the statistics pass over any buffered reader.
///
/// # Arguments
///
/// * `reader` - The FASTA input.
/// * `path` - The name used for the input in error messages.
///
/// # Errors
///
/// Returns `StatsError::Read` on the first I/O error; no partial statistics are returned.
pub fn summarize_reader<R: BufRead>(mut reader: R, path: &str) -> Result<FastaStats, StatsError> {
    let mut acc = SequenceAccumulator::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| StatsError::Read {
                path: path.to_string(),
                source,
            })?;

        if read == 0 {
            break;
        }
        acc.push_line(trim_line_terminator(&line));
    }

    Ok(acc.finish())
}

/// Opens the file at `path` and summarizes its records.
///
/// # Errors
///
/// Returns `StatsError::Open` if the file cannot be opened, or `StatsError::Read` if
/// reading fails part way through.
pub fn summarize_path(path: &str) -> Result<FastaStats, StatsError> {
    let file = File::open(path).map_err(|source| StatsError::Open {
        path: path.to_string(),
        source,
    })?;

    let stats = summarize_reader(BufReader::new(file), path)?;
    debug!(
        "Read {} records totalling {} bases from {path}",
        stats.num_records, stats.tot_len
    );

    Ok(stats)
}
