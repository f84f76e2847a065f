//! Timing-table parsing.
//!
//! One table per CSV file, one file per algorithm/dataset/scheduling
//! combination. The format is what the benchmark executables export: a
//! header line (`n_thread,milliseconds`, discarded), then one
//! `thread_count,elapsed_ms` row per measured thread count.

use std::path::Path;

use crate::error::{Error, Result};

/// One measured run at a given thread count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingRecord {
    pub threads: u32,
    pub elapsed_ms: f64,
}

/// An ordered, non-empty sequence of timing records from one source file.
///
/// Rows are kept in file order; nothing re-sorts by thread count.
#[derive(Debug, Clone)]
pub struct TimingTable {
    source_id: String,
    records: Vec<TimingRecord>,
}

impl TimingTable {
    /// Parse a table from CSV text.
    ///
    /// The first line is discarded as the header. Each following row must be
    /// exactly two comma-separated fields: a positive integer thread count
    /// and a positive elapsed time in milliseconds.
    pub fn parse(source_id: &str, text: &str) -> Result<Self> {
        let malformed = |line: usize, reason: String| Error::MalformedInput {
            source_id: source_id.to_string(),
            line,
            reason,
        };

        let mut lines = text.lines().enumerate();
        if lines.next().is_none() {
            return Err(Error::EmptyTable(source_id.to_string()));
        }

        let mut records = Vec::new();
        for (idx, line) in lines {
            let line_no = idx + 1;
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 2 {
                return Err(malformed(
                    line_no,
                    format!("expected 2 fields, got {}", fields.len()),
                ));
            }
            let threads = fields[0]
                .trim()
                .parse::<u32>()
                .map_err(|_| malformed(line_no, format!("bad thread count '{}'", fields[0].trim())))?;
            if threads == 0 {
                return Err(malformed(line_no, "thread count must be positive".to_string()));
            }
            let elapsed_ms = fields[1]
                .trim()
                .parse::<f64>()
                .map_err(|_| malformed(line_no, format!("bad elapsed time '{}'", fields[1].trim())))?;
            if !(elapsed_ms > 0.0) {
                return Err(malformed(
                    line_no,
                    format!("elapsed time must be positive, got {}", elapsed_ms),
                ));
            }
            records.push(TimingRecord { threads, elapsed_ms });
        }

        if records.is_empty() {
            return Err(Error::EmptyTable(source_id.to_string()));
        }

        Ok(TimingTable {
            source_id: source_id.to_string(),
            records,
        })
    }

    /// Load a table from a CSV file; the file name becomes the source id.
    pub fn load(path: &Path) -> Result<Self> {
        let source_id = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&source_id, &text)
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn records(&self) -> &[TimingRecord] {
        &self.records
    }

    /// The table's own sequential baseline: the FIRST row's elapsed time,
    /// whatever its thread count.
    ///
    /// Known risk: this assumes the exporter writes the sequential run
    /// first. Rows are deliberately not re-sorted before selection, to stay
    /// faithful to the exports this pipeline was built against.
    pub fn own_baseline(&self) -> f64 {
        self.records[0].elapsed_ms
    }

    /// Largest thread count in the table (charting uses it for axis range).
    pub fn max_threads(&self) -> u32 {
        self.records.iter().map(|r| r.threads).max().unwrap_or(0)
    }
}
