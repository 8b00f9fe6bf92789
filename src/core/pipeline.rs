// ScoreCrab - GPL-3.0-or-later
// This file is part of ScoreCrab.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// ScoreCrab is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// ScoreCrab is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with ScoreCrab.  If not, see <https://www.gnu.org/licenses/>.

//! One complete run: read, parse, normalize, select, write.
//!
//! The output file is only touched once every earlier stage has succeeded.

use crate::config::RunConfig;
use crate::core::selection::select_lowest;
use crate::core::writer::write_results;
use crate::error::ScoreError;
use crate::parser::parse_records;
use crate::scoring::{apply_normalized, MinMax};
use std::fs;
use std::time::Instant;

/// Counts gathered during a run, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub records_parsed: usize,
    pub records_written: usize,
    /// Raw score bounds before normalization
    pub bounds: Option<MinMax>,
}

/// Run the whole pipeline once for the `count` lowest scores.
pub fn run(config: &RunConfig, count: i64) -> Result<RunSummary, ScoreError> {
    let start_time = Instant::now();

    let read_start = Instant::now();
    let buffer = fs::read(&config.input).map_err(|source| ScoreError::Read {
        path: config.input.clone(),
        source,
    })?;
    tracing::debug!(
        "File I/O took {:?} to read {} bytes from {}",
        read_start.elapsed(),
        buffer.len(),
        config.input.display()
    );

    // Invalid UTF-8 is replaced rather than rejected
    let content = String::from_utf8_lossy(&buffer);
    let lines_read = content.lines().count();

    let mut records = parse_records(&content, config.marker)?;
    let records_parsed = records.len();
    tracing::info!(
        "Parsed {records_parsed} records from {lines_read} lines of {}",
        config.input.display()
    );

    let bounds = apply_normalized(&mut records, config.uniform)?;

    let selected = select_lowest(records, count);
    write_results(&config.output, &selected)?;

    let summary = RunSummary {
        lines_read,
        records_parsed,
        records_written: selected.len(),
        bounds,
    };
    tracing::info!("Run finished in {:?}", start_time.elapsed());

    Ok(summary)
}
