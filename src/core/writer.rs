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

//! CSV output of selected records.

use crate::error::ScoreError;
use crate::parser::Record;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Render one record as `identifier,score`.
///
/// Scores use the shortest round-trip form and always keep a decimal point,
/// so 0 is written as `0.0` and one half as `0.5`.
#[must_use]
pub fn format_record(record: &Record) -> String {
    format!("{},{:?}", record.identifier, record.score)
}

/// Write one line per record
pub fn write_records<W: Write>(writer: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    writer.flush()
}

/// Create or truncate `path` and write `records` into it.
pub fn write_results(path: &Path, records: &[Record]) -> Result<(), ScoreError> {
    let to_error = |source| ScoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records).map_err(to_error)?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
