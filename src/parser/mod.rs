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

//! Marker line parsing.
//!
//! Grammar of a marker line, after trimming surrounding whitespace:
//! 1. the line starts with the marker character (anything else is skipped)
//! 2. it is split on runs of whitespace
//! 3. the first token containing `'` is the identifier field, and the
//!    identifier is the text between its first two quotes
//! 4. the next token is the score field, and the score is the text between
//!    its first `[` and the following `]`, parsed as a finite `f64`

pub mod record;

pub use record::Record;

use crate::error::ParseError;

const QUOTE: char = '\'';
const SCORE_OPEN: char = '[';
const SCORE_CLOSE: char = ']';

/// Text between the first pair of single quotes
fn quoted(token: &str) -> Option<&str> {
    let (_, rest) = token.split_once(QUOTE)?;
    let (inner, _) = rest.split_once(QUOTE)?;
    Some(inner)
}

/// Text between the first `[` and the next `]`
fn bracketed(token: &str) -> Option<&str> {
    let (_, rest) = token.split_once(SCORE_OPEN)?;
    let (inner, _) = rest.split_once(SCORE_CLOSE)?;
    Some(inner)
}

/// Parse a single input line.
///
/// Returns `Ok(None)` for lines that do not start with `marker`, and an error
/// for marker lines that break the grammar.
pub fn parse_line(
    line: &str,
    line_number: usize,
    marker: char,
) -> Result<Option<Record>, ParseError> {
    let trimmed = line.trim();
    if !trimmed.starts_with(marker) {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();

    let identifier = tokens
        .by_ref()
        .find(|token| token.contains(QUOTE))
        .and_then(quoted)
        .ok_or(ParseError::MissingIdentifier { line_number })?;

    let text = tokens
        .next()
        .and_then(bracketed)
        .ok_or(ParseError::MissingScore { line_number })?;

    let score: f64 = text
        .trim()
        .parse()
        .map_err(|source| ParseError::InvalidScore {
            line_number,
            text: text.to_string(),
            source,
        })?;

    if !score.is_finite() {
        return Err(ParseError::NonFiniteScore {
            line_number,
            value: score,
        });
    }

    Ok(Some(Record::new(identifier, score, line_number)))
}

/// Parse every marker line of `content`, in input order.
///
/// Stops at the first malformed marker line.
pub fn parse_records(content: &str, marker: char) -> Result<Vec<Record>, ParseError> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        match parse_line(line, line_number, marker)? {
            Some(record) => {
                tracing::debug!(
                    line_number,
                    identifier = %record.identifier,
                    score = record.score,
                    "Parsed record"
                );
                records.push(record);
            }
            None => tracing::debug!(line_number, "Skipping line without marker"),
        }
    }

    tracing::debug!("Parsed {} records", records.len());
    Ok(records)
}
