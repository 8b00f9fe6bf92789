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

//! Error types for every stage of a run.
//!
//! None of these are recovered from: the first error aborts the run and no
//! output file is produced for parse or normalization failures.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// A marker line that does not follow the `'<id>' [<score>]` layout.
///
/// Line numbers are 1-based, counted over the whole input file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line_number}: no quoted identifier")]
    MissingIdentifier { line_number: usize },

    #[error("line {line_number}: no bracketed score after the identifier")]
    MissingScore { line_number: usize },

    #[error("line {line_number}: score `{text}` is not a number")]
    InvalidScore {
        line_number: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("line {line_number}: score {value} is not finite")]
    NonFiniteScore { line_number: usize, value: f64 },
}

impl ParseError {
    /// Input line the error was raised for
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::MissingIdentifier { line_number }
            | Self::MissingScore { line_number }
            | Self::InvalidScore { line_number, .. }
            | Self::NonFiniteScore { line_number, .. } => *line_number,
        }
    }
}

/// Anything that can abort a run.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("all {count} scores equal {value}, min-max scaling is undefined")]
    UniformScores { count: usize, value: f64 },
}
