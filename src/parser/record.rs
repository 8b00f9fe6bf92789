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

/// One user extracted from a marker line.
///
/// `score` holds the raw value after parsing and is overwritten with the
/// normalized value by [`crate::scoring::apply_normalized`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub identifier: String,
    pub score: f64,
    pub line_number: usize,
}

impl Record {
    #[must_use]
    pub fn new(identifier: impl Into<String>, score: f64, line_number: usize) -> Self {
        Self {
            identifier: identifier.into(),
            score,
            line_number,
        }
    }
}
