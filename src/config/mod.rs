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

use crate::scoring::UniformPolicy;
use std::path::PathBuf;

/// Log file read on every run, relative to the working directory
pub const DEFAULT_INPUT: &str = "./output.txt";

/// CSV file written on every run, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "results.txt";

/// First character of lines that carry a user score
pub const DEFAULT_MARKER: char = 'U';

/// Settings for a single run.
///
/// The command line only ever uses [`RunConfig::default`]; the fields are
/// public so library callers can point a run at other files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub marker: char,
    pub uniform: UniformPolicy,
}

impl RunConfig {
    /// Default settings with the input and output redirected
    #[must_use]
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            marker: DEFAULT_MARKER,
            uniform: UniformPolicy::default(),
        }
    }
}
