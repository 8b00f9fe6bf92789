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

//! `ScoreCrab` reads user scores out of a flat log, min-max normalizes them
//! and writes the N lowest-scoring users as `identifier,score` lines.

pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod scoring;

pub use config::RunConfig;
pub use crate::core::{run, RunSummary};
pub use error::{ParseError, ScoreError};
pub use parser::Record;
pub use scoring::{MinMax, UniformPolicy};
