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

use anyhow::Context;
use clap::Parser;
use scorecrab::RunConfig;
use tracing_subscriber::EnvFilter;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "scorecrab")]
#[command(version = VERSION)]
#[command(
    about = "Write the N lowest normalized user scores from ./output.txt to results.txt",
    long_about = None
)]
struct Args {
    /// Number of lowest-scoring users to keep (zero or negative writes an empty file)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    count: i64,
}

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG to override the level (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::info!("ScoreCrab starting up (version {VERSION})");

    let config = RunConfig::default();
    let summary = scorecrab::run(&config, args.count).with_context(|| {
        format!(
            "Failed to select the {} lowest scores from {}",
            args.count,
            config.input.display()
        )
    })?;

    tracing::info!(
        lines_read = summary.lines_read,
        records_parsed = summary.records_parsed,
        records_written = summary.records_written,
        "Done"
    );
    Ok(())
}
