// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! DE9IM-Lite CLI - inspect DE-9IM intersection matrices.
//!
//! Parses a nine-symbol matrix, optionally transposes it, matches it against
//! templates and evaluates the named spatial predicates for a pair of shape
//! dimensions.
//!
//! Usage:
//!   de9im <MATRIX> [--dims A,B] [--match TEMPLATE]... [--predicate NAME]...
//!         [--transpose] [--json]

use anyhow::Context;
use de9im_lite_core::IntersectionMatrix;
use tracing_subscriber::EnvFilter;

mod args;
mod config;
mod report;

use args::{Args, OutputFormat, USAGE};
use config::Config;
use report::Report;

fn main() {
    let config = Config::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args().skip(1), &config) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Runs the command and returns what should be written to stdout.
fn run(args: impl IntoIterator<Item = String>, config: &Config) -> anyhow::Result<String> {
    let args = Args::parse(args).context("invalid arguments")?;
    if args.help {
        return Ok(format!("{USAGE}\n"));
    }

    let matrix: IntersectionMatrix = args
        .matrix
        .parse()
        .with_context(|| format!("cannot parse matrix {:?}", args.matrix))?;

    let dims = args.dims.unwrap_or(config.dims);
    tracing::info!(
        matrix = %matrix,
        dims = ?dims,
        templates = args.templates.len(),
        transpose = args.transpose,
        "evaluating matrix"
    );

    let report = Report::build(matrix, dims, args.transpose, &args.templates, &args.predicates)
        .context("cannot evaluate matrix")?;

    match args.output.unwrap_or(config.output) {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let json = report.to_json().context("cannot serialize report")?;
            Ok(format!("{json}\n"))
        }
    }
}
