// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line argument parsing.

use std::str::FromStr;

use de9im_lite_core::{ShapeDimension, SpatialPredicate};
use thiserror::Error;

/// Argument errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing matrix argument")]
    MissingMatrix,

    #[error("unexpected argument: {0}")]
    Unexpected(String),

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid shape dimensions {value:?}: {reason}")]
    InvalidDims { value: String, reason: String },

    #[error("invalid output format {0:?} (expected text or json)")]
    InvalidOutput(String),

    #[error(transparent)]
    Matrix(#[from] de9im_lite_core::Error),
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ArgsError::InvalidOutput(s.to_string())),
        }
    }
}

/// Parses a pair of shape dimensions written as `A,B`.
pub fn parse_dims(value: &str) -> Result<(ShapeDimension, ShapeDimension), ArgsError> {
    let invalid = |reason: String| ArgsError::InvalidDims {
        value: value.to_string(),
        reason,
    };
    let (a, b) = value
        .split_once(',')
        .ok_or_else(|| invalid("expected two dimensions separated by a comma".into()))?;
    let a = a.parse().map_err(|e: de9im_lite_core::Error| invalid(e.to_string()))?;
    let b = b.parse().map_err(|e: de9im_lite_core::Error| invalid(e.to_string()))?;
    Ok((a, b))
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub matrix: String,
    pub dims: Option<(ShapeDimension, ShapeDimension)>,
    pub templates: Vec<String>,
    pub predicates: Vec<SpatialPredicate>,
    pub transpose: bool,
    pub output: Option<OutputFormat>,
    pub help: bool,
}

impl Args {
    /// Parses arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut matrix = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            if !arg.starts_with('-') {
                if matrix.is_some() {
                    return Err(ArgsError::Unexpected(arg));
                }
                matrix = Some(arg);
                continue;
            }

            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--transpose" => parsed.transpose = true,
                "--json" => parsed.output = Some(OutputFormat::Json),
                "--output" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--output"))?;
                    parsed.output = Some(value.parse()?);
                }
                "--dims" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--dims"))?;
                    parsed.dims = Some(parse_dims(&value)?);
                }
                "--match" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--match"))?;
                    parsed.templates.push(value);
                }
                "--predicate" => {
                    let value = args.next().ok_or(ArgsError::MissingValue("--predicate"))?;
                    parsed.predicates.push(value.parse()?);
                }
                other => return Err(ArgsError::Unexpected(other.to_string())),
            }
        }

        if !parsed.help {
            parsed.matrix = matrix.ok_or(ArgsError::MissingMatrix)?;
        }
        Ok(parsed)
    }
}

/// Usage text.
pub const USAGE: &str = "\
Usage: de9im <MATRIX> [options]

Inspect a DE-9IM intersection matrix such as 212101212.

Options:
  --dims A,B          Shape dimensions (point, curve, surface or 0/1/2)
  --match TEMPLATE    Match against a nine-symbol template (repeatable)
  --predicate NAME    Only report the named predicate (repeatable)
  --transpose         Swap the roles of the two shapes first
  --json              Print JSON (same as --output json)
  --output FORMAT     text or json
  -h, --help          Show this help

Environment:
  DE9IM_OUTPUT        Default output format
  DE9IM_DIMS          Default shape dimensions
  RUST_LOG            Log filter";
