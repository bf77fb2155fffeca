// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI defaults loaded from environment variables.

use de9im_lite_core::ShapeDimension;

use crate::args::{parse_dims, OutputFormat};

/// Defaults applied before command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format (`DE9IM_OUTPUT`, `text` or `json`).
    pub output: OutputFormat,
    /// Shape dimensions for the asymmetric predicates (`DE9IM_DIMS`, e.g.
    /// `surface,curve`).
    pub dims: (ShapeDimension, ShapeDimension),
    /// Default log filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::builtin();

        let output = match lookup("DE9IM_OUTPUT") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %value, "ignoring invalid DE9IM_OUTPUT");
                defaults.output
            }),
            None => defaults.output,
        };

        let dims = match lookup("DE9IM_DIMS") {
            Some(value) => parse_dims(&value).unwrap_or_else(|err| {
                tracing::warn!(value = %value, error = %err, "ignoring invalid DE9IM_DIMS");
                defaults.dims
            }),
            None => defaults.dims,
        };

        Self {
            output,
            dims,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }

    fn builtin() -> Self {
        Self {
            output: OutputFormat::Text,
            dims: (ShapeDimension::Surface, ShapeDimension::Surface),
            log_filter: "warn,de9im=info".into(),
        }
    }
}
