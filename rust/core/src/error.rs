// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for intersection matrix operations.

use crate::dimension::Dimension;

/// Result type alias for intersection matrix operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, querying or matching a matrix.
///
/// Every variant is a direct consequence of invalid caller input; none of
/// them are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dimension symbol string could not be parsed.
    #[error("invalid dimension symbols {input:?}: {reason}")]
    Format { input: String, reason: String },

    /// A row, column or linear index was outside the matrix.
    #[error("{name} out of range: {value} (must be between 0 and {bound} exclusive)")]
    Range {
        name: &'static str,
        value: i64,
        bound: usize,
    },

    /// A pattern template was rejected.
    #[error("invalid pattern template: {0}")]
    Validation(String),

    /// A non-geometric dimension was supplied where a shape dimension class
    /// (point, curve or surface) is required.
    #[error("{0:?} is not a shape dimension (expected point, curve or surface)")]
    InvalidShapeDimension(Dimension),

    /// A predicate name did not match any known spatial predicate.
    #[error("unknown spatial predicate: {0}")]
    UnknownPredicate(String),
}

impl Error {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn range(name: &'static str, value: impl Into<i64>, bound: usize) -> Self {
        Error::Range {
            name,
            value: value.into(),
            bound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message_names_the_index() {
        let err = Error::range("row", 3, 3);
        assert_eq!(
            err.to_string(),
            "row out of range: 3 (must be between 0 and 3 exclusive)"
        );
    }

    #[test]
    fn format_message_quotes_input() {
        let err = Error::format("FFX", "expected 9 symbols, found 3");
        assert_eq!(
            err.to_string(),
            "invalid dimension symbols \"FFX\": expected 9 symbols, found 3"
        );
    }
}
