// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Matching matrices against nine-symbol pattern templates.
//!
//! A template uses the same alphabet as the matrix string form, with `*`
//! matching any value and `T` matching any non-empty intersection:
//!
//! | Symbol | Matches |
//! |--------|---------|
//! | `*`    | anything |
//! | `T`    | `True`, `0`, `1`, `2` |
//! | `F`    | `False` only |
//! | `0`/`1`/`2` | exactly that dimension |
//!
//! Any other character matches nothing, including lowercase `t` and `f`.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::matrix::{IntersectionMatrix, MATRIX_LEN};

/// Canonical OGC templates for the named predicates.
///
/// Some predicates are a disjunction of several templates, or depend on the
/// shape dimensions; those list each alternative.
pub mod templates {
    /// Disjoint: interiors and boundaries never meet.
    pub const DISJOINT: &str = "FF*FF****";
    /// Within: interior meets interior, nothing of A reaches B's exterior.
    pub const WITHIN: &str = "T*F**F***";
    /// Contains: the transpose of [`WITHIN`].
    pub const CONTAINS: &str = "T*****FF*";
    /// Covers, one template per way of sharing a point.
    pub const COVERS: [&str; 4] = ["T*****FF*", "*T****FF*", "***T**FF*", "****T*FF*"];
    /// Touches, one template per way of sharing a boundary point.
    pub const TOUCHES: [&str; 3] = ["FT*******", "F**T*****", "F***T****"];
    /// Equals for shapes of the same dimension.
    pub const EQUALS: &str = "T*F**FFF*";
    /// Crosses when A has the lower dimension.
    pub const CROSSES_LOWER_HIGHER: &str = "T*T******";
    /// Crosses when A has the higher dimension.
    pub const CROSSES_HIGHER_LOWER: &str = "T*****T**";
    /// Crosses for two curves.
    pub const CROSSES_CURVES: &str = "0********";
    /// Overlaps for two points or two surfaces.
    pub const OVERLAPS: &str = "T*T***T**";
    /// Overlaps for two curves.
    pub const OVERLAPS_CURVES: &str = "1*T***T**";
}

/// Returns `true` if `actual` satisfies the template symbol `required`.
///
/// Template letters are case-sensitive, unlike the matrix parser.
pub fn matches_dimension(actual: Dimension, required: char) -> bool {
    match required {
        '*' => true,
        'T' => actual.is_non_empty(),
        'F' => actual == Dimension::False,
        '0' => actual == Dimension::Point,
        '1' => actual == Dimension::Curve,
        '2' => actual == Dimension::Surface,
        _ => false,
    }
}

fn validate_template(template: &str) -> Result<()> {
    let count = template.chars().count();
    if count != MATRIX_LEN {
        tracing::debug!(template, count, "rejected pattern template of wrong length");
        return Err(Error::Validation(format!(
            "template {template:?} must be {MATRIX_LEN} symbols long, found {count}"
        )));
    }
    Ok(())
}

impl IntersectionMatrix {
    /// Returns `true` if every cell matches the corresponding template symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the template is not nine symbols long.
    pub fn matches(&self, template: &str) -> Result<bool> {
        validate_template(template)?;
        Ok(self
            .cells()
            .iter()
            .zip(template.chars())
            .all(|(&actual, required)| matches_dimension(actual, required)))
    }

    /// Parses `actual` and matches it against `template` in one call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `actual` is not a valid matrix string, or
    /// [`Error::Validation`] if the template has the wrong length.
    pub fn matches_symbols(actual: &str, template: &str) -> Result<bool> {
        IntersectionMatrix::from_symbols(actual)?.matches(template)
    }

    /// Returns `true` if the matrix matches any of the given templates.
    pub fn matches_any<'a, I>(&self, templates: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for template in templates {
            if self.matches(template)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        for dim in Dimension::ALL {
            assert!(matches_dimension(dim, '*'));
        }
    }

    #[test]
    fn true_symbol() {
        assert!(matches_dimension(Dimension::True, 'T'));
        assert!(matches_dimension(Dimension::Point, 'T'));
        assert!(matches_dimension(Dimension::Curve, 'T'));
        assert!(matches_dimension(Dimension::Surface, 'T'));
        assert!(!matches_dimension(Dimension::False, 'T'));
        assert!(!matches_dimension(Dimension::Dontcare, 'T'));
    }

    #[test]
    fn exact_symbols() {
        assert!(matches_dimension(Dimension::False, 'F'));
        assert!(!matches_dimension(Dimension::Point, 'F'));
        assert!(matches_dimension(Dimension::Point, '0'));
        assert!(!matches_dimension(Dimension::Curve, '0'));
        assert!(matches_dimension(Dimension::Curve, '1'));
        assert!(matches_dimension(Dimension::Surface, '2'));
        assert!(!matches_dimension(Dimension::True, '2'));
    }

    #[test]
    fn unknown_symbol_never_matches() {
        for dim in Dimension::ALL {
            assert!(!matches_dimension(dim, 'X'));
            assert!(!matches_dimension(dim, '3'));
        }
    }

    #[test]
    fn lowercase_template_letters_never_match() {
        for dim in Dimension::ALL {
            assert!(!matches_dimension(dim, 't'));
            assert!(!matches_dimension(dim, 'f'));
        }
        let m = IntersectionMatrix::from_symbols("2FFFFFFFF").unwrap();
        assert_eq!(m.matches("t********"), Ok(false));
        assert_eq!(m.matches("T********"), Ok(true));
        assert_eq!(m.matches("*f*******"), Ok(false));
    }

    #[test]
    fn matrix_matches_itself() {
        assert_eq!(
            IntersectionMatrix::matches_symbols("212101212", "212101212"),
            Ok(true)
        );
        assert_eq!(
            IntersectionMatrix::matches_symbols("FF0FF1TT2", "FF0FF1TT2"),
            Ok(true)
        );
    }

    #[test]
    fn all_wildcards_match() {
        let m = IntersectionMatrix::from_symbols("*TF012FT*").unwrap();
        assert_eq!(m.matches("*********"), Ok(true));
        assert_eq!(IntersectionMatrix::new().matches("*********"), Ok(true));
    }

    #[test]
    fn template_mismatch() {
        let m = IntersectionMatrix::from_symbols("212101212").unwrap();
        assert_eq!(m.matches(templates::WITHIN), Ok(false));
        assert_eq!(m.matches(templates::OVERLAPS), Ok(true));
    }

    #[test]
    fn template_length_is_validated() {
        let m = IntersectionMatrix::new();
        assert!(matches!(m.matches("FF*"), Err(Error::Validation(_))));
        assert!(matches!(m.matches("FF*FF*****"), Err(Error::Validation(_))));
    }

    #[test]
    fn static_form_propagates_parse_errors() {
        assert!(matches!(
            IntersectionMatrix::matches_symbols("FFFFFFFF", "*********"),
            Err(Error::Format { .. })
        ));
        assert!(matches!(
            IntersectionMatrix::matches_symbols("FFFFFFFFF", "*"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn matches_any_template() {
        let m = IntersectionMatrix::from_symbols("FF2F11212").unwrap();
        assert_eq!(m.matches_any(templates::TOUCHES), Ok(true));
        assert_eq!(m.matches_any(templates::COVERS), Ok(false));
        assert_eq!(m.matches_any(std::iter::empty::<&str>()), Ok(false));
    }
}
