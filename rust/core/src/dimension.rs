// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension values and their single-character symbols.
//!
//! A matrix cell holds either a topological dimension (point, curve,
//! surface) or one of three markers (`False`, `True`, `Dontcare`). Each
//! value carries a fixed integer code, and every "at least" comparison in
//! this crate orders values by that raw code:
//!
//! ```text
//! Surface(2) > Curve(1) > Point(0) > False(-1) > True(-2) > Dontcare(-3)
//! ```
//!
//! This is not a semantic order. `Dimension` therefore does not implement
//! `Ord`; use [`Dimension::code`] or [`Dimension::exceeds`] explicitly.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The value of a single DE-9IM cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Empty intersection (`F`).
    #[default]
    False,
    /// Non-empty intersection of unspecified dimension (`T`).
    True,
    /// Wildcard (`*`).
    Dontcare,
    /// Zero-dimensional intersection (`0`).
    Point,
    /// One-dimensional intersection (`1`).
    Curve,
    /// Two-dimensional intersection (`2`).
    Surface,
}

impl Dimension {
    /// All six values, in ascending code order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Dontcare,
        Dimension::True,
        Dimension::False,
        Dimension::Point,
        Dimension::Curve,
        Dimension::Surface,
    ];

    /// Returns the canonical integer code of this value.
    pub const fn code(self) -> i32 {
        match self {
            Dimension::False => -1,
            Dimension::True => -2,
            Dimension::Dontcare => -3,
            Dimension::Point => 0,
            Dimension::Curve => 1,
            Dimension::Surface => 2,
        }
    }

    /// Converts a canonical integer code back into a value.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Dimension::False),
            -2 => Some(Dimension::True),
            -3 => Some(Dimension::Dontcare),
            0 => Some(Dimension::Point),
            1 => Some(Dimension::Curve),
            2 => Some(Dimension::Surface),
            _ => None,
        }
    }

    /// Returns the uppercase symbol for this value.
    pub const fn symbol(self) -> char {
        match self {
            Dimension::False => 'F',
            Dimension::True => 'T',
            Dimension::Dontcare => '*',
            Dimension::Point => '0',
            Dimension::Curve => '1',
            Dimension::Surface => '2',
        }
    }

    /// Decodes a symbol. Letters are accepted in either case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'F' => Some(Dimension::False),
            'T' => Some(Dimension::True),
            '*' => Some(Dimension::Dontcare),
            '0' => Some(Dimension::Point),
            '1' => Some(Dimension::Curve),
            '2' => Some(Dimension::Surface),
            _ => None,
        }
    }

    /// Compares two values by their raw codes.
    pub fn compare(self, other: Dimension) -> Ordering {
        self.code().cmp(&other.code())
    }

    /// Returns `true` if this value's code is strictly greater than `other`'s.
    pub fn exceeds(self, other: Dimension) -> bool {
        self.code() > other.code()
    }

    /// Returns whichever of the two values has the greater code.
    pub fn max_by_code(self, other: Dimension) -> Dimension {
        if other.exceeds(self) {
            other
        } else {
            self
        }
    }

    /// Returns `true` for point, curve and surface.
    pub fn is_geometric(self) -> bool {
        self.code() >= 0
    }

    /// Returns `true` for any value that denotes a non-empty intersection:
    /// `True`, point, curve or surface.
    pub fn is_non_empty(self) -> bool {
        self == Dimension::True || self.is_geometric()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Dimension {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self> {
        Dimension::from_symbol(symbol).ok_or_else(|| {
            Error::format(&symbol.to_string(), format!("unknown dimension symbol {symbol:?}"))
        })
    }
}

/// The dimension class of an input shape: point, curve or surface.
///
/// The asymmetric predicates (`touches`, `crosses`, `overlaps`, `equals`)
/// are defined only for geometric dimensions, so they take this type rather
/// than a raw [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeDimension {
    Point,
    Curve,
    Surface,
}

impl ShapeDimension {
    /// The matching cell value.
    pub const fn dimension(self) -> Dimension {
        match self {
            ShapeDimension::Point => Dimension::Point,
            ShapeDimension::Curve => Dimension::Curve,
            ShapeDimension::Surface => Dimension::Surface,
        }
    }

    /// Canonical integer code (0, 1 or 2).
    pub const fn code(self) -> i32 {
        self.dimension().code()
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeDimension::Point => "point",
            ShapeDimension::Curve => "curve",
            ShapeDimension::Surface => "surface",
        }
    }
}

impl fmt::Display for ShapeDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ShapeDimension> for Dimension {
    fn from(shape: ShapeDimension) -> Self {
        shape.dimension()
    }
}

impl TryFrom<Dimension> for ShapeDimension {
    type Error = Error;

    fn try_from(value: Dimension) -> Result<Self> {
        match value {
            Dimension::Point => Ok(ShapeDimension::Point),
            Dimension::Curve => Ok(ShapeDimension::Curve),
            Dimension::Surface => Ok(ShapeDimension::Surface),
            other => {
                tracing::debug!(dimension = ?other, "rejected non-geometric shape dimension");
                Err(Error::InvalidShapeDimension(other))
            }
        }
    }
}

impl FromStr for ShapeDimension {
    type Err = Error;

    /// Accepts `point`/`curve`/`surface` (any case) or the codes `0`/`1`/`2`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" | "0" => Ok(ShapeDimension::Point),
            "curve" | "1" => Ok(ShapeDimension::Curve),
            "surface" | "2" => Ok(ShapeDimension::Surface),
            _ => {
                let dim = s.trim().chars().next().and_then(Dimension::from_symbol);
                match (dim, s.trim().chars().count()) {
                    (Some(dim), 1) => Err(Error::InvalidShapeDimension(dim)),
                    _ => Err(Error::format(s, "expected point, curve or surface")),
                }
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Dimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Dimension {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let symbol = <char as serde::Deserialize>::deserialize(deserializer)?;
        Dimension::try_from(symbol).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_canonical() {
        assert_eq!(Dimension::False.code(), -1);
        assert_eq!(Dimension::True.code(), -2);
        assert_eq!(Dimension::Dontcare.code(), -3);
        assert_eq!(Dimension::Point.code(), 0);
        assert_eq!(Dimension::Curve.code(), 1);
        assert_eq!(Dimension::Surface.code(), 2);
    }

    #[test]
    fn code_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::from_code(dim.code()), Some(dim));
        }
        assert_eq!(Dimension::from_code(3), None);
        assert_eq!(Dimension::from_code(-4), None);
    }

    #[test]
    fn raw_code_ordering() {
        // False sits above True, which sits above Dontcare.
        assert!(Dimension::False.exceeds(Dimension::True));
        assert!(Dimension::True.exceeds(Dimension::Dontcare));
        assert!(Dimension::Point.exceeds(Dimension::False));
        assert!(Dimension::Surface.exceeds(Dimension::Curve));
        assert!(!Dimension::Curve.exceeds(Dimension::Curve));

        for pair in Dimension::ALL.windows(2) {
            assert_eq!(pair[0].compare(pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn max_by_code_prefers_false_over_true() {
        assert_eq!(Dimension::True.max_by_code(Dimension::False), Dimension::False);
        assert_eq!(Dimension::Point.max_by_code(Dimension::True), Dimension::Point);
        assert_eq!(Dimension::Dontcare.max_by_code(Dimension::Dontcare), Dimension::Dontcare);
    }

    #[test]
    fn symbols_decode_case_insensitively() {
        assert_eq!(Dimension::from_symbol('t'), Some(Dimension::True));
        assert_eq!(Dimension::from_symbol('f'), Some(Dimension::False));
        assert_eq!(Dimension::from_symbol('*'), Some(Dimension::Dontcare));
        assert_eq!(Dimension::from_symbol('2'), Some(Dimension::Surface));
        assert_eq!(Dimension::from_symbol('X'), None);
        assert_eq!(Dimension::from_symbol('3'), None);
    }

    #[test]
    fn symbols_encode_uppercase() {
        let encoded: String = Dimension::ALL.iter().map(|d| d.symbol()).collect();
        assert_eq!(encoded, "*TF012");
        assert_eq!(Dimension::True.to_string(), "T");
    }

    #[test]
    fn try_from_char_reports_format_error() {
        assert!(matches!(Dimension::try_from('x'), Err(Error::Format { .. })));
        assert_eq!(Dimension::try_from('1'), Ok(Dimension::Curve));
    }

    #[test]
    fn non_empty_values() {
        assert!(Dimension::True.is_non_empty());
        assert!(Dimension::Point.is_non_empty());
        assert!(!Dimension::False.is_non_empty());
        assert!(!Dimension::Dontcare.is_non_empty());
    }

    #[test]
    fn shape_dimension_rejects_markers() {
        assert_eq!(
            ShapeDimension::try_from(Dimension::Curve),
            Ok(ShapeDimension::Curve)
        );
        for marker in [Dimension::False, Dimension::True, Dimension::Dontcare] {
            assert_eq!(
                ShapeDimension::try_from(marker),
                Err(Error::InvalidShapeDimension(marker))
            );
        }
    }

    #[test]
    fn shape_dimension_from_str() {
        assert_eq!("Surface".parse::<ShapeDimension>(), Ok(ShapeDimension::Surface));
        assert_eq!("1".parse::<ShapeDimension>(), Ok(ShapeDimension::Curve));
        assert_eq!("point".parse::<ShapeDimension>(), Ok(ShapeDimension::Point));
        assert_eq!(
            "T".parse::<ShapeDimension>(),
            Err(Error::InvalidShapeDimension(Dimension::True))
        );
        for name in ["hexagon", "line", "polygon"] {
            assert!(matches!(
                name.parse::<ShapeDimension>(),
                Err(Error::Format { .. })
            ));
        }
    }
}
