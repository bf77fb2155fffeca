// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named spatial predicates evaluated from a matrix.
//!
//! `disjoint`, `intersects`, `within`, `contains` and `covers` depend only on
//! the matrix. `touches`, `crosses`, `overlaps` and `equals` also need the
//! dimension classes of the two shapes; combinations they are not defined
//! for evaluate to `false`.

use std::fmt;
use std::str::FromStr;

use crate::dimension::{Dimension, ShapeDimension};
use crate::error::{Error, Result};
use crate::location::Location::{self, Boundary, Exterior, Interior};
use crate::matrix::IntersectionMatrix;
use crate::pattern::matches_dimension;

use ShapeDimension::{Curve, Point, Surface};

impl IntersectionMatrix {
    #[inline]
    fn is_false(&self, row: Location, column: Location) -> bool {
        self.get_at(row, column) == Dimension::False
    }

    #[inline]
    fn is_non_empty(&self, row: Location, column: Location) -> bool {
        matches_dimension(self.get_at(row, column), 'T')
    }

    /// The interiors and boundaries of the two shapes share no point.
    pub fn is_disjoint(&self) -> bool {
        self.is_false(Interior, Interior)
            && self.is_false(Interior, Boundary)
            && self.is_false(Boundary, Interior)
            && self.is_false(Boundary, Boundary)
    }

    /// The shapes share at least one point.
    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    /// A lies within B: the interiors meet and no part of A reaches B's
    /// exterior.
    pub fn is_within(&self) -> bool {
        self.is_non_empty(Interior, Interior)
            && self.is_false(Interior, Exterior)
            && self.is_false(Boundary, Exterior)
    }

    /// A contains B: the interiors meet and no part of B reaches A's
    /// exterior.
    pub fn is_contains(&self) -> bool {
        self.is_non_empty(Interior, Interior)
            && self.is_false(Exterior, Interior)
            && self.is_false(Exterior, Boundary)
    }

    /// A covers B: the shapes share a point and no part of B reaches A's
    /// exterior. Unlike [`is_contains`](Self::is_contains) the shared point
    /// may lie on a boundary.
    pub fn is_covers(&self) -> bool {
        let has_point_in_common = self.is_non_empty(Interior, Interior)
            || self.is_non_empty(Interior, Boundary)
            || self.is_non_empty(Boundary, Interior)
            || self.is_non_empty(Boundary, Boundary);

        has_point_in_common
            && self.is_false(Exterior, Interior)
            && self.is_false(Exterior, Boundary)
    }

    /// The shapes are topologically equal. Shapes of different dimension are
    /// never equal.
    pub fn is_equals(&self, a: ShapeDimension, b: ShapeDimension) -> bool {
        if a != b {
            return false;
        }
        self.is_non_empty(Interior, Interior)
            && self.is_false(Exterior, Interior)
            && self.is_false(Interior, Exterior)
            && self.is_false(Exterior, Boundary)
            && self.is_false(Boundary, Exterior)
    }

    /// The shapes meet only at their boundaries.
    ///
    /// Defined for surface/surface, curve/curve, curve/surface,
    /// point/surface and point/curve, in either order.
    pub fn is_touches(&self, a: ShapeDimension, b: ShapeDimension) -> bool {
        if a.code() > b.code() {
            // The condition is symmetric, so no transpose is needed.
            return self.is_touches(b, a);
        }
        match (a, b) {
            (Surface, Surface)
            | (Curve, Curve)
            | (Curve, Surface)
            | (Point, Surface)
            | (Point, Curve) => {
                self.is_false(Interior, Interior)
                    && (self.is_non_empty(Interior, Boundary)
                        || self.is_non_empty(Boundary, Interior)
                        || self.is_non_empty(Boundary, Boundary))
            }
            _ => false,
        }
    }

    /// The interiors meet, and each shape has interior points outside the
    /// other (for mixed dimensions, the lower one passes out of the higher).
    pub fn is_crosses(&self, a: ShapeDimension, b: ShapeDimension) -> bool {
        match (a, b) {
            (Point, Curve) | (Point, Surface) | (Curve, Surface) => {
                self.is_non_empty(Interior, Interior) && self.is_non_empty(Interior, Exterior)
            }
            (Curve, Point) | (Surface, Point) | (Surface, Curve) => {
                self.is_non_empty(Interior, Interior) && self.is_non_empty(Exterior, Interior)
            }
            (Curve, Curve) => self.get_at(Interior, Interior) == Dimension::Point,
            _ => false,
        }
    }

    /// The interiors meet in a set of the shapes' own dimension, and each
    /// shape has interior points outside the other.
    ///
    /// Defined for point/point, curve/curve and surface/surface.
    pub fn is_overlaps(&self, a: ShapeDimension, b: ShapeDimension) -> bool {
        match (a, b) {
            (Point, Point) | (Surface, Surface) => {
                self.is_non_empty(Interior, Interior)
                    && self.is_non_empty(Interior, Exterior)
                    && self.is_non_empty(Exterior, Interior)
            }
            (Curve, Curve) => {
                self.get_at(Interior, Interior) == Dimension::Curve
                    && self.is_non_empty(Interior, Exterior)
                    && self.is_non_empty(Exterior, Interior)
            }
            _ => false,
        }
    }

    /// Evaluates a single named predicate.
    pub fn evaluate(&self, predicate: SpatialPredicate, a: ShapeDimension, b: ShapeDimension) -> bool {
        match predicate {
            SpatialPredicate::Disjoint => self.is_disjoint(),
            SpatialPredicate::Intersects => self.is_intersects(),
            SpatialPredicate::Touches => self.is_touches(a, b),
            SpatialPredicate::Crosses => self.is_crosses(a, b),
            SpatialPredicate::Within => self.is_within(),
            SpatialPredicate::Contains => self.is_contains(),
            SpatialPredicate::Covers => self.is_covers(),
            SpatialPredicate::Overlaps => self.is_overlaps(a, b),
            SpatialPredicate::Equals => self.is_equals(a, b),
        }
    }

    /// Evaluates every named predicate for shapes of dimension `a` and `b`.
    pub fn relationship(&self, a: ShapeDimension, b: ShapeDimension) -> Relationship {
        Relationship {
            disjoint: self.is_disjoint(),
            intersects: self.is_intersects(),
            touches: self.is_touches(a, b),
            crosses: self.is_crosses(a, b),
            within: self.is_within(),
            contains: self.is_contains(),
            covers: self.is_covers(),
            overlaps: self.is_overlaps(a, b),
            equals: self.is_equals(a, b),
        }
    }
}

/// The named spatial predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpatialPredicate {
    Disjoint,
    Intersects,
    Touches,
    Crosses,
    Within,
    Contains,
    Covers,
    Overlaps,
    Equals,
}

impl SpatialPredicate {
    /// All predicates, in evaluation order.
    pub const ALL: [SpatialPredicate; 9] = [
        SpatialPredicate::Disjoint,
        SpatialPredicate::Intersects,
        SpatialPredicate::Touches,
        SpatialPredicate::Crosses,
        SpatialPredicate::Within,
        SpatialPredicate::Contains,
        SpatialPredicate::Covers,
        SpatialPredicate::Overlaps,
        SpatialPredicate::Equals,
    ];

    /// Returns the predicate name in lowercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpatialPredicate::Disjoint => "disjoint",
            SpatialPredicate::Intersects => "intersects",
            SpatialPredicate::Touches => "touches",
            SpatialPredicate::Crosses => "crosses",
            SpatialPredicate::Within => "within",
            SpatialPredicate::Contains => "contains",
            SpatialPredicate::Covers => "covers",
            SpatialPredicate::Overlaps => "overlaps",
            SpatialPredicate::Equals => "equals",
        }
    }

    /// Returns `true` if the result depends on the shape dimensions.
    pub fn needs_dimensions(&self) -> bool {
        matches!(
            self,
            SpatialPredicate::Touches
                | SpatialPredicate::Crosses
                | SpatialPredicate::Overlaps
                | SpatialPredicate::Equals
        )
    }
}

impl fmt::Display for SpatialPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpatialPredicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        SpatialPredicate::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| Error::UnknownPredicate(s.to_string()))
    }
}

/// The outcome of every named predicate for one matrix and pair of shape
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    pub disjoint: bool,
    pub intersects: bool,
    pub touches: bool,
    pub crosses: bool,
    pub within: bool,
    pub contains: bool,
    pub covers: bool,
    pub overlaps: bool,
    pub equals: bool,
}

impl Relationship {
    /// Returns the result for a single predicate.
    pub fn get(&self, predicate: SpatialPredicate) -> bool {
        match predicate {
            SpatialPredicate::Disjoint => self.disjoint,
            SpatialPredicate::Intersects => self.intersects,
            SpatialPredicate::Touches => self.touches,
            SpatialPredicate::Crosses => self.crosses,
            SpatialPredicate::Within => self.within,
            SpatialPredicate::Contains => self.contains,
            SpatialPredicate::Covers => self.covers,
            SpatialPredicate::Overlaps => self.overlaps,
            SpatialPredicate::Equals => self.equals,
        }
    }

    /// Iterates over the predicates that hold.
    pub fn holding(&self) -> impl Iterator<Item = SpatialPredicate> + '_ {
        SpatialPredicate::ALL
            .into_iter()
            .filter(move |&p| self.get(p))
    }
}
