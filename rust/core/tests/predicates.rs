// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named predicates on matrices for common shape configurations.

use de9im_lite_core::{
    templates, Dimension, IntersectionMatrix, Relationship, ShapeDimension, SpatialPredicate,
};

use ShapeDimension::{Curve, Point, Surface};

fn im(symbols: &str) -> IntersectionMatrix {
    IntersectionMatrix::from_symbols(symbols).expect("valid matrix string")
}

#[test]
fn disjoint_polygons() {
    let m = im("FFFFFF212");
    assert!(m.is_disjoint());
    assert!(m.matches(templates::DISJOINT).unwrap());
    assert_eq!(
        m.relationship(Surface, Surface).holding().collect::<Vec<_>>(),
        vec![SpatialPredicate::Disjoint]
    );
}

#[test]
fn polygon_within_polygon() {
    let m = im("2FF1FF212");
    assert!(m.is_within());
    assert!(!m.is_contains());
    assert!(m.transposed().is_contains());
    assert!(m.transposed().is_covers());
    assert!(!m.is_equals(Surface, Surface));
}

#[test]
fn within_template_example() {
    assert!(im("T*F**F***").is_within());
}

#[test]
fn identical_polygons() {
    let m = im("2FFF1FFF2");
    let rel = m.relationship(Surface, Surface);
    assert_eq!(
        rel,
        Relationship {
            disjoint: false,
            intersects: true,
            touches: false,
            crosses: false,
            within: true,
            contains: true,
            covers: true,
            overlaps: false,
            equals: true,
        }
    );
}

#[test]
fn equality_depends_on_dimensions() {
    let m = im("T*F*TFFFT");
    assert!(m.is_equals(Surface, Surface));
    for (a, b) in [(Surface, Curve), (Curve, Point), (Point, Surface)] {
        assert!(!m.is_equals(a, b));
    }
}

#[test]
fn point_on_line_boundary_touches() {
    // A point at the end of a line: the point's interior meets the line's
    // boundary.
    let m = im("F0FFFF102");
    assert!(m.is_touches(Point, Curve));
    assert!(m.transposed().is_touches(Curve, Point));
}

#[test]
fn line_crossing_polygon() {
    let m = im("101FF0212");
    assert!(m.is_crosses(Curve, Surface));
    assert!(m.transposed().is_crosses(Surface, Curve));
    assert!(!m.is_crosses(Surface, Surface));
}

#[test]
fn lines_crossing_at_a_point() {
    let m = im("0F1FF0102");
    assert!(m.is_crosses(Curve, Curve));
    assert!(!m.is_overlaps(Curve, Curve));
    assert_eq!(m.get(0, 0).unwrap(), Dimension::Point);
}

#[test]
fn collinear_lines_overlap() {
    let m = im("1010F0102");
    assert!(m.is_overlaps(Curve, Curve));
    assert!(!m.is_crosses(Curve, Curve));
    assert!(m.matches(templates::OVERLAPS_CURVES).unwrap());
}

#[test]
fn undefined_dimension_pairs_are_false() {
    let m = im("TTTTTTTTT");
    assert!(!m.is_crosses(Surface, Surface));
    assert!(!m.is_crosses(Point, Point));
    assert!(!m.is_overlaps(Point, Surface));
    assert!(!m.is_overlaps(Curve, Surface));
    assert!(!im("FT*******").is_touches(Point, Point));
}

#[test]
fn shape_dimension_conversion_rejects_markers() {
    assert!(ShapeDimension::try_from(Dimension::Dontcare).is_err());
    assert_eq!(ShapeDimension::try_from(Dimension::Surface).unwrap(), Surface);
}
