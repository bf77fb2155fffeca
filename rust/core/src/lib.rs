// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # DE9IM-Lite Core
//!
//! The Dimensionally Extended Nine-Intersection Model (DE-9IM) matrix used to
//! classify the topological relationship between two planar shapes (OGC
//! Simple Features).
//!
//! ## Overview
//!
//! - **Matrix**: a fixed 3×3 grid of [`Dimension`] values indexed by
//!   [`Location`] (interior, boundary, exterior of each shape)
//! - **Symbol codec**: the nine-character string form (`212101212`), parsed
//!   case-insensitively and printed in uppercase
//! - **Accumulation**: [`IntersectionMatrix::add`] merges partial matrices by
//!   raw dimension code
//! - **Templates**: [`IntersectionMatrix::matches`] against patterns such as
//!   `T*F**F***`
//! - **Predicates**: disjoint, intersects, touches, crosses, within,
//!   contains, covers, overlaps and equals
//!
//! Computing a matrix from actual geometry is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use de9im_lite_core::{IntersectionMatrix, ShapeDimension};
//!
//! let m: IntersectionMatrix = "212101212".parse()?;
//! assert!(m.is_overlaps(ShapeDimension::Surface, ShapeDimension::Surface));
//! assert!(m.matches("T*T***T**")?);
//! assert_eq!(m.transposed().to_string(), "212101212");
//! # Ok::<(), de9im_lite_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialize matrices as their nine-symbol string and predicate
//!   results as plain structs

pub mod dimension;
pub mod error;
pub mod location;
pub mod matrix;
pub mod pattern;
pub mod predicates;

pub use dimension::{Dimension, ShapeDimension};
pub use error::{Error, Result};
pub use location::Location;
pub use matrix::{IntersectionMatrix, MATRIX_COLUMNS, MATRIX_LEN, MATRIX_ROWS};
pub use pattern::{matches_dimension, templates};
pub use predicates::{Relationship, SpatialPredicate};
