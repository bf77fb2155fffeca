// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The DE-9IM intersection matrix.
//!
//! Cell `(a, b)` holds the dimension of the intersection of location `a` of
//! the first shape with location `b` of the second. The grid is stored as a
//! fixed row-major array of nine [`Dimension`] values and is never resized.
//!
//! The textual form is the nine cell symbols in row-major order, e.g.
//! `212101212` for two overlapping polygons (SFS 2.1.13.2).

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::location::Location;

/// Number of cells in a matrix.
pub const MATRIX_LEN: usize = 9;
/// Number of rows (locations of the first shape).
pub const MATRIX_ROWS: usize = 3;
/// Number of columns (locations of the second shape).
pub const MATRIX_COLUMNS: usize = 3;

/// A 3×3 matrix of dimension values describing how two shapes intersect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntersectionMatrix {
    cells: [Dimension; MATRIX_LEN],
}

impl IntersectionMatrix {
    /// Creates a matrix with every cell set to [`Dimension::False`].
    pub fn new() -> Self {
        Self {
            cells: [Dimension::False; MATRIX_LEN],
        }
    }

    /// Creates a matrix from a nine-symbol string such as `"212101212"`.
    pub fn from_symbols(symbols: &str) -> Result<Self> {
        Ok(Self {
            cells: parse_symbols(symbols)?,
        })
    }

    /// Returns the nine cells in row-major order.
    pub fn cells(&self) -> &[Dimension; MATRIX_LEN] {
        &self.cells
    }

    /// Iterates over `(row, column, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Location, Dimension)> + '_ {
        Location::ALL.into_iter().flat_map(move |row| {
            Location::ALL
                .into_iter()
                .map(move |col| (row, col, self.get_at(row, col)))
        })
    }

    /// Returns the value at `(row, column)`.
    pub fn get(&self, row: i32, column: i32) -> Result<Dimension> {
        let row = checked_index("row", row, MATRIX_ROWS)?;
        let column = checked_index("column", column, MATRIX_COLUMNS)?;
        Ok(self.cells[row * MATRIX_COLUMNS + column])
    }

    /// Returns the value at a row-major linear index in `0..9`.
    pub fn get_index(&self, index: i32) -> Result<Dimension> {
        let index = checked_index("index", index, MATRIX_LEN)?;
        Ok(self.cells[index])
    }

    /// Returns the value at `(row, column)`.
    #[inline]
    pub fn get_at(&self, row: Location, column: Location) -> Dimension {
        self.cells[offset(row, column)]
    }

    /// Overwrites the value at `(row, column)`.
    #[inline]
    pub fn set(&mut self, row: Location, column: Location, value: Dimension) {
        self.cells[offset(row, column)] = value;
    }

    /// Overwrites every cell with `value`.
    pub fn set_all(&mut self, value: Dimension) {
        self.cells = [value; MATRIX_LEN];
    }

    /// Overwrites every cell from a nine-symbol string.
    ///
    /// The matrix is left untouched if the string is rejected.
    pub fn set_symbols(&mut self, symbols: &str) -> Result<()> {
        self.cells = parse_symbols(symbols)?;
        Ok(())
    }

    /// Raises the value at `(row, column)` to `minimum` if `minimum` has a
    /// greater code than the current value.
    pub fn set_at_least(&mut self, row: Location, column: Location, minimum: Dimension) {
        let cell = &mut self.cells[offset(row, column)];
        if minimum.exceeds(*cell) {
            *cell = minimum;
        }
    }

    /// Like [`set_at_least`](Self::set_at_least), but takes raw indices and
    /// silently skips the update when either index is negative.
    ///
    /// Negative indices are the "location not applicable" sentinel. Indices
    /// of 3 or more are still a range error.
    pub fn set_at_least_if_valid(&mut self, row: i32, column: i32, minimum: Dimension) -> Result<()> {
        if row < 0 || column < 0 {
            return Ok(());
        }
        let row = Location::from_index(row).map_err(|_| Error::range("row", row, MATRIX_ROWS))?;
        let column = Location::from_index(column)
            .map_err(|_| Error::range("column", column, MATRIX_COLUMNS))?;
        self.set_at_least(row, column, minimum);
        Ok(())
    }

    /// Applies [`set_at_least`](Self::set_at_least) cell by cell from a
    /// nine-symbol string.
    ///
    /// The matrix is left untouched if the string is rejected.
    pub fn set_at_least_symbols(&mut self, symbols: &str) -> Result<()> {
        let minimums = parse_symbols(symbols)?;
        for (cell, minimum) in self.cells.iter_mut().zip(minimums) {
            *cell = cell.max_by_code(minimum);
        }
        Ok(())
    }

    /// Merges another matrix into this one, keeping the greater code in each
    /// cell.
    ///
    /// Merging is commutative and idempotent, so partial matrices computed
    /// for the parts of a multi-part shape can be accumulated in any order.
    pub fn add(&mut self, other: &IntersectionMatrix) {
        for row in Location::ALL {
            for column in Location::ALL {
                self.set_at_least(row, column, other.get_at(row, column));
            }
        }
        tracing::trace!(matrix = %self, "accumulated partial intersection matrix");
    }

    /// Transposes the matrix in place and returns it for chaining.
    ///
    /// Only the off-diagonal cells move; the result describes the same
    /// relationship with the two shapes swapped.
    pub fn transpose(&mut self) -> &mut Self {
        self.cells.swap(3, 1);
        self.cells.swap(6, 2);
        self.cells.swap(7, 5);
        self
    }

    /// Returns a transposed copy.
    pub fn transposed(&self) -> Self {
        let mut copy = self.clone();
        copy.transpose();
        copy
    }
}

impl Default for IntersectionMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<(Location, Location)> for IntersectionMatrix {
    type Output = Dimension;

    fn index(&self, (row, column): (Location, Location)) -> &Dimension {
        &self.cells[offset(row, column)]
    }
}

impl FromStr for IntersectionMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbols(s)
    }
}

impl fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for IntersectionMatrix {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntersectionMatrix {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let symbols = <String as serde::Deserialize>::deserialize(deserializer)?;
        IntersectionMatrix::from_symbols(&symbols).map_err(serde::de::Error::custom)
    }
}

#[inline]
fn offset(row: Location, column: Location) -> usize {
    row.index() * MATRIX_COLUMNS + column.index()
}

fn checked_index(name: &'static str, value: i32, bound: usize) -> Result<usize> {
    match usize::try_from(value) {
        Ok(index) if index < bound => Ok(index),
        _ => Err(Error::range(name, value, bound)),
    }
}

/// Decodes a nine-symbol string into row-major cells.
pub(crate) fn parse_symbols(symbols: &str) -> Result<[Dimension; MATRIX_LEN]> {
    let count = symbols.chars().count();
    if count != MATRIX_LEN {
        tracing::debug!(input = symbols, count, "rejected symbol string of wrong length");
        return Err(Error::format(
            symbols,
            format!("expected {MATRIX_LEN} symbols, found {count}"),
        ));
    }

    let mut cells = [Dimension::False; MATRIX_LEN];
    for (i, symbol) in symbols.chars().enumerate() {
        cells[i] = Dimension::from_symbol(symbol).ok_or_else(|| {
            tracing::debug!(input = symbols, position = i, "rejected unknown dimension symbol");
            Error::format(
                symbols,
                format!("unknown dimension symbol {symbol:?} at position {i}"),
            )
        })?;
    }
    Ok(cells)
}
