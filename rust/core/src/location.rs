// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The three point-set regions of a shape, used as matrix indices.

use std::fmt;

use crate::error::{Error, Result};

/// A region of a shape: interior, boundary or exterior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Interior = 0,
    Boundary = 1,
    Exterior = 2,
}

impl Location {
    /// All locations, in index order.
    pub const ALL: [Location; 3] = [Location::Interior, Location::Boundary, Location::Exterior];

    /// Returns the row/column index of this location.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts a signed row or column index into a location.
    pub fn from_index(index: i32) -> Result<Self> {
        match index {
            0 => Ok(Location::Interior),
            1 => Ok(Location::Boundary),
            2 => Ok(Location::Exterior),
            _ => Err(Error::range("location", index, 3)),
        }
    }

    /// Returns the single-letter abbreviation (`I`, `B`, `E`).
    pub fn letter(self) -> char {
        match self {
            Location::Interior => 'I',
            Location::Boundary => 'B',
            Location::Exterior => 'E',
        }
    }

    /// Returns the location name.
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Interior => "Interior",
            Location::Boundary => "Boundary",
            Location::Exterior => "Exterior",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices() {
        assert_eq!(Location::Interior.index(), 0);
        assert_eq!(Location::Boundary.index(), 1);
        assert_eq!(Location::Exterior.index(), 2);
    }

    #[test]
    fn from_index_bounds() {
        assert_eq!(Location::from_index(1), Ok(Location::Boundary));
        assert!(matches!(
            Location::from_index(3),
            Err(Error::Range { value: 3, .. })
        ));
        assert!(matches!(
            Location::from_index(-1),
            Err(Error::Range { value: -1, .. })
        ));
    }

    #[test]
    fn letters_and_names() {
        let letters: String = Location::ALL.iter().map(|l| l.letter()).collect();
        assert_eq!(letters, "IBE");
        assert_eq!(Location::Exterior.to_string(), "Exterior");
    }
}
