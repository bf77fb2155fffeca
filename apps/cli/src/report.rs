// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Evaluation of a matrix against templates and predicates, and its
//! text/JSON rendering.

use std::fmt;

use de9im_lite_core::{IntersectionMatrix, Location, ShapeDimension, SpatialPredicate};
use serde::Serialize;

/// Result of matching one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateMatch {
    pub template: String,
    pub matches: bool,
}

/// Result of one predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateResult {
    pub predicate: SpatialPredicate,
    pub holds: bool,
}

/// Everything the CLI reports about a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub matrix: IntersectionMatrix,
    pub dims: [ShapeDimension; 2],
    pub transposed: bool,
    pub templates: Vec<TemplateMatch>,
    pub predicates: Vec<PredicateResult>,
}

impl Report {
    /// Evaluates `templates` and `predicates` (all predicates when empty).
    pub fn build(
        mut matrix: IntersectionMatrix,
        dims: (ShapeDimension, ShapeDimension),
        transpose: bool,
        templates: &[String],
        predicates: &[SpatialPredicate],
    ) -> de9im_lite_core::Result<Self> {
        if transpose {
            matrix.transpose();
        }

        let templates = templates
            .iter()
            .map(|template| -> de9im_lite_core::Result<TemplateMatch> {
                Ok(TemplateMatch {
                    template: template.clone(),
                    matches: matrix.matches(template)?,
                })
            })
            .collect::<de9im_lite_core::Result<Vec<_>>>()?;

        let selected: &[SpatialPredicate] = if predicates.is_empty() {
            &SpatialPredicate::ALL
        } else {
            predicates
        };
        let (a, b) = dims;
        let predicates = selected
            .iter()
            .map(|&predicate| PredicateResult {
                predicate,
                holds: matrix.evaluate(predicate, a, b),
            })
            .collect();

        Ok(Self {
            matrix,
            dims: [a, b],
            transposed: transpose,
            templates,
            predicates,
        })
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plain-text rendering.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix: {}", self.matrix)?;
        writeln!(f, "dims:   {} / {}", self.dims[0], self.dims[1])?;

        writeln!(f)?;
        writeln!(f, "      I  B  E")?;
        for row in Location::ALL {
            write!(f, "  {} ", row.letter())?;
            for column in Location::ALL {
                write!(f, "  {}", self.matrix.get_at(row, column))?;
            }
            writeln!(f)?;
        }

        if !self.templates.is_empty() {
            writeln!(f)?;
            for t in &self.templates {
                writeln!(f, "{}  {}", t.template, if t.matches { "match" } else { "no match" })?;
            }
        }

        writeln!(f)?;
        for p in &self.predicates {
            writeln!(f, "{:<11} {}", p.predicate.as_str(), p.holds)?;
        }
        Ok(())
    }
}
