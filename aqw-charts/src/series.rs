//! Resolving hover and click payloads back to the entity under the pointer.
//!
//! A chart built from an ordered list of entities (states, cities) records
//! which entity each trace draws. The browser reports the trace `name` and
//! its `curveNumber`; the name is authoritative and the curve number is only
//! consulted when no name came through.

use serde::{Deserialize, Serialize};

/// The trace identity carried by a Plotly hover or click event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartTarget {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "curveNumber")]
    pub curve_number: Option<usize>,
}

impl ChartTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            curve_number: None,
        }
    }

    pub fn curve(curve_number: usize) -> Self {
        Self {
            name: None,
            curve_number: Some(curve_number),
        }
    }
}

/// Entities of one rendered chart and the entity behind every trace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesIndex {
    entities: Vec<String>,
    /// `curves[i]` is the position in `entities` drawn by trace `i`.
    curves: Vec<usize>,
}

impl SeriesIndex {
    /// One trace per entity, in the given order.
    pub fn new(entities: Vec<String>) -> Self {
        let curves = (0..entities.len()).collect();
        Self { entities, curves }
    }

    /// `layers` traces per entity, drawn layer by layer: all entities'
    /// first trace, then all entities' second trace, and so on.
    pub fn layered(entities: Vec<String>, layers: usize) -> Self {
        let n = entities.len();
        let curves = (0..layers).flat_map(|_| 0..n).collect();
        Self { entities, curves }
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entities.iter().position(|e| e == name)
    }

    /// The entity drawn by trace `curve_number`.
    pub fn entity_for_curve(&self, curve_number: usize) -> Option<&str> {
        self.curves
            .get(curve_number)
            .and_then(|&i| self.entities.get(i))
            .map(String::as_str)
    }

    /// The entity a hover/click payload points at.
    ///
    /// A name present in the index resolves to itself. A name that is not
    /// present belongs to an earlier render and resolves to nothing. Without
    /// a name the curve number is looked up; out of range resolves to
    /// nothing.
    pub fn resolve(&self, target: &ChartTarget) -> Option<&str> {
        let resolved = match &target.name {
            Some(name) => self.position(name).map(|i| self.entities[i].as_str()),
            None => target.curve_number.and_then(|c| self.entity_for_curve(c)),
        };
        if resolved.is_none() {
            log::debug!("series: unresolved chart target {:?}", target);
        }
        resolved
    }
}
