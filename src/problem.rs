//! Beam problems read from JSON
//!
//! ```json
//! {
//!   "length": 2287,
//!   "supports": [6, 780],
//!   "section": { "kind": "uniform", "ei": 9.39e9, "ga": 2.0e6, "top": 11.53, "bottom": -19.47 },
//!   "loads": [ { "type": "point", "magnitude": { "kg": 20 }, "position": 1000 } ],
//!   "patients": [ { "magnitude": { "kg": 250 }, "head": 2287 } ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::{self, SolverOptions};
use crate::elements::{SectionProperties, SectionTable, Supports};
use crate::error::{BeamError, BeamResult};
use crate::loads::{patient_load, Load, Magnitude};
use crate::math::Vec as BeamVec;
use crate::results::BeamResults;

/// Cross-section description of a problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SectionDefinition {
    /// The same section over the whole beam
    Uniform {
        ei: f64,
        ga: f64,
        top: f64,
        bottom: f64,
    },
    /// One value per mm, `length + 1` entries each
    Arrays {
        ei: Vec<f64>,
        ga: Vec<f64>,
        top: Vec<f64>,
        bottom: Vec<f64>,
    },
}

impl SectionDefinition {
    /// Sample the section over a beam of `length` mm
    pub fn table(&self, length: usize) -> BeamResult<SectionTable> {
        match self {
            Self::Uniform { ei, ga, top, bottom } => Ok(SectionTable::uniform(
                length,
                SectionProperties::new(*ei, *ga, *top, *bottom),
            )),
            Self::Arrays { ei, ga, top, bottom } => SectionTable::new(
                BeamVec::from_column_slice(ei),
                BeamVec::from_column_slice(ga),
                BeamVec::from_column_slice(top),
                BeamVec::from_column_slice(bottom),
            ),
        }
    }
}

/// A patient placed on the beam, anchored at either the feet or the head
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientPlacement {
    pub magnitude: Magnitude,
    #[serde(default)]
    pub feet: Option<f64>,
    #[serde(default)]
    pub head: Option<f64>,
}

/// A complete beam problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Beam length in mm
    pub length: usize,
    /// Two support positions in mm; absent means clamped at x = 0
    #[serde(default)]
    pub supports: Option<(f64, f64)>,
    /// Cross-section of the beam
    pub section: SectionDefinition,
    #[serde(default)]
    pub loads: Vec<Load>,
    #[serde(default)]
    pub patients: Vec<PatientPlacement>,
    #[serde(default)]
    pub options: SolverOptions,
}

impl Problem {
    /// Parse a problem from a JSON string
    pub fn from_json(json: &str) -> BeamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a problem from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> BeamResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize the problem to pretty JSON
    pub fn to_json(&self) -> BeamResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All loads, with the patients expanded into their segments
    pub fn all_loads(&self) -> BeamResult<Vec<Load>> {
        let mut loads = self.loads.clone();
        for patient in &self.patients {
            loads.extend(patient_load(patient.magnitude, patient.feet, patient.head)?);
        }
        Ok(loads)
    }

    /// Solve the problem
    pub fn solve(&self) -> BeamResult<BeamResults> {
        if self.length < 1 {
            return Err(BeamError::InvalidLength(0));
        }
        let supports = Supports::from_pair(self.supports)?;
        let sections = self.section.table(self.length)?;
        let loads = self.all_loads()?;
        analysis::solve(self.length, supports, &sections, &loads, &self.options)
    }
}
