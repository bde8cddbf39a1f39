//! beammech - Deflection and strain of one-dimensional beams
//!
//! The beam is sampled on a 1 mm grid from x = 0 to x = length. Supported:
//! - Two simple supports anywhere on the beam, or a clamp at x = 0
//! - Point, evenly distributed and triangular loads, as forces or masses
//! - A patient lying on the beam (IEC 60601 weight distribution)
//! - Arbitrary variation of the cross-section along the beam
//! - Bending and shear deformation
//!
//! ## Example
//! ```rust
//! use beammech::prelude::*;
//!
//! let length = 2287;
//! let section = SectionProperties::rectangular(40.0, 30.0, 69500.0, 26000.0);
//! let sections = SectionTable::uniform(length, section);
//! let supports = Supports::simple(6.0, 780.0).unwrap();
//!
//! let mut loads = patient_load(Magnitude::kg(250.0), None, Some(length as f64)).unwrap();
//! loads.push(Load::point(Magnitude::kg(20.0), 2000.0));
//!
//! let results = solve(length, supports, &sections, &loads, &SolverOptions::default()).unwrap();
//! let (r1, r2) = results.reactions.as_pair();
//! assert!((r1 + r2 - 270.0 * 9.81).abs() < 1e-6);
//! assert!(results.deflection[6].abs() < 1e-9);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod problem;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{solve, SolverOptions};
    pub use crate::elements::{Layer, SectionProperties, SectionProvider, SectionTable, Supports};
    pub use crate::error::{BeamError, BeamResult, ErrorKind};
    pub use crate::loads::{patient_load, Load, Magnitude};
    pub use crate::problem::Problem;
    pub use crate::results::{BeamResults, Reactions, ResultSummary};
}
