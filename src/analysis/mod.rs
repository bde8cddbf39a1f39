//! Beam analysis: options and the solution pipeline
//!
//! The stages run strictly in order: aggregate loads, resolve reactions,
//! assemble shear and moment, integrate curvature, pin the integration
//! constants, evaluate strains.

mod integrate;
mod reactions;
mod solve;
mod statics;
mod strain;

use serde::{Deserialize, Serialize};

pub use integrate::{integrate, Deformation};
pub use reactions::solve_reactions;
pub use solve::solve;
pub use statics::{assemble, InternalForces};
pub use strain::{fiber_strains, FiberStrains};

/// Standard earth gravity in m/s²
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Shear correction factor of a solid rectangular section
pub const RECTANGULAR_SHEAR_FACTOR: f64 = 1.5;

/// Options for beam analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Gravitational acceleration used to turn masses into forces (m/s²)
    pub gravity: f64,
    /// Shear correction factor α
    pub shear_factor: f64,
    /// Include shear deformation in slope and deflection
    pub include_shear: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            gravity: STANDARD_GRAVITY,
            shear_factor: RECTANGULAR_SHEAR_FACTOR,
            include_shear: true,
        }
    }
}

impl SolverOptions {
    /// Options for pure bending (no shear deformation)
    pub fn bending_only() -> Self {
        Self {
            include_shear: false,
            ..Self::default()
        }
    }

    /// Set the gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the shear correction factor
    pub fn with_shear_factor(mut self, alpha: f64) -> Self {
        self.shear_factor = alpha;
        self
    }

    /// Turn shear deformation on or off
    pub fn with_shear(mut self, include: bool) -> Self {
        self.include_shear = include;
        self
    }

    /// The shear factor actually applied; zero when shear is excluded
    pub(crate) fn effective_shear_factor(&self) -> f64 {
        if self.include_shear {
            self.shear_factor
        } else {
            0.0
        }
    }
}
