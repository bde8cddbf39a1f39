//! Curvature integration and boundary conditions
//!
//! Slope and deflection are first integrated freely from x = 0. The problem
//! is linear, so the exact solution differs from that particular integral
//! only by `C1·x + C2`; the two constants follow in closed form from the
//! kinematic boundary conditions.

use nalgebra::{Matrix2, Vector2};

use super::statics::InternalForces;
use crate::elements::{SectionTable, Supports};
use crate::error::BeamResult;
use crate::math::{cumsum, solve_2x2, Vec as BeamVec};

/// Curvature, slope and deflection at every grid position
#[derive(Debug, Clone, PartialEq)]
pub struct Deformation {
    /// Bending curvature M/EI in 1/mm
    pub curvature: BeamVec,
    /// Slope dy/dx including shear deformation
    pub slope: BeamVec,
    /// Deflection in mm (positive is upward)
    pub deflection: BeamVec,
    /// Integration constants `(C1, C2)` that satisfy the boundary conditions
    pub constants: (f64, f64),
}

/// Integrate the curvature twice and apply the boundary conditions
///
/// `shear_factor` is the correction factor α; pass 0 to ignore shear
/// deformation. Shear deformation adds `-α·V/GA` to the slope: an upward
/// shear resultant to the left of a section pushes the section down.
///
/// The sections must already be validated; EI and GA are divisors here.
pub fn integrate(
    forces: &InternalForces,
    sections: &SectionTable,
    supports: Supports,
    shear_factor: f64,
) -> BeamResult<Deformation> {
    let curvature = forces.moment.component_div(&sections.ei);
    let mut slope = cumsum(&curvature);
    if shear_factor != 0.0 {
        slope -= forces.shear.component_div(&sections.ga) * shear_factor;
    }
    let mut deflection = cumsum(&slope);

    let (c1, c2) = match supports {
        Supports::Clamped => (-slope[0], -deflection[0]),
        Supports::Simple(s1, s2) => {
            let (x1, x2) = (s1 as f64, s2 as f64);
            let a = Matrix2::new(x1, 1.0, x2, 1.0);
            let b = Vector2::new(-deflection[s1], -deflection[s2]);
            let c = solve_2x2(a, b, "boundary condition")?;
            (c[0], c[1])
        }
    };
    log::trace!("Integration constants C1 = {:e}, C2 = {:e}", c1, c2);

    slope.add_scalar_mut(c1);
    for (i, y) in deflection.iter_mut().enumerate() {
        *y += c1 * i as f64 + c2;
    }

    Ok(Deformation {
        curvature,
        slope,
        deflection,
        constants: (c1, c2),
    })
}
