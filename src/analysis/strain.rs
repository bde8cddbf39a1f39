//! Strain in the outer fibers of the cross-section

use crate::elements::SectionTable;
use crate::math::Vec as BeamVec;

/// Strain at the top and bottom fibers
#[derive(Debug, Clone, PartialEq)]
pub struct FiberStrains {
    /// Strain at the top of the section
    pub top: BeamVec,
    /// Strain at the bottom of the section
    pub bottom: BeamVec,
}

/// Fiber strains for the given curvature
///
/// A positive (sagging) curvature shortens the fibers above the neutral axis,
/// so `strain = -curvature · distance` with `top` positive and `bottom`
/// negative. Stress needs the local Young's modulus, which may differ per
/// layer, and is left to the caller.
pub fn fiber_strains(curvature: &BeamVec, sections: &SectionTable) -> FiberStrains {
    FiberStrains {
        top: -curvature.component_mul(&sections.top),
        bottom: -curvature.component_mul(&sections.bottom),
    }
}
