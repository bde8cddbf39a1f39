//! Shear force and bending moment along the beam

use crate::math::{cumsum, Vec as BeamVec};
use crate::results::Reactions;

/// Shear force and bending moment at every grid position
#[derive(Debug, Clone, PartialEq)]
pub struct InternalForces {
    /// Shear force in N
    pub shear: BeamVec,
    /// Bending moment in N·mm (positive sags the beam)
    pub moment: BeamVec,
}

/// Assemble shear and moment from the load density and the reactions
///
/// The reactions are added as point forces at their supports, shear is the
/// running sum of all forces and moment the running sum of shear. A clamp
/// also carries the reaction moment, which enters as a step at x = 0 so the
/// moment vanishes at the free end.
pub fn assemble(q: &BeamVec, reactions: &Reactions) -> InternalForces {
    let mut forces = q.clone();
    match *reactions {
        Reactions::Simple {
            positions: (s1, s2),
            forces: (r1, r2),
        } => {
            forces[s1] += r1;
            forces[s2] += r2;
        }
        Reactions::Clamped { force, .. } => forces[0] += force,
    }

    let shear = cumsum(&forces);
    let mut moment = cumsum(&shear);
    if let Reactions::Clamped { moment: clamp, .. } = *reactions {
        moment.add_scalar_mut(-clamp);
    }
    InternalForces { shear, moment }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simply_supported_point_load() {
        let mut q = BeamVec::zeros(11);
        q[5] = -10.0;
        let reactions = Reactions::Simple {
            positions: (0, 10),
            forces: (5.0, 5.0),
        };
        let f = assemble(&q, &reactions);
        assert_eq!(f.shear[0], 5.0);
        assert_eq!(f.shear[5], -5.0);
        assert_eq!(f.shear[10], 0.0);
        assert_relative_eq!(f.moment[4], 25.0);
        assert_relative_eq!(f.moment[10], 0.0);
    }

    #[test]
    fn test_clamped_moment_vanishes_at_free_end() {
        let mut q = BeamVec::zeros(11);
        q[10] = -10.0;
        let reactions = Reactions::Clamped {
            force: 10.0,
            moment: 100.0,
        };
        let f = assemble(&q, &reactions);
        assert_eq!(f.shear[9], 10.0);
        assert_eq!(f.shear[10], 0.0);
        assert_relative_eq!(f.moment[10], 0.0);
        // hogging at the clamp
        assert!(f.moment[0] < 0.0);
    }
}
