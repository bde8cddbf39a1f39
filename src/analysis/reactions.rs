//! Support reactions from global equilibrium

use crate::elements::Supports;
use crate::error::{BeamError, BeamResult};
use crate::math::Vec as BeamVec;
use crate::results::Reactions;

/// Resolve the support reactions for the force density `q`
///
/// Two supports give the reactions from vertical and moment equilibrium
/// about the first support. A beam clamped at x = 0 is statically
/// determinate: the clamp takes the whole force and the moment about the
/// origin.
pub fn solve_reactions(q: &BeamVec, supports: Supports) -> BeamResult<Reactions> {
    let length = q.len().saturating_sub(1);
    let supports = supports.validate(length)?;
    let total = q.sum();

    let reactions = match supports {
        Supports::Simple(s1, s2) => {
            let span = s2 as f64 - s1 as f64;
            if span == 0.0 {
                return Err(BeamError::CoincidentSupports(s1 as i64));
            }
            let r2 = -first_moment(q, s1 as f64) / span;
            let r1 = -total - r2;
            Reactions::Simple {
                positions: (s1, s2),
                forces: (r1, r2),
            }
        }
        Supports::Clamped => Reactions::Clamped {
            force: -total,
            moment: -first_moment(q, 0.0),
        },
    };
    log::trace!("Reactions: {:?}", reactions);
    Ok(reactions)
}

/// Moment of the force density about `x`
fn first_moment(q: &BeamVec, x: f64) -> f64 {
    q.iter()
        .enumerate()
        .map(|(i, f)| f * (i as f64 - x))
        .sum()
}
