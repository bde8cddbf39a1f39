//! The beam solution pipeline

use super::{assemble, fiber_strains, integrate, solve_reactions, SolverOptions};
use crate::elements::{SectionTable, Supports};
use crate::error::{BeamError, BeamResult};
use crate::loads::{aggregate, Load};
use crate::results::BeamResults;

/// Solve a beam problem
///
/// # Arguments
/// * `length` - Beam length in mm; the grid runs from 0 to `length` inclusive
/// * `supports` - Two simple supports, or a clamp at x = 0
/// * `sections` - Cross-section properties with `length + 1` entries
/// * `loads` - Loads acting on the beam
/// * `options` - Gravity, shear correction factor and shear toggle
///
/// All input is validated before any computation, so an error never comes
/// with partial results.
///
/// # Example
/// ```
/// use beammech::prelude::*;
///
/// let length = 1000;
/// let sections = SectionTable::uniform(length, SectionProperties::rectangular(30.0, 3.0, 69500.0, 26000.0));
/// let loads = [Load::point(-20.0, 500.0)];
/// let results = solve(length, Supports::simple(0.0, 1000.0).unwrap(), &sections, &loads, &SolverOptions::default()).unwrap();
/// assert_eq!(results.deflection[0], 0.0);
/// assert!(results.deflection[500] < 0.0);
/// ```
pub fn solve(
    length: usize,
    supports: Supports,
    sections: &SectionTable,
    loads: &[Load],
    options: &SolverOptions,
) -> BeamResult<BeamResults> {
    if length < 1 {
        return Err(BeamError::InvalidLength(length as i64));
    }
    let supports = supports.validate(length)?;
    sections.validate(length)?;
    if loads.is_empty() {
        log::warn!("No loads on the beam; all results will be zero");
    }

    let q = aggregate(loads, length, options.gravity)?;
    log::debug!(
        "Solving {} mm beam, {:?}, {} load(s), total {:.3} N",
        length,
        supports,
        loads.len(),
        q.sum()
    );

    let reactions = solve_reactions(&q, supports)?;
    let forces = assemble(&q, &reactions);
    let deformation = integrate(
        &forces,
        sections,
        supports,
        options.effective_shear_factor(),
    )?;
    let strains = fiber_strains(&deformation.curvature, sections);
    log::debug!("Reactions: {:?}", reactions);

    Ok(BeamResults {
        length,
        shear: forces.shear,
        moment: forces.moment,
        slope: deformation.slope,
        deflection: deformation.deflection,
        strain_top: strains.top,
        strain_bottom: strains.bottom,
        reactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SectionProperties;
    use crate::error::ErrorKind;
    use crate::results::Reactions;

    fn sections(length: usize) -> SectionTable {
        SectionTable::uniform(length, SectionProperties::new(1.0e10, 1.0e6, 10.0, -10.0))
    }

    #[test]
    fn test_zero_length() {
        let err = solve(0, Supports::Clamped, &sections(0), &[], &SolverOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_unloaded_beam() {
        let r = solve(
            100,
            Supports::Simple(0, 100),
            &sections(100),
            &[],
            &SolverOptions::default(),
        )
        .unwrap();
        assert!(r.deflection.iter().all(|y| *y == 0.0));
        assert_eq!(r.reactions.as_pair(), (0.0, 0.0));
    }

    #[test]
    fn test_load_outside_beam() {
        let loads = [Load::distributed(-10.0, 50.0, 150.0).unwrap()];
        let err = solve(
            100,
            Supports::Clamped,
            &sections(100),
            &loads,
            &SolverOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, BeamError::LoadOutOfRange { position: 150, .. }));
    }

    #[test]
    fn test_reversed_supports_are_ordered() {
        let loads = [Load::point(-100.0, 500.0)];
        let options = SolverOptions::default();
        let reversed = solve(1000, Supports::Simple(800, 200), &sections(1000), &loads, &options).unwrap();
        let ordered = solve(1000, Supports::Simple(200, 800), &sections(1000), &loads, &options).unwrap();
        assert!(matches!(
            reversed.reactions,
            Reactions::Simple { positions: (200, 800), .. }
        ));
        assert_eq!(reversed, ordered);
    }

    #[test]
    fn test_inputs_untouched() {
        let table = sections(100);
        let loads = [Load::point(-10.0, 70.0)];
        let options = SolverOptions::default();
        let first = solve(100, Supports::Clamped, &table, &loads, &options).unwrap();
        let second = solve(100, Supports::Clamped, &table, &loads, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(table, sections(100));
    }
}
