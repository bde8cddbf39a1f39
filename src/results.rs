//! Result types for beam analysis

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::BeamResult;
use crate::math::Vec as BeamVec;

/// Support reactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Reactions {
    /// Reaction forces (N) at two simple supports, ascending position
    Simple {
        positions: (usize, usize),
        forces: (f64, f64),
    },
    /// Reaction force (N) and moment (N·mm) of a clamp at x = 0
    Clamped { force: f64, moment: f64 },
}

impl Reactions {
    /// The reactions as a pair
    ///
    /// Two supports give their forces `(R1, R2)` in N. A clamp gives
    /// `(force, moment)` in N and N·mm; use [`Reactions::total_force`] for
    /// the force alone.
    pub fn as_pair(&self) -> (f64, f64) {
        match *self {
            Self::Simple { forces, .. } => forces,
            Self::Clamped { force, moment } => (force, moment),
        }
    }

    /// Sum of all reaction forces
    pub fn total_force(&self) -> f64 {
        match *self {
            Self::Simple {
                forces: (r1, r2), ..
            } => r1 + r2,
            Self::Clamped { force, .. } => force,
        }
    }
}

/// Complete response of a solved beam
///
/// All arrays hold one value per mm, from x = 0 up to and including
/// x = length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResults {
    /// Beam length in mm
    pub length: usize,
    /// Shear force in N
    pub shear: BeamVec,
    /// Bending moment in N·mm
    pub moment: BeamVec,
    /// Slope dy/dx of the beam axis
    pub slope: BeamVec,
    /// Vertical displacement in mm
    pub deflection: BeamVec,
    /// Strain at the top of the cross-section
    pub strain_top: BeamVec,
    /// Strain at the bottom of the cross-section
    pub strain_bottom: BeamVec,
    /// Support reactions
    pub reactions: Reactions,
}

impl BeamResults {
    /// Angle between the beam axis and the x-axis in radians
    pub fn angle(&self) -> BeamVec {
        self.slope.map(f64::atan)
    }

    /// Stress at the top fiber for a uniform Young's modulus `e` (MPa)
    pub fn stress_top(&self, e: f64) -> BeamVec {
        &self.strain_top * e
    }

    /// Stress at the bottom fiber for a uniform Young's modulus `e` (MPa)
    pub fn stress_bottom(&self, e: f64) -> BeamVec {
        &self.strain_bottom * e
    }

    /// Extreme values of the response
    pub fn summary(&self) -> ResultSummary {
        let (max_deflection_at, max_deflection) = extreme(&self.deflection);
        let (max_moment_at, max_moment) = extreme(&self.moment);
        let (max_shear_at, max_shear) = extreme(&self.shear);
        let top = extreme(&self.strain_top);
        let bottom = extreme(&self.strain_bottom);
        let (max_strain_at, max_strain) = if top.1.abs() >= bottom.1.abs() {
            top
        } else {
            bottom
        };
        ResultSummary {
            max_deflection,
            max_deflection_at,
            max_moment,
            max_moment_at,
            max_shear,
            max_shear_at,
            max_strain,
            max_strain_at,
        }
    }

    /// Write the results as whitespace separated columns
    ///
    /// Columns: position, shear, moment, deflection, top strain, bottom
    /// strain, slope. The header line starts with `#`.
    pub fn write_columns<W: Write>(&self, out: W) -> BeamResult<()> {
        self.write_table(out, &[])
    }

    /// Save the columns of [`BeamResults::write_columns`] to a file
    ///
    /// The header also names the file and the time it was generated.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> BeamResult<()> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file = File::create(path)?;
        self.write_table(
            BufWriter::new(file),
            &[format!("file: {}", name), format!("generated: {}", generated)],
        )
    }

    fn write_table<W: Write>(&self, mut out: W, preamble: &[String]) -> BeamResult<()> {
        for line in preamble {
            writeln!(out, "# {}", line)?;
        }
        writeln!(out, "# x D M y et eb dy")?;
        for x in 0..=self.length {
            writeln!(
                out,
                "{} {} {} {} {} {} {}",
                x,
                self.shear[x],
                self.moment[x],
                self.deflection[x],
                self.strain_top[x],
                self.strain_bottom[x],
                self.slope[x]
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Largest magnitudes in a solved beam, with their positions in mm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Deflection with the largest magnitude (signed)
    pub max_deflection: f64,
    /// Position of the largest deflection
    pub max_deflection_at: usize,
    /// Bending moment with the largest magnitude (signed)
    pub max_moment: f64,
    /// Position of the largest moment
    pub max_moment_at: usize,
    /// Shear force with the largest magnitude (signed)
    pub max_shear: f64,
    /// Position of the largest shear force
    pub max_shear_at: usize,
    /// Fiber strain with the largest magnitude, top or bottom (signed)
    pub max_strain: f64,
    /// Position of the largest fiber strain
    pub max_strain_at: usize,
}

/// Index and value of the entry with the largest magnitude
fn extreme(values: &BeamVec) -> (usize, f64) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (i, v)| {
            if v.abs() > best.1.abs() {
                (i, v)
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> BeamResults {
        let v = |values: Vec<f64>| BeamVec::from_vec(values);
        BeamResults {
            length: 2,
            shear: v(vec![5.0, -5.0, 0.0]),
            moment: v(vec![5.0, 0.0, 0.0]),
            slope: v(vec![0.0, 1.0, -0.5]),
            deflection: v(vec![0.0, -2.0, 0.0]),
            strain_top: v(vec![-1e-4, 0.0, 0.0]),
            strain_bottom: v(vec![2e-4, 0.0, 0.0]),
            reactions: Reactions::Simple {
                positions: (0, 2),
                forces: (5.0, 5.0),
            },
        }
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.max_deflection, -2.0);
        assert_eq!(summary.max_deflection_at, 1);
        assert_eq!(summary.max_shear, 5.0);
        assert_eq!(summary.max_shear_at, 0);
        assert_eq!(summary.max_strain, 2e-4);
    }

    #[test]
    fn test_angle() {
        let angle = sample().angle();
        assert_relative_eq!(angle[1], std::f64::consts::FRAC_PI_4);
    }

    #[test]
    fn test_reactions() {
        let r = sample().reactions;
        assert_eq!(r.total_force(), 10.0);
        let clamp = Reactions::Clamped {
            force: 3.0,
            moment: 7.0,
        };
        assert_eq!(clamp.as_pair(), (3.0, 7.0));
        assert_eq!(clamp.total_force(), 3.0);
    }

    #[test]
    fn test_write_columns() {
        let mut out = Vec::new();
        sample().write_columns(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# x D M y et eb dy");
        assert_eq!(lines[2], "1 -5 0 -2 0 0 1");
    }

    #[test]
    fn test_save_names_file() {
        let path = std::env::temp_dir().join(format!("beammech-save-{}.txt", std::process::id()));
        sample().save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            format!("# file: beammech-save-{}.txt", std::process::id())
        );
        assert!(lines[1].starts_with("# generated: "));
        assert_eq!(lines[2], "# x D M y et eb dy");
        assert_eq!(lines[4], "1 -5 0 -2 0 0 1");
    }
}
