//! Transverse loads on the beam

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::math::{grid_index, Vec as BeamVec};

/// Size of a load, either as a force or as a mass under gravity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Magnitude {
    /// Force in N (downward is negative)
    #[serde(rename = "force")]
    Force(f64),
    /// Mass in kg, acting downward
    #[serde(rename = "kg")]
    Mass(f64),
}

impl Magnitude {
    /// A force in newtons
    pub fn force(newtons: f64) -> Self {
        Self::Force(newtons)
    }

    /// A mass in kilograms
    pub fn kg(mass: f64) -> Self {
        Self::Mass(mass)
    }

    /// Force in N; a mass of 1 kg gives `-gravity` N
    pub fn newtons(&self, gravity: f64) -> f64 {
        match *self {
            Self::Force(f) => f,
            Self::Mass(m) => -gravity * m,
        }
    }

    /// Scale the magnitude, keeping its unit
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            Self::Force(f) => Self::Force(f * factor),
            Self::Mass(m) => Self::Mass(m * factor),
        }
    }
}

impl From<f64> for Magnitude {
    fn from(newtons: f64) -> Self {
        Self::Force(newtons)
    }
}

/// A load acting perpendicular to the beam
///
/// Positions are in mm from the origin and are rounded to the nearest grid
/// point when the load is applied to a beam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Load {
    /// Concentrated load
    Point { magnitude: Magnitude, position: f64 },
    /// Load spread evenly over `start..=end`
    Distributed {
        magnitude: Magnitude,
        start: f64,
        end: f64,
    },
    /// Load rising linearly from zero at `start` to its peak at `end`
    Triangular {
        magnitude: Magnitude,
        start: f64,
        end: f64,
    },
}

impl Load {
    /// Create a point load
    ///
    /// ```
    /// use beammech::loads::{Load, Magnitude};
    ///
    /// let load = Load::point(Magnitude::kg(150.0), 100.0);
    /// assert_eq!(load.to_string(), "point load of -1471.5 N @ 100 mm");
    /// ```
    pub fn point(magnitude: impl Into<Magnitude>, position: f64) -> Self {
        Self::Point {
            magnitude: magnitude.into(),
            position,
        }
    }

    /// Create an evenly distributed load
    pub fn distributed(magnitude: impl Into<Magnitude>, start: f64, end: f64) -> BeamResult<Self> {
        check_span(start, end)?;
        Ok(Self::Distributed {
            magnitude: magnitude.into(),
            start,
            end,
        })
    }

    /// Create a linearly rising (or falling, when `start > end`) load
    pub fn triangular(magnitude: impl Into<Magnitude>, start: f64, end: f64) -> BeamResult<Self> {
        check_span(start, end)?;
        Ok(Self::Triangular {
            magnitude: magnitude.into(),
            start,
            end,
        })
    }

    /// The magnitude of this load
    pub fn magnitude(&self) -> Magnitude {
        match *self {
            Self::Point { magnitude, .. }
            | Self::Distributed { magnitude, .. }
            | Self::Triangular { magnitude, .. } => magnitude,
        }
    }

    /// Total force in N
    pub fn force(&self, gravity: f64) -> f64 {
        self.magnitude().newtons(gravity)
    }

    /// Moment of the load about position `x` in N·mm
    ///
    /// Uses the centroid of the discretized load, so it agrees with the
    /// force density returned by [`Load::force_density`].
    pub fn moment_about(&self, x: f64, gravity: f64) -> BeamResult<f64> {
        Ok((self.centroid()? - x) * self.force(gravity))
    }

    /// Scale the load, keeping its position
    pub fn scaled(&self, factor: f64) -> Self {
        match *self {
            Self::Point {
                magnitude,
                position,
            } => Self::Point {
                magnitude: magnitude.scaled(factor),
                position,
            },
            Self::Distributed {
                magnitude,
                start,
                end,
            } => Self::Distributed {
                magnitude: magnitude.scaled(factor),
                start,
                end,
            },
            Self::Triangular {
                magnitude,
                start,
                end,
            } => Self::Triangular {
                magnitude: magnitude.scaled(factor),
                start,
                end,
            },
        }
    }

    /// Force per mm at every grid position of a beam of `length` mm
    ///
    /// The entries sum to [`Load::force`].
    pub fn force_density(&self, length: usize, gravity: f64) -> BeamResult<BeamVec> {
        let mut q = BeamVec::zeros(length + 1);
        let force = self.force(gravity);
        match *self {
            Self::Point { position, .. } => {
                let p = in_beam(grid_index(position)?, length)?;
                q[p] = force;
            }
            Self::Distributed { start, end, .. } => {
                let (s, e) = grid_span(start, end, length)?;
                let (lo, hi) = (s.min(e), s.max(e));
                let share = force / (hi - lo + 1) as f64;
                for i in lo..=hi {
                    q[i] = share;
                }
            }
            Self::Triangular { start, end, .. } => {
                let (s, e) = grid_span(start, end, length)?;
                let n = s.abs_diff(e);
                let weight = (n * (n + 1)) as f64 / 2.0;
                for k in 0..=n {
                    let i = if e > s { s + k } else { s - k };
                    q[i] = force * k as f64 / weight;
                }
            }
        }
        Ok(q)
    }

    /// Centroid of the discretized load in mm
    fn centroid(&self) -> BeamResult<f64> {
        match *self {
            Self::Point { position, .. } => Ok(grid_index(position)? as f64),
            Self::Distributed { start, end, .. } => {
                let (s, e) = rounded_span(start, end)?;
                Ok((s + e) as f64 / 2.0)
            }
            Self::Triangular { start, end, .. } => {
                let (s, e) = rounded_span(start, end)?;
                // Weights 0, 1, .., n have their centroid at (2n + 1) / 3 from the start
                let n = (e - s).abs() as f64;
                let offset = (2.0 * n + 1.0) / 3.0;
                Ok(s as f64 + offset * (e - s).signum() as f64)
            }
        }
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = |m: Magnitude| m.newtons(crate::analysis::STANDARD_GRAVITY);
        match *self {
            Self::Point {
                magnitude,
                position,
            } => write!(f, "point load of {} N @ {} mm", size(magnitude), position),
            Self::Distributed {
                magnitude,
                start,
                end,
            } => write!(
                f,
                "constant distributed load of {} N @ {}--{} mm",
                size(magnitude),
                start,
                end
            ),
            Self::Triangular {
                magnitude,
                start,
                end,
            } => {
                let direction = if start < end { "ascending" } else { "descending" };
                write!(
                    f,
                    "linearly {} distributed load of {} N @ {}--{} mm",
                    direction,
                    size(magnitude),
                    start,
                    end
                )
            }
        }
    }
}

/// Sum the force densities of all `loads`
pub fn aggregate(loads: &[Load], length: usize, gravity: f64) -> BeamResult<BeamVec> {
    let mut q = BeamVec::zeros(length + 1);
    for load in loads {
        q += load.force_density(length, gravity)?;
    }
    Ok(q)
}

fn rounded_span(start: f64, end: f64) -> BeamResult<(i64, i64)> {
    let (s, e) = (grid_index(start)?, grid_index(end)?);
    if s == e {
        return Err(BeamError::DegenerateSpan { start: s, end: e });
    }
    Ok((s, e))
}

fn check_span(start: f64, end: f64) -> BeamResult<()> {
    rounded_span(start, end).map(|_| ())
}

fn grid_span(start: f64, end: f64, length: usize) -> BeamResult<(usize, usize)> {
    let (s, e) = rounded_span(start, end)?;
    Ok((in_beam(s, length)?, in_beam(e, length)?))
}

fn in_beam(position: i64, length: usize) -> BeamResult<usize> {
    if position < 0 || position as usize > length {
        return Err(BeamError::LoadOutOfRange { position, length });
    }
    Ok(position as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const G: f64 = 9.81;

    #[test]
    fn test_mass_is_downward_force() {
        let load = Load::point(Magnitude::kg(1.0), 200.0);
        assert_relative_eq!(load.force(G), -9.81);
        assert_eq!(Load::point(-20.0, 300.0).force(G), -20.0);
    }

    #[test]
    fn test_point_density() {
        let q = Load::point(-100.0, 4.6).force_density(10, G).unwrap();
        assert_eq!(q[5], -100.0);
        assert_relative_eq!(q.sum(), -100.0);
    }

    #[test]
    fn test_halfway_position_rounds_to_even() {
        let q = Load::point(-1.0, 2.5).force_density(10, G).unwrap();
        assert_eq!(q[2], -1.0);
        assert_eq!(q[3], 0.0);
        let q = Load::point(-1.0, 3.5).force_density(10, G).unwrap();
        assert_eq!(q[4], -1.0);
    }

    #[test]
    fn test_point_outside_beam() {
        let err = Load::point(-100.0, 11.0).force_density(10, G).unwrap_err();
        assert!(matches!(err, BeamError::LoadOutOfRange { position: 11, length: 10 }));
    }

    #[test]
    fn test_distributed_density() {
        let q = Load::distributed(-50.0, 8.0, 4.0)
            .unwrap()
            .force_density(10, G)
            .unwrap();
        assert_eq!(q[3], 0.0);
        assert_relative_eq!(q[4], -10.0);
        assert_relative_eq!(q[8], -10.0);
        assert_eq!(q[9], 0.0);
        assert_relative_eq!(q.sum(), -50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_span() {
        assert!(matches!(
            Load::distributed(-50.0, 4.0, 4.2),
            Err(BeamError::DegenerateSpan { start: 4, end: 4 })
        ));
        assert!(Load::triangular(-50.0, 7.0, 7.0).is_err());
    }

    #[test]
    fn test_triangular_density() {
        let q = Load::triangular(-60.0, 2.0, 5.0)
            .unwrap()
            .force_density(10, G)
            .unwrap();
        // weights 0, 1, 2, 3 sum to 6
        assert_eq!(q[2], 0.0);
        assert_relative_eq!(q[3], -10.0);
        assert_relative_eq!(q[4], -20.0);
        assert_relative_eq!(q[5], -30.0);
        assert_relative_eq!(q.sum(), -60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_descending_triangular_density() {
        let q = Load::triangular(60.0, 5.0, 2.0)
            .unwrap()
            .force_density(10, G)
            .unwrap();
        assert_relative_eq!(q[2], 30.0);
        assert_eq!(q[5], 0.0);
        assert_relative_eq!(q.sum(), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_matches_density() {
        let loads = [
            Load::point(-10.0, 3.0),
            Load::distributed(Magnitude::kg(2.0), 1.0, 9.0).unwrap(),
            Load::triangular(-60.0, 2.0, 7.0).unwrap(),
            Load::triangular(-60.0, 9.0, 3.0).unwrap(),
        ];
        for load in &loads {
            let q = load.force_density(10, G).unwrap();
            let expected: f64 = q.iter().enumerate().map(|(i, f)| f * (i as f64 - 2.0)).sum();
            assert_relative_eq!(load.moment_about(2.0, G).unwrap(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_aggregate() {
        let loads = [Load::point(-10.0, 3.0), Load::point(-5.0, 3.0)];
        let q = aggregate(&loads, 10, G).unwrap();
        assert_eq!(q[3], -15.0);
        assert!(aggregate(&[], 10, G).unwrap().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_display() {
        let load = Load::triangular(-200.0, 1500.0, 1200.0).unwrap();
        assert_eq!(
            load.to_string(),
            "linearly descending distributed load of -200 N @ 1500--1200 mm"
        );
    }

    #[test]
    fn test_deserialize_load() {
        let json = r#"{"type": "distributed", "magnitude": {"kg": 50.0}, "start": 1500, "end": 2000}"#;
        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load, Load::distributed(Magnitude::kg(50.0), 1500.0, 2000.0).unwrap());
    }
}
