//! Numerical utilities for the beam solver
//!
//! The grid has a fixed step of 1 mm, so integration along the beam reduces
//! to prefix summation.

use nalgebra::{DVector, Matrix2, Vector2};

use crate::error::{BeamError, BeamResult};

/// Per-position array over the beam grid (`length + 1` entries)
pub type Vec = DVector<f64>;

/// Running sum of `values`; element `i` holds `values[0] + ... + values[i]`
pub fn cumsum(values: &Vec) -> Vec {
    let mut total = 0.0;
    values.map(|v| {
        total += v;
        total
    })
}

/// Solve a 2x2 linear system `a * x = b`
///
/// Returns [`BeamError::SingularSystem`] when the determinant vanishes.
pub fn solve_2x2(a: Matrix2<f64>, b: Vector2<f64>, what: &'static str) -> BeamResult<Vector2<f64>> {
    let inverse = a.try_inverse().ok_or(BeamError::SingularSystem(what))?;
    Ok(inverse * b)
}

/// Round a position in mm to the nearest grid index
///
/// Halfway positions round to the even index, so 2.5 mm lands on 2 and
/// 3.5 mm on 4. Rejects negative and non-finite positions.
pub fn grid_index(position: f64) -> BeamResult<i64> {
    if !position.is_finite() {
        return Err(BeamError::InvalidPosition(format!(
            "{position} is not a finite number"
        )));
    }
    let index = position.round_ties_even();
    if index < 0.0 {
        return Err(BeamError::InvalidPosition(format!(
            "{position} mm is negative"
        )));
    }
    Ok(index as i64)
}

/// Build a per-mm array by linear interpolation between stations
///
/// Each station is `(x, value)`; the x values are rounded to whole mm and
/// the first station becomes index 0 of the returned array. Stations with
/// the same rounded x produce a step.
///
/// # Example
/// ```
/// use beammech::math::interpolate;
///
/// let ei = interpolate(&[(0.0, 0.0), (4.0, 3.0), (6.0, -1.0)]);
/// assert_eq!(ei.as_slice(), &[0.0, 0.75, 1.5, 2.25, 3.0, 1.0, -1.0]);
/// ```
pub fn interpolate(stations: &[(f64, f64)]) -> Vec {
    let Some(&(_, last_value)) = stations.last() else {
        return Vec::zeros(0);
    };
    let mut values = std::vec::Vec::new();
    for pair in stations.windows(2) {
        let (x0, v0) = pair[0];
        let (x1, v1) = pair[1];
        let steps = (x1.round_ties_even() - x0.round_ties_even()) as i64;
        for k in 0..steps.max(0) {
            values.push(v0 + (v1 - v0) * k as f64 / steps as f64);
        }
    }
    values.push(last_value);
    Vec::from_vec(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cumsum() {
        let v = Vec::from_vec(vec![1.0, 2.0, 3.0, -6.0]);
        assert_eq!(cumsum(&v).as_slice(), &[1.0, 3.0, 6.0, 0.0]);
    }

    #[test]
    fn test_solve_2x2() {
        let a = Matrix2::new(2.0, 1.0, 1.0, 3.0);
        let b = Vector2::new(3.0, 5.0);
        let x = solve_2x2(a, b, "test").unwrap();
        assert_relative_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_solve_2x2_singular() {
        let a = Matrix2::new(1.0, 1.0, 2.0, 2.0);
        let result = solve_2x2(a, Vector2::new(1.0, 2.0), "test");
        assert!(matches!(result, Err(BeamError::SingularSystem("test"))));
    }

    #[test]
    fn test_grid_index() {
        assert_eq!(grid_index(2.4).unwrap(), 2);
        assert_eq!(grid_index(2.6).unwrap(), 3);
        assert_eq!(grid_index(2.5).unwrap(), 2);
        assert_eq!(grid_index(3.5).unwrap(), 4);
        assert_eq!(grid_index(0.5).unwrap(), 0);
        assert!(grid_index(-3.0).is_err());
        assert!(grid_index(f64::NAN).is_err());
    }

    #[test]
    fn test_interpolate() {
        let a = interpolate(&[(0.0, 0.0), (3.0, 3.0)]);
        assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0, 3.0]);

        let b = interpolate(&[(1.0, 1.0), (4.0, 4.0), (6.0, -3.0)]);
        assert_eq!(b.as_slice(), &[1.0, 2.0, 3.0, 4.0, 0.5, -3.0]);
    }
}
