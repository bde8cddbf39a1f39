//! Body weight distribution of a lying patient

use super::load::{Load, Magnitude};
use crate::error::{BeamError, BeamResult};

/// Length of the standard patient in mm
pub const PATIENT_LENGTH: f64 = 1900.0;

/// Fraction of the total weight and its span in mm, measured from the feet
///
/// Weight distribution of a human body according to IEC 60601.
const SEGMENTS: [(f64, f64, f64); 6] = [
    (0.148, 0.0, 450.0),     // lower legs
    (0.222, 450.0, 1000.0),  // upper legs
    (0.074, 1000.0, 1180.0), // hands
    (0.408, 1000.0, 1700.0), // torso
    (0.074, 1200.0, 1700.0), // arms
    (0.074, 1220.0, 1900.0), // head
];

/// Distributed loads representing a patient lying with the feet towards x = 0
///
/// Exactly one of `feet` or `head` must be given; the other end follows from
/// [`PATIENT_LENGTH`]. A mass stays a mass in the generated loads, so the
/// conversion to force uses the gravity configured for the solve.
///
/// # Example
/// ```
/// use beammech::loads::{patient_load, Magnitude};
///
/// let loads = patient_load(Magnitude::kg(250.0), None, Some(2287.0)).unwrap();
/// let total: f64 = loads.iter().map(|l| l.force(9.81)).sum();
/// assert!((total + 250.0 * 9.81).abs() < 1e-9);
/// ```
pub fn patient_load(
    magnitude: Magnitude,
    feet: Option<f64>,
    head: Option<f64>,
) -> BeamResult<Vec<Load>> {
    let origin = match (feet, head) {
        (Some(feet), None) => feet.round_ties_even(),
        (None, Some(head)) => head.round_ties_even() - PATIENT_LENGTH,
        _ => return Err(BeamError::AnchorAmbiguous),
    };
    if !origin.is_finite() {
        return Err(BeamError::InvalidPosition(format!(
            "patient anchor at {origin} mm"
        )));
    }

    SEGMENTS
        .iter()
        .map(|&(fraction, start, end)| {
            Load::distributed(magnitude.scaled(fraction), origin + start, origin + end)
        })
        .collect()
}
