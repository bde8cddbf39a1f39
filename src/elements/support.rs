//! Support conditions

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::math::grid_index;

/// How the beam is held in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Supports {
    /// Simply supported at two distinct positions (mm), ascending
    Simple(usize, usize),
    /// Clamped (cantilevered) at x = 0
    Clamped,
}

impl Supports {
    /// Create a two-point support
    ///
    /// The positions are rounded to whole mm and put in ascending order.
    /// Coincident supports cannot carry a moment and are rejected.
    pub fn simple(a: f64, b: f64) -> BeamResult<Self> {
        let a = grid_index(a)?;
        let b = grid_index(b)?;
        if a == b {
            return Err(BeamError::CoincidentSupports(a));
        }
        let (s1, s2) = if a < b { (a, b) } else { (b, a) };
        Ok(Self::Simple(s1 as usize, s2 as usize))
    }

    /// Create a clamped support at the origin
    pub fn clamped() -> Self {
        Self::Clamped
    }

    /// Build from an optional pair of positions; `None` clamps the beam at 0
    pub fn from_pair(pair: Option<(f64, f64)>) -> BeamResult<Self> {
        match pair {
            Some((a, b)) => Self::simple(a, b),
            None => Ok(Self::Clamped),
        }
    }

    /// Check the supports against a beam of `length` mm
    ///
    /// Returns the supports with the two positions in ascending order, since
    /// `Simple` can also be built directly.
    pub fn validate(&self, length: usize) -> BeamResult<Self> {
        match *self {
            Self::Simple(a, b) => {
                if a == b {
                    return Err(BeamError::CoincidentSupports(a as i64));
                }
                for s in [a, b] {
                    if s > length {
                        return Err(BeamError::SupportOutOfRange {
                            position: s as i64,
                            length,
                        });
                    }
                }
                Ok(Self::Simple(a.min(b), a.max(b)))
            }
            Self::Clamped => Ok(Self::Clamped),
        }
    }
}

impl Default for Supports {
    fn default() -> Self {
        Self::Clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_sorted() {
        assert_eq!(Supports::simple(780.0, 6.0).unwrap(), Supports::Simple(6, 780));
        assert_eq!(Supports::simple(6.4, 779.6).unwrap(), Supports::Simple(6, 780));
    }

    #[test]
    fn test_coincident_supports() {
        let err = Supports::simple(100.0, 100.2).unwrap_err();
        assert!(matches!(err, BeamError::CoincidentSupports(100)));
    }

    #[test]
    fn test_from_pair() {
        assert_eq!(Supports::from_pair(None).unwrap(), Supports::Clamped);
        assert_eq!(
            Supports::from_pair(Some((0.0, 1000.0))).unwrap(),
            Supports::Simple(0, 1000)
        );
    }

    #[test]
    fn test_support_outside_beam() {
        let supports = Supports::simple(0.0, 1200.0).unwrap();
        assert!(matches!(
            supports.validate(1000),
            Err(BeamError::SupportOutOfRange { position: 1200, length: 1000 })
        ));
        assert!(Supports::simple(-5.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_orders_positions() {
        assert_eq!(Supports::Simple(800, 200).validate(1000).unwrap(), Supports::Simple(200, 800));
        assert_eq!(Supports::Simple(200, 800).validate(1000).unwrap(), Supports::Simple(200, 800));
        assert_eq!(Supports::Clamped.validate(1000).unwrap(), Supports::Clamped);
        assert!(matches!(
            Supports::Simple(300, 300).validate(1000),
            Err(BeamError::CoincidentSupports(300))
        ));
    }
}
