//! Cross-section properties along the beam

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};
use crate::math::Vec as BeamVec;

/// Cross-section properties at a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Bending stiffness E·I in N·mm²
    pub ei: f64,
    /// Shear stiffness G·A in N
    pub ga: f64,
    /// Distance from the neutral axis to the top fiber in mm (positive)
    pub top: f64,
    /// Distance from the neutral axis to the bottom fiber in mm (negative)
    pub bottom: f64,
}

impl SectionProperties {
    /// Create section properties from their components
    pub fn new(ei: f64, ga: f64, top: f64, bottom: f64) -> Self {
        Self { ei, ga, top, bottom }
    }

    /// Solid rectangle of width `b` and height `h` in one material
    ///
    /// # Arguments
    /// * `b` - Width in mm
    /// * `h` - Height in mm
    /// * `e` - Young's modulus in MPa
    /// * `g` - Shear modulus in MPa
    pub fn rectangular(b: f64, h: f64, e: f64, g: f64) -> Self {
        Self {
            ei: e * b * h.powi(3) / 12.0,
            ga: g * b * h,
            top: h / 2.0,
            bottom: -h / 2.0,
        }
    }

    /// Build properties from stacked rectangular layers and a shear stiffness
    pub fn layered(layers: &[Layer], ga: f64) -> Self {
        let (ei, top, bottom) = layered_bending_stiffness(layers);
        Self { ei, ga, top, bottom }
    }
}

/// Supplies section properties for a grid position
///
/// Implemented for any `Fn(usize) -> SectionProperties`, so a closure can
/// describe a tapered or stepped beam.
pub trait SectionProvider {
    /// Properties at position `x` (mm from the origin)
    fn properties(&self, x: usize) -> SectionProperties;
}

impl<F> SectionProvider for F
where
    F: Fn(usize) -> SectionProperties,
{
    fn properties(&self, x: usize) -> SectionProperties {
        self(x)
    }
}

impl SectionProvider for SectionProperties {
    fn properties(&self, _x: usize) -> SectionProperties {
        *self
    }
}

/// Section properties sampled at every mm of the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTable {
    /// Bending stiffness per position
    pub ei: BeamVec,
    /// Shear stiffness per position
    pub ga: BeamVec,
    /// Top fiber distance per position
    pub top: BeamVec,
    /// Bottom fiber distance per position
    pub bottom: BeamVec,
}

impl SectionTable {
    /// Create a table from four per-position arrays
    ///
    /// All arrays must have the same length; [`SectionTable::validate`]
    /// checks them against a beam length.
    pub fn new(ei: BeamVec, ga: BeamVec, top: BeamVec, bottom: BeamVec) -> BeamResult<Self> {
        let n = ei.len();
        for (name, len) in [("GA", ga.len()), ("top", top.len()), ("bottom", bottom.len())] {
            if len != n {
                return Err(BeamError::LengthMismatch {
                    name,
                    found: len,
                    length: n.saturating_sub(1),
                });
            }
        }
        Ok(Self { ei, ga, top, bottom })
    }

    /// Constant cross-section over a beam of `length` mm
    pub fn uniform(length: usize, section: SectionProperties) -> Self {
        Self::from_provider(length, &section)
    }

    /// Query `provider` once for every position `0..=length`
    pub fn from_provider<P: SectionProvider + ?Sized>(length: usize, provider: &P) -> Self {
        let n = length + 1;
        let mut ei = BeamVec::zeros(n);
        let mut ga = BeamVec::zeros(n);
        let mut top = BeamVec::zeros(n);
        let mut bottom = BeamVec::zeros(n);
        for x in 0..n {
            let p = provider.properties(x);
            ei[x] = p.ei;
            ga[x] = p.ga;
            top[x] = p.top;
            bottom[x] = p.bottom;
        }
        Self { ei, ga, top, bottom }
    }

    /// Number of sampled positions
    pub fn len(&self) -> usize {
        self.ei.len()
    }

    /// True when the table holds no positions
    pub fn is_empty(&self) -> bool {
        self.ei.is_empty()
    }

    /// Properties at a single position
    pub fn at(&self, x: usize) -> Option<SectionProperties> {
        if x >= self.len() {
            return None;
        }
        Some(SectionProperties::new(
            self.ei[x],
            self.ga[x],
            self.top[x],
            self.bottom[x],
        ))
    }

    /// Check the table against a beam of `length` mm
    ///
    /// Every array needs `length + 1` entries and both stiffnesses must be
    /// strictly positive everywhere, since the solver divides by them.
    pub fn validate(&self, length: usize) -> BeamResult<()> {
        let arrays = [
            ("EI", &self.ei),
            ("GA", &self.ga),
            ("top", &self.top),
            ("bottom", &self.bottom),
        ];
        for (name, values) in arrays {
            if values.len() != length + 1 {
                return Err(BeamError::LengthMismatch {
                    name,
                    found: values.len(),
                    length,
                });
            }
        }
        for (name, values) in [("EI", &self.ei), ("GA", &self.ga)] {
            if let Some((position, &value)) = values
                .iter()
                .enumerate()
                .find(|(_, v)| !(v.is_finite() && **v > 0.0))
            {
                return Err(BeamError::NonPositiveStiffness {
                    name,
                    position,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// A rectangular layer of a composite cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Width in mm
    pub width: f64,
    /// Height in mm
    pub height: f64,
    /// Distance from the top of the whole section to the top of this layer in mm
    pub offset: f64,
    /// Young's modulus in MPa
    pub e: f64,
}

impl Layer {
    /// Create a new layer
    pub fn new(width: f64, height: f64, offset: f64, e: f64) -> Self {
        Self {
            width,
            height,
            offset,
            e,
        }
    }
}

/// Bending stiffness of non-overlapping rectangular layers
///
/// The neutral axis is the modulus-weighted centroid of the layers. Returns
/// `(EI, top, bottom)` where `top` and `bottom` are the distances from the
/// neutral axis to the outermost fibers (`bottom` is negative).
pub fn layered_bending_stiffness(layers: &[Layer]) -> (f64, f64, f64) {
    if layers.is_empty() {
        return (0.0, 0.0, 0.0);
    }

    // Neutral axis measured downward from the top of the section
    let ea: f64 = layers.iter().map(|l| l.e * l.width * l.height).sum();
    let es: f64 = layers
        .iter()
        .map(|l| l.e * l.width * l.height * (l.offset + l.height / 2.0))
        .sum();
    let yn = es / ea;

    let mut ei = 0.0;
    let mut top = f64::NEG_INFINITY;
    let mut bottom = f64::INFINITY;
    for l in layers {
        // Fiber heights above the neutral axis
        let upper = yn - l.offset;
        let lower = yn - l.offset - l.height;
        ei += l.e * l.width * (upper.powi(3) - lower.powi(3)) / 3.0;
        top = top.max(upper);
        bottom = bottom.min(lower);
    }
    (ei, top, bottom)
}
