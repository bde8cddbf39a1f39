//! Beam cross-sections and supports

mod section;
mod support;

pub use section::{layered_bending_stiffness, Layer, SectionProperties, SectionProvider, SectionTable};
pub use support::Supports;
