//! Error types for beam analysis

use thiserror::Error;

/// Broad classification of a [`BeamError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or inconsistent input
    Validation,
    /// The support configuration does not give a solvable statics problem
    Equilibrium,
    /// Reading or writing a problem/result file failed
    Io,
}

/// Main error type for beam operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Beam length must be at least 1 mm, got {0}")]
    InvalidLength(i64),

    #[error("Length of {name} ({found}) doesn't match beam length ({length}) + 1")]
    LengthMismatch {
        name: &'static str,
        found: usize,
        length: usize,
    },

    #[error("{name} must be positive everywhere, found {value} at x = {position} mm")]
    NonPositiveStiffness {
        name: &'static str,
        position: usize,
        value: f64,
    },

    #[error("Support at {position} mm lies outside of the beam (0..={length} mm)")]
    SupportOutOfRange { position: i64, length: usize },

    #[error("Load position {position} mm lies outside of the beam (0..={length} mm)")]
    LoadOutOfRange { position: i64, length: usize },

    #[error("Load span {start}..{end} mm has zero length")]
    DegenerateSpan { start: i64, end: i64 },

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Exactly one of 'feet' or 'head' must be given")]
    AnchorAmbiguous,

    #[error("Two identical supports found at {0} mm")]
    CoincidentSupports(i64),

    #[error("Singular {0} system - boundary conditions cannot be satisfied")]
    SingularSystem(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BeamError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BeamError::CoincidentSupports(_) | BeamError::SingularSystem(_) => {
                ErrorKind::Equilibrium
            }
            BeamError::IoError(_) | BeamError::SerializationError(_) => ErrorKind::Io,
            _ => ErrorKind::Validation,
        }
    }
}

/// Result type for beam operations
pub type BeamResult<T> = Result<T, BeamError>;
