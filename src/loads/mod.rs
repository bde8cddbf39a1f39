//! Load types and the patient weight distribution

mod load;
mod patient;

pub use load::{aggregate, Load, Magnitude};
pub use patient::{patient_load, PATIENT_LENGTH};
