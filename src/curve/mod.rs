//! Stress-strain curve generation from four scalar properties

mod generator;
mod hollomon;
mod input;
pub mod library;
mod options;

pub use generator::{generate, generate_default};
pub use hollomon::HollomonFit;
pub use input::StressStrainInput;
pub use library::LibraryMaterial;
pub use options::{CurveOptions, MAX_SAMPLE_COUNT};
