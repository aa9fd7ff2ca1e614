//! biomat-explorer - biomaterial property analysis and stress-strain simulation
//!
//! This library covers two independent pipelines:
//! - Record store: parse a comma-delimited biomaterial property table
//! - Filter/statistics: range filtering, search, deviation from the mean,
//!   bar chart comparison and radar normalization
//! - Curve generator: reconstruct an engineering and true stress-strain
//!   curve from yield strength, ultimate strength, elastic modulus and
//!   elongation using a Hollomon power-law fit
//!
//! ## Example
//! ```rust
//! use biomat_explorer::prelude::*;
//!
//! // Parse the bundled table and keep titanium-like stiffness
//! let records = parse_materials_csv(SAMPLE_CSV);
//! let filter = PropertyFilter::new()
//!     .with_range(Property::ElasticModulus, ValueRange::new(50.0, 120.0).unwrap());
//! let matched = filter.apply(&records);
//! let report = deviation(matched.iter().copied(), Property::YieldStrength);
//! assert_eq!(report.entries.len(), matched.len());
//!
//! // Simulate a tensile test (psi)
//! let input = StressStrainInput::new(70_000.0, 90_000.0, 28_000_000.0, 0.1);
//! let curve = generate(&input, &CurveOptions::default()).unwrap();
//! assert_eq!(curve.len(), 100);
//! assert!((curve.eng_strain_at_yield - 0.0025).abs() < 1e-12);
//! ```

pub mod analysis;
pub mod curve;
pub mod error;
pub mod records;
pub mod results;
pub mod units;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{
        comparison, deviation, property_ranges, radar_axes, search, ComparisonEntry, DeviationEntry,
        DeviationReport, PropertyFilter, RadarAxis, ValueRange,
    };
    pub use crate::curve::{generate, generate_default, CurveOptions, HollomonFit, LibraryMaterial, StressStrainInput};
    pub use crate::error::{MaterialsError, MaterialsResult};
    pub use crate::records::{
        load_and_parse, parse_materials_csv, DataSource, LoaderConfig, MaterialRecord, Property, SAMPLE_CSV,
    };
    pub use crate::results::{CurvePoints, CurveSample, StressStrainCurve};
    pub use crate::units::{StressUnit, PSI_PER_MPA};
}

#[cfg(feature = "wasm")]
pub mod wasm;
