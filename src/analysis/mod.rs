//! Filter and statistics engine over material records

mod filter;
mod radar;
mod stats;

pub use filter::{search, PropertyFilter, ValueRange};
pub use radar::{radar_axes, RadarAxis, RadarValue};
pub use stats::{comparison, deviation, mean, property_ranges, ComparisonEntry, DeviationEntry, DeviationReport};
