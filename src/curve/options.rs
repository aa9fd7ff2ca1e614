//! Sampling options for curve generation

use serde::{Deserialize, Serialize};

use crate::error::{MaterialsError, MaterialsResult};

/// Largest accepted `sample_count`
pub const MAX_SAMPLE_COUNT: usize = 100_000;

/// How a stress-strain curve is discretized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurveOptions {
    /// Total number of samples across both segments
    pub sample_count: usize,
    /// Share of samples spent on the elastic segment
    pub elastic_fraction: f64,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            sample_count: 100,
            elastic_fraction: 0.2,
        }
    }
}

impl CurveOptions {
    pub fn new(sample_count: usize, elastic_fraction: f64) -> Self {
        Self {
            sample_count,
            elastic_fraction,
        }
    }

    /// Set total sample count
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set elastic share of the samples
    pub fn with_elastic_fraction(mut self, elastic_fraction: f64) -> Self {
        self.elastic_fraction = elastic_fraction;
        self
    }

    pub fn validate(&self) -> MaterialsResult<()> {
        if self.sample_count < 2 {
            return Err(MaterialsError::InvalidOptions(format!(
                "sample count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(MaterialsError::InvalidOptions(format!(
                "sample count must be at most {}, got {}",
                MAX_SAMPLE_COUNT, self.sample_count
            )));
        }
        if !(0.0..=1.0).contains(&self.elastic_fraction) {
            return Err(MaterialsError::InvalidOptions(format!(
                "elastic fraction must lie in [0, 1], got {}",
                self.elastic_fraction
            )));
        }
        Ok(())
    }

    /// Samples on the elastic segment, origin included
    ///
    /// `floor(sample_count * elastic_fraction)`, kept within
    /// `1..=sample_count - 1` so both segments are present.
    pub fn elastic_points(&self) -> usize {
        let wanted = (self.sample_count as f64 * self.elastic_fraction).floor() as usize;
        wanted.clamp(1, self.sample_count.saturating_sub(1).max(1))
    }

    /// Samples on the plastic segment, ending at the ultimate point
    pub fn plastic_points(&self) -> usize {
        self.sample_count.saturating_sub(self.elastic_points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let opts = CurveOptions::default();
        assert_eq!(opts.elastic_points(), 20);
        assert_eq!(opts.plastic_points(), 80);
    }

    #[test]
    fn test_split_is_clamped() {
        let opts = CurveOptions::new(2, 0.2);
        assert_eq!(opts.elastic_points(), 1);
        assert_eq!(opts.plastic_points(), 1);

        let opts = CurveOptions::new(10, 1.0);
        assert_eq!(opts.elastic_points(), 9);
        assert_eq!(opts.plastic_points(), 1);

        let opts = CurveOptions::new(10, 0.0);
        assert_eq!(opts.elastic_points(), 1);
    }

    #[test]
    fn test_validation() {
        assert!(CurveOptions::default().validate().is_ok());
        assert!(CurveOptions::new(1, 0.2).validate().is_err());
        assert!(CurveOptions::new(0, 0.2).validate().is_err());
        assert!(CurveOptions::new(50, 1.5).validate().is_err());
        assert!(CurveOptions::new(50, f64::NAN).validate().is_err());
        assert!(CurveOptions::new(MAX_SAMPLE_COUNT, 0.2).validate().is_ok());
        assert!(matches!(
            CurveOptions::new(MAX_SAMPLE_COUNT + 1, 0.2).validate(),
            Err(MaterialsError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_oversized_json_count_rejected() {
        let opts: CurveOptions = serde_json::from_str(r#"{"sampleCount": 4611686018427387904}"#).unwrap();
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let opts: CurveOptions = serde_json::from_str(r#"{"sampleCount": 40}"#).unwrap();
        assert_eq!(opts.sample_count, 40);
        assert_eq!(opts.elastic_fraction, 0.2);
    }
}
