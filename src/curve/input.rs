//! Scalar inputs of a simulated tensile test

use serde::{Deserialize, Serialize};

use crate::error::{MaterialsError, MaterialsResult};
use crate::units::{convert, StressUnit};

/// Four measured properties that define a stress-strain curve
///
/// Strengths and modulus must share one pressure unit; the generator does not
/// care which.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressStrainInput {
    #[serde(rename = "yieldStr")]
    pub yield_strength: f64,
    #[serde(rename = "ultStr")]
    pub ultimate_strength: f64,
    #[serde(rename = "elasticMod")]
    pub elastic_modulus: f64,
    /// Fractional elongation at fracture, in (0, 1]
    #[serde(rename = "pctElong")]
    pub elongation: f64,
}

impl StressStrainInput {
    pub fn new(yield_strength: f64, ultimate_strength: f64, elastic_modulus: f64, elongation: f64) -> Self {
        Self {
            yield_strength,
            ultimate_strength,
            elastic_modulus,
            elongation,
        }
    }

    /// Hooke's-law strain at the yield point
    pub fn yield_strain(&self) -> f64 {
        self.yield_strength / self.elastic_modulus
    }

    /// Re-express strengths and modulus in another unit
    pub fn to_unit(&self, from: StressUnit, to: StressUnit) -> Self {
        Self {
            yield_strength: convert(self.yield_strength, from, to),
            ultimate_strength: convert(self.ultimate_strength, from, to),
            elastic_modulus: convert(self.elastic_modulus, from, to),
            elongation: self.elongation,
        }
    }

    /// Check the domain of the power-law model
    pub fn validate(&self) -> MaterialsResult<()> {
        positive("yield strength", self.yield_strength)?;
        positive("ultimate strength", self.ultimate_strength)?;
        positive("elastic modulus", self.elastic_modulus)?;

        if !(self.elongation > 0.0 && self.elongation <= 1.0) {
            return Err(MaterialsError::ElongationOutOfRange(self.elongation));
        }

        let yield_strain = self.yield_strain();
        if yield_strain >= self.elongation {
            return Err(MaterialsError::YieldStrainNotBelowUltimate {
                yield_strain,
                ultimate_strain: self.elongation,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> MaterialsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MaterialsError::NonPositive { field, value })
    }
}
