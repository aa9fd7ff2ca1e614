//! Result types for stress-strain curve generation

use serde::{Deserialize, Serialize};

/// Sampled curve, one entry per sample in each sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoints {
    pub eng_strain: Vec<f64>,
    pub eng_stress: Vec<f64>,
    pub true_strain: Vec<f64>,
    pub true_stress: Vec<f64>,
}

impl CurvePoints {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            eng_strain: Vec::with_capacity(capacity),
            eng_stress: Vec::with_capacity(capacity),
            true_strain: Vec::with_capacity(capacity),
            true_stress: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample from its engineering strain and stress
    ///
    /// True strain is `ln(1 + e)`, true stress is `s * (1 + e)`.
    pub fn push_engineering(&mut self, strain: f64, stress: f64) {
        self.eng_strain.push(strain);
        self.eng_stress.push(stress);
        self.true_strain.push(strain.ln_1p());
        self.true_stress.push(stress * (1.0 + strain));
    }

    pub fn len(&self) -> usize {
        self.eng_strain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eng_strain.is_empty()
    }

    /// Row view of the four sequences
    pub fn samples(&self) -> impl Iterator<Item = CurveSample> + '_ {
        (0..self.len()).map(move |i| CurveSample {
            eng_strain: self.eng_strain[i],
            eng_stress: self.eng_stress[i],
            true_strain: self.true_strain[i],
            true_stress: self.true_stress[i],
        })
    }
}

/// A single row of the curve table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSample {
    pub eng_strain: f64,
    pub eng_stress: f64,
    pub true_strain: f64,
    pub true_stress: f64,
}

/// Full engineering and true stress-strain curve with its landmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressStrainCurve {
    /// Engineering strain at yield, `yield / E`
    pub eng_strain_at_yield: f64,
    pub eng_yield_str: f64,
    /// Engineering strain at the ultimate point (the fracture elongation)
    pub eng_strain_ultimate: f64,
    pub eng_ult_str: f64,
    /// `ln(1 + elongation)`
    pub true_strain_at_break: f64,
    /// `ultimate * (1 + elongation)`
    pub true_ult_str: f64,
    /// Hardening exponent
    pub n: f64,
    /// Strength coefficient
    #[serde(rename = "K")]
    pub k: f64,
    pub curve_points: CurvePoints,
}

impl StressStrainCurve {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.curve_points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curve_points.is_empty()
    }

    /// Rows in ascending strain order
    pub fn samples(&self) -> impl Iterator<Item = CurveSample> + '_ {
        self.curve_points.samples()
    }

    pub fn first(&self) -> Option<CurveSample> {
        self.samples().next()
    }

    pub fn last(&self) -> Option<CurveSample> {
        self.samples().last()
    }

    /// Scale every stress-like value, e.g. for display in another unit
    pub fn scale_stress(&self, factor: f64) -> Self {
        let scale = |v: &[f64]| -> Vec<f64> { v.iter().map(|s| s * factor).collect() };
        Self {
            eng_yield_str: self.eng_yield_str * factor,
            eng_ult_str: self.eng_ult_str * factor,
            true_ult_str: self.true_ult_str * factor,
            k: self.k * factor,
            curve_points: CurvePoints {
                eng_stress: scale(&self.curve_points.eng_stress),
                true_stress: scale(&self.curve_points.true_stress),
                ..self.curve_points.clone()
            },
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_engineering_derives_true_values() {
        let mut points = CurvePoints::with_capacity(2);
        points.push_engineering(0.0, 0.0);
        points.push_engineering(0.1, 100.0);

        assert_eq!(points.len(), 2);
        assert_eq!(points.true_strain[0], 0.0);
        assert!((points.true_strain[1] - 1.1_f64.ln()).abs() < 1e-15);
        assert!((points.true_stress[1] - 110.0).abs() < 1e-12);

        let rows: Vec<CurveSample> = points.samples().collect();
        assert_eq!(rows[1].eng_stress, 100.0);
    }
}
