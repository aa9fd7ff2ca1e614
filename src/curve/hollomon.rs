//! Hollomon power-law hardening: `stress = K * strain^n`

use serde::{Deserialize, Serialize};

/// Fitted hardening parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HollomonFit {
    /// Strain-hardening exponent
    pub n: f64,
    /// Strength coefficient, in the unit of the anchor stresses
    #[serde(rename = "K")]
    pub k: f64,
}

impl HollomonFit {
    /// Two-point fit through `(strain_a, stress_a)` and `(strain_b, stress_b)`
    ///
    /// Requires positive strains and stresses and `strain_a != strain_b`;
    /// outside that domain the parameters are NaN or infinite.
    pub fn through(strain_a: f64, stress_a: f64, strain_b: f64, stress_b: f64) -> Self {
        let n = (stress_b / stress_a).ln() / (strain_b / strain_a).ln();
        let k = stress_a / strain_a.powf(n);
        Self { n, k }
    }

    /// Flow stress at a given strain
    pub fn stress_at(&self, strain: f64) -> f64 {
        self.k * strain.powf(self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_passes_through_both_anchors() {
        let fit = HollomonFit::through(0.0025, 70000.0, 0.1, 90000.0);
        assert_relative_eq!(fit.stress_at(0.0025), 70000.0, max_relative = 1e-12);
        assert_relative_eq!(fit.stress_at(0.1), 90000.0, max_relative = 1e-12);
        assert!(fit.n > 0.0 && fit.n < 1.0);
    }

    #[test]
    fn test_equal_stresses_give_flat_plateau() {
        let fit = HollomonFit::through(0.002, 400.0, 0.2, 400.0);
        assert_eq!(fit.n, 0.0);
        assert_eq!(fit.k, 400.0);
        assert_eq!(fit.stress_at(0.05), 400.0);
    }

    #[test]
    fn test_coincident_anchors_are_undefined() {
        let fit = HollomonFit::through(0.1, 400.0, 0.1, 400.0);
        assert!(fit.n.is_nan());
    }
}
