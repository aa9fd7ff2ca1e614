//! Stress-strain curve construction
//!
//! The curve is linear (Hooke's law) from the origin to the yield point and
//! follows a Hollomon power law fitted through the yield and ultimate points
//! from there to the ultimate point. The fracture elongation is taken as the
//! strain at ultimate load.

use super::hollomon::HollomonFit;
use super::input::StressStrainInput;
use super::options::CurveOptions;
use crate::error::MaterialsResult;
use crate::results::{CurvePoints, StressStrainCurve};

/// Generate a curve with the default 100 samples, 20% elastic
pub fn generate_default(input: &StressStrainInput) -> MaterialsResult<StressStrainCurve> {
    generate(input, &CurveOptions::default())
}

/// Generate a discretized engineering and true stress-strain curve
///
/// Fails if the input lies outside the model's domain (see
/// [`StressStrainInput::validate`]) or the options are invalid.
pub fn generate(input: &StressStrainInput, options: &CurveOptions) -> MaterialsResult<StressStrainCurve> {
    input.validate()?;
    options.validate()?;

    let StressStrainInput {
        yield_strength,
        ultimate_strength,
        elastic_modulus,
        elongation,
    } = *input;

    let eng_strain_at_yield = yield_strength / elastic_modulus;
    let eng_strain_ultimate = elongation;
    let true_strain_at_break = elongation.ln_1p();
    let true_ult_str = ultimate_strength * (1.0 + elongation);

    let fit = HollomonFit::through(
        eng_strain_at_yield,
        yield_strength,
        eng_strain_ultimate,
        ultimate_strength,
    );
    if fit.n < 0.0 {
        log::warn!(
            "ultimate strength {} below yield strength {}: softening fit n = {}",
            ultimate_strength,
            yield_strength,
            fit.n
        );
    }
    log::debug!("hollomon fit n = {}, K = {}", fit.n, fit.k);

    let elastic_points = options.elastic_points();
    let plastic_points = options.plastic_points();
    let mut points = CurvePoints::with_capacity(options.sample_count);

    // Elastic: origin to yield inclusive
    if elastic_points == 1 {
        points.push_engineering(0.0, 0.0);
    } else {
        let last = (elastic_points - 1) as f64;
        for i in 0..elastic_points {
            let strain = i as f64 / last * eng_strain_at_yield;
            points.push_engineering(strain, strain * elastic_modulus);
        }
    }

    // Plastic: just past yield up to the ultimate point
    let step = (eng_strain_ultimate - eng_strain_at_yield) / plastic_points as f64;
    for k in 1..=plastic_points {
        let strain = if k == plastic_points {
            eng_strain_ultimate
        } else {
            eng_strain_at_yield + k as f64 * step
        };
        points.push_engineering(strain, fit.stress_at(strain));
    }

    Ok(StressStrainCurve {
        eng_strain_at_yield,
        eng_yield_str: yield_strength,
        eng_strain_ultimate,
        eng_ult_str: ultimate_strength,
        true_strain_at_break,
        true_ult_str,
        n: fit.n,
        k: fit.k,
        curve_points: points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterialsError;
    use approx::assert_relative_eq;

    fn reference_input() -> StressStrainInput {
        StressStrainInput::new(70000.0, 90000.0, 28_000_000.0, 0.1)
    }

    #[test]
    fn test_reference_landmarks() {
        let curve = generate_default(&reference_input()).unwrap();
        assert_relative_eq!(curve.eng_strain_at_yield, 0.0025);
        assert_eq!(curve.eng_strain_ultimate, 0.1);
        assert_eq!(curve.eng_yield_str, 70000.0);
        assert_eq!(curve.eng_ult_str, 90000.0);
        assert_relative_eq!(curve.true_strain_at_break, 1.1_f64.ln(), epsilon = 1e-15);
        assert_relative_eq!(curve.true_ult_str, 99000.0, max_relative = 1e-12);
        assert_eq!(curve.len(), 100);
    }

    #[test]
    fn test_segments_meet_at_yield() {
        let curve = generate_default(&reference_input()).unwrap();
        let pts = &curve.curve_points;

        assert_eq!(pts.eng_strain[0], 0.0);
        assert_eq!(pts.eng_stress[0], 0.0);
        assert_relative_eq!(pts.eng_strain[19], 0.0025);
        assert_relative_eq!(pts.eng_stress[19], 70000.0, max_relative = 1e-12);
        // first plastic sample lies strictly past yield
        assert!(pts.eng_strain[20] > pts.eng_strain[19]);
        assert_relative_eq!(pts.eng_strain[20], 0.0025 + 0.0975 / 80.0, max_relative = 1e-12);
        assert_eq!(pts.eng_strain[99], 0.1);
        assert_relative_eq!(pts.eng_stress[99], 90000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_elastic_slope_is_modulus() {
        let curve = generate_default(&reference_input()).unwrap();
        for s in curve.samples().take(20).skip(1) {
            assert_relative_eq!(s.eng_stress / s.eng_strain, 28_000_000.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_single_elastic_sample_is_origin() {
        let curve = generate(&reference_input(), &CurveOptions::new(10, 0.1)).unwrap();
        assert_eq!(curve.len(), 10);
        assert_eq!(curve.curve_points.eng_strain[0], 0.0);
        assert!(curve.curve_points.eng_strain[1] > 0.0025);
    }

    #[test]
    fn test_two_samples() {
        let curve = generate(&reference_input(), &CurveOptions::new(2, 0.2)).unwrap();
        let strains = &curve.curve_points.eng_strain;
        assert_eq!(strains, &vec![0.0, 0.1]);
    }

    #[test]
    fn test_equal_strengths_flat_plateau() {
        let input = StressStrainInput::new(400.0, 400.0, 200_000.0, 0.2);
        let curve = generate_default(&input).unwrap();
        assert_eq!(curve.n, 0.0);
        assert_eq!(curve.k, 400.0);
        assert!(curve.curve_points.eng_stress[20..].iter().all(|s| *s == 400.0));
    }

    #[test]
    fn test_domain_errors() {
        let zero_modulus = StressStrainInput::new(70000.0, 90000.0, 0.0, 0.1);
        assert!(matches!(
            generate_default(&zero_modulus),
            Err(MaterialsError::NonPositive { .. })
        ));

        assert!(matches!(
            generate(&reference_input(), &CurveOptions::new(1, 0.2)),
            Err(MaterialsError::InvalidOptions(_))
        ));

        let brittle = StressStrainInput::new(300.0, 310.0, 1000.0, 0.25);
        assert!(matches!(
            generate_default(&brittle),
            Err(MaterialsError::YieldStrainNotBelowUltimate { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let curve = generate(&reference_input(), &CurveOptions::new(12, 0.25)).unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        assert!(json.contains("\"engStrainAtYield\""));
        assert!(json.contains("\"K\""));
        assert!(json.contains("\"curvePoints\":{\"engStrain\""));

        let back: StressStrainCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }
}
