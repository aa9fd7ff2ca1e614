//! Curated materials with published tensile data for the curve simulator
//!
//! Strengths are in psi and elongation is fractional. The table carries no
//! modulus; [`typical_elastic_modulus_psi`] supplies one per material family.

use serde::Serialize;
use std::collections::BTreeMap;

use super::input::StressStrainInput;
use crate::error::{MaterialsError, MaterialsResult};

/// A library entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryMaterial {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub material_type: &'static str,
    /// psi
    pub yield_strength: f64,
    /// psi
    pub tensile_strength: f64,
    /// Fractional elongation at break
    pub elongation: f64,
}

impl LibraryMaterial {
    /// Curve inputs in psi, using the family's typical modulus
    pub fn to_input(&self) -> StressStrainInput {
        StressStrainInput::new(
            self.yield_strength,
            self.tensile_strength,
            typical_elastic_modulus_psi(self.material_type),
            self.elongation,
        )
    }
}

const fn lib(
    id: &'static str,
    name: &'static str,
    material_type: &'static str,
    yield_strength: f64,
    tensile_strength: f64,
    elongation: f64,
) -> LibraryMaterial {
    LibraryMaterial {
        id,
        name,
        material_type,
        yield_strength,
        tensile_strength,
        elongation,
    }
}

static LIBRARY: [LibraryMaterial; 31] = [
    lib("example-1", "Example Material 1", "Fictitious", 20_000.0, 40_000.0, 0.1),
    lib("example-2", "Example Material 2", "Fictitious", 60_000.0, 80_000.0, 0.15),
    lib("al-2014-t6-1", "Al 2014 T6", "Aluminum Alloy", 57_000.0, 64_000.0, 0.06),
    lib("al-2014-t6-2", "Al 2014 T651", "Aluminum Alloy", 59_000.0, 67_000.0, 0.07),
    lib("al-2024-t3", "Al 2024 T3", "Aluminum Alloy", 42_000.0, 62_000.0, 0.15),
    lib("al-2024-t351", "Al 2024 T351", "Aluminum Alloy", 42_000.0, 64_000.0, 0.12),
    lib("al-5083-h32", "Al 5083 H32", "Aluminum Alloy", 31_000.0, 56_000.0, 0.12),
    lib("al-6061-t6", "Al 6061 T6", "Aluminum Alloy", 35_000.0, 42_000.0, 0.1),
    lib("al-7075-t6", "Al 7075 T6", "Aluminum Alloy", 68_000.0, 78_000.0, 0.09),
    lib("al-7075-t651", "Al 7075 T651", "Aluminum Alloy", 67_000.0, 78_000.0, 0.07),
    lib("astm-a36", "ASTM A36", "Carbon/Alloy Steel", 36_000.0, 58_000.0, 0.23),
    lib("astm-a572-50", "ASTM A572 Grade 50", "Carbon/Alloy Steel", 50_000.0, 70_000.0, 0.18),
    lib("astm-a514", "ASTM A514", "Carbon/Alloy Steel", 100_000.0, 110_000.0, 0.18),
    lib("astm-a516-70", "ASTM A516 Grade 70", "Carbon/Alloy Steel", 38_000.0, 70_000.0, 0.17),
    lib("aisi-1020", "AISI 1020", "Carbon/Alloy Steel", 32_000.0, 50_000.0, 0.25),
    lib("aisi-1045", "AISI 1045", "Carbon/Alloy Steel", 45_000.0, 75_000.0, 0.15),
    lib("aisi-4130", "AISI 4130", "Carbon/Alloy Steel", 70_000.0, 90_000.0, 0.2),
    lib("aisi-4140", "AISI 4140", "Carbon/Alloy Steel", 90_000.0, 120_000.0, 0.15),
    lib("aisi-304", "AISI 304", "Stainless Steel", 30_000.0, 75_000.0, 0.4),
    lib("aisi-316", "AISI 316", "Stainless Steel", 30_000.0, 75_000.0, 0.4),
    lib("aisi-410", "AISI 410", "Stainless Steel", 40_000.0, 70_000.0, 0.2),
    lib("17-4ph-h900", "17-4PH H900", "Stainless Steel", 170_000.0, 190_000.0, 0.1),
    lib("ti-grade-2", "Titanium Grade 2", "Titanium Alloy", 40_000.0, 50_000.0, 0.2),
    lib("ti-6al-4v", "Titanium 6Al-4V", "Titanium Alloy", 120_000.0, 130_000.0, 0.1),
    lib("ti-6al-4v-eli", "Titanium 6Al-4V ELI", "Titanium Alloy", 110_000.0, 120_000.0, 0.1),
    lib("inconel-625", "Inconel 625", "Nickel Alloy", 60_000.0, 120_000.0, 0.3),
    lib("inconel-718", "Inconel 718", "Nickel Alloy", 150_000.0, 180_000.0, 0.1),
    lib("monel-400", "Monel 400", "Nickel Alloy", 50_000.0, 84_000.0, 0.1),
    lib("monel-k500", "Monel K-500", "Nickel Alloy", 100_000.0, 140_000.0, 0.2),
    lib("copper-nickel-70-30", "70/30 Copper-Nickel", "Copper Alloy", 20_000.0, 50_000.0, 0.3),
    lib("beryllium-copper", "Beryllium Copper", "Copper Alloy", 140_000.0, 165_000.0, 0.03),
];

/// Every library material
pub fn library() -> &'static [LibraryMaterial] {
    &LIBRARY
}

/// Look up a library material by id
pub fn find(id: &str) -> MaterialsResult<&'static LibraryMaterial> {
    LIBRARY
        .iter()
        .find(|m| m.id == id)
        .ok_or_else(|| MaterialsError::MaterialNotFound(id.to_string()))
}

/// Distinct material types, sorted
pub fn material_types() -> Vec<&'static str> {
    group_by_type().into_keys().collect()
}

/// Library materials keyed by type, preserving table order within a type
pub fn group_by_type() -> BTreeMap<&'static str, Vec<&'static LibraryMaterial>> {
    let mut groups: BTreeMap<&'static str, Vec<&'static LibraryMaterial>> = BTreeMap::new();
    for material in LIBRARY.iter() {
        groups.entry(material.material_type).or_default().push(material);
    }
    groups
}

/// Typical Young's modulus in psi for a material family
///
/// Matched by substring on the type label; anything unrecognised is treated
/// as steel.
pub fn typical_elastic_modulus_psi(material_type: &str) -> f64 {
    if material_type.contains("Aluminum") {
        10_000_000.0
    } else if material_type.contains("Titanium") {
        16_000_000.0
    } else if material_type.contains("Copper") {
        17_000_000.0
    } else if material_type.contains("Nickel") {
        30_000_000.0
    } else {
        28_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::generate_default;

    #[test]
    fn test_find() {
        let ti = find("ti-6al-4v").unwrap();
        assert_eq!(ti.name, "Titanium 6Al-4V");
        assert_eq!(ti.to_input().elastic_modulus, 16_000_000.0);
        assert!(matches!(find("unobtainium"), Err(MaterialsError::MaterialNotFound(_))));
    }

    #[test]
    fn test_types_sorted_and_grouped() {
        let types = material_types();
        assert_eq!(types.first(), Some(&"Aluminum Alloy"));
        assert!(types.windows(2).all(|w| w[0] < w[1]));

        let groups = group_by_type();
        assert_eq!(groups["Fictitious"].len(), 2);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), library().len());
    }

    #[test]
    fn test_modulus_by_family() {
        assert_eq!(typical_elastic_modulus_psi("Aluminum Alloy"), 10e6);
        assert_eq!(typical_elastic_modulus_psi("Nickel Alloy"), 30e6);
        assert_eq!(typical_elastic_modulus_psi("Stainless Steel"), 28e6);
    }

    #[test]
    fn test_every_entry_produces_a_curve() {
        for material in library() {
            let curve = generate_default(&material.to_input())
                .unwrap_or_else(|e| panic!("{}: {e}", material.id));
            assert_eq!(curve.len(), 100);
        }
    }
}
