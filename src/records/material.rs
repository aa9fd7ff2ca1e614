//! Material property records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{MaterialsError, MaterialsResult};

/// A biomaterial row from the property table
///
/// Numeric fields hold `0.0` when the source value was missing or unparseable,
/// so a zero may mean either "measured zero" or "absent".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    /// Sequential identifier, `material-<row>`
    pub id: String,
    pub name: String,
    /// Category label, e.g. "Titanium Alloy"
    #[serde(rename = "type")]
    pub material_type: String,
    /// Ultimate tensile strength in MPa
    pub tensile_strength: f64,
    /// Yield strength in MPa
    pub yield_strength: f64,
    /// Elastic modulus in GPa
    pub elastic_modulus: f64,
    /// Density in g/cm³
    pub density: f64,
    /// Vickers hardness
    pub hardness: f64,
    /// Fatigue strength in MPa
    pub fatigue_strength: f64,
    /// Relative corrosion resistance on a 1-10 scale
    pub corrosion_resistance: f64,
}

impl MaterialRecord {
    /// Create a record with every numeric property set to zero
    pub fn new(id: impl Into<String>, name: impl Into<String>, material_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            material_type: material_type.into(),
            tensile_strength: 0.0,
            yield_strength: 0.0,
            elastic_modulus: 0.0,
            density: 0.0,
            hardness: 0.0,
            fatigue_strength: 0.0,
            corrosion_resistance: 0.0,
        }
    }

    /// Set a single numeric property
    pub fn with(mut self, property: Property, value: f64) -> Self {
        *self.value_mut(property) = value;
        self
    }

    /// Get the value of a numeric property
    pub fn value(&self, property: Property) -> f64 {
        match property {
            Property::TensileStrength => self.tensile_strength,
            Property::YieldStrength => self.yield_strength,
            Property::ElasticModulus => self.elastic_modulus,
            Property::Density => self.density,
            Property::Hardness => self.hardness,
            Property::FatigueStrength => self.fatigue_strength,
            Property::CorrosionResistance => self.corrosion_resistance,
        }
    }

    fn value_mut(&mut self, property: Property) -> &mut f64 {
        match property {
            Property::TensileStrength => &mut self.tensile_strength,
            Property::YieldStrength => &mut self.yield_strength,
            Property::ElasticModulus => &mut self.elastic_modulus,
            Property::Density => &mut self.density,
            Property::Hardness => &mut self.hardness,
            Property::FatigueStrength => &mut self.fatigue_strength,
            Property::CorrosionResistance => &mut self.corrosion_resistance,
        }
    }
}

/// Numeric properties carried by every [`MaterialRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Property {
    TensileStrength,
    YieldStrength,
    ElasticModulus,
    Density,
    Hardness,
    FatigueStrength,
    CorrosionResistance,
}

impl Property {
    /// All properties in table column order
    pub const ALL: [Property; 7] = [
        Property::TensileStrength,
        Property::YieldStrength,
        Property::ElasticModulus,
        Property::Density,
        Property::Hardness,
        Property::FatigueStrength,
        Property::CorrosionResistance,
    ];

    /// Field name as used in JSON and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Property::TensileStrength => "tensileStrength",
            Property::YieldStrength => "yieldStrength",
            Property::ElasticModulus => "elasticModulus",
            Property::Density => "density",
            Property::Hardness => "hardness",
            Property::FatigueStrength => "fatigueStrength",
            Property::CorrosionResistance => "corrosionResistance",
        }
    }

    /// Unit label of the values in the table
    pub fn unit(&self) -> &'static str {
        match self {
            Property::TensileStrength | Property::YieldStrength | Property::FatigueStrength => "MPa",
            Property::ElasticModulus => "GPa",
            Property::Density => "g/cm³",
            Property::Hardness => "HV",
            Property::CorrosionResistance => "1-10",
        }
    }

    /// Human-readable name, e.g. "Tensile Strength"
    pub fn label(&self) -> &'static str {
        match self {
            Property::TensileStrength => "Tensile Strength",
            Property::YieldStrength => "Yield Strength",
            Property::ElasticModulus => "Elastic Modulus",
            Property::Density => "Density",
            Property::Hardness => "Hardness",
            Property::FatigueStrength => "Fatigue Strength",
            Property::CorrosionResistance => "Corrosion Resistance",
        }
    }

    /// Abbreviated name for chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            Property::TensileStrength => "Tensile Str.",
            Property::YieldStrength => "Yield Str.",
            Property::ElasticModulus => "Elastic Mod.",
            Property::Density => "Density",
            Property::Hardness => "Hardness",
            Property::FatigueStrength => "Fatigue Str.",
            Property::CorrosionResistance => "Corrosion Res.",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Property {
    type Err = MaterialsError;

    fn from_str(s: &str) -> MaterialsResult<Self> {
        let wanted = s.trim();
        Property::ALL
            .into_iter()
            .find(|p| p.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MaterialsError::UnknownProperty(s.to_string()))
    }
}
