//! Pressure unit conversion for stress-strain inputs and results

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MaterialsError;

/// psi per MPa
pub const PSI_PER_MPA: f64 = 145.038;

/// Unit of stress and modulus values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressUnit {
    #[default]
    Psi,
    Mpa,
}

impl StressUnit {
    /// Convert a value in this unit to psi
    pub fn to_psi(self, value: f64) -> f64 {
        match self {
            StressUnit::Psi => value,
            StressUnit::Mpa => value * PSI_PER_MPA,
        }
    }

    /// Convert a value in psi to this unit
    pub fn from_psi(self, value: f64) -> f64 {
        match self {
            StressUnit::Psi => value,
            StressUnit::Mpa => value / PSI_PER_MPA,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            StressUnit::Psi => "psi",
            StressUnit::Mpa => "MPa",
        }
    }
}

/// Convert `value` between units
pub fn convert(value: f64, from: StressUnit, to: StressUnit) -> f64 {
    to.from_psi(from.to_psi(value))
}

impl fmt::Display for StressUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for StressUnit {
    type Err = MaterialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "psi" => Ok(StressUnit::Psi),
            "mpa" => Ok(StressUnit::Mpa),
            other => Err(MaterialsError::InvalidOptions(format!("unknown stress unit '{other}'"))),
        }
    }
}
