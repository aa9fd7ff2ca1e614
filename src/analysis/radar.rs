//! Radar chart axes: one per property, values optionally scaled to 0..100

use serde::{Deserialize, Serialize};

use crate::records::{MaterialRecord, Property};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarValue {
    pub id: String,
    pub raw: f64,
    pub plotted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxis {
    pub property: Property,
    pub label: String,
    pub full_label: String,
    pub unit: String,
    pub max_value: f64,
    pub values: Vec<RadarValue>,
}

/// Build one axis per property
///
/// When `normalized`, each value is plotted as a percentage of the largest
/// value on its axis, and as `0` if that maximum is not positive.
pub fn radar_axes(records: &[MaterialRecord], normalized: bool) -> Vec<RadarAxis> {
    if records.is_empty() {
        return Vec::new();
    }

    Property::ALL
        .into_iter()
        .map(|property| {
            let max_value = records
                .iter()
                .map(|r| r.value(property))
                .fold(f64::NEG_INFINITY, f64::max);

            let values = records
                .iter()
                .map(|r| {
                    let raw = r.value(property);
                    let plotted = match (normalized, max_value > 0.0) {
                        (false, _) => raw,
                        (true, true) => raw / max_value * 100.0,
                        (true, false) => 0.0,
                    };
                    RadarValue {
                        id: r.id.clone(),
                        raw,
                        plotted,
                    }
                })
                .collect();

            RadarAxis {
                property,
                label: property.short_label().to_string(),
                full_label: property.label().to_string(),
                unit: property.unit().to_string(),
                max_value,
                values,
            }
        })
        .collect()
}
