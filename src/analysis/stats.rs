//! Per-property statistics over a record set

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::filter::ValueRange;
use crate::records::{MaterialRecord, Property};

/// One record's deviation from the mean of a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationEntry {
    pub name: String,
    pub value: f64,
    /// `(value - mean) / mean * 100`
    pub deviation_pct: f64,
}

/// Deviation chart data together with the mean it was computed against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviationReport {
    pub property: Property,
    pub mean: f64,
    /// Sorted by `deviation_pct`, largest first
    pub entries: Vec<DeviationEntry>,
}

/// Bar chart row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub id: String,
    pub name: String,
    pub value: f64,
}

/// Arithmetic mean of a property; NaN for an empty set
pub fn mean<'a, I>(records: I, property: Property) -> f64
where
    I: IntoIterator<Item = &'a MaterialRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.value(property), count + 1));
    sum / count as f64
}

/// Percentage deviation of each record from the property mean
///
/// A zero mean makes every percentage NaN; that is passed through as-is.
pub fn deviation<'a, I>(records: I, property: Property) -> DeviationReport
where
    I: IntoIterator<Item = &'a MaterialRecord>,
    I::IntoIter: Clone,
{
    let records = records.into_iter();
    let avg = mean(records.clone(), property);

    let mut entries: Vec<DeviationEntry> = records
        .map(|r| {
            let value = r.value(property);
            DeviationEntry {
                name: r.name.clone(),
                value,
                deviation_pct: (value - avg) / avg * 100.0,
            }
        })
        .collect();
    entries.sort_by(|a, b| descending(a.deviation_pct, b.deviation_pct));

    DeviationReport {
        property,
        mean: avg,
        entries,
    }
}

/// Property values for each record, largest first
pub fn comparison<'a, I>(records: I, property: Property) -> Vec<ComparisonEntry>
where
    I: IntoIterator<Item = &'a MaterialRecord>,
{
    let mut rows: Vec<ComparisonEntry> = records
        .into_iter()
        .map(|r| ComparisonEntry {
            id: r.id.clone(),
            name: r.name.clone(),
            value: r.value(property),
        })
        .collect();
    rows.sort_by(|a, b| descending(a.value, b.value));
    rows
}

/// Observed `[min, max]` of every property; empty when there are no records
pub fn property_ranges(records: &[MaterialRecord]) -> BTreeMap<Property, ValueRange> {
    if records.is_empty() {
        return BTreeMap::new();
    }
    Property::ALL
        .into_iter()
        .map(|property| {
            let (min, max) = records.iter().map(|r| r.value(property)).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), v| (lo.min(v), hi.max(v)),
            );
            (property, ValueRange { min, max })
        })
        .collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
