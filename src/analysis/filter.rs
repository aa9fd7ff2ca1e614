//! Property-range filtering and text search over material records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{MaterialsError, MaterialsResult};
use crate::records::{MaterialRecord, Property};

/// Inclusive `[min, max]` interval, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> MaterialsResult<Self> {
        if min > max {
            return Err(MaterialsError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl TryFrom<(f64, f64)> for ValueRange {
    type Error = MaterialsError;

    fn try_from((min, max): (f64, f64)) -> MaterialsResult<Self> {
        Self::new(min, max)
    }
}

impl From<ValueRange> for (f64, f64) {
    fn from(range: ValueRange) -> Self {
        (range.min, range.max)
    }
}

/// Set of active property constraints
///
/// With no active constraints nothing matches: callers must opt in to at
/// least one filter before any results are produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyFilter {
    constraints: BTreeMap<Property, ValueRange>,
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate (or replace) the constraint on a property
    pub fn with_range(mut self, property: Property, range: ValueRange) -> Self {
        self.activate(property, range);
        self
    }

    pub fn activate(&mut self, property: Property, range: ValueRange) {
        self.constraints.insert(property, range);
    }

    /// Remove a constraint, returning it if it was active
    pub fn deactivate(&mut self, property: Property) -> Option<ValueRange> {
        self.constraints.remove(&property)
    }

    pub fn is_active(&self, property: Property) -> bool {
        self.constraints.contains_key(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraints(&self) -> impl Iterator<Item = (Property, ValueRange)> + '_ {
        self.constraints.iter().map(|(p, r)| (*p, *r))
    }

    /// Whether a record satisfies every active constraint
    pub fn matches(&self, record: &MaterialRecord) -> bool {
        !self.is_empty()
            && self
                .constraints
                .iter()
                .all(|(property, range)| range.contains(record.value(*property)))
    }

    /// Records matching every active constraint, in input order
    pub fn apply<'a>(&self, records: &'a [MaterialRecord]) -> Vec<&'a MaterialRecord> {
        if self.is_empty() {
            return Vec::new();
        }
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Records whose name or type contains `term`, ignoring case
///
/// A blank term matches everything.
pub fn search<'a>(records: &'a [MaterialRecord], term: &str) -> Vec<&'a MaterialRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&needle) || r.material_type.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MaterialRecord> {
        [10.0, 50.0, 90.0]
            .into_iter()
            .enumerate()
            .map(|(i, v)| {
                MaterialRecord::new(format!("material-{i}"), format!("M{i}"), "Metal")
                    .with(Property::Hardness, v)
                    .with(Property::Density, i as f64)
            })
            .collect()
    }

    #[test]
    fn test_single_constraint() {
        let records = records();
        let filter = PropertyFilter::new().with_range(Property::Hardness, ValueRange::new(20.0, 60.0).unwrap());
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].hardness, 50.0);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let records = records();
        let filter = PropertyFilter::new().with_range(Property::Hardness, ValueRange::new(10.0, 90.0).unwrap());
        assert_eq!(filter.apply(&records).len(), 3);
    }

    #[test]
    fn test_every_constraint_must_hold() {
        let records = records();
        let filter = PropertyFilter::new()
            .with_range(Property::Hardness, ValueRange::new(0.0, 100.0).unwrap())
            .with_range(Property::Density, ValueRange::new(1.5, 2.0).unwrap());
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "material-2");
    }

    #[test]
    fn test_no_constraints_matches_nothing() {
        let records = records();
        let mut filter = PropertyFilter::new().with_range(Property::Hardness, ValueRange::new(0.0, 100.0).unwrap());
        filter.deactivate(Property::Hardness);
        assert!(filter.apply(&records).is_empty());
        assert!(!filter.matches(&records[0]));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(matches!(
            ValueRange::new(5.0, 1.0),
            Err(MaterialsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_inverted_json_range_rejected() {
        let result = serde_json::from_str::<PropertyFilter>(r#"{"hardness":[60,20]}"#);
        assert!(result.is_err());

        let range: ValueRange = serde_json::from_str("[20, 20]").unwrap();
        assert!(range.contains(20.0));
    }

    #[test]
    fn test_filter_json_shape() {
        let filter: PropertyFilter = serde_json::from_str(r#"{"hardness":[20,60]}"#).unwrap();
        assert!(filter.is_active(Property::Hardness));
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"hardness":[20.0,60.0]}"#
        );
    }

    #[test]
    fn test_search_name_and_type() {
        let records = vec![
            MaterialRecord::new("material-0", "Ti6Al4V", "Titanium Alloy"),
            MaterialRecord::new("material-1", "PEEK", "Polymer"),
        ];
        assert_eq!(search(&records, "titan").len(), 1);
        assert_eq!(search(&records, "peek")[0].id, "material-1");
        assert_eq!(search(&records, "  ").len(), 2);
        assert!(search(&records, "ceramic").is_empty());
    }
}
