//! Positional parser for the comma-delimited property table
//!
//! Columns: `Name, Type, TensileStrength, YieldStrength, ElasticModulus,
//! Density, Hardness, FatigueStrength, CorrosionResistance`. The first line is
//! a header and is skipped without being inspected. There is no quoting, so a
//! comma inside a value shifts every following column.

use super::material::{MaterialRecord, Property};

const FIELD_DELIMITER: char = ',';

/// Parse the property table into records
///
/// Total over any input: blank lines are skipped, missing columns become empty
/// strings or `0.0`, and numeric fields that do not parse (empty, "150-800",
/// text) become `0.0`.
pub fn parse_materials_csv(text: &str) -> Vec<MaterialRecord> {
    let records: Vec<MaterialRecord> = text
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_row(index, line))
        .collect();

    log::debug!("parsed {} material records", records.len());
    records
}

fn parse_row(index: usize, line: &str) -> MaterialRecord {
    let values: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    let text_at = |i: usize| values.get(i).copied().unwrap_or_default();

    let mut record = MaterialRecord::new(format!("material-{index}"), text_at(0), text_at(1));
    for (offset, property) in Property::ALL.into_iter().enumerate() {
        record = record.with(property, parse_number(text_at(offset + 2)));
    }
    record
}

/// Lossy numeric parse: anything that is not a finite number is `0.0`
fn parse_number(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
