//! Bundled sample dataset used when no property table can be read from disk

/// Biomaterial property table shipped with the crate
pub const SAMPLE_CSV: &str = include_str!("../../data/biomaterials.csv");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::parse_materials_csv;

    #[test]
    fn test_sample_parses_every_row() {
        let records = parse_materials_csv(SAMPLE_CSV);
        assert_eq!(records.len(), 71);
        assert_eq!(records[0].name, "Ti6Al4V");
        assert_eq!(records[70].name, "Ti-6Al-2Sn-4Zr-6Mo");
    }
}
