//! Property table loading with fallback to the bundled dataset

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::material::MaterialRecord;
use super::parser::parse_materials_csv;
use super::sample::SAMPLE_CSV;
use crate::error::MaterialsResult;

/// Environment variable naming an extra table path, tried first
pub const DATA_PATH_ENV: &str = "BIOMAT_DATA_PATH";

/// Where to look for the property table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Paths tried in order; the first readable one wins
    pub candidates: Vec<PathBuf>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            candidates: vec![PathBuf::from("data.csv"), PathBuf::from("main data.csv")],
        }
    }
}

impl LoaderConfig {
    /// Default candidates, preceded by `$BIOMAT_DATA_PATH` when set
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(DATA_PATH_ENV) {
            Some(path) if !path.is_empty() => config.with_preferred(path),
            _ => config,
        }
    }

    /// Only read the given path (still falling back to bundled data)
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// Try this path before all others
    pub fn with_preferred(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.insert(0, path.into());
        self
    }
}

/// Origin of the loaded table text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    File(PathBuf),
    Bundled,
}

impl DataSource {
    pub fn is_bundled(&self) -> bool {
        matches!(self, DataSource::Bundled)
    }
}

/// Table text plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub csv: String,
    pub source: DataSource,
}

/// Read a single table file, failing if it cannot be read
pub fn read_material_file(path: impl AsRef<Path>) -> MaterialsResult<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Load table text from the first readable candidate, or the bundled sample
pub fn load_material_data(config: &LoaderConfig) -> LoadedData {
    for path in &config.candidates {
        match read_material_file(path) {
            Ok(csv) => {
                log::info!("loaded material data from {}", path.display());
                return LoadedData {
                    csv,
                    source: DataSource::File(path.clone()),
                };
            }
            Err(e) => log::debug!("could not read {}: {}", path.display(), e),
        }
    }

    log::warn!("no material data file available, using bundled sample data");
    LoadedData {
        csv: SAMPLE_CSV.to_string(),
        source: DataSource::Bundled,
    }
}

/// Load and parse in one step
pub fn load_and_parse(config: &LoaderConfig) -> (Vec<MaterialRecord>, DataSource) {
    let LoadedData { csv, source } = load_material_data(config);
    (parse_materials_csv(&csv), source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("biomat-loader-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_falls_back_to_bundled() {
        let config = LoaderConfig::single("/nonexistent/biomat/data.csv");
        let loaded = load_material_data(&config);
        assert!(loaded.source.is_bundled());
        assert_eq!(loaded.csv, SAMPLE_CSV);
    }

    #[test]
    fn test_first_readable_candidate_wins() {
        let path = scratch_file("first.csv", "h\nOnly,Metal,1,2,3,4,5,6,7\n");
        let config = LoaderConfig::single("/nonexistent/a.csv").with_preferred("/nonexistent/b.csv");
        let config = LoaderConfig {
            candidates: [config.candidates, vec![path.clone()]].concat(),
        };

        let (records, source) = load_and_parse(&config);
        assert_eq!(source, DataSource::File(path.clone()));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].corrosion_resistance, 7.0);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_read_material_file_reports_io_error() {
        let err = read_material_file("/nonexistent/biomat.csv").unwrap_err();
        assert!(matches!(err, crate::error::MaterialsError::IoError(_)));
    }
}
