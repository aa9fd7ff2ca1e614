//! Record store: property table parsing and loading

mod loader;
mod material;
mod parser;
mod sample;

pub use loader::{load_and_parse, load_material_data, read_material_file, DataSource, LoadedData, LoaderConfig};
pub use material::{MaterialRecord, Property};
pub use parser::parse_materials_csv;
pub use sample::SAMPLE_CSV;
