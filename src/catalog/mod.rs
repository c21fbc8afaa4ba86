mod catalog;
mod load;
mod song;

pub use catalog::Catalog;
pub use load::load_catalog;
pub use song::{SongRecord, FEATURE_COLUMNS, FEATURE_COUNT, METADATA_COLUMNS};
