//! Output adapters over resolved spots
//!
//! Each adapter consumes spots read-only:
//! - JSON records with sorted keys
//! - KML placemarks grouped in one folder
//! - Google Static Maps URLs and image downloads

pub mod json;
pub mod markup;
pub mod staticmap;

// Re-export commonly used types from submodules
pub use json::SpotRecord;
pub use markup::MarkupDocument;
pub use staticmap::{MapOptions, MapSize, MapType, StaticMap};
