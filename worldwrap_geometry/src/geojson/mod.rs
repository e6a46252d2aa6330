//! Reading and writing GeoJSON documents.
//!
//! Documents are handled as [`serde_json::Value`]s so that members the geometry model does not
//! know about survive a read/write cycle untouched. [`parse_geojson`] and [`read_geojson`] go one
//! step further and produce a typed [`crate::GeoCollection`].

mod read;
mod write;

pub use read::*;
pub use write::*;
