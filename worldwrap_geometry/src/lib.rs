//! Geometry normalization and world-wrap replication for GeoJSON feature collections.
//!
//! The crate reads a GeoJSON `FeatureCollection` (as a [`serde_json::Value`]), detects whether its
//! coordinates are Web Mercator meters or geographic degrees, converts them to degrees when needed,
//! and produces three copies shifted by -360°, 0° and +360° longitude so that a horizontally
//! repeating map shows continuous coverage across the antimeridian.
//!
//! ```
//! use serde_json::json;
//! use worldwrap_geometry::WorldWrap;
//!
//! let document = json!({
//!   "type": "FeatureCollection",
//!   "features": [{
//!     "type": "Feature",
//!     "properties": {},
//!     "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
//!   }]
//! });
//!
//! let wrap = WorldWrap::from_document(&document).unwrap();
//! assert_eq!(wrap.copies().len(), 3);
//! ```

mod geo;
pub mod geojson;
pub mod projection;
pub mod wrap;

pub use geo::*;
pub use geojson::*;
pub use projection::*;
pub use wrap::*;
