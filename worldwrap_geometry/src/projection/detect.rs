use crate::{Coordinates, GeoCollection};
use std::fmt::Display;

/// The coordinate system a feature collection is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordinateSystem {
	/// Longitude/latitude in degrees (EPSG:4326).
	Geographic,
	/// Spherical Web Mercator meters (EPSG:3857).
	WebMercator,
}

impl CoordinateSystem {
	/// Classifies a single position by magnitude.
	///
	/// Degrees never exceed 180 in x or 90 in y, so anything larger is taken as meters. Everything
	/// else, including NaN, is taken as degrees. This is a sampling heuristic, not a CRS check.
	pub fn classify(c: &Coordinates) -> Self {
		if c.x().abs() > 180.0 || c.y().abs() > 90.0 {
			CoordinateSystem::WebMercator
		} else {
			CoordinateSystem::Geographic
		}
	}

	/// Detects the coordinate system of a collection from the first position of its first feature.
	///
	/// The collection is assumed to be uniform: only the first feature is sampled, so a collection
	/// that mixes meters and degrees is classified by whichever comes first. Without a sample (no
	/// features, an opaque or empty first geometry) the result is [`CoordinateSystem::Geographic`].
	pub fn detect(collection: &GeoCollection) -> Self {
		collection
			.features
			.first()
			.and_then(|feature| feature.geometry.as_geometry())
			.and_then(|geometry| geometry.first_coordinates())
			.map_or(CoordinateSystem::Geographic, CoordinateSystem::classify)
	}
}

impl Display for CoordinateSystem {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			CoordinateSystem::Geographic => "geographic (EPSG:4326)",
			CoordinateSystem::WebMercator => "web mercator (EPSG:3857)",
		})
	}
}
