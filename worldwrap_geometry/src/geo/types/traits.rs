use super::Coordinates;
use crate::projection::{geographic_to_mercator, mercator_to_geographic};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// Shared behavior of every coordinate-bearing type, from a single position up to a multipolygon.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns a new value of the same shape with `transform` applied to every position.
	///
	/// The result has the same number of parts, rings and positions as `self`, which is never
	/// modified.
	fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Self;

	/// The first position, taken from the first element at every level. `None` if one of those
	/// levels is empty.
	fn first_coordinates(&self) -> Option<&Coordinates>;

	/// The JSON value of the GeoJSON `coordinates` member, rounded to `precision` decimals if given.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// Reads the JSON value of a GeoJSON `coordinates` member.
	fn from_coord_json(value: &Value) -> Result<Self>;

	/// Treats every position as Web Mercator meters and converts it to degrees.
	fn to_geographic(&self) -> Self {
		self.map_coordinates(&mercator_to_geographic)
	}

	/// Treats every position as degrees and converts it to Web Mercator meters.
	fn to_mercator(&self) -> Self {
		self.map_coordinates(&geographic_to_mercator)
	}
}
