use super::{Coordinates, FeatureGeometry, GeoBBox, GeoFeature};
use crate::geojson::parse_geojson;
use anyhow::{Context, Result, anyhow, ensure};
use geo::BoundingRect;
use serde_json::{Map, Value};

/// A GeoJSON feature collection. Members other than `features` are carried as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub members: Map<String, Value>,
}

impl GeoCollection {
	pub fn new(features: Vec<GeoFeature>) -> Self {
		let mut members = Map::new();
		members.insert("type".to_string(), Value::from("FeatureCollection"));
		Self { features, members }
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}

	/// Reads a `FeatureCollection` document. Fails on the first malformed feature.
	pub fn from_json(value: &Value) -> Result<Self> {
		let object = value
			.as_object()
			.ok_or_else(|| anyhow!("feature collection must be an object"))?;
		if let Some(object_type) = object.get("type") {
			ensure!(
				object_type == "FeatureCollection",
				"type must be 'FeatureCollection', but is {object_type}"
			);
		}

		let mut members = object.clone();
		let features = members
			.shift_remove("features")
			.ok_or_else(|| anyhow!("feature collection is missing 'features'"))?;
		let features = features
			.as_array()
			.ok_or_else(|| anyhow!("'features' must be an array"))?
			.iter()
			.enumerate()
			.map(|(index, feature)| GeoFeature::from_json(feature).with_context(|| format!("feature {index}")))
			.collect::<Result<Vec<_>>>()?;

		Ok(Self { features, members })
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = self.members.clone();
		let features = self.features.iter().map(|f| f.to_json(precision)).collect::<Vec<_>>();
		object.insert("features".to_string(), Value::from(features));
		Value::Object(object)
	}

	/// Returns a new collection with `transform` applied to every position of every feature.
	pub fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Self {
		Self {
			features: self.features.iter().map(|f| f.map_coordinates(transform)).collect(),
			members: self.members.clone(),
		}
	}

	/// Bounding box over all positions of all modelled geometries, or `None` if there are none.
	pub fn bounds(&self) -> Option<GeoBBox> {
		self
			.features
			.iter()
			.filter_map(|feature| match &feature.geometry {
				FeatureGeometry::Known(geometry) => geo::Geometry::from(geometry).bounding_rect(),
				FeatureGeometry::Opaque(_) => None,
			})
			.map(GeoBBox::from)
			.reduce(|mut bbox, other| {
				bbox.extend(&other);
				bbox
			})
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}
}
