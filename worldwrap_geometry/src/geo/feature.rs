use super::*;
use anyhow::{Result, anyhow, ensure};
use serde_json::{Map, Value};

/// The geometry slot of a feature.
///
/// `Opaque` holds anything the crate does not model (a `null` geometry, a `GeometryCollection`
/// or an unknown `type`). It passes through every transform untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureGeometry {
	Known(Geometry),
	Opaque(Value),
}

impl FeatureGeometry {
	pub fn from_json(value: &Value) -> Result<Self> {
		let Some(object) = value.as_object() else {
			ensure!(value.is_null(), "geometry must be an object or null, but got {value}");
			return Ok(FeatureGeometry::Opaque(Value::Null));
		};
		match object.get("type").and_then(Value::as_str) {
			Some(name) if Geometry::TYPE_NAMES.contains(&name) => Geometry::from_json(value).map(FeatureGeometry::Known),
			_ => Ok(FeatureGeometry::Opaque(value.clone())),
		}
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		match self {
			FeatureGeometry::Known(geometry) => geometry.to_json(precision),
			FeatureGeometry::Opaque(value) => value.clone(),
		}
	}

	pub fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Self {
		match self {
			FeatureGeometry::Known(geometry) => FeatureGeometry::Known(geometry.map_coordinates(transform)),
			FeatureGeometry::Opaque(value) => FeatureGeometry::Opaque(value.clone()),
		}
	}

	pub fn as_geometry(&self) -> Option<&Geometry> {
		match self {
			FeatureGeometry::Known(geometry) => Some(geometry),
			FeatureGeometry::Opaque(_) => None,
		}
	}
}

impl From<Geometry> for FeatureGeometry {
	fn from(geometry: Geometry) -> Self {
		FeatureGeometry::Known(geometry)
	}
}

/// A GeoJSON feature: one geometry plus every other member (`type`, `id`, `properties`, `bbox`,
/// foreign members) carried as-is.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub geometry: FeatureGeometry,
	pub members: Map<String, Value>,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		let mut members = Map::new();
		members.insert("type".to_string(), Value::from("Feature"));
		members.insert("properties".to_string(), Value::Object(Map::new()));
		Self {
			geometry: FeatureGeometry::Known(geometry),
			members,
		}
	}

	pub fn from_json(value: &Value) -> Result<Self> {
		let object = value
			.as_object()
			.ok_or_else(|| anyhow!("feature must be an object, but got {value}"))?;
		if let Some(object_type) = object.get("type") {
			ensure!(object_type == "Feature", "type must be 'Feature', but is {object_type}");
		}

		let mut members = object.clone();
		let geometry = members
			.shift_remove("geometry")
			.ok_or_else(|| anyhow!("feature is missing 'geometry'"))?;

		Ok(Self {
			geometry: FeatureGeometry::from_json(&geometry)?,
			members,
		})
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut object = self.members.clone();
		object.insert("geometry".to_string(), self.geometry.to_json(precision));
		Value::Object(object)
	}

	/// Returns a copy of this feature with `transform` applied to every position of its geometry.
	/// All other members are cloned unchanged.
	pub fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Self {
		Self {
			geometry: self.geometry.map_coordinates(transform),
			members: self.members.clone(),
		}
	}

	pub fn id(&self) -> Option<&Value> {
		self.members.get("id")
	}

	pub fn properties(&self) -> Option<&Value> {
		self.members.get("properties")
	}

	pub fn set_id(&mut self, id: impl Into<Value>) {
		self.members.insert("id".to_string(), id.into());
	}

	pub fn set_property(&mut self, key: &str, value: impl Into<Value>) {
		let properties = self
			.members
			.entry("properties")
			.or_insert_with(|| Value::Object(Map::new()));
		if !properties.is_object() {
			*properties = Value::Object(Map::new());
		}
		if let Value::Object(map) = properties {
			map.insert(key.to_string(), value.into());
		}
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		let mut feature = Self::new(Geometry::new_example());
		feature.set_id(13);
		feature.set_property("name", "Nice");
		feature.set_property("population", 348085);
		feature.set_property("is_nice", true);
		feature
	}
}
