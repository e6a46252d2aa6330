use super::*;
use anyhow::{Result, anyhow, bail};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// The six GeoJSON geometry variants.
///
/// Every per-coordinate transform in this crate goes through [`Geometry::map_coordinates`], so
/// conversion and shifting treat all variants identically.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	/// GeoJSON `type` names of the variants modelled by [`Geometry`].
	pub const TYPE_NAMES: [&'static str; 6] = [
		"Point",
		"LineString",
		"Polygon",
		"MultiPoint",
		"MultiLineString",
		"MultiPolygon",
	];

	pub fn new_point(value: impl Into<PointGeometry>) -> Self {
		Self::Point(value.into())
	}
	pub fn new_line_string(value: impl Into<LineStringGeometry>) -> Self {
		Self::LineString(value.into())
	}
	pub fn new_polygon(value: impl Into<PolygonGeometry>) -> Self {
		Self::Polygon(value.into())
	}
	pub fn new_multi_point(value: impl Into<MultiPointGeometry>) -> Self {
		Self::MultiPoint(value.into())
	}
	pub fn new_multi_line_string(value: impl Into<MultiLineStringGeometry>) -> Self {
		Self::MultiLineString(value.into())
	}
	pub fn new_multi_polygon(value: impl Into<MultiPolygonGeometry>) -> Self {
		Self::MultiPolygon(value.into())
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// Returns a new geometry of the same variant with `transform` applied to every position.
	pub fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Geometry {
		match self {
			Geometry::Point(g) => Geometry::Point(g.map_coordinates(transform)),
			Geometry::LineString(g) => Geometry::LineString(g.map_coordinates(transform)),
			Geometry::Polygon(g) => Geometry::Polygon(g.map_coordinates(transform)),
			Geometry::MultiPoint(g) => Geometry::MultiPoint(g.map_coordinates(transform)),
			Geometry::MultiLineString(g) => Geometry::MultiLineString(g.map_coordinates(transform)),
			Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.map_coordinates(transform)),
		}
	}

	/// The first position, descending into the first element of every nesting level.
	pub fn first_coordinates(&self) -> Option<&Coordinates> {
		match self {
			Geometry::Point(g) => g.first_coordinates(),
			Geometry::LineString(g) => g.first_coordinates(),
			Geometry::Polygon(g) => g.first_coordinates(),
			Geometry::MultiPoint(g) => g.first_coordinates(),
			Geometry::MultiLineString(g) => g.first_coordinates(),
			Geometry::MultiPolygon(g) => g.first_coordinates(),
		}
	}

	/// Reads a GeoJSON geometry object. Fails on unknown types and malformed coordinates.
	pub fn from_json(value: &Value) -> Result<Self> {
		let object = value
			.as_object()
			.ok_or_else(|| anyhow!("geometry must be an object, but got {value}"))?;
		let geometry_type = object
			.get("type")
			.and_then(Value::as_str)
			.ok_or_else(|| anyhow!("geometry must have a type"))?;
		let coordinates = object
			.get("coordinates")
			.ok_or_else(|| anyhow!("{geometry_type} geometry must have coordinates"))?;

		Ok(match geometry_type {
			"Point" => Geometry::Point(PointGeometry::from_coord_json(coordinates)?),
			"LineString" => Geometry::LineString(LineStringGeometry::from_coord_json(coordinates)?),
			"Polygon" => Geometry::Polygon(PolygonGeometry::from_coord_json(coordinates)?),
			"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry::from_coord_json(coordinates)?),
			"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry::from_coord_json(coordinates)?),
			"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry::from_coord_json(coordinates)?),
			_ => bail!("unknown geometry type '{geometry_type}'"),
		})
	}

	/// Writes the geometry as a GeoJSON object with `type` and `coordinates`.
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let coordinates = match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiPoint(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
		};
		let mut object = Map::new();
		object.insert("type".to_string(), Value::from(self.type_name()));
		object.insert("coordinates".to_string(), coordinates);
		Value::Object(object)
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(&[
			[
				[[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				[[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			[
				[[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 0.0]],
				[[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [7.0, 1.0]],
			],
		])
	}
}

impl From<&Geometry> for geo::Geometry<f64> {
	fn from(geometry: &Geometry) -> Self {
		let point = |p: &PointGeometry| geo::Point(geo::Coord::from(p.as_coord()));
		match geometry {
			Geometry::Point(g) => geo::Geometry::Point(point(g)),
			Geometry::LineString(g) => geo::Geometry::LineString(g.into()),
			Geometry::Polygon(g) => geo::Geometry::Polygon(g.into()),
			Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(geo::MultiPoint::new(g.0.iter().map(point).collect())),
			Geometry::MultiLineString(g) => {
				geo::Geometry::MultiLineString(geo::MultiLineString::new(g.0.iter().map(geo::LineString::from).collect()))
			}
			Geometry::MultiPolygon(g) => {
				geo::Geometry::MultiPolygon(geo::MultiPolygon::new(g.0.iter().map(geo::Polygon::from).collect()))
			}
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPoint(g) => ("MultiPoint", g),
			Geometry::MultiLineString(g) => ("MultiLineString", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}
