use super::RingGeometry;

/// The first ring is the outer boundary, any further rings are holes.
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

crate::impl_geometry_sequence!(PolygonGeometry, RingGeometry);

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(polygon: &PolygonGeometry) -> Self {
		let mut rings = polygon.0.iter().map(geo::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(Vec::new()));
		geo::Polygon::new(exterior, rings.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, GeometryTrait};
	use serde_json::json;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[2, 2], [2, 4], [4, 4], [4, 2], [2, 2]],
		])
	}

	#[test]
	fn map_coordinates_keeps_holes() {
		let moved = with_hole().map_coordinates(&|c| Coordinates::new(c.x() + 1.0, c.y()));
		assert_eq!(moved.0.len(), 2);
		assert_eq!(moved.0[1].0[0], Coordinates::new(3.0, 2.0));
	}

	#[test]
	fn first_coordinates() {
		assert_eq!(with_hole().first_coordinates(), Some(&Coordinates::new(0.0, 0.0)));
		assert_eq!(PolygonGeometry::default().first_coordinates(), None);
	}

	#[test]
	fn coord_json_roundtrip() {
		let json = with_hole().to_coord_json(None);
		assert_eq!(json.as_array().unwrap().len(), 2);
		assert_eq!(PolygonGeometry::from_coord_json(&json).unwrap(), with_hole());
	}

	#[test]
	fn from_coord_json_rejects_wrong_depth() {
		assert!(PolygonGeometry::from_coord_json(&json!([[0, 0], [1, 1]])).is_err());
	}

	#[test]
	fn to_geo_polygon() {
		let polygon = geo::Polygon::from(&with_hole());
		assert_eq!(polygon.interiors().len(), 1);
		assert_eq!(polygon.exterior().0.len(), 5);
	}
}
