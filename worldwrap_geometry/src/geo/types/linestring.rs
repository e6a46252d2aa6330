use super::Coordinates;

/// An open path of positions.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

crate::impl_geometry_sequence!(LineStringGeometry, Coordinates);

impl From<&LineStringGeometry> for geo::LineString<f64> {
	fn from(line: &LineStringGeometry) -> Self {
		geo::LineString::new(line.0.iter().map(geo::Coord::from).collect())
	}
}
