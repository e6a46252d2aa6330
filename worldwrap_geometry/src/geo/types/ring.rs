use super::Coordinates;

/// One boundary of a polygon. Closure is not enforced: a ring is carried through exactly as it
/// was read.
#[derive(Clone, Default, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

crate::impl_geometry_sequence!(RingGeometry, Coordinates);

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(ring: &RingGeometry) -> Self {
		geo::LineString::new(ring.0.iter().map(geo::Coord::from).collect())
	}
}
