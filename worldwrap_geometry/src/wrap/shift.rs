use crate::{Coordinates, GeoCollection};

/// Moves a position by `dx` degrees of longitude. Latitude is unchanged.
pub fn shift_longitude(c: &Coordinates, dx: f64) -> Coordinates {
	Coordinates::new(c.x() + dx, c.y())
}

/// Returns a new collection with every longitude increased by `dx` degrees.
///
/// `dx = 0.0` yields a structurally new copy that compares equal to the input.
pub fn shift_collection(collection: &GeoCollection, dx: f64) -> GeoCollection {
	collection.map_coordinates(&|c| shift_longitude(c, dx))
}
