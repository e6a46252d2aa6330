use super::PolygonGeometry;

/// Several polygons, e.g. an island group.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

crate::impl_geometry_sequence!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, GeometryTrait};
	use approx::assert_abs_diff_eq;

	#[test]
	fn map_coordinates_moves_every_part() {
		let multi = MultiPolygonGeometry::from(&[
			[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			[[[20, 0], [30, 0], [30, 10], [20, 10], [20, 0]]],
		]);
		let moved = multi.map_coordinates(&|c| Coordinates::new(c.x() - 360.0, c.y()));
		assert_eq!(moved.0.len(), 2);
		assert_eq!(moved.0[1].0[0].0[0], Coordinates::new(-340.0, 0.0));
		assert_eq!(moved.0[0].0[0].0.len(), 5);
	}

	#[test]
	fn first_coordinates() {
		let multi = MultiPolygonGeometry::from(&[[[[3, 4], [5, 4], [5, 6], [3, 4]]]]);
		assert_eq!(multi.first_coordinates(), Some(&Coordinates::new(3.0, 4.0)));
		assert_eq!(MultiPolygonGeometry::default().first_coordinates(), None);
	}

	#[test]
	fn mercator_round_trip() {
		let multi = MultiPolygonGeometry::from(&[[[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]]);
		let mercator = multi.to_mercator();
		assert!(mercator.0[0].0[0].0[0].x().abs() < 1.0);
		assert!(mercator.0[0].0[0].0[1].x().abs() > 100_000.0);

		let back = mercator.to_geographic();
		assert_abs_diff_eq!(back.0[0].0[0].0[2].x(), 1.0, epsilon = 1e-9);
		assert_abs_diff_eq!(back.0[0].0[0].0[2].y(), 1.0, epsilon = 1e-9);
	}
}
