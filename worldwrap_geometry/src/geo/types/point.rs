use super::{Coordinates, GeometryTrait};
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	pub fn y(&self) -> f64 {
		self.0.y()
	}

	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Self {
		PointGeometry(transform(&self.0))
	}

	fn first_coordinates(&self) -> Option<&Coordinates> {
		Some(&self.0)
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.0.to_json(precision)
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		Coordinates::from_json(value).map(PointGeometry)
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use serde_json::json;

	#[test]
	fn accessors() {
		let point = PointGeometry::from([1.0, 2.0]);
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn map_coordinates_returns_new_point() {
		let p = PointGeometry::from([1.0, 2.0]);
		let moved = p.map_coordinates(&|c| Coordinates::new(c.x() * 10.0, c.y() + 1.0));
		assert_eq!(moved, PointGeometry::from([10.0, 3.0]));
		assert_eq!(p, PointGeometry::from([1.0, 2.0]));
	}

	#[test]
	fn first_coordinates() {
		let p = PointGeometry::from([3.0, 7.0]);
		assert_eq!(p.first_coordinates(), Some(&Coordinates::new(3.0, 7.0)));
	}

	#[test]
	fn coord_json() {
		let json = PointGeometry::from([1.5, 2.5]).to_coord_json(None);
		assert_eq!(json, json!([1.5, 2.5]));
		assert_eq!(PointGeometry::from_coord_json(&json).unwrap(), PointGeometry::from([1.5, 2.5]));
		assert_eq!(
			PointGeometry::from([1.23456, 2.34567]).to_coord_json(Some(2)),
			json!([1.23, 2.35])
		);
	}

	#[test]
	fn to_mercator_and_back() {
		let p = PointGeometry::from([13.4, 52.5]);
		let m = p.to_mercator();
		assert_abs_diff_eq!(m.x(), 1_491_681.18, epsilon = 0.01);
		assert_abs_diff_eq!(m.y(), 6_891_041.72, epsilon = 0.01);
		let back = m.to_geographic();
		assert_abs_diff_eq!(back.x(), 13.4, epsilon = 1e-9);
		assert_abs_diff_eq!(back.y(), 52.5, epsilon = 1e-9);
	}
}
