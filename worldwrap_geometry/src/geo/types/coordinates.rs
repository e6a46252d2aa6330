use super::GeometryTrait;
use anyhow::{Result, anyhow, ensure};
use serde_json::Value;
use std::fmt::Debug;

/// A single position: `(longitude, latitude)` in degrees, or `(x, y)` in meters before normalization.
///
/// Only two components are kept. An elevation or any further value is dropped when reading.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	pub fn x(&self) -> f64 {
		self.0[0]
	}

	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Reads a GeoJSON position array. At least two numbers are required, extra values are ignored.
	pub fn from_json(value: &Value) -> Result<Self> {
		let array = value
			.as_array()
			.ok_or_else(|| anyhow!("position must be an array, but got {value}"))?;
		ensure!(
			array.len() >= 2,
			"position must have at least two values, but has {}",
			array.len()
		);
		let number = |v: &Value| v.as_f64().ok_or_else(|| anyhow!("position values must be numbers, but got {v}"));
		Ok(Self([number(&array[0])?, number(&array[1])?]))
	}

	/// Writes `[x, y]`.
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		Value::from(round_values(self.0, precision).to_vec())
	}
}

/// Rounds every value to `precision` decimal places, or returns them unchanged for `None`.
pub fn round_values<const N: usize>(values: [f64; N], precision: Option<u8>) -> [f64; N] {
	match precision {
		Some(digits) => {
			let scale = 10f64.powi(i32::from(digits));
			values.map(|v| (v * scale).round() / scale)
		}
		None => values,
	}
}

/// A position is the leaf of every geometry: the visitor calls `transform` on it directly.
impl GeometryTrait for Coordinates {
	fn map_coordinates(&self, transform: &impl Fn(&Coordinates) -> Coordinates) -> Self {
		transform(self)
	}

	fn first_coordinates(&self) -> Option<&Coordinates> {
		Some(self)
	}

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		self.to_json(precision)
	}

	fn from_coord_json(value: &Value) -> Result<Self> {
		Coordinates::from_json(value)
	}
}

impl<T: Copy + Into<f64>> From<&[T; 2]> for Coordinates {
	fn from(&[x, y]: &[T; 2]) -> Self {
		Self([x.into(), y.into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(xy: [f64; 2]) -> Self {
		Self(xy)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from((x, y): (f64, f64)) -> Self {
		Self([x, y])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(c: Coordinates) -> Self {
		c.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(c: geo::Coord) -> Self {
		Self([c.x, c.y])
	}
}

impl From<&Coordinates> for geo::Coord {
	fn from(c: &Coordinates) -> Self {
		geo::Coord { x: c.x(), y: c.y() }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
