use super::round_values;
use serde_json::Value;
use std::fmt::Debug;

/// A bounding box (`GeoBBox`) represents a rectangular area on a map defined by its minimum and
/// maximum longitude (x) and latitude (y) coordinates.
///
/// Unlike a strict geographic box, values outside ±180° are allowed, since shifted world copies
/// legitimately extend past the antimeridian.
///
/// ```
/// use worldwrap_geometry::GeoBBox;
///
/// let mut bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
/// bbox.extend(&GeoBBox::new(-12.0, -3.0, 8.0, 6.0));
/// assert_eq!(bbox.as_array(), [-12.0, -5.0, 10.0, 6.0]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoBBox {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl GeoBBox {
	/// Creates a box from `west, south, east, north`. Swapped bounds are put in order.
	pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> GeoBBox {
		GeoBBox {
			x_min: x0.min(x1),
			y_min: y0.min(y1),
			x_max: x0.max(x1),
			y_max: y0.max(y1),
		}
	}

	/// Grows this box to also cover `other`.
	pub fn extend(&mut self, other: &GeoBBox) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Returns the box grown by `degrees` on every side, with latitudes clamped to ±90°.
	pub fn padded(&self, degrees: f64) -> GeoBBox {
		GeoBBox {
			x_min: self.x_min - degrees,
			y_min: (self.y_min - degrees).max(-90.0),
			x_max: self.x_max + degrees,
			y_max: (self.y_max + degrees).min(90.0),
		}
	}

	/// Returns the box moved by `dx` degrees of longitude.
	pub fn shifted(&self, dx: f64) -> GeoBBox {
		GeoBBox {
			x_min: self.x_min + dx,
			y_min: self.y_min,
			x_max: self.x_max + dx,
			y_max: self.y_max,
		}
	}

	/// Returns the box as `[west, south, east, north]`.
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	/// Writes `[west, south, east, north]`.
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		Value::from(round_values(self.as_array(), precision).to_vec())
	}
}

impl From<geo::Rect<f64>> for GeoBBox {
	fn from(rect: geo::Rect<f64>) -> Self {
		GeoBBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
	}
}

impl Debug for GeoBBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		// Renders the bounding box in the form "GeoBBox(-10, -5, 10, 5)" for example
		write!(
			f,
			"GeoBBox({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_creation_orders_bounds() {
		let bbox = GeoBBox::new(10.0, 5.0, -10.0, -5.0);
		assert_eq!(bbox.as_array(), [-10.0, -5.0, 10.0, 5.0]);
	}

	#[test]
	fn test_padded_clamps_latitude() {
		let bbox = GeoBBox::new(-179.0, -88.0, 179.0, 80.0).padded(5.0);
		assert_eq!(bbox.as_array(), [-184.0, -90.0, 184.0, 85.0]);
	}

	#[test]
	fn test_shifted() {
		let bbox = GeoBBox::new(170.0, -10.0, 175.0, 10.0).shifted(-360.0);
		assert_eq!(bbox.as_array(), [-190.0, -10.0, -185.0, 10.0]);
	}

	#[test]
	fn test_from_rect() {
		let rect = geo::Rect::new(geo::Coord { x: 3.0, y: 4.0 }, geo::Coord { x: 1.0, y: 2.0 });
		assert_eq!(GeoBBox::from(rect).as_array(), [1.0, 2.0, 3.0, 4.0]);
	}

	#[test]
	fn test_to_json() {
		let bbox = GeoBBox::new(-1.23456, -5.0, 10.98765, 5.5);
		assert_eq!(bbox.to_json(None), json!([-1.23456, -5.0, 10.98765, 5.5]));
		assert_eq!(bbox.to_json(Some(2)), json!([-1.23, -5.0, 10.99, 5.5]));
	}

	#[test]
	fn test_debug() {
		let bbox = GeoBBox::new(-10.0, -5.0, 10.0, 5.0);
		assert_eq!(format!("{bbox:?}"), "GeoBBox(-10, -5, 10, 5)");
	}
}
