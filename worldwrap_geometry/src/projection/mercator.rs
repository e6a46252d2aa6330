//! Spherical Web Mercator (EPSG:3857) formulas.

use crate::Coordinates;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// WGS84 semi-major axis (equatorial radius) in meters, used as the sphere radius.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the Web Mercator world width in meters (`PI * EARTH_RADIUS`), i.e. x at 180° longitude.
pub const MERCATOR_HALF_WIDTH: f64 = std::f64::consts::PI * EARTH_RADIUS;

/// Maximum latitude in degrees for the Web Mercator projection.
pub const MAX_LAT: f64 = 85.051_128_779_806_59;

/// Converts Web Mercator meters `(x, y)` to `(longitude, latitude)` in degrees.
///
/// This is the closed-form inverse of the spherical projection. It is total over finite input;
/// very large `|y|` approaches ±90° without reaching it.
pub fn mercator_to_geographic(c: &Coordinates) -> Coordinates {
	let lon = (c.x() / EARTH_RADIUS).to_degrees();
	let lat = (2.0 * (c.y() / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
	Coordinates::new(lon, lat)
}

/// Converts `(longitude, latitude)` in degrees to Web Mercator meters.
///
/// Latitudes are clamped to ±[`MAX_LAT`] so the result stays finite at the poles.
pub fn geographic_to_mercator(c: &Coordinates) -> Coordinates {
	let lat = c.y().clamp(-MAX_LAT, MAX_LAT);
	let x = EARTH_RADIUS * c.x().to_radians();
	let y = EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
	Coordinates::new(x, y)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[rstest]
	#[case([0.0, 0.0], [0.0, 0.0])]
	#[case([20_037_508.34, 0.0], [180.0, 0.0])]
	#[case([-20_037_508.34, 0.0], [-180.0, 0.0])]
	#[case([0.0, 20_037_508.34], [0.0, MAX_LAT])]
	#[case([1_491_681.18, 6_891_041.72], [13.4, 52.5])]
	fn known_samples(#[case] meters: [f64; 2], #[case] degrees: [f64; 2]) {
		let c = mercator_to_geographic(&Coordinates::from(meters));
		assert_abs_diff_eq!(c.x(), degrees[0], epsilon = 1e-4);
		assert_abs_diff_eq!(c.y(), degrees[1], epsilon = 1e-4);
	}

	#[test]
	fn half_width_is_180_degrees() {
		let c = mercator_to_geographic(&Coordinates::new(MERCATOR_HALF_WIDTH, 0.0));
		assert_abs_diff_eq!(c.x(), 180.0, epsilon = 1e-12);
	}

	#[test]
	fn extreme_y_stays_below_the_pole() {
		for y in [1e8, -1e8, 1e12] {
			let c = mercator_to_geographic(&Coordinates::new(0.0, y));
			assert!(c.y().is_finite());
			assert!(c.y().abs() <= 90.0);
		}
	}

	#[test]
	fn round_trip() {
		for (lon, lat) in [(0.0, 0.0), (-179.9, -85.0), (179.9, 85.0), (2.35, 48.85), (-74.0, 40.7)] {
			let back = mercator_to_geographic(&geographic_to_mercator(&Coordinates::new(lon, lat)));
			assert_abs_diff_eq!(back.x(), lon, epsilon = 1e-9);
			assert_abs_diff_eq!(back.y(), lat, epsilon = 1e-9);
		}
	}

	#[test]
	fn forward_clamps_poles() {
		let north = geographic_to_mercator(&Coordinates::new(0.0, 90.0));
		assert!(north.y().is_finite());
		assert_abs_diff_eq!(north.y(), MERCATOR_HALF_WIDTH, epsilon = 1e-3);
	}
}
