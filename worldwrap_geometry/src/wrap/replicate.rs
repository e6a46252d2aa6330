use super::{normalize_document, shift_collection};
use crate::{GeoBBox, GeoCollection};
use anyhow::{Context, Result};
use log::{debug, trace};
use serde_json::Value;

/// Longitude offsets of the west, center and east copies.
pub const DEFAULT_OFFSETS: [f64; 3] = [-360.0, 0.0, 360.0];

/// Three longitudinally shifted copies of one geographic collection.
///
/// The center copy is a value-equal copy of the input, the west and east copies are the same
/// features moved by one full revolution, so a map that repeats horizontally shows continuous
/// coverage across the antimeridian.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldWrap {
	pub west: GeoCollection,
	pub center: GeoCollection,
	pub east: GeoCollection,
	pub offsets: [f64; 3],
}

impl WorldWrap {
	/// Replicates a collection that is already in degrees with the [`DEFAULT_OFFSETS`].
	pub fn from_collection(collection: &GeoCollection) -> Self {
		Self::from_collection_with_offsets(collection, DEFAULT_OFFSETS)
	}

	pub fn from_collection_with_offsets(collection: &GeoCollection, offsets: [f64; 3]) -> Self {
		debug!(
			"replicating {} features at offsets {offsets:?}",
			collection.len()
		);
		let [west, center, east] = offsets.map(|dx| {
			trace!("shifting collection by {dx}°");
			shift_collection(collection, dx)
		});
		Self {
			west,
			center,
			east,
			offsets,
		}
	}

	/// Normalizes a raw document and replicates it.
	///
	/// Normalization never fails, a document it cannot handle is used as given. The only error is
	/// a document that cannot be read as a feature collection at all.
	pub fn from_document(document: &Value) -> Result<Self> {
		Self::from_document_with_offsets(document, DEFAULT_OFFSETS)
	}

	pub fn from_document_with_offsets(document: &Value, offsets: [f64; 3]) -> Result<Self> {
		let normalized = normalize_document(document);
		let collection = GeoCollection::from_json(&normalized).context("reading feature collection")?;
		Ok(Self::from_collection_with_offsets(&collection, offsets))
	}

	/// The copies in west, center, east order.
	pub fn copies(&self) -> [&GeoCollection; 3] {
		[&self.west, &self.center, &self.east]
	}

	/// Envelope of the center copy, `None` if it has no positions.
	pub fn bounds(&self) -> Option<GeoBBox> {
		self.center.bounds()
	}

	/// Serializes the copies in west, center, east order.
	pub fn to_documents(&self, precision: Option<u8>) -> [Value; 3] {
		self.copies().map(|collection| collection.to_json(precision))
	}
}
