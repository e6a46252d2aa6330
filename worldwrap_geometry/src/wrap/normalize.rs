use crate::{CoordinateSystem, GeoCollection, mercator_to_geographic};
use anyhow::Result;
use log::{debug, warn};
use serde_json::Value;
use std::fmt::Display;

/// What [`normalize_document_with_outcome`] did to its input.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalization {
	/// The collection was already in degrees and is returned unchanged.
	AlreadyGeographic,
	/// Web Mercator meters were converted to degrees.
	Converted { features: usize },
	/// Reading or converting failed; the input is returned unchanged.
	FellBack { reason: String },
}

impl Display for Normalization {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Normalization::AlreadyGeographic => write!(f, "already geographic, unchanged"),
			Normalization::Converted { features } => {
				write!(f, "converted {features} features from web mercator to geographic")
			}
			Normalization::FellBack { reason } => write!(f, "kept unchanged after error: {reason}"),
		}
	}
}

/// Returns `collection` in geographic degrees.
///
/// A collection detected as geographic is returned as an equal clone. A Web Mercator collection has
/// every feature geometry converted, all other members are kept.
pub fn normalize_collection(collection: &GeoCollection) -> GeoCollection {
	match CoordinateSystem::detect(collection) {
		CoordinateSystem::Geographic => collection.clone(),
		CoordinateSystem::WebMercator => collection.map_coordinates(&mercator_to_geographic),
	}
}

/// Returns the document in geographic degrees. Never fails.
///
/// Any error while reading or converting the document (malformed geometry, missing coordinates,
/// something that is not a feature collection) is logged and the input document is returned
/// unmodified, so the caller always gets a usable value.
pub fn normalize_document(document: &Value) -> Value {
	normalize_document_with_outcome(document).0
}

/// Like [`normalize_document`], but also reports what happened.
pub fn normalize_document_with_outcome(document: &Value) -> (Value, Normalization) {
	match try_normalize(document) {
		Ok(Some((normalized, features))) => (normalized, Normalization::Converted { features }),
		Ok(None) => (document.clone(), Normalization::AlreadyGeographic),
		Err(error) => {
			warn!("could not normalize document, keeping it unchanged: {error:#}");
			let reason = format!("{error:#}");
			(document.clone(), Normalization::FellBack { reason })
		}
	}
}

fn try_normalize(document: &Value) -> Result<Option<(Value, usize)>> {
	let collection = GeoCollection::from_json(document)?;
	let system = CoordinateSystem::detect(&collection);
	debug!("detected {system} coordinates in {} features", collection.len());

	Ok(match system {
		CoordinateSystem::Geographic => None,
		CoordinateSystem::WebMercator => {
			let converted = collection.map_coordinates(&mercator_to_geographic);
			Some((converted.to_json(None), converted.len()))
		}
	})
}
