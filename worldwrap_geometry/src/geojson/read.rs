use crate::GeoCollection;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;

/// Parses a GeoJSON string into a raw document without interpreting it.
pub fn parse_document(json: &str) -> Result<Value> {
	serde_json::from_str(json).context("parsing JSON")
}

/// Reads a raw document from `reader`.
pub fn read_document(reader: impl Read) -> Result<Value> {
	serde_json::from_reader(reader).context("reading JSON")
}

/// Parses a GeoJSON `FeatureCollection` string.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	GeoCollection::from_json(&parse_document(json)?)
}

/// Reads a GeoJSON `FeatureCollection` from `reader`.
pub fn read_geojson(reader: impl Read) -> Result<GeoCollection> {
	GeoCollection::from_json(&read_document(reader)?)
}
