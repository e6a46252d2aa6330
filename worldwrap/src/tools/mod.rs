pub mod normalize;
pub mod probe;
pub mod wrap;

use anyhow::{Context, Result};
use serde_json::Value;
use std::{
	fs::File,
	io::{BufReader, BufWriter},
	path::Path,
};
use worldwrap_geometry::{GeoCollection, read_document, write_document};

/// Reads a JSON document from a file.
fn read_input(path: &Path) -> Result<Value> {
	let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
	read_document(BufReader::new(file)).with_context(|| format!("reading {path:?}"))
}

/// Writes a JSON document to a file, replacing it if it exists.
fn write_output(path: &Path, document: &Value, pretty: bool) -> Result<()> {
	let file = File::create(path).with_context(|| format!("creating {path:?}"))?;
	write_document(BufWriter::new(file), document, pretty).with_context(|| format!("writing {path:?}"))
}

/// Rounds the coordinates of a document that reads as a feature collection. Anything else is
/// returned as it is.
fn round_document(document: Value, precision: Option<u8>) -> Value {
	if precision.is_none() {
		return document;
	}
	match GeoCollection::from_json(&document) {
		Ok(collection) => collection.to_json(precision),
		Err(_) => document,
	}
}
