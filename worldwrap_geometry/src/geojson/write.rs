use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Write;

/// Serializes a document to a string, pretty-printed or on a single line.
pub fn document_to_string(document: &Value, pretty: bool) -> Result<String> {
	let text = if pretty {
		serde_json::to_string_pretty(document)
	} else {
		serde_json::to_string(document)
	};
	text.context("serializing JSON")
}

/// Writes a document to `writer`, followed by a newline.
pub fn write_document(mut writer: impl Write, document: &Value, pretty: bool) -> Result<()> {
	let text = document_to_string(document, pretty)?;
	writeln!(writer, "{text}").context("writing JSON")?;
	writer.flush()?;
	Ok(())
}
