use super::{read_input, write_output};
use crate::config::Config;
use anyhow::{Context, Result};
use log::info;
use serde_json::Value;
use std::{fs, path::PathBuf};
use worldwrap_geometry::WorldWrap;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON FeatureCollection in degrees or web mercator meters
	#[arg()]
	input_file: PathBuf,

	/// directory for the west, center and east copies, created if missing
	#[arg()]
	output_dir: PathBuf,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	eprintln!("wrap {:?} into {:?}", arguments.input_file, arguments.output_dir);

	let document = read_input(&arguments.input_file)?;
	let wrap = WorldWrap::from_document_with_offsets(&document, config.offsets)
		.with_context(|| format!("wrapping {:?}", arguments.input_file))?;

	fs::create_dir_all(&arguments.output_dir).with_context(|| format!("creating {:?}", arguments.output_dir))?;

	let documents = wrap.to_documents(config.precision);
	for (name, document) in config.files.file_names().iter().zip(&documents) {
		let path = arguments.output_dir.join(name);
		write_output(&path, document, config.pretty)?;
		info!("wrote {path:?}");
	}

	println!("{}", envelope(&wrap, config));
	Ok(())
}

/// Envelope of the center copy as `[west, south, east, north]`, or `null` without positions.
fn envelope(wrap: &WorldWrap, config: &Config) -> Value {
	wrap
		.bounds()
		.map_or(Value::Null, |bbox| bbox.padded(config.padding).to_json(config.precision))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use pretty_assertions::assert_eq;
	use serde_json::json;
	use std::path::Path;
	use tempfile::tempdir;
	use worldwrap_geometry::{GeoCollection, read_document};

	fn read(path: &Path) -> Value {
		read_document(fs::File::open(path).unwrap()).unwrap()
	}

	#[test]
	fn writes_three_files() {
		let dir = tempdir().unwrap();
		let output = dir.path().join("nested").join("out");
		run_command(vec![
			"worldwrap",
			"wrap",
			"-q",
			"../testdata/degrees.geojson",
			output.to_str().unwrap(),
		])
		.unwrap();

		let west = read(&output.join("west.geojson"));
		let center = read(&output.join("center.geojson"));
		let east = read(&output.join("east.geojson"));

		assert_eq!(center, read(Path::new("../testdata/degrees.geojson")));
		assert_eq!(west["features"][0]["geometry"]["coordinates"], json!([-208.8, -33.9]));
		assert_eq!(east["features"][0]["geometry"]["coordinates"], json!([511.2, -33.9]));
		assert_eq!(east["features"][3]["geometry"], center["features"][3]["geometry"]);
	}

	#[test]
	fn config_names_files() {
		let dir = tempdir().unwrap();
		run_command(vec![
			"worldwrap",
			"wrap",
			"--config",
			"../testdata/config.yml",
			"../testdata/mercator.geojson",
			dir.path().to_str().unwrap(),
		])
		.unwrap();

		for name in ["west-copy.geojson", "world.geojson", "east-copy.geojson"] {
			let collection = GeoCollection::from_json(&read(&dir.path().join(name))).unwrap();
			assert_eq!(collection.len(), 4);
		}
		let text = fs::read_to_string(dir.path().join("world.geojson")).unwrap();
		assert!(text.contains("\n  \"name\": \"mercator sample\""));
	}

	#[test]
	fn envelope_is_padded_and_rounded() {
		let wrap = WorldWrap::from_document(&read(Path::new("../testdata/degrees.geojson"))).unwrap();
		let config = Config {
			padding: 0.5,
			precision: Some(0),
			..Config::default()
		};
		assert_eq!(envelope(&wrap, &config), json!([-180.0, -34.0, 180.0, 21.0]));
	}

	#[test]
	fn envelope_of_empty_collection_is_null() {
		let wrap = WorldWrap::from_document(&json!({"type": "FeatureCollection", "features": []})).unwrap();
		assert_eq!(envelope(&wrap, &Config::default()), Value::Null);
	}

	#[test]
	fn unreadable_document_fails() {
		let dir = tempdir().unwrap();
		let error = run_command(vec![
			"worldwrap",
			"wrap",
			"-q",
			"../testdata/malformed.geojson",
			dir.path().to_str().unwrap(),
		])
		.unwrap_err();
		assert!(format!("{error:#}").starts_with("wrapping"));
		assert!(!dir.path().join("center.geojson").exists());
	}
}
