use super::read_input;
use crate::config::Config;
use anyhow::{Context, Result};
use std::{collections::BTreeMap, fmt::Write, path::PathBuf};
use worldwrap_geometry::{CoordinateSystem, FeatureGeometry, GeoCollection, normalize_collection};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON FeatureCollection to inspect
	#[arg()]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	eprintln!("probe {:?}", arguments.input_file);

	let document = read_input(&arguments.input_file)?;
	let collection = GeoCollection::from_json(&document)
		.with_context(|| format!("reading feature collection from {:?}", arguments.input_file))?;

	print!("{}", report(&collection, config)?);
	Ok(())
}

/// Counts features per geometry type. Geometries that are not modelled are counted by their
/// `type` member, or as `null`.
fn geometry_types(collection: &GeoCollection) -> BTreeMap<String, usize> {
	let mut histogram = BTreeMap::new();
	for feature in &collection.features {
		let name = match &feature.geometry {
			FeatureGeometry::Known(geometry) => geometry.type_name().to_string(),
			FeatureGeometry::Opaque(value) => value
				.get("type")
				.and_then(|t| t.as_str())
				.unwrap_or("null")
				.to_string(),
		};
		*histogram.entry(name).or_insert(0) += 1;
	}
	histogram
}

fn report(collection: &GeoCollection, config: &Config) -> Result<String> {
	let mut text = String::new();
	writeln!(text, "features: {}", collection.len())?;
	writeln!(text, "projection: {}", CoordinateSystem::detect(collection))?;

	writeln!(text, "geometry types:")?;
	for (name, count) in geometry_types(collection) {
		writeln!(text, "  {name}: {count}")?;
	}

	match normalize_collection(collection).bounds() {
		Some(bbox) => writeln!(text, "bounds: {}", bbox.padded(config.padding).to_json(config.precision))?,
		None => writeln!(text, "bounds: none")?,
	}
	Ok(text)
}
