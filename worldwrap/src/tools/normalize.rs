use super::{read_input, round_document, write_output};
use crate::config::Config;
use anyhow::Result;
use log::info;
use std::{io::stdout, path::PathBuf};
use worldwrap_geometry::{normalize_document_with_outcome, write_document};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON FeatureCollection in degrees or web mercator meters
	#[arg()]
	input_file: PathBuf,

	/// where to write the result, stdout if omitted
	#[arg()]
	output_file: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand, config: &Config) -> Result<()> {
	let document = read_input(&arguments.input_file)?;

	let (normalized, outcome) = normalize_document_with_outcome(&document);
	info!("{:?}: {outcome}", arguments.input_file);

	let normalized = round_document(normalized, config.precision);
	match &arguments.output_file {
		Some(path) => write_output(path, &normalized, config.pretty),
		None => write_document(stdout().lock(), &normalized, config.pretty),
	}
}
