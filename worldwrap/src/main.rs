mod config;
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
	arg_required_else_help = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// YAML config file
	#[arg(long, short, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// round written coordinates to this many decimal places
	#[arg(long, global = true, value_name = "DIGITS")]
	precision: Option<u8>,

	/// pretty-print written documents
	#[arg(long, global = true)]
	pretty: bool,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
	/// Convert a GeoJSON document to geographic degrees
	Normalize(tools::normalize::Subcommand),

	/// Show information about a GeoJSON document
	Probe(tools::probe::Subcommand),

	/// Write west, center and east copies of a GeoJSON document
	Wrap(tools::wrap::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	let config = load_config(&cli)?;
	match &cli.command {
		Commands::Normalize(arguments) => tools::normalize::run(arguments, &config),
		Commands::Probe(arguments) => tools::probe::run(arguments, &config),
		Commands::Wrap(arguments) => tools::wrap::run(arguments, &config),
	}
}

/// Reads the config file if one is given, then applies command line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
	let mut config = match &cli.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};
	if cli.precision.is_some() {
		config.precision = cli.precision;
	}
	if cli.pretty {
		config.pretty = true;
	}
	log::debug!("using {config:?}");
	Ok(config)
}
