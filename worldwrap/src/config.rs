use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};
use worldwrap_geometry::DEFAULT_OFFSETS;

/// Settings shared by all subcommands, usually read from a YAML file.
///
/// ```yaml
/// precision: 6
/// pretty: true
/// padding: 2.5
/// offsets: [-360, 0, 360]
/// files:
///   west: left
///   center: middle
///   east: right
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Number of decimal places written for coordinates. Full precision if unset.
	pub precision: Option<u8>,

	/// Pretty-print written documents.
	pub pretty: bool,

	/// Degrees added on every side of the printed envelope.
	pub padding: f64,

	/// Longitude offsets of the west, center and east copies.
	pub offsets: [f64; 3],

	/// File stems of the three copies written by `wrap`.
	pub files: OutputFiles,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			precision: None,
			pretty: false,
			padding: 0.0,
			offsets: DEFAULT_OFFSETS,
			files: OutputFiles::default(),
		}
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputFiles {
	pub west: String,
	pub center: String,
	pub east: String,
}

impl Default for OutputFiles {
	fn default() -> Self {
		Self {
			west: "west".to_string(),
			center: "center".to_string(),
			east: "east".to_string(),
		}
	}
}

impl OutputFiles {
	/// File names in west, center, east order.
	pub fn file_names(&self) -> [String; 3] {
		[&self.west, &self.center, &self.east].map(|stem| format!("{stem}.geojson"))
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_reader(reader)?;
		config.check()?;
		Ok(config)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		let config: Config = serde_yaml_ng::from_str(text)?;
		config.check()?;
		Ok(config)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("reading config {path:?}"))
	}

	fn check(&self) -> Result<()> {
		ensure!(
			self.padding.is_finite() && self.padding >= 0.0,
			"padding must be a non-negative number, but is {}",
			self.padding
		);
		ensure!(
			self.offsets.iter().all(|dx| dx.is_finite()),
			"offsets must be finite numbers"
		);
		let names = self.files.file_names();
		ensure!(
			names[0] != names[1] && names[1] != names[2] && names[0] != names[2],
			"file stems must be distinct"
		);
		Ok(())
	}
}
