//! Render settings loaded from YAML.
//!
//! Every field is optional; missing fields keep the [`RenderOptions`] defaults.
//!
//! # Example YAML
//! ```yaml
//! fill: "="
//! placement: right
//! precision: 2
//! size: medium
//! width: 120
//! ```

use crate::{
	progress::RenderOptions,
	types::{BarSize, Placement, Precision},
};
use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
	/// Single printable character used for filled cells
	#[serde(default)]
	pub fill: Option<String>,

	/// Label placement: none, left, middle or right
	#[serde(default)]
	pub placement: Option<Placement>,

	/// Fractional digits of the label, clamped to 0..=3
	#[serde(default)]
	pub precision: Option<Precision>,

	/// Bar size category: small, medium, big or full
	#[serde(default)]
	pub size: Option<BarSize>,

	/// Display width in columns, overrides the detected width
	#[serde(default)]
	pub width: Option<usize>,
}

impl RenderConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Self::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	/// Builds options for a display `available_width` columns wide, unless the config pins a width.
	pub fn to_options(&self, available_width: usize) -> Result<RenderOptions> {
		let mut options = RenderOptions::new(self.width.unwrap_or(available_width));
		if let Some(fill) = &self.fill {
			options = options.with_fill(parse_fill(fill)?);
		}
		if let Some(placement) = self.placement {
			options = options.with_placement(placement);
		}
		if let Some(precision) = self.precision {
			options = options.with_precision(precision);
		}
		if let Some(size) = self.size {
			options = options.with_size(size);
		}
		Ok(options)
	}
}

/// Parses a fill character: exactly one printable, non-whitespace glyph.
pub fn parse_fill(text: &str) -> Result<char> {
	let mut chars = text.chars();
	let (Some(fill), None) = (chars.next(), chars.next()) else {
		bail!("fill must be exactly one character, got {text:?}");
	};
	ensure!(
		!fill.is_control() && !fill.is_whitespace(),
		"fill must be a printable character, got {fill:?}"
	);
	Ok(fill)
}
