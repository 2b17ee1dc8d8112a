pub mod demo;
pub mod percent;
pub mod render;

use anyhow::Result;
use loopbar::{
	core::{BarSize, Placement, Precision, RenderConfig, RenderOptions, config::parse_fill},
	display::DisplayWidth,
};
use std::{path::PathBuf, time::Duration};

/// Bar layout flags shared by the subcommands. Flags override values from `--config`.
#[derive(clap::Args, Debug)]
pub struct BarArgs {
	/// display width in columns, or "auto" to ask the terminal
	#[arg(long, short, value_name = "COLUMNS", value_parser = DisplayWidth::parse_str, display_order = 1)]
	width: Option<DisplayWidth>,

	/// bar size category
	#[arg(long, short, value_enum, display_order = 1)]
	size: Option<BarSize>,

	/// character used for filled cells
	#[arg(long, short, value_name = "CHAR", display_order = 2)]
	fill: Option<String>,

	/// where the percentage label is placed
	#[arg(long, short, value_enum, display_order = 2)]
	placement: Option<Placement>,

	/// fractional digits of the percentage label, clamped to 0..=3
	#[arg(long, value_name = "int", allow_negative_numbers = true, display_order = 2)]
	precision: Option<i64>,

	/// YAML file with default render settings
	#[arg(long, short, value_name = "FILE", display_order = 3)]
	config: Option<PathBuf>,
}

impl BarArgs {
	/// Merges config file and flags. The width of the returned options is filled in by the caller.
	pub fn load(&self) -> Result<(DisplayWidth, RenderOptions)> {
		let config = match &self.config {
			Some(path) => RenderConfig::from_path(path)?,
			None => RenderConfig::default(),
		};

		let display = self
			.width
			.or(config.width.map(DisplayWidth::Columns))
			.unwrap_or_default();

		let mut options = config.to_options(0)?;
		if let Some(size) = self.size {
			options = options.with_size(size);
		}
		if let Some(fill) = &self.fill {
			options = options.with_fill(parse_fill(fill)?);
		}
		if let Some(placement) = self.placement {
			options = options.with_placement(placement);
		}
		if let Some(precision) = self.precision {
			options = options.with_precision(Precision::clamp(precision));
		}

		log::debug!("display width {display}, options {options:?}");
		Ok((display, options))
	}
}

pub fn elapsed_from_millis(millis: Option<u64>) -> Option<Duration> {
	millis.map(Duration::from_millis)
}
