use anyhow::{Context, Result, bail};
use std::fmt::Display;

/// Width of the surface frames are written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayWidth {
	/// Ask the attached terminal, on every frame.
	#[default]
	Auto,
	Columns(usize),
}

impl DisplayWidth {
	/// Returns the width in columns.
	///
	/// `Auto` fails when no terminal is attached; callers writing to pipes or buffers must pass
	/// an explicit column count.
	pub fn resolve(&self) -> Result<usize> {
		match self {
			DisplayWidth::Columns(columns) => Ok(*columns),
			DisplayWidth::Auto => terminal_size::terminal_size()
				.map(|(width, _)| width.0 as usize)
				.context("no terminal attached, pass an explicit width"),
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		let value = value.trim();
		if value.eq_ignore_ascii_case("auto") {
			return Ok(DisplayWidth::Auto);
		}
		match value.parse::<usize>() {
			Ok(0) => bail!("width must be at least 1 column"),
			Ok(columns) => Ok(DisplayWidth::Columns(columns)),
			Err(_) => bail!("invalid width '{value}'. Expected a number of columns or 'auto'"),
		}
	}
}

impl Display for DisplayWidth {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			DisplayWidth::Auto => f.write_str("auto"),
			DisplayWidth::Columns(columns) => write!(f, "{columns}"),
		}
	}
}
