//! Named target widths for a rendered bar.
//!
//! `Small`, `Medium` and `Big` map to fixed column counts; `Full` means "whatever the display
//! offers". A fixed size is only honoured while it is narrower than the available width.
//!
//! ```
//! use loopbar_core::BarSize;
//!
//! assert_eq!(BarSize::Medium.columns(), Some(40));
//! assert_eq!(BarSize::Big.target_width(60), 60);
//! assert_eq!(BarSize::Small.target_width(80), 16);
//! ```

use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;

#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum BarSize {
	#[cfg_attr(feature = "cli", value(alias = "s"))]
	Small,
	#[cfg_attr(feature = "cli", value(alias = "m"))]
	Medium,
	#[cfg_attr(feature = "cli", value(alias = "b"))]
	Big,
	#[default]
	#[cfg_attr(feature = "cli", value(alias = "auto"))]
	Full,
}

impl BarSize {
	/// Conventional width of a display that cannot be measured, e.g. a pipe or a test.
	pub const FULL_COLUMNS: usize = 255;

	/// Fixed column count of the category, `None` for [`BarSize::Full`].
	pub fn columns(&self) -> Option<usize> {
		match self {
			BarSize::Small => Some(16),
			BarSize::Medium => Some(40),
			BarSize::Big => Some(88),
			BarSize::Full => None,
		}
	}

	/// Resolves the width a frame should occupy on a display `available` columns wide.
	pub fn target_width(&self, available: usize) -> usize {
		match self.columns() {
			Some(columns) if columns < available => columns,
			_ => available,
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			BarSize::Small => "small",
			BarSize::Medium => "medium",
			BarSize::Big => "big",
			BarSize::Full => "full",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"small" | "s" => BarSize::Small,
			"medium" | "m" => BarSize::Medium,
			"big" | "b" => BarSize::Big,
			"full" | "auto" => BarSize::Full,
			_ => bail!("Unknown bar size '{value}'. Expected small, medium, big or full"),
		})
	}
}

impl TryFrom<String> for BarSize {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		Self::parse_str(&value)
	}
}

impl Display for BarSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(BarSize::Small, Some(16))]
	#[case(BarSize::Medium, Some(40))]
	#[case(BarSize::Big, Some(88))]
	#[case(BarSize::Full, None)]
	fn test_columns(#[case] size: BarSize, #[case] expected: Option<usize>) {
		assert_eq!(size.columns(), expected);
	}

	#[rstest]
	#[case(BarSize::Small, 255, 16)]
	#[case(BarSize::Big, 255, 88)]
	#[case(BarSize::Big, 88, 88)]
	#[case(BarSize::Big, 80, 80)]
	#[case(BarSize::Full, 120, 120)]
	fn test_target_width(#[case] size: BarSize, #[case] available: usize, #[case] expected: usize) {
		assert_eq!(size.target_width(available), expected);
	}

	#[test]
	fn test_parse_str() {
		assert_eq!(BarSize::parse_str("Small").unwrap(), BarSize::Small);
		assert_eq!(BarSize::parse_str("auto").unwrap(), BarSize::Full);
		assert_eq!(BarSize::parse_str("b").unwrap(), BarSize::Big);
		assert!(BarSize::parse_str("huge").is_err());
	}

	#[test]
	fn test_display() {
		assert_eq!(BarSize::default().to_string(), "full");
		assert_eq!(BarSize::Medium.to_string(), "medium");
	}
}
