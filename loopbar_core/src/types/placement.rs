//! Where the percentage label sits relative to the bracketed bar.

use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Display;

#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Placement {
	/// No label at all.
	#[cfg_attr(feature = "cli", value(alias = "hidden"))]
	None,
	/// `"###% [####    ]"`
	Left,
	/// `"[####42%    ]"`, written over the bar interior.
	#[default]
	#[cfg_attr(feature = "cli", value(alias = "center"))]
	Middle,
	/// `"[####    ] ###%"`
	Right,
}

impl Placement {
	pub fn as_str(&self) -> &str {
		match self {
			Placement::None => "none",
			Placement::Left => "left",
			Placement::Middle => "middle",
			Placement::Right => "right",
		}
	}

	/// Left and right labels sit outside the brackets and take columns away from the bar.
	pub fn is_outside(&self) -> bool {
		matches!(self, Placement::Left | Placement::Right)
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"none" | "hidden" => Placement::None,
			"left" => Placement::Left,
			"middle" | "center" => Placement::Middle,
			"right" => Placement::Right,
			_ => bail!("Unknown placement '{value}'. Expected none, left, middle or right"),
		})
	}
}

impl TryFrom<String> for Placement {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		Self::parse_str(&value)
	}
}

impl Display for Placement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("none", Placement::None)]
	#[case("Left", Placement::Left)]
	#[case(" middle ", Placement::Middle)]
	#[case("center", Placement::Middle)]
	#[case("RIGHT", Placement::Right)]
	fn test_parse_str(#[case] input: &str, #[case] expected: Placement) {
		assert_eq!(Placement::parse_str(input).unwrap(), expected);
	}

	#[test]
	fn test_parse_str_unknown() {
		let err = Placement::parse_str("top").unwrap_err();
		assert!(err.to_string().starts_with("Unknown placement 'top'"));
	}

	#[test]
	fn test_display_and_default() {
		assert_eq!(Placement::default(), Placement::Middle);
		assert_eq!(Placement::Right.to_string(), "right");
		assert!(Placement::Left.is_outside());
		assert!(!Placement::Middle.is_outside());
		assert!(!Placement::None.is_outside());
	}
}
