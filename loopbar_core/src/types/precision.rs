//! Number of fractional digits shown in a percentage label.
//!
//! Out-of-range requests are a caller preference, not an error: they are clamped into
//! `Integer..=High`.
//!
//! ```
//! use loopbar_core::Precision;
//!
//! assert_eq!(Precision::clamp(-4), Precision::Integer);
//! assert_eq!(Precision::clamp(2), Precision::Medium);
//! assert_eq!(Precision::clamp(9), Precision::High);
//! ```

use serde::Deserialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "i64")]
pub enum Precision {
	/// `42%`
	#[default]
	Integer = 0,
	/// `42.0%`
	Low = 1,
	/// `42.00%`
	Medium = 2,
	/// `42.000%`
	High = 3,
}

impl Precision {
	/// Maps any requested digit count onto the closed set, saturating at both ends.
	pub fn clamp(digits: i64) -> Self {
		match digits {
			i64::MIN..=0 => Precision::Integer,
			1 => Precision::Low,
			2 => Precision::Medium,
			_ => Precision::High,
		}
	}

	pub fn digits(self) -> usize {
		self as usize
	}

	/// `10^digits`, the scale used for exact integer rounding.
	pub(crate) fn scale(self) -> u128 {
		10u128.pow(self as u32)
	}
}

impl From<i64> for Precision {
	fn from(digits: i64) -> Self {
		Precision::clamp(digits)
	}
}

impl Display for Precision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.digits())
	}
}
