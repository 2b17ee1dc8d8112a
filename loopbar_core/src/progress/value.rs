//! Conversion of `(current, total)` into an exact completion ratio.
//!
//! The ratio follows the loop convention `(current + 1) * 100 / total`: iterating `current` over
//! `0..total` reaches exactly 100% on the last iteration. The value is kept as an integer fraction
//! so fill lengths and rounded labels never pick up floating point error.

use crate::{error::InvalidArgument, types::Precision};
use anyhow::{Result, ensure};
use std::cmp::Ordering;

/// Completion ratio in `(0, 100]`, stored as the fraction `steps / total` of the work.
#[derive(Debug, Clone, Copy)]
pub struct Percentage {
	steps: u128,
	total: u128,
}

/// Checks `total > 0` and `0 <= current <= total`.
pub fn validate_inputs(current: i64, total: i64) -> Result<()> {
	ensure!(total > 0, InvalidArgument::new("total must be > 0"));
	ensure!(current >= 0, InvalidArgument::new("current must be >= 0"));
	ensure!(total >= current, InvalidArgument::new("total must be >= current"));
	Ok(())
}

/// Validates the inputs and computes `(current + 1) * 100 / total`, clamped to 100.
///
/// ```
/// use loopbar_core::compute_percentage;
///
/// assert_eq!(compute_percentage(0, 20).unwrap().as_f64(), 5.0);
/// assert!(compute_percentage(19, 20).unwrap().is_complete());
/// assert!(compute_percentage(3, 2).is_err());
/// ```
pub fn compute_percentage(current: i64, total: i64) -> Result<Percentage> {
	validate_inputs(current, total)?;
	Ok(Percentage::from_ratio(current as u128 + 1, total as u128))
}

impl Percentage {
	pub(crate) fn from_ratio(steps: u128, total: u128) -> Self {
		let total = total.max(1);
		Self {
			steps: steps.min(total),
			total,
		}
	}

	pub fn as_f64(&self) -> f64 {
		self.steps as f64 * 100.0 / self.total as f64
	}

	pub fn is_complete(&self) -> bool {
		self.steps == self.total
	}

	/// Whole percent, rounded down.
	pub fn whole(&self) -> u128 {
		self.steps * 100 / self.total
	}

	/// Number of filled cells in a bar `cells` wide: `floor(cells * percentage / 100)`.
	pub fn fill_count(&self, cells: usize) -> usize {
		if self.steps == 0 {
			return 0;
		}
		(cells as u128 * self.steps / self.total) as usize
	}

	/// The percentage scaled by `10^digits` and rounded half up.
	pub fn rounded(&self, precision: Precision) -> u128 {
		let scale = precision.scale();
		((self.steps * 100 * scale * 2 + self.total) / (self.total * 2)).min(100 * scale)
	}

	/// Plain decimal text with exactly `precision` fractional digits, e.g. `"42.50"`.
	pub fn format_value(&self, precision: Precision) -> String {
		let rounded = self.rounded(precision);
		let digits = precision.digits();
		if digits == 0 {
			return rounded.to_string();
		}
		let scale = precision.scale();
		format!("{}.{:0digits$}", rounded / scale, rounded % scale)
	}
}

impl PartialEq for Percentage {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Percentage {}

impl PartialOrd for Percentage {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Percentage {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.steps * other.total).cmp(&(other.steps * self.total))
	}
}
