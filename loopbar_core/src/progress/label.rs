//! Percentage label text.
//!
//! Labels outside the bar (`Left`/`Right`) are right-aligned in a column whose width depends only
//! on the precision, so the bar edge does not jump between frames. Labels inside the bar
//! (`Middle`) are not padded; the renderer centers whatever length they have.
//!
//! Rounding is half up at the requested number of fractional digits.

use super::Percentage;
use crate::types::{Placement, Precision};

/// Width of the numeric part of an outside label: `###`, `###.#`, `###.##` or `###.###`.
pub fn numeric_width(precision: Precision) -> usize {
	match precision {
		Precision::Integer => 3,
		Precision::Low => 5,
		Precision::Medium => 6,
		Precision::High => 7,
	}
}

/// Columns an outside label takes from the bar, including `%` and the separating space.
pub fn reserved_label_width(precision: Precision) -> usize {
	numeric_width(precision) + 2
}

/// Renders `percentage` as label text for `placement`.
///
/// ```
/// use loopbar_core::{Placement, Precision, compute_percentage, format_label};
///
/// let percentage = compute_percentage(0, 20).unwrap();
/// assert_eq!(format_label(&percentage, Placement::Left, Precision::Integer), "  5%");
/// assert_eq!(format_label(&percentage, Placement::Middle, Precision::Low), "5.0%");
/// assert_eq!(format_label(&percentage, Placement::None, Precision::High), "");
/// ```
pub fn format_label(percentage: &Percentage, placement: Placement, precision: Precision) -> String {
	match placement {
		Placement::None => String::new(),
		Placement::Left | Placement::Right => {
			let width = numeric_width(precision);
			format!("{:>width$}%", percentage.format_value(precision))
		}
		Placement::Middle => format!("{}%", percentage.format_value(precision)),
	}
}
