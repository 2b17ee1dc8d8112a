//! Bracketed bar layout.
//!
//! One call to [`render`] walks through a fixed sequence:
//!
//! 1. resolve the target width from the [`BarSize`] and the available display width,
//!    minus two columns for the brackets
//! 2. shrink the bar by the elapsed suffix if appending it would overflow the display
//! 3. shrink the bar by the reserved label width for `Left`/`Right` labels
//! 4. fill `floor(cells * percentage / 100)` cells
//! 5. assemble `[label ]` `[` cells `]` `[ label]` `[elapsed]`
//! 6. for `Middle`, overwrite the centre cells with the unpadded label
//!
//! The result is a pure function of its arguments.

use super::{Percentage, compute_percentage, format_elapsed, format_label, reserved_label_width};
use crate::types::{BarSize, Placement, Precision};
use anyhow::Result;
use std::time::Duration;

/// Everything a single frame depends on besides `(current, total)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
	/// Columns the display offers.
	pub width: usize,
	/// Glyph of a filled cell. Must occupy one column: no control characters or whitespace.
	pub fill: char,
	pub placement: Placement,
	pub precision: Precision,
	pub elapsed: Option<Duration>,
	pub size: BarSize,
}

impl RenderOptions {
	pub const DEFAULT_FILL: char = '#';

	/// Default options for a display `width` columns wide.
	pub fn new(width: usize) -> Self {
		Self {
			width,
			fill: Self::DEFAULT_FILL,
			placement: Placement::default(),
			precision: Precision::default(),
			elapsed: None,
			size: BarSize::default(),
		}
	}

	pub fn with_width(mut self, width: usize) -> Self {
		self.width = width;
		self
	}

	/// Sets the fill glyph. Untrusted input should go through [`crate::config::parse_fill`] first.
	pub fn with_fill(mut self, fill: char) -> Self {
		debug_assert!(
			!fill.is_control() && !fill.is_whitespace(),
			"fill must be a printable character, got {fill:?}"
		);
		self.fill = fill;
		self
	}

	pub fn with_placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	pub fn with_precision(mut self, precision: Precision) -> Self {
		self.precision = precision;
		self
	}

	pub fn with_elapsed(mut self, elapsed: Option<Duration>) -> Self {
		self.elapsed = elapsed;
		self
	}

	pub fn with_size(mut self, size: BarSize) -> Self {
		self.size = size;
		self
	}
}

/// Column budget of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BarLayout {
	/// Cells between the brackets.
	cells: usize,
	suffix: String,
}

impl BarLayout {
	fn new(options: &RenderOptions) -> Self {
		let target = options.size.target_width(options.width);
		let mut required = 2;
		let mut cells = target.saturating_sub(2);

		let suffix = options.elapsed.map(format_elapsed).unwrap_or_default();
		let suffix_len = suffix.chars().count();
		if target + suffix_len > options.width {
			cells = cells.saturating_sub(suffix_len);
			required += suffix_len;
		}

		if options.placement.is_outside() {
			let reserved = reserved_label_width(options.precision);
			cells = cells.saturating_sub(reserved);
			required += reserved;
		}

		if target <= required {
			log::warn!("target width {target} leaves no room for bar cells (needs more than {required} columns)");
		}

		Self { cells, suffix }
	}

	fn draw(&self, percentage: &Percentage, options: &RenderOptions) -> String {
		let label = format_label(percentage, options.placement, options.precision);
		let filled = percentage.fill_count(self.cells);

		let mut cells: Vec<char> = (0..self.cells)
			.map(|index| if index < filled { options.fill } else { ' ' })
			.collect();

		if options.placement == Placement::Middle {
			splice_centered(&mut cells, &label);
		}

		let mut line = String::with_capacity(self.cells + label.len() + self.suffix.len() + 4);
		if options.placement == Placement::Left {
			line.push_str(&label);
			line.push(' ');
		}
		line.push('[');
		line.extend(cells);
		line.push(']');
		if options.placement == Placement::Right {
			line.push(' ');
			line.push_str(&label);
		}
		line.push_str(&self.suffix);
		line
	}
}

/// Overwrites the cells around the middle of `cells` with `label`.
///
/// The label starts at `cells.len() / 2 - label.len() / 2`, so an odd-length label puts its extra
/// character after the centre. A label wider than the bar is cut at the right bracket.
fn splice_centered(cells: &mut [char], label: &str) {
	let length = label.chars().count();
	let start = (cells.len() / 2).saturating_sub(length / 2);
	for (cell, glyph) in cells.iter_mut().skip(start).zip(label.chars()) {
		*cell = glyph;
	}
}

/// Renders one frame of a bracketed progress bar.
///
/// Fails with [`InvalidArgument`](crate::InvalidArgument) unless `total > 0` and
/// `0 <= current <= total`.
///
/// ```
/// use loopbar_core::{BarSize, Placement, RenderOptions, render};
///
/// let options = RenderOptions::new(255).with_size(BarSize::Small);
/// assert_eq!(render(9, 20, &options).unwrap(), "[######50%     ]");
///
/// let options = options.with_placement(Placement::Right);
/// assert_eq!(render(9, 20, &options).unwrap(), "[####     ]  50%");
/// ```
pub fn render(current: i64, total: i64, options: &RenderOptions) -> Result<String> {
	let percentage = compute_percentage(current, total)?;
	let layout = BarLayout::new(options);
	log::trace!(
		"render {current}/{total}: {} cells, {} placement, precision {}",
		layout.cells,
		options.placement,
		options.precision
	);
	Ok(layout.draw(&percentage, options))
}
