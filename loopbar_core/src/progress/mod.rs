//! Frame rendering, leaf first: value, label, elapsed suffix, bar.
//!
//! # Examples
//!
//! ```rust
//! use loopbar_core::progress::*;
//! use loopbar_core::{BarSize, Placement, Precision};
//!
//! let options = RenderOptions::new(80)
//! 	.with_size(BarSize::Medium)
//! 	.with_placement(Placement::Left)
//! 	.with_precision(Precision::Low);
//!
//! for current in 0..10 {
//! 	let frame = render(current, 10, &options).unwrap();
//! 	assert_eq!(frame.chars().count(), 40);
//! }
//! ```

mod bar;
mod elapsed;
mod label;
mod percent;
mod value;

pub use bar::{RenderOptions, render};
pub use elapsed::format_elapsed;
pub use label::{format_label, numeric_width, reserved_label_width};
pub use percent::render_percentage;
pub use value::{Percentage, compute_percentage, validate_inputs};
