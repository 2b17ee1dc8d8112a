//! # loopbar
//!
//! Fixed-width progress bars for loops, rendered by [`loopbar_core`] and written to a terminal by
//! [`display::Terminal`].
//!
//! ```rust
//! use loopbar::display::{DisplayWidth, Terminal};
//! use loopbar::core::{Placement, RenderOptions};
//!
//! let mut terminal = Terminal::new(Vec::new(), DisplayWidth::Columns(24));
//! let options = RenderOptions::new(0).with_placement(Placement::Right);
//! for current in 0..10 {
//!     terminal.write(current, 10, &options, false).unwrap();
//! }
//! let output = String::from_utf8(terminal.into_inner()).unwrap();
//! assert!(output.ends_with("[#################] 100%\n\u{1b}[?25h"));
//! ```

pub mod display;

pub use loopbar_core as core;
