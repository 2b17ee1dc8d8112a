//! Display adapter: applies rendered frames to an output surface.
//!
//! The layout engine in `loopbar_core` never touches a device. [`Terminal`] owns the writer and
//! handles carriage returns, cursor visibility and the final-frame protocol; [`DisplayWidth`]
//! decides how many columns a frame may use.

mod terminal;
mod width;

pub use terminal::{HIDE_CURSOR, SHOW_CURSOR, Terminal};
pub use width::DisplayWidth;
