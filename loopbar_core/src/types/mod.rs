//! Closed option sets shared by the label formatter and the bar renderer.

mod bar_size;
pub use bar_size::*;

mod placement;
pub use placement::*;

mod precision;
pub use precision::*;
