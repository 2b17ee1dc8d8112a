//! Pure layout engine for fixed-width textual progress indicators.
//!
//! Turns `(current, total)` plus a set of [`RenderOptions`] into an exact string: either a bare
//! percentage (`" 42%"`) or a bracketed bar (`"[#####  42%      ]"`) with an optional elapsed-time
//! suffix. Nothing here touches a terminal; writing frames is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use loopbar_core::{Placement, RenderOptions, render};
//!
//! let options = RenderOptions::new(16).with_placement(Placement::None);
//! assert_eq!(render(9, 20, &options).unwrap(), "[#######       ]");
//! ```

pub mod config;
pub mod error;
pub mod progress;
pub mod types;

pub use config::RenderConfig;
pub use error::InvalidArgument;
pub use progress::*;
pub use types::*;
