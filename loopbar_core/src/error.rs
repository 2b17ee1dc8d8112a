//! The single error kind raised by the layout engine.
//!
//! Rendering functions return [`anyhow::Result`]. Invalid `(current, total)` pairs are reported
//! as an [`InvalidArgument`] wrapped in the `anyhow::Error`, so callers that need to tell a bad
//! call site apart from other failures can downcast:
//!
//! ```rust
//! use loopbar_core::{InvalidArgument, compute_percentage};
//!
//! let err = compute_percentage(0, -1).unwrap_err();
//! let invalid = err.downcast_ref::<InvalidArgument>().unwrap();
//! assert_eq!(invalid.message(), "total must be > 0");
//! ```

use std::fmt::Display;

/// A caller passed values that violate `total > 0` and `0 <= current <= total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
	message: String,
}

impl InvalidArgument {
	pub fn new(message: &str) -> Self {
		Self {
			message: message.to_owned(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

impl Display for InvalidArgument {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "invalid argument: {}", self.message)
	}
}

impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		let err = InvalidArgument::new("total must be > 0");
		assert_eq!(err.to_string(), "invalid argument: total must be > 0");
		assert_eq!(err.message(), "total must be > 0");
	}

	#[test]
	fn test_downcast_through_anyhow() {
		let err = anyhow::Error::from(InvalidArgument::new("current must be >= 0"));
		assert_eq!(
			err.downcast_ref::<InvalidArgument>(),
			Some(&InvalidArgument::new("current must be >= 0"))
		);
	}
}
