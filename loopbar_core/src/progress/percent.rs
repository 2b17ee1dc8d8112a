use super::{compute_percentage, format_elapsed};
use anyhow::Result;
use std::time::Duration;

/// Renders the bare percentage indicator: whole percent (rounded down) right-aligned in three
/// columns, `%`, and the optional elapsed suffix.
///
/// ```
/// use loopbar_core::render_percentage;
/// use std::time::Duration;
///
/// assert_eq!(render_percentage(0, 20, None).unwrap(), "  5%");
/// assert_eq!(render_percentage(19, 20, Some(Duration::from_secs(190))).unwrap(), "100% 03:10");
/// ```
pub fn render_percentage(current: i64, total: i64, elapsed: Option<Duration>) -> Result<String> {
	let percentage = compute_percentage(current, total)?;
	let mut line = format!("{:>3}%", percentage.whole());
	if let Some(elapsed) = elapsed {
		line.push_str(&format_elapsed(elapsed));
	}
	Ok(line)
}
