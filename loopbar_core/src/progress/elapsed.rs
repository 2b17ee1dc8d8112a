use std::time::Duration;

/// Formats an elapsed duration as a suffix with one leading space.
///
/// The coarsest sufficient format is chosen:
/// - under a minute: `" SS.fff"`
/// - under an hour: `" MM:SS"`
/// - otherwise: `" HH:MM:SS"`, hours not wrapped at a day
///
/// ```
/// use loopbar_core::format_elapsed;
/// use std::time::Duration;
///
/// assert_eq!(format_elapsed(Duration::from_secs(1)), " 01.000");
/// assert_eq!(format_elapsed(Duration::from_secs(190)), " 03:10");
/// assert_eq!(format_elapsed(Duration::from_secs(7_390)), " 02:03:10");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
	let total = elapsed.as_secs();
	let hours = total / 3_600;
	let minutes = (total % 3_600) / 60;
	let seconds = total % 60;

	if total < 60 {
		format!(" {seconds:02}.{:03}", elapsed.subsec_millis())
	} else if total < 3_600 {
		format!(" {minutes:02}:{seconds:02}")
	} else {
		format!(" {hours:02}:{minutes:02}:{seconds:02}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, " 00.000")]
	#[case(250, " 00.250")]
	#[case(1_000, " 01.000")]
	#[case(59_999, " 59.999")]
	#[case(60_000, " 01:00")]
	#[case(190_000, " 03:10")]
	#[case(3_599_999, " 59:59")]
	#[case(3_600_000, " 01:00:00")]
	#[case(7_390_000, " 02:03:10")]
	#[case(93_600_000, " 26:00:00")]
	fn test_format_elapsed(#[case] millis: u64, #[case] expected: &str) {
		assert_eq!(format_elapsed(Duration::from_millis(millis)), expected);
	}
}
