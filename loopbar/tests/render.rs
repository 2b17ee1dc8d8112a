#![cfg(feature = "cli")]

mod test_utilities;
use assert_fs::{NamedTempFile, prelude::*};
use pretty_assertions::assert_eq;
use rstest::rstest;
use test_utilities::*;

#[rstest]
#[case("render 9 20 -w 255 -s small", "[######50%     ]")]
#[case("render 19 20 -w 255 -s small", "[#####100%#####]")]
#[case("render 0 20 -w 16 -p left", "  5% [         ]")]
#[case("render 9 20 -w 16 -p right", "[####     ]  50%")]
#[case("render 9 20 -w 16 -p none --fill =", "[=======       ]")]
#[case("render 9 20 -w 16 --precision 1", "[#####50.0%    ]")]
#[case("render 9 20 -w 16 --precision 9 -p right", "[##   ]  50.000%")]
#[case("render 9 20 -w 23 -s small -e 1000", "[######50%     ] 01.000")]
#[case("render 9 20 -w 255 -s s -p center", "[######50%     ]")]
#[case("render 9 20 -w 16 -s auto -p hidden", "[#######       ]")]
fn e2e_render(#[case] args: &str, #[case] expected: &str) {
	let o = loopbar_output(args);
	assert!(o.success, "command failed: {args}\nstderr: {}", o.stderr);
	assert_eq!(o.stdout, format!("{expected}\n"));
}

#[test]
fn e2e_render_full_width_length() {
	for current in [0, 5, 19] {
		let o = loopbar_output(&format!("render {current} 20 -w 255 -s full -p none"));
		assert!(o.success);
		assert_eq!(o.stdout.trim_end_matches('\n').chars().count(), 255);
	}
}

#[test]
fn e2e_render_with_config() {
	let file = NamedTempFile::new("bar.yml").unwrap();
	file.write_str("fill: \"*\"\nplacement: right\nsize: small\nwidth: 100\n").unwrap();

	let o = loopbar_output(&format!("render 9 20 --config {}", file.path().display()));
	assert!(o.success, "stderr: {}", o.stderr);
	assert_eq!(o.stdout, "[****     ]  50%\n");

	let o = loopbar_output(&format!("render 9 20 --config {} -p none", file.path().display()));
	assert_eq!(o.stdout, "[*******       ]\n");
}

#[rstest]
#[case("render 0 -1 -w 40", "invalid argument: total must be > 0")]
#[case("render -1 5 -w 40", "invalid argument: current must be >= 0")]
#[case("render 6 5 -w 40", "invalid argument: total must be >= current")]
fn e2e_render_invalid_arguments(#[case] args: &str, #[case] message: &str) {
	let o = loopbar_output(args);
	assert!(!o.success);
	assert_eq!(o.code, 1);
	assert!(o.stdout.is_empty());
	assert!(o.stderr.contains(message), "stderr: {}", o.stderr);
}
