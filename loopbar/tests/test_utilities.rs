#![allow(unused)]

use assert_cmd::{Command, cargo};

#[cfg(windows)]
pub const BINARY_NAME: &str = "loopbar.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "loopbar";

/// Helper to create a Command for the loopbar binary.
pub fn loopbar_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Captured result of a finished loopbar invocation.
pub struct Output {
	pub success: bool,
	pub code: i32,
	pub stdout: String,
	pub stderr: String,
}

/// Runs loopbar with space separated arguments and captures everything it printed.
pub fn loopbar_output(args: &str) -> Output {
	let output = loopbar_cmd().args(args.split_whitespace()).output().unwrap();
	Output {
		success: output.status.success(),
		code: output.status.code().unwrap_or(-1),
		stdout: String::from_utf8(output.stdout).unwrap(),
		stderr: String::from_utf8(output.stderr).unwrap(),
	}
}
