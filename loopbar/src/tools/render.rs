use super::{BarArgs, elapsed_from_millis};
use anyhow::Result;
use loopbar::core::render;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// zero-based index of the current item
	#[arg(allow_negative_numbers = true)]
	current: i64,

	/// total number of items
	#[arg(allow_negative_numbers = true)]
	total: i64,

	/// elapsed time in milliseconds, appended after the bar
	#[arg(long, short, value_name = "MS")]
	elapsed_ms: Option<u64>,

	#[command(flatten)]
	bar: BarArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let (display, options) = arguments.bar.load()?;
	let options = options
		.with_width(display.resolve()?)
		.with_elapsed(elapsed_from_millis(arguments.elapsed_ms));

	println!("{}", render(arguments.current, arguments.total, &options)?);
	Ok(())
}
