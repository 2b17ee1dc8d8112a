use super::elapsed_from_millis;
use anyhow::Result;
use loopbar::core::render_percentage;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// zero-based index of the current item
	#[arg(allow_negative_numbers = true)]
	current: i64,

	/// total number of items
	#[arg(allow_negative_numbers = true)]
	total: i64,

	/// elapsed time in milliseconds, appended after the percentage
	#[arg(long, short, value_name = "MS")]
	elapsed_ms: Option<u64>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let elapsed = elapsed_from_millis(arguments.elapsed_ms);
	println!("{}", render_percentage(arguments.current, arguments.total, elapsed)?);
	Ok(())
}
