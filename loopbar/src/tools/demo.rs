use super::BarArgs;
use anyhow::Result;
use loopbar::{core::validate_inputs, display::Terminal};
use std::{
	thread,
	time::{Duration, Instant},
};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// number of loop iterations
	#[arg(long, short, default_value_t = 50, value_name = "int", allow_negative_numbers = true)]
	total: i64,

	/// pause between frames in milliseconds
	#[arg(long, short, default_value_t = 40, value_name = "MS")]
	delay_ms: u64,

	/// show the elapsed time after the bar
	#[arg(long, short)]
	elapsed: bool,

	/// blank the line when the loop is done instead of keeping the last frame
	#[arg(long)]
	auto_hide: bool,

	/// draw the bare percentage instead of a bar
	#[arg(long)]
	bare: bool,

	#[command(flatten)]
	bar: BarArgs,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	validate_inputs(0, arguments.total)?;
	let (display, options) = arguments.bar.load()?;
	let mut terminal = Terminal::stderr(display);
	let delay = Duration::from_millis(arguments.delay_ms);
	let start = Instant::now();

	log::info!("demo loop over {} items", arguments.total);

	for current in 0..arguments.total {
		let elapsed = arguments.elapsed.then(|| start.elapsed());
		if arguments.bare {
			terminal.write_percentage(current, arguments.total, elapsed, arguments.auto_hide)?;
		} else {
			let options = options.clone().with_elapsed(elapsed);
			terminal.write(current, arguments.total, &options, arguments.auto_hide)?;
		}
		thread::sleep(delay);
	}

	Ok(())
}
