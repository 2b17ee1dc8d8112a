//! Writes rendered frames to a line-oriented surface.
//!
//! Every frame starts with a carriage return so it overwrites the previous one. While a loop is
//! running the cursor is hidden; the final frame (`current + 1 >= total`) either ends the line or,
//! with `auto_hide`, blanks it and leaves the cursor at column 0. Dropping a `Terminal` mid-loop
//! shows the cursor again.

use super::DisplayWidth;
use anyhow::{Context, Result};
use loopbar_core::{RenderOptions, render, render_percentage};
use std::io::{self, Stderr, Write};
use std::time::Duration;

pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

pub struct Terminal<W: Write> {
	output: W,
	width: DisplayWidth,
	cursor_hidden: bool,
}

impl Terminal<Stderr> {
	pub fn stderr(width: DisplayWidth) -> Self {
		Terminal::new(io::stderr(), width)
	}
}

impl<W: Write> Terminal<W> {
	pub fn new(output: W, width: DisplayWidth) -> Self {
		Self {
			output,
			width,
			cursor_hidden: false,
		}
	}

	pub fn width(&self) -> Result<usize> {
		self.width.resolve()
	}

	/// Renders and writes one bar frame. The width in `options` is replaced by the display's.
	pub fn write(&mut self, current: i64, total: i64, options: &RenderOptions, auto_hide: bool) -> Result<()> {
		let options = options.clone().with_width(self.width()?);
		let frame = render(current, total, &options)?;
		self.write_frame(&frame, current >= total - 1, auto_hide)
	}

	/// Writes one bar frame followed by a line break.
	pub fn write_line(&mut self, current: i64, total: i64, options: &RenderOptions) -> Result<()> {
		let options = options.clone().with_width(self.width()?);
		let frame = render(current, total, &options)?;
		writeln!(self.output, "{frame}").context("writing progress line")?;
		self.flush()
	}

	/// Writes one frame of the bare percentage indicator.
	pub fn write_percentage(
		&mut self,
		current: i64,
		total: i64,
		elapsed: Option<Duration>,
		auto_hide: bool,
	) -> Result<()> {
		let frame = render_percentage(current, total, elapsed)?;
		self.write_frame(&frame, current >= total - 1, auto_hide)
	}

	/// Hands back the writer. A cursor still hidden by an unfinished loop is shown first.
	pub fn into_inner(mut self) -> W
	where
		W: Default,
	{
		self.restore_cursor();
		std::mem::take(&mut self.output)
	}

	fn write_frame(&mut self, frame: &str, last: bool, auto_hide: bool) -> Result<()> {
		if !last && !self.cursor_hidden {
			self.output.write_all(HIDE_CURSOR.as_bytes()).context("hiding cursor")?;
			self.cursor_hidden = true;
		}

		write!(self.output, "\r{frame}").context("writing progress frame")?;

		if last {
			if auto_hide {
				let blank = " ".repeat(frame.chars().count());
				write!(self.output, "\r{blank}\r").context("clearing progress line")?;
			} else {
				self.output.write_all(b"\n").context("ending progress line")?;
			}
			self.output.write_all(SHOW_CURSOR.as_bytes()).context("showing cursor")?;
			self.cursor_hidden = false;
			log::debug!("progress finished, auto_hide={auto_hide}");
		}

		self.flush()
	}

	fn flush(&mut self) -> Result<()> {
		self.output.flush().context("flushing progress output")
	}

	fn restore_cursor(&mut self) {
		if !self.cursor_hidden {
			return;
		}
		self.cursor_hidden = false;
		let shown = self.output.write_all(SHOW_CURSOR.as_bytes()).and_then(|()| self.output.flush());
		if let Err(err) = shown {
			log::warn!("could not show cursor again: {err}");
		}
	}
}

impl<W: Write> Drop for Terminal<W> {
	fn drop(&mut self) {
		self.restore_cursor();
	}
}
