// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `tracing` output to the browser console.

use std::io::{self, Write};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

/// Line-buffered writer handing each complete line to `emit`.
pub struct ConsoleWriter {
	buffer: Vec<u8>,
	emit: fn(&str),
}

impl ConsoleWriter {
	pub fn new(emit: fn(&str)) -> Self {
		Self {
			buffer: Vec::new(),
			emit,
		}
	}

	fn emit_line(&self, bytes: &[u8]) {
		let line = String::from_utf8_lossy(bytes);
		let line = line.trim_end_matches(['\n', '\r']);
		if !line.is_empty() {
			(self.emit)(line);
		}
	}
}

impl Drop for ConsoleWriter {
	fn drop(&mut self) {
		let _ = self.flush();
	}
}

impl Write for ConsoleWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.extend_from_slice(buf);
		while let Some(newline_pos) = self.buffer.iter().position(|&b| b == b'\n') {
			let line: Vec<u8> = self.buffer.drain(..=newline_pos).collect();
			self.emit_line(&line);
		}
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		if !self.buffer.is_empty() {
			let rest = std::mem::take(&mut self.buffer);
			self.emit_line(&rest);
		}
		Ok(())
	}
}

fn console_log(line: &str) {
	web_sys::console::log_1(&JsValue::from_str(line));
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleMakeWriter {
	emit: fn(&str),
}

impl ConsoleMakeWriter {
	pub fn new() -> Self {
		Self { emit: console_log }
	}

	pub fn with_emitter(emit: fn(&str)) -> Self {
		Self { emit }
	}
}

impl Default for ConsoleMakeWriter {
	fn default() -> Self {
		Self::new()
	}
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
	type Writer = ConsoleWriter;

	fn make_writer(&'a self) -> Self::Writer {
		ConsoleWriter::new(self.emit)
	}
}

/// Parse `filter`, falling back to `info` when it is not a valid directive.
pub fn env_filter(filter: &str) -> EnvFilter {
	EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(filter: &str) {
	let _ = tracing_subscriber::fmt()
		.with_writer(ConsoleMakeWriter::new())
		.with_env_filter(env_filter(filter))
		.without_time()
		.with_ansi(false)
		.with_target(true)
		.try_init();
}
