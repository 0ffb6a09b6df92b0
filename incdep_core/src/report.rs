use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::IncdepResult;
use crate::resolver::Resolution;

/// A single entry in the resolution report stream, in discovery order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportEvent {
	/// A quoted include directive was discovered while scanning `file`.
	Include { file: PathBuf, target: String },
	/// A base-name was dequeued and its expansion began.
	Expand { name: String },
}

/// Sink for resolution output. The resolver reports every discovered include
/// target and every expansion as a side effect, interleaved in the order the
/// traversal produces them.
pub trait Reporter {
	fn include_found(&mut self, file: &Path, target: &str) -> IncdepResult<()>;
	fn expansion_started(&mut self, name: &str) -> IncdepResult<()>;
	/// Called once after the queue empties, with the run summary.
	fn finish(&mut self, resolution: &Resolution) -> IncdepResult<()>;
}

/// The plain-text protocol: one verbatim line per discovered include target,
/// and a `---- <name>` marker line when an expansion begins. Intended for
/// human inspection and ad-hoc grep post-processing.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
	writer: W,
}

impl<W: Write> TextReporter<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}
}

impl<W: Write> Reporter for TextReporter<W> {
	fn include_found(&mut self, _file: &Path, target: &str) -> IncdepResult<()> {
		writeln!(self.writer, "{target}")?;
		Ok(())
	}

	fn expansion_started(&mut self, name: &str) -> IncdepResult<()> {
		writeln!(self.writer, "---- {name}")?;
		Ok(())
	}

	fn finish(&mut self, _resolution: &Resolution) -> IncdepResult<()> {
		self.writer.flush()?;
		Ok(())
	}
}

/// Machine-readable alternative: buffers the event stream and emits a single
/// JSON document when the run completes.
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
	writer: W,
	events: Vec<ReportEvent>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
	events: &'a [ReportEvent],
	expanded: &'a [String],
	scanned_files: usize,
	includes_found: usize,
}

impl<W: Write> JsonReporter<W> {
	pub fn new(writer: W) -> Self {
		Self {
			writer,
			events: Vec::new(),
		}
	}
}

impl<W: Write> Reporter for JsonReporter<W> {
	fn include_found(&mut self, file: &Path, target: &str) -> IncdepResult<()> {
		self.events.push(ReportEvent::Include {
			file: file.to_path_buf(),
			target: target.to_string(),
		});
		Ok(())
	}

	fn expansion_started(&mut self, name: &str) -> IncdepResult<()> {
		self.events.push(ReportEvent::Expand {
			name: name.to_string(),
		});
		Ok(())
	}

	fn finish(&mut self, resolution: &Resolution) -> IncdepResult<()> {
		let report = JsonReport {
			events: &self.events,
			expanded: &resolution.expanded,
			scanned_files: resolution.scanned_files,
			includes_found: resolution.includes_found,
		};
		serde_json::to_writer_pretty(&mut self.writer, &report)
			.map_err(std::io::Error::other)?;
		writeln!(self.writer)?;
		self.writer.flush()?;
		Ok(())
	}
}
