use std::path::Path;

use tempfile::TempDir;

use crate::IncdepResult;
use crate::Reporter;
use crate::ReportEvent;
use crate::resolver::Resolution;

/// Reporter that records the event stream for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
	pub events: Vec<ReportEvent>,
	pub finished: bool,
}

impl RecordingReporter {
	/// The `---- name` markers, in emission order.
	pub fn markers(&self) -> Vec<String> {
		self.events
			.iter()
			.filter_map(|event| match event {
				ReportEvent::Expand { name } => Some(name.clone()),
				ReportEvent::Include { .. } => None,
			})
			.collect()
	}

	/// The discovered include targets, in emission order.
	pub fn include_targets(&self) -> Vec<String> {
		self.events
			.iter()
			.filter_map(|event| match event {
				ReportEvent::Include { target, .. } => Some(target.clone()),
				ReportEvent::Expand { .. } => None,
			})
			.collect()
	}
}

impl Reporter for RecordingReporter {
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

	fn finish(&mut self, _resolution: &Resolution) -> IncdepResult<()> {
		self.finished = true;
		Ok(())
	}
}

/// Create a temporary source tree from `(relative path, content)` pairs.
pub fn source_tree(files: &[(&str, &str)]) -> TempDir {
	let tmp = tempfile::tempdir().expect("failed to create tempdir");
	for (relative, content) in files {
		let path = tmp.path().join(relative);
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent).expect("failed to create parent dirs");
		}
		std::fs::write(path, content).expect("failed to write fixture file");
	}
	tmp
}

/// Reference graph used across resolver tests: `Foo.h → Bar.h`,
/// `Foo.cpp → Foo.h + Baz.h`, `Baz.h → Bar.h`, `Bar.h` is a leaf.
pub fn reference_tree() -> TempDir {
	source_tree(&[
		("Foo.h", "#include \"Bar.h\"\n"),
		("Foo.cpp", "#include \"Foo.h\"\n#include \"Baz.h\"\n"),
		("Bar.h", "// no includes\n"),
		("Baz.h", "#include \"Bar.h\"\n"),
	])
}
