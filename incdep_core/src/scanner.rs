use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use crate::IncdepError;
use crate::IncdepResult;

/// A single locally-quoted include directive extracted from a source file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IncludeDirective {
	/// The quoted path exactly as written in the source text.
	pub target: String,
	/// The target's file name with directory and extension stripped.
	pub base_name: String,
}

/// Scan a source file for locally-quoted include directives.
///
/// Only the double-quoted form (`#include "path/to/File.h"`) participates in
/// the local dependency graph; angle-bracket includes are system headers and
/// are ignored. Duplicate directives are returned as-is; deduplication is
/// the resolver's job, at dequeue time.
pub fn scan_includes(path: &Path) -> IncdepResult<Vec<IncludeDirective>> {
	let file = File::open(path).map_err(|source| IncdepError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;
	let reader = BufReader::new(file);

	let mut directives = Vec::new();
	for line in reader.lines() {
		let line = line.map_err(|source| IncdepError::FileRead {
			path: path.to_path_buf(),
			source,
		})?;

		if let Some(target) = parse_include_line(&line) {
			let base_name = base_name_of(target);
			// A target with no file stem (e.g. a trailing slash) names
			// nothing expandable.
			if base_name.is_empty() {
				continue;
			}

			directives.push(IncludeDirective {
				target: target.to_string(),
				base_name,
			});
		}
	}

	tracing::debug!(
		path = %path.display(),
		count = directives.len(),
		"scanned file for quoted includes"
	);

	Ok(directives)
}

/// Match a line against the quoted include pattern: optional leading
/// whitespace, `#include`, at least one whitespace character, then a
/// double-quoted path. Returns the path between the quotes.
pub fn parse_include_line(line: &str) -> Option<&str> {
	let rest = line.trim_start().strip_prefix("#include")?;
	let trimmed = rest.trim_start();
	if trimmed.len() == rest.len() {
		// No whitespace between `#include` and the target.
		return None;
	}

	let quoted = trimmed.strip_prefix('"')?;
	let end = quoted.find('"')?;
	if end == 0 {
		return None;
	}

	Some(&quoted[..end])
}

/// Strip the directory component and extension from an include target,
/// unifying a header and its implementation file under one traversal node.
pub fn base_name_of(target: &str) -> String {
	Path::new(target)
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_default()
}
