use std::collections::HashSet;
use std::collections::VecDeque;
use std::path::Path;

use crate::IncdepError;
use crate::IncdepResult;
use crate::config::DEFAULT_EXCLUDED_NAMES;
use crate::locator::Locator;
use crate::report::Reporter;
use crate::scanner::scan_includes;

/// Minimum effective expansion cap, so tiny trees cannot trip the derived
/// limit before a legitimate traversal finishes.
const MIN_EXPANSION_CAP: usize = 16;

/// Multiplier applied to the file count under the root when no explicit
/// expansion cap is configured.
const DEFAULT_CAP_PER_FILE: usize = 10;

/// Options controlling a single resolution run.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
	/// Base-names pre-seeded into the seen set so they are never expanded.
	pub excluded_names: Vec<String>,
	/// Hard cap on the number of expansions. `None` derives a cap from the
	/// number of files under the search root.
	pub max_expansions: Option<usize>,
	/// Whether files matched by the root's `.gitignore` are skipped.
	pub respect_gitignore: bool,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self {
			excluded_names: DEFAULT_EXCLUDED_NAMES.iter().map(ToString::to_string).collect(),
			max_expansions: None,
			respect_gitignore: true,
		}
	}
}

/// Summary of a completed resolution run. `expanded` doubles as the
/// breadth-first expansion order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Resolution {
	/// Base-names in the order they were expanded.
	pub expanded: Vec<String>,
	/// Number of files scanned for include directives.
	pub scanned_files: usize,
	/// Number of include directives reported (duplicates counted).
	pub includes_found: usize,
}

/// Computes the breadth-first transitive closure of locally-quoted include
/// dependencies, reporting discoveries as a side effect.
///
/// The resolver owns the name queue and the seen set; both live only for the
/// duration of a single [`resolve`](Resolver::resolve) call chain and are
/// discarded with the resolver. Every base-name is expanded at most once: a
/// name enters the seen set at the moment it is chosen for expansion and is
/// filtered at dequeue time thereafter, so duplicate discoveries are cheap.
#[derive(Debug)]
pub struct Resolver {
	queue: VecDeque<String>,
	seen: HashSet<String>,
	options: ResolveOptions,
}

impl Resolver {
	/// Create a resolver with the seen set pre-seeded from the excluded
	/// names, so those are never expanded even when discovered.
	pub fn new(options: ResolveOptions) -> Self {
		let seen = options.excluded_names.iter().cloned().collect();
		Self {
			queue: VecDeque::new(),
			seen,
			options,
		}
	}

	/// Resolve the transitive closure starting from `start` under `root`.
	///
	/// Expansion order is strict FIFO order of first discovery. Termination
	/// is guaranteed by the monotonically growing seen set; the expansion cap
	/// is a defensive backstop against malformed trees.
	pub fn resolve(
		mut self,
		start: &str,
		root: &Path,
		reporter: &mut dyn Reporter,
	) -> IncdepResult<Resolution> {
		if start.is_empty() {
			return Err(IncdepError::EmptyBaseName);
		}

		let locator = Locator::new(root, self.options.respect_gitignore)?;
		let cap = match self.options.max_expansions {
			Some(cap) => cap,
			None => (locator.file_count()? * DEFAULT_CAP_PER_FILE).max(MIN_EXPANSION_CAP),
		};

		let mut resolution = Resolution::default();
		self.queue.push_back(start.to_string());

		while let Some(name) = self.queue.pop_front() {
			if !self.seen.insert(name.clone()) {
				continue;
			}

			if resolution.expanded.len() >= cap {
				return Err(IncdepError::ExpansionLimit { limit: cap });
			}

			tracing::debug!(name, queued = self.queue.len(), "expanding base-name");
			reporter.expansion_started(&name)?;
			resolution.expanded.push(name.clone());

			for path in locator.locate(&name)? {
				for directive in scan_includes(&path)? {
					reporter.include_found(&path, &directive.target)?;
					resolution.includes_found += 1;
					self.queue.push_back(directive.base_name);
				}
				resolution.scanned_files += 1;
			}
		}

		reporter.finish(&resolution)?;

		Ok(resolution)
	}
}
