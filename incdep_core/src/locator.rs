use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;

use crate::IncdepError;
use crate::IncdepResult;

/// Locates candidate files for a base-name by walking the search root.
///
/// Each [`locate`](Locator::locate) call performs a fresh recursive walk; no
/// results are cached within a run. This mirrors the tool's one-shot usage
/// pattern and keeps the locator free of invalidation concerns.
#[derive(Debug)]
pub struct Locator {
	root: PathBuf,
	gitignore: Gitignore,
}

impl Locator {
	/// Create a locator rooted at `root`.
	///
	/// Fails fast with [`IncdepError::SearchRoot`] when the root is not an
	/// existing directory, so a bad environment aborts the whole run instead
	/// of silently producing an empty closure.
	pub fn new(root: &Path, respect_gitignore: bool) -> IncdepResult<Self> {
		if !root.is_dir() {
			return Err(IncdepError::SearchRoot {
				path: root.to_path_buf(),
			});
		}

		let gitignore = if respect_gitignore {
			build_gitignore(root)
		} else {
			Gitignore::empty()
		};

		Ok(Self {
			root: root.to_path_buf(),
			gitignore,
		})
	}

	/// Find every file under the root whose file name, ignoring the
	/// extension, equals `base_name`. An empty result is not an error: the
	/// name may refer to an external header with no local source.
	pub fn locate(&self, base_name: &str) -> IncdepResult<Vec<PathBuf>> {
		if base_name.is_empty() {
			return Err(IncdepError::EmptyBaseName);
		}

		let mut matches = Vec::new();
		let mut visited_dirs = HashSet::new();
		self.walk_dir(&self.root, &mut visited_dirs, &mut |path| {
			if path.file_stem() == Some(OsStr::new(base_name)) {
				matches.push(path.to_path_buf());
			}
		})?;

		// Headers are scanned before implementation files so interface-level
		// includes enter the queue first; ties break lexicographically for a
		// deterministic scan order.
		matches.sort_by(|a, b| header_rank(a).cmp(&header_rank(b)).then_with(|| a.cmp(b)));

		tracing::debug!(base_name, count = matches.len(), "located candidate files");

		Ok(matches)
	}

	/// Count all files under the root, using the same skip rules as
	/// [`locate`](Locator::locate). Used to derive the default expansion cap.
	pub fn file_count(&self) -> IncdepResult<usize> {
		let mut count = 0usize;
		let mut visited_dirs = HashSet::new();
		self.walk_dir(&self.root, &mut visited_dirs, &mut |_| count += 1)?;
		Ok(count)
	}

	fn walk_dir(
		&self,
		dir: &Path,
		visited_dirs: &mut HashSet<PathBuf>,
		on_file: &mut dyn FnMut(&Path),
	) -> IncdepResult<()> {
		// Detect symlink cycles by tracking canonical paths.
		let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
		if !visited_dirs.insert(canonical) {
			return Err(IncdepError::SymlinkCycle {
				path: dir.to_path_buf(),
			});
		}

		for entry in std::fs::read_dir(dir)? {
			let entry = entry?;
			let path = entry.path();
			let is_dir = path.is_dir();

			if is_dir {
				if let Some(name) = path.file_name().and_then(OsStr::to_str) {
					if is_ignored_directory_name(name) {
						continue;
					}
				}
			}

			if self.gitignore.matched(&path, is_dir).is_ignore() {
				continue;
			}

			if is_dir {
				self.walk_dir(&path, visited_dirs, on_file)?;
			} else {
				on_file(&path);
			}
		}

		Ok(())
	}
}

fn header_rank(path: &Path) -> u8 {
	let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
	u8::from(!matches!(ext, "h" | "hh" | "hpp" | "hxx"))
}

fn is_ignored_directory_name(name: &str) -> bool {
	name.starts_with('.') || name == "node_modules" || name == "target"
}

/// Build a `Gitignore` matcher from the search root's `.gitignore` (if any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}
