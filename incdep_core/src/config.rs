use std::path::Path;

use serde::Deserialize;

use crate::IncdepError;
use crate::IncdepResult;

/// Base-names that are never expanded, even when discovered. These are
/// infrastructure headers whose include lists add noise without information:
/// the precompiled-header stub and the unit-test harness header.
pub const DEFAULT_EXCLUDED_NAMES: [&str; 2] = ["stdafx", "UnitTest"];

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["incdep.toml", ".incdep.toml", ".config/incdep.toml"];

/// Configuration loaded from `incdep.toml` at the search root.
///
/// ```toml
/// max_expansions = 5000
/// respect_gitignore = false
///
/// [exclude]
/// names = ["stdafx", "UnitTest", "pch"]
/// ```
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IncdepConfig {
	/// Base-names pre-seeded into the seen set so they are never expanded.
	pub exclude: ExcludeConfig,
	/// Hard cap on the number of expansions. When absent, the resolver derives
	/// a cap from the number of files under the search root.
	pub max_expansions: Option<usize>,
	/// Whether files matched by the search root's `.gitignore` are skipped.
	pub respect_gitignore: bool,
}

impl Default for IncdepConfig {
	fn default() -> Self {
		Self {
			exclude: ExcludeConfig::default(),
			max_expansions: None,
			respect_gitignore: true,
		}
	}
}

/// The `[exclude]` section.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExcludeConfig {
	/// Base-names that are never expanded.
	pub names: Vec<String>,
}

impl Default for ExcludeConfig {
	fn default() -> Self {
		Self {
			names: DEFAULT_EXCLUDED_NAMES.iter().map(ToString::to_string).collect(),
		}
	}
}

impl IncdepConfig {
	/// Load configuration from the first matching candidate file under `root`.
	/// Returns `Ok(None)` when no config file exists.
	pub fn load(root: &Path) -> IncdepResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if !path.is_file() {
				continue;
			}

			let content = std::fs::read_to_string(&path).map_err(|source| IncdepError::FileRead {
				path: path.clone(),
				source,
			})?;
			let config = toml::from_str(&content)
				.map_err(|e| IncdepError::ConfigParse(format!("{}: {e}", path.display())))?;
			return Ok(Some(config));
		}

		Ok(None)
	}
}
