use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum IncdepError {
	#[error(transparent)]
	#[diagnostic(code(incdep::io_error))]
	Io(#[from] std::io::Error),

	#[error("search root is not a readable directory: `{path}`")]
	#[diagnostic(
		code(incdep::search_root),
		help("pass an existing directory as the second argument")
	)]
	SearchRoot { path: PathBuf },

	#[error("failed to read `{path}`: {source}")]
	#[diagnostic(code(incdep::file_read))]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("base-name must not be empty")]
	#[diagnostic(
		code(incdep::empty_base_name),
		help("pass a file name without its extension, e.g. `QueryPlanner` for QueryPlanner.h")
	)]
	EmptyBaseName,

	#[error("expansion limit of {limit} reached before the queue emptied")]
	#[diagnostic(
		code(incdep::expansion_limit),
		help("raise the limit with --max-expansions or `max_expansions` in incdep.toml")
	)]
	ExpansionLimit { limit: usize },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(incdep::symlink_cycle),
		help("remove the circular symlink from the search tree")
	)]
	SymlinkCycle { path: PathBuf },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(incdep::config_parse),
		help("check that incdep.toml is valid TOML with an optional [exclude] section")
	)]
	ConfigParse(String),
}

pub type IncdepResult<T> = Result<T, IncdepError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
