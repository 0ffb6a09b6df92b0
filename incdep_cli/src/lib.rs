use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "List the transitive local #include dependencies of a C/C++ source tree.",
	long_about = "incdep walks a source tree and prints the breadth-first transitive closure of \
	              locally-quoted #include directives, starting from a single base-name (a file \
	              name without its extension).\n\nA header and its implementation file share a \
	              base-name and are expanded together; angle-bracket (system) includes are \
	              ignored. Every discovered include path is printed verbatim as soon as it is \
	              found, and each base-name chosen for expansion is announced with a `---- name` \
	              marker line.\n\nExample:\n  incdep QueryPlanner src/"
)]
pub struct IncdepCli {
	/// The base-name to begin resolution from, e.g. `QueryPlanner` for
	/// QueryPlanner.h / QueryPlanner.cpp.
	pub name: String,

	/// Directory under which all candidate files are searched recursively.
	pub root: PathBuf,

	/// Output format for the resolution stream. Use `text` for the grep-able
	/// line protocol or `json` for a single structured document.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Additional base-names to exclude from expansion, on top of the
	/// configured exclusion set. May be repeated.
	#[arg(long)]
	pub exclude: Vec<String>,

	/// Hard cap on the number of expansions. Defaults to ten times the number
	/// of files under the search root.
	#[arg(long)]
	pub max_expansions: Option<usize>,

	/// Do not skip files matched by the search root's .gitignore.
	#[arg(long, default_value_t = false)]
	pub no_ignore: bool,

	/// Enable verbose output (run summary and debug-level logging).
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable line protocol: verbatim include paths interleaved with
	/// `---- name` expansion markers.
	Text,
	/// JSON document for programmatic consumption, emitted once the queue
	/// empties. Includes the ordered event stream and the run summary.
	Json,
}
