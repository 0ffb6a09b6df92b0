//! `incdep_core` is the engine behind the [incdep](https://github.com/incdep/incdep)
//! dependency lister. Starting from a single base-name (a file name with its
//! extension stripped), it computes the breadth-first transitive closure of
//! locally-quoted `#include` directives across a C/C++ source tree and streams
//! every discovery to a reporter as it happens.
//!
//! ## Processing pipeline
//!
//! ```text
//! base-name + search root
//!   → Locator (recursive walk, matches `<base-name>.*`, any extension)
//!   → Scanner (line-oriented `#include "…"` extraction per located file)
//!   → Resolver (FIFO queue + seen set, expands each base-name at most once)
//!   → Reporter (verbatim include paths + `---- name` expansion markers)
//! ```
//!
//! A header and its implementation file share a base-name and are treated as
//! one traversal node: both are scanned during the node's single expansion.
//! Angle-bracket includes are system headers and never enter the graph, and a
//! base-name with no local match is silently skipped rather than treated as
//! an error.
//!
//! ## Key types
//!
//! - [`Resolver`] — owns the queue and seen set for one run.
//! - [`ResolveOptions`] / [`Resolution`] — run configuration and summary.
//! - [`Locator`] — filesystem search, fail-fast on a bad root.
//! - [`Reporter`] — output sink; [`TextReporter`] and [`JsonReporter`] ship.
//! - [`IncdepConfig`] — optional `incdep.toml` at the search root.

pub use config::*;
pub use error::*;
pub use locator::*;
pub use report::*;
pub use resolver::*;
pub use scanner::*;

pub mod config;
mod error;
mod locator;
mod report;
mod resolver;
mod scanner;

#[cfg(test)]
mod __fixtures;
