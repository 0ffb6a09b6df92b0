use std::io::Write;
use std::process;

use clap::Parser;
use incdep_cli::IncdepCli;
use incdep_cli::OutputFormat;
use incdep_core::IncdepConfig;
use incdep_core::IncdepError;
use incdep_core::JsonReporter;
use incdep_core::Resolution;
use incdep_core::ResolveOptions;
use incdep_core::Resolver;
use incdep_core::TextReporter;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = IncdepCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(args.verbose);

	if let Err(e) = run(&args, use_color) {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

/// Logging goes to stderr so the resolution stream on stdout stays clean for
/// grep-based post-processing.
fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(args: &IncdepCli, use_color: bool) -> Result<(), IncdepError> {
	let options = resolve_options(args)?;
	let resolver = Resolver::new(options);

	let stdout = std::io::stdout().lock();
	let resolution = match args.format {
		OutputFormat::Text => {
			let mut reporter = TextReporter::new(stdout);
			resolver.resolve(&args.name, &args.root, &mut reporter)?
		}
		OutputFormat::Json => {
			let mut reporter = JsonReporter::new(stdout);
			resolver.resolve(&args.name, &args.root, &mut reporter)?
		}
	};

	if args.verbose {
		print_summary(&resolution, use_color)?;
	}

	Ok(())
}

/// Merge the config file discovered at the search root with CLI overrides:
/// `--exclude` appends, `--max-expansions` and `--no-ignore` replace.
fn resolve_options(args: &IncdepCli) -> Result<ResolveOptions, IncdepError> {
	let config = IncdepConfig::load(&args.root)?.unwrap_or_default();

	let mut excluded_names = config.exclude.names;
	excluded_names.extend(args.exclude.iter().cloned());

	Ok(ResolveOptions {
		excluded_names,
		max_expansions: args.max_expansions.or(config.max_expansions),
		respect_gitignore: !args.no_ignore && config.respect_gitignore,
	})
}

/// One-line run summary on stderr, separate from the resolution stream.
fn print_summary(resolution: &Resolution, use_color: bool) -> Result<(), IncdepError> {
	let label = if use_color {
		format!("{}", "done:".green())
	} else {
		"done:".to_string()
	};

	let mut stderr = std::io::stderr().lock();
	writeln!(
		stderr,
		"{label} expanded {} base-name(s), scanned {} file(s), found {} include(s)",
		resolution.expanded.len(),
		resolution.scanned_files,
		resolution.includes_found
	)?;
	Ok(())
}
