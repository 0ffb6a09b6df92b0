mod common;

use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

type AnyEmptyResult = Result<(), Box<dyn std::error::Error>>;

fn reference_files() -> Vec<(&'static str, &'static str)> {
	vec![
		("Foo.h", "#include \"Bar.h\"\n"),
		("Foo.cpp", "#include \"Foo.h\"\n#include \"Baz.h\"\n"),
		("Bar.h", "// leaf header\n"),
		("Baz.h", "#include \"Bar.h\"\n"),
	]
}

#[test]
fn resolves_closure_in_breadth_first_order() -> AnyEmptyResult {
	let tmp = common::source_tree(&reference_files());

	let mut cmd = common::incdep_cmd();
	let assert = cmd.arg("Foo").arg(tmp.path()).assert().success();

	let output = String::from_utf8(assert.get_output().stdout.clone())?;
	let markers: Vec<&str> = output.lines().filter(|l| l.starts_with("---- ")).collect();
	assert_eq!(markers, vec!["---- Foo", "---- Bar", "---- Baz"]);

	Ok(())
}

#[test]
fn prints_include_paths_verbatim() -> AnyEmptyResult {
	let tmp = common::source_tree(&[
		("Top.h", "#include \"nested/dir/Leaf.h\"\n"),
		("nested/dir/Leaf.h", ""),
	]);

	let mut cmd = common::incdep_cmd();
	cmd.arg("Top")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("nested/dir/Leaf.h"));

	Ok(())
}

#[test]
fn duplicate_includes_are_reported_but_expanded_once() -> AnyEmptyResult {
	let tmp = common::source_tree(&reference_files());

	let mut cmd = common::incdep_cmd();
	let assert = cmd.arg("Foo").arg(tmp.path()).assert().success();

	let output = String::from_utf8(assert.get_output().stdout.clone())?;
	let bar_lines = output.lines().filter(|l| *l == "Bar.h").count();
	let bar_markers = output.lines().filter(|l| *l == "---- Bar").count();
	assert_eq!(bar_lines, 2);
	assert_eq!(bar_markers, 1);

	Ok(())
}

#[test]
fn excluded_infrastructure_headers_never_expand() -> AnyEmptyResult {
	let tmp = common::source_tree(&[
		("App.cpp", "#include \"stdafx.h\"\n#include \"Core.h\"\n"),
		("stdafx.h", "#include \"Everything.h\"\n"),
		("Core.h", ""),
	]);

	let mut cmd = common::incdep_cmd();
	cmd.arg("App")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("stdafx.h")
				.and(predicates::str::contains("---- stdafx").not()),
		);

	Ok(())
}

#[test]
fn exclude_flag_adds_to_exclusion_set() -> AnyEmptyResult {
	let tmp = common::source_tree(&[
		("App.cpp", "#include \"Vendored.h\"\n"),
		("Vendored.h", "#include \"Deep.h\"\n"),
		("Deep.h", ""),
	]);

	let mut cmd = common::incdep_cmd();
	cmd.arg("App")
		.arg(tmp.path())
		.arg("--exclude")
		.arg("Vendored")
		.assert()
		.success()
		.stdout(
			predicates::str::contains("Vendored.h")
				.and(predicates::str::contains("---- Vendored").not())
				.and(predicates::str::contains("Deep.h").not()),
		);

	Ok(())
}

#[test]
fn start_name_without_matches_exits_cleanly() -> AnyEmptyResult {
	let tmp = common::source_tree(&[("Other.h", "")]);

	let mut cmd = common::incdep_cmd();
	cmd.arg("Ghost")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::diff("---- Ghost\n"));

	Ok(())
}

#[test]
fn missing_search_root_fails_with_diagnostic() -> AnyEmptyResult {
	let tmp = common::source_tree(&[]);
	let missing = tmp.path().join("absent");

	let mut cmd = common::incdep_cmd();
	cmd.arg("Foo")
		.arg(&missing)
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("search root"));

	Ok(())
}

#[test]
fn max_expansions_flag_aborts_runaway_resolution() -> AnyEmptyResult {
	let tmp = common::source_tree(&reference_files());

	let mut cmd = common::incdep_cmd();
	cmd.arg("Foo")
		.arg(tmp.path())
		.arg("--max-expansions")
		.arg("1")
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("expansion limit"));

	Ok(())
}

#[test]
fn json_format_emits_structured_document() -> AnyEmptyResult {
	let tmp = common::source_tree(&reference_files());

	let mut cmd = common::incdep_cmd();
	let assert = cmd
		.arg("Foo")
		.arg(tmp.path())
		.arg("--format")
		.arg("json")
		.assert()
		.success();

	let value: Value = serde_json::from_slice(&assert.get_output().stdout)?;
	assert_eq!(value["expanded"], serde_json::json!(["Foo", "Bar", "Baz"]));
	assert_eq!(value["scanned_files"], serde_json::json!(4));

	Ok(())
}

#[test]
fn verbose_prints_summary_on_stderr() -> AnyEmptyResult {
	let tmp = common::source_tree(&reference_files());

	let mut cmd = common::incdep_cmd();
	cmd.arg("Foo")
		.arg(tmp.path())
		.arg("--verbose")
		.assert()
		.success()
		.stderr(predicates::str::contains("expanded 3 base-name(s)"));

	Ok(())
}

#[test]
fn angle_bracket_includes_are_ignored() -> AnyEmptyResult {
	let tmp = common::source_tree(&[(
		"Sys.cpp",
		"#include <vector>\n#include <cstring>\n#include \"Local.h\"\n",
	)]);

	let mut cmd = common::incdep_cmd();
	cmd.arg("Sys")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(
			predicates::str::contains("Local.h").and(predicates::str::contains("vector").not()),
		);

	Ok(())
}
