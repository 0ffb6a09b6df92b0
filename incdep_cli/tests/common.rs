use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn incdep_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("incdep"));
	cmd.env("NO_COLOR", "1");
	cmd
}

/// Create a temporary source tree from `(relative path, content)` pairs.
pub fn source_tree(files: &[(&str, &str)]) -> tempfile::TempDir {
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
