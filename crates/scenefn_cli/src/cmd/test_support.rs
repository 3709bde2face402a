use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use scenefn_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static SCENEFN_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

/// Copy a fixture into a per-test scratch file so commands may write to it.
pub(crate) fn scratch_copy(name: &str, tag: &str) -> PathBuf {
	let dir = workspace_target_dir().join("scenefn-cli-tests");
	std::fs::create_dir_all(&dir).expect("create scratch dir");
	let path = dir.join(format!("{tag}-{}-{name}", std::process::id()));
	std::fs::copy(shared_fixture_path(name), &path).expect("copy fixture");
	path
}

pub(crate) fn run_scenefn(args: &[&str]) -> Output {
	Command::new(scenefn_bin()).args(args).output().expect("scenefn command executes")
}

pub(crate) fn run_scenefn_json(args: &[&str]) -> serde_json::Value {
	let output = run_scenefn(args);
	assert!(
		output.status.success(),
		"scenefn command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn scenefn_bin() -> &'static PathBuf {
	SCENEFN_BIN.get_or_init(resolve_scenefn_bin)
}

fn resolve_scenefn_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_scenefn") {
		return PathBuf::from(path);
	}
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_scenefn") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "scenefn.exe" } else { "scenefn" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "scenefn"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build scenefn binary at {}", bin.display());

	bin
}
