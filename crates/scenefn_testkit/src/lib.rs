//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Parse a JSON fixture file.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("read fixture {}: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("parse fixture {}: {err}", path.display()))
}

/// Scene document for the shared `rig.json` fixture.
///
/// Layout:
///
/// ```text
/// |rig
/// |rig|spine
/// |rig|spine|chest
/// |rig|spine|chest|neck
/// |rig|spine|spineShape      (locator)
/// |rig|arm_L
/// |rig|arm_R
/// |ctrl
/// |ctrl|arm_L
/// network1                    (network: values[0,1,3], notes, fizz.buzz)
/// ```
///
/// `|ctrl.visibility` drives `|rig|spine.visibility`.
pub fn rig_scene() -> serde_json::Value {
	fixture_json("rig.json")
}

/// Scene document with a single root transform named `root` and nothing else.
pub fn single_root_scene() -> serde_json::Value {
	serde_json::json!({
		"nodes": [
			{ "name": "root", "type": "transform" }
		]
	})
}
