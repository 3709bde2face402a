use crate::cmd::test_support::{fixture_path, run_scenefn, run_scenefn_json};

#[test]
fn dag_json_reports_descendants() {
	let fixture = fixture_path("rig.json");
	let json = run_scenefn_json(&["dag", &fixture, "descendants", "rig", "--json"]);

	assert_eq!(json["query"], "descendants");
	assert_eq!(json["target"], "rig");
	assert_eq!(
		json["result"],
		serde_json::json!(["|rig|spine", "|rig|spine|chest", "|rig|spine|chest|neck", "|rig|arm_L", "|rig|arm_R"])
	);
}

#[test]
fn dag_depth_limits_descendants() {
	let fixture = fixture_path("rig.json");
	let json = run_scenefn_json(&["dag", &fixture, "descendants", "rig", "--depth", "1", "--json"]);

	assert_eq!(json["result"], serde_json::json!(["|rig|spine", "|rig|arm_L", "|rig|arm_R"]));
}

#[test]
fn dag_parent_of_root_is_null() {
	let fixture = fixture_path("rig.json");
	let json = run_scenefn_json(&["dag", &fixture, "parent", "rig", "--json"]);

	assert!(json["result"].is_null());
}

#[test]
fn dag_text_output_prints_one_path() {
	let fixture = fixture_path("rig.json");
	let output = run_scenefn(&["dag", &fixture, "full-path", "neck"]);

	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "|rig|spine|chest|neck");
}

#[test]
fn dag_ambiguous_name_fails() {
	let fixture = fixture_path("rig.json");
	let output = run_scenefn(&["dag", &fixture, "full-path", "arm_L"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
}
