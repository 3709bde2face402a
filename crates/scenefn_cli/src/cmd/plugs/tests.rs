use crate::cmd::test_support::{fixture_path, run_scenefn, run_scenefn_json};

#[test]
fn plugs_json_lists_indices_and_elements() {
	let fixture = fixture_path("rig.json");

	let indices = run_scenefn_json(&["plugs", &fixture, "indices", "network1.values", "--json"]);
	assert_eq!(indices["result"], serde_json::json!([0, 1, 3]));

	let elements = run_scenefn_json(&["plugs", &fixture, "elements", "network1.values", "--json"]);
	assert_eq!(
		elements["result"],
		serde_json::json!(["network1.values[0]", "network1.values[1]", "network1.values[3]"])
	);
}

#[test]
fn plugs_json_reports_connections() {
	let fixture = fixture_path("rig.json");

	let source = run_scenefn_json(&["plugs", &fixture, "source", "spine.v", "--json"]);
	assert_eq!(source["result"], "|ctrl.visibility");

	let destinations = run_scenefn_json(&["plugs", &fixture, "destinations", "ctrl.visibility", "--json"]);
	assert_eq!(destinations["result"], serde_json::json!(["|rig|spine.visibility"]));
}

#[test]
fn plugs_rejects_non_array_plug() {
	let fixture = fixture_path("rig.json");
	let output = run_scenefn(&["plugs", &fixture, "indices", "network1.notes"]);

	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("not an array"));
}
