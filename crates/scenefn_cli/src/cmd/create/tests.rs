use crate::cmd::test_support::{fixture_path, run_scenefn, run_scenefn_json, scratch_copy};

#[test]
fn create_json_without_write_leaves_scene_untouched() {
	let fixture = fixture_path("rig.json");
	let json = run_scenefn_json(&["create", &fixture, "network", "--json"]);

	assert_eq!(json["node"], "network2");
	assert_eq!(json["written"], false);

	let listed = run_scenefn_json(&["ls", &fixture, "--type", "network", "--json"]);
	assert_eq!(listed["nodes"], serde_json::json!(["network1"]));
}

#[test]
fn create_write_persists_node_and_connections() {
	let scene = scratch_copy("rig.json", "create-write");
	let scene = scene.to_string_lossy().into_owned();

	let json = run_scenefn_json(&[
		"create",
		&scene,
		"transform",
		"--name",
		"head",
		"--parent",
		"neck",
		"--set",
		"translate=[0,2,0]",
		"--set",
		"visibility=|ctrl.visibility",
		"--write",
		"--json",
	]);
	assert_eq!(json["node"], "|rig|spine|chest|neck|head");
	assert_eq!(json["written"], true);

	let children = run_scenefn_json(&["dag", &scene, "children", "neck", "--json"]);
	assert_eq!(children["result"], serde_json::json!(["|rig|spine|chest|neck|head"]));

	let destinations = run_scenefn_json(&["plugs", &scene, "destinations", "|ctrl.visibility", "--json"]);
	assert_eq!(
		destinations["result"],
		serde_json::json!(["|rig|spine.visibility", "|rig|spine|chest|neck|head.visibility"])
	);

	let _ = std::fs::remove_file(&scene);
}

#[test]
fn create_rejects_malformed_assignment() {
	let fixture = fixture_path("rig.json");
	let output = run_scenefn(&["create", &fixture, "network", "--set", "values"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("expected ATTR=VALUE"));
}
