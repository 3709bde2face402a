use crate::scene::plug;
use crate::scene::{MemoryScene, SceneError, SceneHost, plug_ref};

fn rig() -> MemoryScene {
	MemoryScene::from_json(scenefn_testkit::rig_scene()).expect("rig scene loads")
}

#[test]
fn array_plug_reports_existing_indices_and_elements() {
	let scene = rig();

	assert_eq!(plug::indices(&scene, "network1.values").expect("indices"), [0, 1, 3]);
	assert_eq!(
		plug::elements(&scene, "network1.values").expect("elements"),
		["network1.values[0]", "network1.values[1]", "network1.values[3]"]
	);
}

#[test]
fn non_array_plugs_are_rejected() {
	let scene = rig();

	for identifier in ["network1.notes", "network1.values[0]"] {
		assert!(
			matches!(plug::indices(&scene, identifier), Err(SceneError::NotArrayPlug { .. })),
			"{identifier}"
		);
		assert!(
			matches!(plug::elements(&scene, identifier), Err(SceneError::NotArrayPlug { .. })),
			"{identifier}"
		);
	}
}

#[test]
fn node_identifiers_are_not_plugs() {
	let scene = rig();

	assert!(matches!(plug::source(&scene, "network1"), Err(SceneError::NotPlug { .. })));
	assert!(matches!(plug::destinations(&scene, "|ctrl"), Err(SceneError::NotPlug { .. })));
}

#[test]
fn source_and_destinations_agree() {
	let scene = rig();

	assert_eq!(plug::source(&scene, "|rig|spine.visibility").expect("source").as_deref(), Some("|ctrl.visibility"));
	assert_eq!(plug::source(&scene, "spine.v").expect("source").as_deref(), Some("|ctrl.visibility"));
	assert_eq!(plug::destinations(&scene, "|ctrl.visibility").expect("destinations"), ["|rig|spine.visibility"]);
	assert_eq!(plug::source(&scene, "|ctrl.visibility").expect("source"), None);
	assert!(plug::destinations(&scene, "|rig|spine.visibility").expect("destinations").is_empty());
}

#[test]
fn connections_to_nested_transforms_use_full_paths() {
	let mut scene = MemoryScene::with_default_cameras().expect("cameras");
	let a = scene.create_node("transform", "transform#", None).expect("a");
	let b = scene.create_node("transform", "transform#", Some(a)).expect("b");
	scene.create_node("transform", "transform#", Some(b)).expect("c");

	let dst = crate::plug!(crate::scene::dag::full_path(&scene, "|transform1|transform1|transform1").expect("path"), "visibility").expect("plug");
	let src = "|persp.visibility";
	let src_ref = plug_ref(&scene, src).expect("src");
	let dst_ref = plug_ref(&scene, &dst).expect("dst");
	scene.connect(&src_ref, &dst_ref).expect("connect");

	assert_eq!(plug::source(&scene, &dst).expect("source").as_deref(), Some(src));
	assert_eq!(plug::destinations(&scene, src).expect("destinations"), [dst]);
}

#[test]
fn connected_elements_count_as_existing() {
	let mut scene = rig();
	let src = plug_ref(&scene, "|ctrl.worldMatrix[2]").expect("src");
	let dst = plug_ref(&scene, "|rig.offsetParentMatrix").expect("dst");
	scene.connect(&src, &dst).expect("connect");

	assert_eq!(plug::indices(&scene, "|ctrl.worldMatrix").expect("indices"), [2]);
	assert_eq!(plug::elements(&scene, "ctrl.wm").expect("elements"), ["|ctrl.worldMatrix[2]"]);
}
