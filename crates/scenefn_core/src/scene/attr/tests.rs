use crate::scene::{AttrDef, AttrType, MemoryScene, SceneError, SceneHost, attr, dag};

fn rig() -> MemoryScene {
	MemoryScene::from_json(scenefn_testkit::rig_scene()).expect("rig scene loads")
}

#[test]
fn add_returns_plug_on_full_path() {
	let mut scene = rig();
	let node = dag::full_path(&scene, "neck").expect("full path");

	let expected = crate::plug!(node.as_str(), "foobar").expect("plug");
	let actual = attr::add(&mut scene, &["neck"], &AttrDef::new("foobar")).expect("add");

	assert_eq!(actual, [expected]);
	assert!(scene.exists("|rig|spine|chest|neck.foobar"));
}

#[test]
fn add_to_several_nodes_keeps_input_order() {
	let mut scene = MemoryScene::with_default_cameras().expect("cameras");

	let actual = attr::add(&mut scene, &["persp", "front", "top", "side"], &AttrDef::new("foobar")).expect("add");

	assert_eq!(actual, ["|persp.foobar", "|front.foobar", "|top.foobar", "|side.foobar"]);
}

#[test]
fn compound_child_plug_includes_parent() {
	let mut scene = rig();

	attr::add(&mut scene, &["rig"], &AttrDef::new("fizz").with_type(AttrType::Compound)).expect("fizz");
	let actual = attr::add(&mut scene, &["rig"], &AttrDef::new("buzz").with_parent("fizz")).expect("buzz");

	assert_eq!(actual, [crate::plug!("|rig", "fizz", "buzz").expect("plug")]);
	assert!(scene.exists("|rig.buzz"));
	let info = scene.attribute(crate::scene::object(&scene, "rig").expect("rig"), "fizz").expect("query").expect("fizz");
	assert_eq!(info.children, ["buzz"]);
}

#[test]
fn missing_name_is_rejected_before_host_calls() {
	let mut scene = rig();

	let err = attr::add(&mut scene, &["rig"], &AttrDef::new("")).expect_err("empty name");
	assert!(matches!(err, SceneError::MissingAttributeName));
}

#[test]
fn duplicate_and_bad_parent_are_reported() {
	let mut scene = rig();

	let err = attr::add(&mut scene, &["rig"], &AttrDef::new("visibility")).expect_err("duplicate");
	assert!(matches!(err, SceneError::AttributeExists { .. }));

	let err = attr::add(&mut scene, &["rig"], &AttrDef::new("child").with_parent("nope")).expect_err("missing parent");
	assert!(matches!(err, SceneError::AttributeNotFound { .. }));

	let err = attr::add(&mut scene, &["rig"], &AttrDef::new("child").with_parent("visibility")).expect_err("scalar parent");
	assert!(matches!(err, SceneError::InvalidArgument { .. }));
}

#[test]
fn unresolved_node_leaves_scene_untouched() {
	let mut scene = rig();

	let err = attr::add(&mut scene, &["rig", "missing"], &AttrDef::new("foobar")).expect_err("missing node");
	assert!(matches!(err, SceneError::NotFound { .. }));
	assert!(!scene.exists("|rig.foobar"));
}
