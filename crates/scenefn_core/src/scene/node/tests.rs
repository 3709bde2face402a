use crate::scene::node::{self, CreateOptions};
use crate::scene::{MemoryScene, NodeValue, PlugValue, SceneError, SceneHost, plug, plug_ref};

fn rig() -> MemoryScene {
	MemoryScene::from_json(scenefn_testkit::rig_scene()).expect("rig scene loads")
}

fn value_of(scene: &MemoryScene, identifier: &str) -> Option<PlugValue> {
	let plug = plug_ref(scene, identifier).expect("plug resolves");
	scene.value(&plug).expect("value query")
}

fn named(name: &str) -> CreateOptions {
	CreateOptions {
		name: Some(name.to_owned()),
		parent: None,
	}
}

fn no_values() -> Vec<(&'static str, NodeValue)> {
	Vec::new()
}

#[test]
fn of_type_filters_by_node_type() {
	let scene = rig();

	let found = node::of_type(&scene, &["rig", "network1", "spineShape", "ctrl"], "transform").expect("of_type");
	assert_eq!(found, ["|rig", "|ctrl"]);
	assert_eq!(node::of_type(&scene, &["spineShape"], "locator").expect("of_type"), ["|rig|spine|spineShape"]);
}

#[test]
fn default_name_numbers_by_type() {
	let mut scene = rig();

	let created = node::create(&mut scene, "network", &CreateOptions::default(), no_values()).expect("create");
	assert_eq!(created, "network2");
}

#[test]
fn scalars_sequences_and_matrices_are_set() {
	let mut scene = rig();
	let identity: Vec<NodeValue> = [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
		.into_iter()
		.map(NodeValue::Float)
		.collect();

	let created = node::create(
		&mut scene,
		"transform",
		&named("box"),
		vec![
			("visibility", NodeValue::Bool(false)),
			("translate", NodeValue::from(vec![1.0, 2.0, 3.0])),
			("offsetParentMatrix", NodeValue::Sequence(identity)),
		],
	)
	.expect("create");

	assert_eq!(created, "|box");
	assert_eq!(value_of(&scene, "|box.visibility"), Some(PlugValue::Bool(false)));
	assert_eq!(value_of(&scene, "|box.translateX"), Some(PlugValue::Float(1.0)));
	assert_eq!(value_of(&scene, "|box.translate.translateZ"), Some(PlugValue::Float(3.0)));
	assert!(matches!(value_of(&scene, "|box.opm"), Some(PlugValue::Matrix(m)) if m[0] == 1.0 && m[1] == 0.0));
}

#[test]
fn keyed_values_follow_the_plug_grammar() {
	let mut scene = rig();
	let translate: NodeValue = serde_json::from_str(r#"{"X": 5.0}"#).expect("json");
	let scale: NodeValue = serde_json::from_str(r#"{"scaleY": 2}"#).expect("json");

	node::create(&mut scene, "transform", &named("keyed"), vec![("translate", translate), ("scale", scale)]).expect("create");

	assert_eq!(value_of(&scene, "|keyed.translateX"), Some(PlugValue::Float(5.0)));
	assert_eq!(value_of(&scene, "|keyed.scaleY"), Some(PlugValue::Int(2)));
}

#[test]
fn text_naming_a_plug_connects_input() {
	let mut scene = rig();

	node::create(&mut scene, "transform", &named("follower"), vec![("visibility", NodeValue::from("|ctrl.visibility"))]).expect("create");

	assert_eq!(plug::source(&scene, "|follower.visibility").expect("source").as_deref(), Some("|ctrl.visibility"));
}

#[test]
fn text_on_string_attribute_is_stored() {
	let mut scene = rig();

	let created = node::create(&mut scene, "script", &CreateOptions::default(), vec![("before", NodeValue::from("print('hi')"))]).expect("create");

	assert_eq!(created, "script1");
	assert_eq!(value_of(&scene, "script1.before"), Some(PlugValue::Text("print('hi')".to_owned())));
}

#[test]
fn multi_inputs_fill_elements_and_outputs_fan_out() {
	let mut scene = rig();

	let created = node::create(
		&mut scene,
		"plusMinusAverage",
		&CreateOptions::default(),
		vec![
			("operation", NodeValue::Int(1)),
			(
				"input1D",
				NodeValue::Sequence(vec![NodeValue::Float(1.0), NodeValue::Float(2.0), NodeValue::from("|rig.translateX")]),
			),
			("output1D", NodeValue::from(vec!["|rig.translateY", "|rig.translateZ"])),
		],
	)
	.expect("create");

	assert_eq!(created, "plusMinusAverage1");
	assert_eq!(plug::indices(&scene, "plusMinusAverage1.input1D").expect("indices"), [0, 1, 2]);
	assert_eq!(value_of(&scene, "plusMinusAverage1.input1D[1]"), Some(PlugValue::Float(2.0)));
	assert_eq!(
		plug::source(&scene, "plusMinusAverage1.input1D[2]").expect("source").as_deref(),
		Some("|rig.translate.translateX")
	);
	assert_eq!(
		plug::destinations(&scene, "plusMinusAverage1.output1D").expect("destinations"),
		["|rig.translate.translateY", "|rig.translate.translateZ"]
	);
}

#[test]
fn multi_outputs_connect_per_element() {
	let mut scene = rig();

	node::create(&mut scene, "transform", &named("driver"), vec![("worldMatrix", NodeValue::from(vec!["|rig.offsetParentMatrix"]))]).expect("create");

	assert_eq!(plug::source(&scene, "|rig.offsetParentMatrix").expect("source").as_deref(), Some("|driver.worldMatrix[0]"));
}

#[test]
fn created_under_parent() {
	let mut scene = rig();
	let options = CreateOptions {
		name: Some("hand".to_owned()),
		parent: Some("|rig|arm_R".to_owned()),
	};

	assert_eq!(node::create(&mut scene, "transform", &options, no_values()).expect("create"), "|rig|arm_R|hand");
}

#[test]
fn unsupported_shapes_are_reported() {
	let mut scene = rig();

	let err = node::create(&mut scene, "transform", &named("a"), vec![("visibility", NodeValue::from("not a plug"))]).expect_err("text");
	assert!(matches!(err, SceneError::UnsupportedValue { shape: "text", .. }));

	let err = node::create(&mut scene, "transform", &named("b"), vec![("visibility", NodeValue::from(vec![1_i64, 2]))]).expect_err("sequence");
	assert!(matches!(err, SceneError::UnsupportedValue { shape: "sequence", .. }));

	let err = node::create(&mut scene, "transform", &named("c"), vec![("message", NodeValue::Int(3))]).expect_err("scalar output");
	assert!(matches!(err, SceneError::UnsupportedValue { shape: "scalar", .. }));

	let err = node::create(&mut scene, "transform", &named("d"), vec![("nope", NodeValue::Int(3))]).expect_err("missing attribute");
	assert!(matches!(err, SceneError::AttributeNotFound { .. }));
}
