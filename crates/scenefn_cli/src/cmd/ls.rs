use std::path::PathBuf;

use scenefn::scene::{MemoryScene, SceneHost, display_name};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub scene: PathBuf,
	/// Keep only nodes of this exact type.
	#[arg(long = "type")]
	pub node_type: Option<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct LsJson<'a> {
	scene: String,
	node_type: Option<&'a str>,
	nodes: &'a [String],
}

/// List display names of the nodes in a scene document.
pub fn run(args: Args) -> scenefn::scene::Result<()> {
	let Args { scene: path, node_type, json } = args;

	let scene = MemoryScene::load(&path)?;
	let mut names = Vec::new();
	for id in scene.nodes() {
		let keep = match node_type.as_deref() {
			Some(wanted) => scene.node_type(id)? == wanted,
			None => true,
		};
		if keep {
			names.push(display_name(&scene, id)?);
		}
	}

	if json {
		return emit_json(&LsJson {
			scene: path.display().to_string(),
			node_type: node_type.as_deref(),
			nodes: &names,
		});
	}

	for name in &names {
		println!("{name}");
	}
	Ok(())
}
