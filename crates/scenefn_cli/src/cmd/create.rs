use std::path::PathBuf;

use scenefn::scene::MemoryScene;
use scenefn::scene::node::{self, CreateOptions};

use crate::cmd::util::{emit_json, parse_assignment};

#[derive(clap::Args)]
pub struct Args {
	pub scene: PathBuf,
	pub node_type: String,
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub parent: Option<String>,
	/// `ATTR=VALUE` pairs; VALUE is JSON or a plain plug name.
	#[arg(long = "set")]
	pub values: Vec<String>,
	/// Save the modified document back to SCENE.
	#[arg(long)]
	pub write: bool,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct CreateJson<'a> {
	node: &'a str,
	node_type: &'a str,
	written: bool,
}

/// Create a node in a scene document and apply attribute values.
pub fn run(args: Args) -> scenefn::scene::Result<()> {
	let Args {
		scene: path,
		node_type,
		name,
		parent,
		values,
		write,
		json,
	} = args;

	let assignments = values.iter().map(|text| parse_assignment(text)).collect::<scenefn::scene::Result<Vec<_>>>()?;

	let mut scene = MemoryScene::load(&path)?;
	let created = node::create(&mut scene, &node_type, &CreateOptions { name, parent }, assignments)?;
	if write {
		scene.save(&path)?;
		tracing::debug!(path = %path.display(), node = %created, "saved scene");
	}

	if json {
		return emit_json(&CreateJson {
			node: &created,
			node_type: &node_type,
			written: write,
		});
	}

	println!("{created}");
	Ok(())
}

#[cfg(test)]
mod tests;
