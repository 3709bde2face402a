use std::path::PathBuf;

use scenefn::scene::MemoryScene;
use scenefn::scene::dag::{self, DescendOptions};

use crate::cmd::util::{QueryJson, QueryOutput, emit_json};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Query {
	FullPath,
	Name,
	Parent,
	PartialPath,
	Ancestors,
	Children,
	Descendants,
	Shapes,
	Siblings,
}

impl Query {
	fn label(self) -> &'static str {
		match self {
			Self::FullPath => "full-path",
			Self::Name => "name",
			Self::Parent => "parent",
			Self::PartialPath => "partial-path",
			Self::Ancestors => "ancestors",
			Self::Children => "children",
			Self::Descendants => "descendants",
			Self::Shapes => "shapes",
			Self::Siblings => "siblings",
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub scene: PathBuf,
	#[arg(value_enum)]
	pub query: Query,
	pub node: String,
	/// Limit `descendants` to this many levels below NODE.
	#[arg(long)]
	pub depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Answer one hierarchy query about a DAG node.
pub fn run(args: Args) -> scenefn::scene::Result<()> {
	let Args {
		scene: path,
		query,
		node,
		depth,
		json,
	} = args;

	let scene = MemoryScene::load(&path)?;
	let result = match query {
		Query::FullPath => QueryOutput::One(dag::full_path(&scene, &node)?),
		Query::Name => QueryOutput::One(dag::name(&scene, &node)?),
		Query::Parent => QueryOutput::Maybe(dag::parent(&scene, &node)?),
		Query::PartialPath => QueryOutput::One(dag::partial_path(&scene, &node)?),
		Query::Ancestors => QueryOutput::Many(dag::ancestors(&scene, &node)?),
		Query::Children => QueryOutput::Many(dag::children(&scene, &node)?),
		Query::Descendants => QueryOutput::Many(dag::descendants_with(&scene, &node, &DescendOptions { max_depth: depth })?),
		Query::Shapes => QueryOutput::Many(dag::shapes(&scene, &node)?),
		Query::Siblings => QueryOutput::Many(dag::siblings(&scene, &node)?),
	};

	if json {
		return emit_json(&QueryJson {
			scene: path.display().to_string(),
			query: query.label(),
			target: &node,
			result: &result,
		});
	}

	result.print_lines();
	Ok(())
}

#[cfg(test)]
mod tests;
