use std::path::PathBuf;

use scenefn::scene::{MemoryScene, plug};

use crate::cmd::util::{QueryJson, QueryOutput, emit_json};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Query {
	Source,
	Destinations,
	Indices,
	Elements,
}

impl Query {
	fn label(self) -> &'static str {
		match self {
			Self::Source => "source",
			Self::Destinations => "destinations",
			Self::Indices => "indices",
			Self::Elements => "elements",
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub scene: PathBuf,
	#[arg(value_enum)]
	pub query: Query,
	pub plug: String,
	#[arg(long)]
	pub json: bool,
}

/// Answer one connection or array query about a plug.
pub fn run(args: Args) -> scenefn::scene::Result<()> {
	let Args {
		scene: path,
		query,
		plug: target,
		json,
	} = args;

	let scene = MemoryScene::load(&path)?;
	let result = match query {
		Query::Source => QueryOutput::Maybe(plug::source(&scene, &target)?),
		Query::Destinations => QueryOutput::Many(plug::destinations(&scene, &target)?),
		Query::Indices => QueryOutput::Indices(plug::indices(&scene, &target)?),
		Query::Elements => QueryOutput::Many(plug::elements(&scene, &target)?),
	};

	if json {
		return emit_json(&QueryJson {
			scene: path.display().to_string(),
			query: query.label(),
			target: &target,
			result: &result,
		});
	}

	result.print_lines();
	Ok(())
}

#[cfg(test)]
mod tests;
