use scenefn::scene::PlugPath;

use crate::cmd::util::{emit_json, parse_token};

#[derive(clap::Args)]
pub struct Args {
	/// Tokens: integers become indices, single characters fuse, anything else starts a segment.
	#[arg(required = true)]
	pub tokens: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct PlugJson<'a> {
	tokens: &'a [String],
	plug: String,
}

/// Build a plug name from command-line tokens.
pub fn run(args: Args) -> scenefn::scene::Result<()> {
	let Args { tokens, json } = args;

	let path = PlugPath::build(tokens.iter().map(|token| parse_token(token)))?;
	let plug = path.to_string();
	tracing::debug!(tokens = tokens.len(), segments = path.segments().len(), "built plug");

	if json {
		return emit_json(&PlugJson { tokens: &tokens, plug });
	}

	println!("{plug}");
	Ok(())
}
