use scenefn::scene::split_plug;

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: String,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Serialize)]
struct SplitJson<'a> {
	node: &'a str,
	attr: &'a str,
}

/// Split a plug name at its first top-level separator.
pub fn run(args: Args) -> scenefn::scene::Result<()> {
	let (node, attr) = split_plug(&args.path)?;

	if args.json {
		return emit_json(&SplitJson { node, attr });
	}

	println!("node: {node}");
	println!("attr: {attr}");
	Ok(())
}
