#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "scenefn", about = "Scene-graph and plug-path helpers")]
struct Cli {
	/// Emit debug logs on stderr; `RUST_LOG` takes precedence.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Build a plug name from tokens.
	Plug(cmd::plug::Args),
	/// Split a plug name into node and attribute parts.
	Split(cmd::split::Args),
	/// Query the DAG hierarchy of a scene document.
	Dag(cmd::dag::Args),
	/// Query plug connections and array elements of a scene document.
	Plugs(cmd::plugs::Args),
	/// List nodes of a scene document.
	Ls(cmd::ls::Args),
	/// Create a node in a scene document.
	Create(cmd::create::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		tracing::debug!(error = ?err, "command failed");
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback))
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(true)
		.with_writer(std::io::stderr)
		.try_init();
}

fn run(command: Commands) -> scenefn::scene::Result<()> {
	match command {
		Commands::Plug(args) => cmd::plug::run(args),
		Commands::Split(args) => cmd::split::run(args),
		Commands::Dag(args) => cmd::dag::run(args),
		Commands::Plugs(args) => cmd::plugs::run(args),
		Commands::Ls(args) => cmd::ls::run(args),
		Commands::Create(args) => cmd::create::run(args),
	}
}
