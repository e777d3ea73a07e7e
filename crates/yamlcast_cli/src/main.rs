#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "yamlcast", about = "Decode YAML documents into declared record types")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a YAML file into a target type and print the result.
	Decode(cmd::decode::Args),
	/// List record types declared in a schema file.
	Schema(cmd::schema::Args),
	/// Show declared-name and data-key conversions.
	Names(cmd::names::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> yamlcast::cast::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Names(args) => cmd::names::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_env("YAMLCAST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
