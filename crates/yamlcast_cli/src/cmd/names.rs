use yamlcast::cast::Result;
use yamlcast::cast::naming::{to_data_key, to_declared_name};

#[derive(clap::Args)]
pub struct Args {
	/// Names to convert.
	#[arg(required = true)]
	pub names: Vec<String>,
	/// Convert data keys to declared names instead.
	#[arg(long)]
	pub reverse: bool,
}

/// Print one `input -> output` line per name.
pub fn run(args: Args) -> Result<()> {
	for name in &args.names {
		let converted = if args.reverse { to_declared_name(name) } else { to_data_key(name) };
		println!("{name} -> {converted}");
	}
	Ok(())
}
