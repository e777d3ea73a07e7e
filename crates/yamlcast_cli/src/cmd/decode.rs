use std::path::PathBuf;

use tracing::debug;
use yamlcast::cast::{DecodeOptions, Decoder, Result, Schema, TypeDesc};

use crate::cmd::print::{PrintOptions, print_value, value_to_json};

#[derive(clap::Args)]
pub struct Args {
	/// YAML source file, optionally zstd-compressed.
	pub file: PathBuf,
	/// Target type descriptor, e.g. `App`, `?int`, `int|string`.
	#[arg(long = "type", default_value = "any")]
	pub target: String,
	/// JSON schema file declaring record types.
	#[arg(long)]
	pub schema: Option<PathBuf>,
	/// Permit writes to fields declared non-public.
	#[arg(long = "allow-private")]
	pub allow_private: bool,
	/// Attach mapping keys with no declared field instead of failing.
	#[arg(long = "allow-dynamic")]
	pub allow_dynamic: bool,
	/// Permit writes to fields declared static.
	#[arg(long = "allow-static")]
	pub allow_static: bool,
	/// Emit JSON instead of indented text.
	#[arg(long)]
	pub json: bool,
}

/// Decode one file and print the typed result.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		target,
		schema,
		allow_private,
		allow_dynamic,
		allow_static,
		json,
	} = args;

	let schema = match schema {
		Some(path) => Schema::from_json_file(path)?,
		None => Schema::new(),
	};
	let target: TypeDesc = target.parse()?;
	let decoder = Decoder::with_options(
		&schema,
		DecodeOptions {
			allow_private_writes: allow_private,
			allow_dynamic_fields: allow_dynamic,
			allow_static_writes: allow_static,
		},
	);
	debug!(path = %file.display(), %target, records = schema.len(), options = ?decoder.options(), "decoding source");
	let value = decoder.decode_file(&file, &target)?;
	debug!(kind = value.kind(), "decoded source");

	if json {
		let payload = DecodeJson {
			path: file.display().to_string(),
			target: target.to_string(),
			value: value_to_json(&value),
		};
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	println!("path: {}", file.display());
	println!("target: {target}");
	println!("decoded:");
	print_value(&value, 2, 0, PrintOptions::default());

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	target: String,
	value: serde_json::Value,
}
