use std::path::PathBuf;

use yamlcast::cast::{CastError, RecordType, Result, Schema};

#[derive(clap::Args)]
pub struct Args {
	/// JSON schema file.
	pub file: PathBuf,
	/// Show one record type's fields.
	#[arg(long)]
	pub record: Option<String>,
}

/// Print a summary of a schema file.
pub fn run(args: Args) -> Result<()> {
	let Args { file, record } = args;
	let schema = Schema::from_json_file(&file)?;

	println!("path: {}", file.display());
	println!("records: {}", schema.len());

	match record {
		Some(name) => {
			let item = schema.record(&name).ok_or(CastError::UnknownRecord { name: name.clone() })?;
			print_record(item);
		}
		None => {
			for item in schema.records() {
				println!("  {} ({} fields)", item.name, item.fields.len());
			}
		}
	}

	Ok(())
}

fn print_record(item: &RecordType) {
	println!("record: {}", item.name);
	println!("field_count: {}", item.fields.len());
	for field in &item.fields {
		let mut flags = String::new();
		if field.is_static {
			flags.push_str(" static");
		}
		if !field.is_public {
			flags.push_str(" private");
		}
		println!("  {} ({}): {}{flags}", field.name, field.data_key(), field.ty);
	}
}
