use yamlcast::cast::{FieldValue, Value};

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of fields printed for a single record or mapping.
	pub max_fields: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for sequences.
	pub max_items: usize,
	/// Maximum recursive print depth for nested values.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_fields: 80,
			max_string_len: 200,
			max_items: 32,
			max_print_depth: 8,
		}
	}
}

/// Print one decoded value tree.
pub fn print_value(value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let mut out = String::new();
	render_value(&mut out, value, indent, depth, options);
	print!("{out}");
}

/// Render one decoded value tree as indented text.
pub fn render_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => out.push_str(&format!("{pad}null\n")),
		Value::Bool(v) => out.push_str(&format!("{pad}{v}\n")),
		Value::Int(v) => out.push_str(&format!("{pad}{v}\n")),
		Value::Float(v) => out.push_str(&format!("{pad}{v:?}\n")),
		Value::String(v) => out.push_str(&format!("{pad}\"{}\"\n", truncate(v, options.max_string_len))),
		Value::Sequence(items) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}[... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in items.iter().take(options.max_items) {
				render_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				out.push_str(&format!("{pad}  ... {} more\n", items.len() - options.max_items));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Mapping(entries) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}{{ ... }}\n"));
				return;
			}
			out.push_str(&format!("{pad}{{\n"));
			render_fields(out, entries, indent, depth, options);
			out.push_str(&format!("{pad}}}\n"));
		}
		Value::Record(item) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}{} {{ ... }}\n", item.type_name));
				return;
			}
			out.push_str(&format!("{pad}{} {{\n", item.type_name));
			render_fields(out, &item.fields, indent, depth, options);
			if !item.dynamic.is_empty() {
				out.push_str(&format!("{pad}  # dynamic\n"));
				render_fields(out, &item.dynamic, indent, depth, options);
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn render_fields(out: &mut String, fields: &[FieldValue], indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	for field in fields.iter().take(options.max_fields) {
		out.push_str(&format!("{pad}  {} = ", field.name));
		if matches!(field.value, Value::Record(_) | Value::Sequence(_) | Value::Mapping(_)) {
			out.push('\n');
			render_value(out, &field.value, indent + 4, depth + 1, options);
		} else {
			render_value(out, &field.value, 0, depth + 1, options);
		}
	}
	if fields.len() > options.max_fields {
		out.push_str(&format!("{pad}  ... {} more fields\n", fields.len() - options.max_fields));
	}
}

/// Convert a decoded value into JSON; records become `{ "type", "fields", "dynamic" }`.
pub fn value_to_json(value: &Value) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match value {
		Value::Null => JsonValue::Null,
		Value::Bool(v) => serde_json::json!(v),
		Value::Int(v) => serde_json::json!(v),
		Value::Float(v) => serde_json::json!(v),
		Value::String(v) => serde_json::json!(v),
		Value::Sequence(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
		Value::Mapping(entries) => JsonValue::Object(fields_to_json(entries)),
		Value::Record(item) => {
			let mut out = Map::new();
			out.insert("type".to_owned(), serde_json::json!(item.type_name.as_ref()));
			out.insert("fields".to_owned(), JsonValue::Object(fields_to_json(&item.fields)));
			if !item.dynamic.is_empty() {
				out.insert("dynamic".to_owned(), JsonValue::Object(fields_to_json(&item.dynamic)));
			}
			JsonValue::Object(out)
		}
	}
}

fn fields_to_json(fields: &[FieldValue]) -> serde_json::Map<String, serde_json::Value> {
	fields
		.iter()
		.map(|field| (field.name.to_string(), value_to_json(&field.value)))
		.collect()
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
