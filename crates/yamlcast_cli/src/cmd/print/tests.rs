use yamlcast::cast::{RecordValue, Value};

use super::{PrintOptions, render_value, truncate, value_to_json};

fn sample_record() -> Value {
	let mut server = RecordValue::new("Server");
	server.set("host", Value::String("localhost".into()));
	server.set("port", Value::Int(8080));
	server.set("ratio", Value::Float(2.0));
	server.attach("logLevel", Value::String("debug".into()));
	Value::Record(server)
}

#[test]
fn record_renders_declared_then_dynamic_fields() {
	let mut out = String::new();
	render_value(&mut out, &sample_record(), 0, 0, PrintOptions::default());

	assert_eq!(
		out,
		"Server {\n  host = \"localhost\"\n  port = 8080\n  ratio = 2.0\n  # dynamic\n  logLevel = \"debug\"\n}\n"
	);
}

#[test]
fn nested_values_respect_depth_limit() {
	let options = PrintOptions {
		max_print_depth: 1,
		..PrintOptions::default()
	};
	let value = Value::Sequence(vec![Value::Sequence(vec![Value::Int(1), Value::Int(2)])]);
	let mut out = String::new();
	render_value(&mut out, &value, 0, 0, options);

	assert_eq!(out, "[\n  [... 2 items]\n]\n");
}

#[test]
fn long_sequences_are_truncated() {
	let options = PrintOptions {
		max_items: 2,
		..PrintOptions::default()
	};
	let value = Value::Sequence((0..5).map(Value::Int).collect());
	let mut out = String::new();
	render_value(&mut out, &value, 0, 0, options);

	assert!(out.contains("... 3 more"), "unexpected output: {out}");
}

#[test]
fn record_json_has_type_fields_and_dynamic() {
	let json = value_to_json(&sample_record());

	assert_eq!(json["type"], "Server");
	assert_eq!(json["fields"]["port"], 8080);
	assert_eq!(json["fields"]["ratio"], 2.0);
	assert_eq!(json["dynamic"]["logLevel"], "debug");
}

#[test]
fn record_json_omits_empty_dynamic() {
	let json = value_to_json(&Value::Record(RecordValue::new("Empty")));
	assert!(json.get("dynamic").is_none());
	assert!(json["fields"].as_object().is_some_and(|fields| fields.is_empty()));
}

#[test]
fn truncate_counts_chars() {
	assert_eq!(truncate("héllo", 10), "héllo");
	assert_eq!(truncate("héllo", 2), "hé...");
}
