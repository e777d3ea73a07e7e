use serde_yaml::Value as YamlValue;

use crate::cast::coerce::render_scalar;
use crate::cast::{CastError, Result};

/// One node of a parsed but untyped document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Explicit or implicit null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// Floating-point scalar.
	Float(f64),
	/// String scalar.
	String(String),
	/// Ordered sequence.
	Sequence(Vec<Node>),
	/// Ordered mapping with unique keys.
	Mapping(Vec<(String, Node)>),
}

impl Node {
	/// Short lowercase label of the node kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
		}
	}

	/// Whether the node is a bool, int, float, or string.
	pub fn is_scalar(&self) -> bool {
		matches!(self, Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_))
	}

	/// Look up a mapping entry by key.
	pub fn get(&self, key: &str) -> Option<&Node> {
		match self {
			Self::Mapping(entries) => entries.iter().find(|(name, _)| name == key).map(|(_, value)| value),
			_ => None,
		}
	}
}

impl TryFrom<YamlValue> for Node {
	type Error = CastError;

	fn try_from(value: YamlValue) -> Result<Self> {
		Ok(match value {
			YamlValue::Null => Self::Null,
			YamlValue::Bool(v) => Self::Bool(v),
			YamlValue::Number(number) => match number.as_i64() {
				Some(v) => Self::Int(v),
				None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
			},
			YamlValue::String(v) => Self::String(v),
			YamlValue::Sequence(items) => Self::Sequence(items.into_iter().map(Node::try_from).collect::<Result<_>>()?),
			YamlValue::Mapping(mapping) => {
				let mut entries: Vec<(String, Node)> = Vec::with_capacity(mapping.len());
				for (key, value) in mapping {
					let key = mapping_key(Node::try_from(key)?)?;
					let value = Node::try_from(value)?;
					// Keys that render identically collapse; the later entry wins in place.
					match entries.iter_mut().find(|(name, _)| *name == key) {
						Some(slot) => slot.1 = value,
						None => entries.push((key, value)),
					}
				}
				Self::Mapping(entries)
			}
			YamlValue::Tagged(tagged) => Node::try_from(tagged.value)?,
		})
	}
}

fn mapping_key(key: Node) -> Result<String> {
	match key {
		Node::String(v) => Ok(v),
		other => render_scalar(&other).ok_or(CastError::UnsupportedKey { kind: other.kind() }),
	}
}

#[cfg(test)]
mod tests {
	use super::Node;

	fn parse(text: &str) -> Node {
		let raw: serde_yaml::Value = serde_yaml::from_str(text).expect("yaml parses");
		Node::try_from(raw).expect("node converts")
	}

	#[test]
	fn mapping_keeps_document_order() {
		let node = parse("b: 1\na: 2\nc: 3\n");
		let Node::Mapping(entries) = node else {
			panic!("expected mapping");
		};
		let keys: Vec<&str> = entries.iter().map(|(key, _)| key.as_str()).collect();
		assert_eq!(keys, ["b", "a", "c"]);
	}

	#[test]
	fn scalar_keys_are_rendered() {
		let node = parse("1: one\n2.5: half\n~: nothing\n");
		assert_eq!(node.get("1"), Some(&Node::String("one".to_owned())));
		assert_eq!(node.get("2.5"), Some(&Node::String("half".to_owned())));
		assert!(node.get("").is_some(), "null key renders as empty string");
	}

	#[test]
	fn large_unsigned_becomes_float() {
		let node = parse("18446744073709551615");
		assert!(matches!(node, Node::Float(_)));
	}

	#[test]
	fn tagged_values_unwrap() {
		let node = parse("!custom [1, 2]");
		assert_eq!(node, Node::Sequence(vec![Node::Int(1), Node::Int(2)]));
	}

	#[test]
	fn sequence_key_is_rejected() {
		let raw: serde_yaml::Value = serde_yaml::from_str("? [a, b]\n: value\n").expect("yaml parses");
		let err = Node::try_from(raw).expect_err("sequence key rejected");
		assert!(err.to_string().contains("sequence"));
	}
}
