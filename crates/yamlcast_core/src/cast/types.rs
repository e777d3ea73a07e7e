use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cast::{CastError, Result, Value};

/// Built-in target kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
	/// Accept any node verbatim (`any` / `mixed`).
	Any,
	/// Null only.
	Null,
	/// Signed 64-bit integer.
	Int,
	/// 64-bit float.
	Float,
	/// Boolean.
	Bool,
	/// Text.
	String,
	/// Any of bool, int, float, string.
	Scalar,
	/// Sequence or mapping (`collection` / `array`).
	Collection,
}

impl Primitive {
	/// Canonical descriptor keyword.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Any => "any",
			Self::Null => "null",
			Self::Int => "int",
			Self::Float => "float",
			Self::Bool => "bool",
			Self::String => "string",
			Self::Scalar => "scalar",
			Self::Collection => "collection",
		}
	}

	fn from_keyword(word: &str) -> Option<Self> {
		Some(match word {
			"any" | "mixed" => Self::Any,
			"null" => Self::Null,
			"int" => Self::Int,
			"float" => Self::Float,
			"bool" => Self::Bool,
			"string" => Self::String,
			"scalar" => Self::Scalar,
			"collection" | "array" => Self::Collection,
			_ => return None,
		})
	}
}

/// Target type of a decode: a primitive, a record type, or an ordered union.
///
/// Unions are flat and hold at least two alternatives; a nullable marker is
/// stored as a leading `null` alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeDesc {
	/// Built-in kind.
	Primitive(Primitive),
	/// Record type identifier resolved through an introspector.
	Record(Box<str>),
	/// Ordered alternatives.
	Union(Vec<TypeDesc>),
}

impl TypeDesc {
	/// Shorthand for `any`.
	pub fn any() -> Self {
		Self::Primitive(Primitive::Any)
	}

	/// Shorthand for a record type identifier.
	pub fn record(name: impl Into<Box<str>>) -> Self {
		Self::Record(name.into())
	}

	/// Build a union from alternatives, flattening nested unions.
	pub fn union(alternatives: impl IntoIterator<Item = TypeDesc>) -> Self {
		let mut flat = Vec::new();
		for item in alternatives {
			match item {
				Self::Union(inner) => flat.extend(inner),
				other => flat.push(other),
			}
		}
		if flat.len() == 1 {
			return flat.pop().unwrap_or_else(Self::any);
		}
		Self::Union(flat)
	}

	/// Prepend a `null` alternative.
	pub fn nullable(self) -> Self {
		Self::union([Self::Primitive(Primitive::Null), self])
	}

	/// Alternatives in declared order; a non-union is its own single alternative.
	pub fn alternatives(&self) -> &[TypeDesc] {
		match self {
			Self::Union(items) => items,
			other => std::slice::from_ref(other),
		}
	}

	/// Zero value used to initialize blank record fields.
	pub fn zero_value(&self) -> Value {
		match self.alternatives().first() {
			Some(Self::Primitive(Primitive::Int)) => Value::Int(0),
			Some(Self::Primitive(Primitive::Float)) => Value::Float(0.0),
			Some(Self::Primitive(Primitive::Bool)) => Value::Bool(false),
			Some(Self::Primitive(Primitive::String)) => Value::String("".into()),
			Some(Self::Primitive(Primitive::Collection)) => Value::Sequence(Vec::new()),
			_ => Value::Null,
		}
	}
}

impl FromStr for TypeDesc {
	type Err = CastError;

	fn from_str(text: &str) -> Result<Self> {
		let invalid = |reason| CastError::InvalidTypeDescriptor {
			text: text.to_owned(),
			reason,
		};

		let trimmed = text.trim();
		let (nullable, body) = match trimmed.strip_prefix('?') {
			Some(rest) => (true, rest),
			None => (false, trimmed),
		};
		if body.is_empty() {
			return Err(invalid("empty descriptor"));
		}

		let mut alternatives = Vec::new();
		for word in body.split('|').map(str::trim) {
			if word.is_empty() {
				return Err(invalid("empty union alternative"));
			}
			if word.contains(|ch: char| ch.is_whitespace() || ch == '?') {
				return Err(invalid("malformed alternative"));
			}
			alternatives.push(match Primitive::from_keyword(word) {
				Some(primitive) => Self::Primitive(primitive),
				None => Self::record(word),
			});
		}

		let desc = Self::union(alternatives);
		Ok(if nullable { desc.nullable() } else { desc })
	}
}

impl TryFrom<String> for TypeDesc {
	type Error = CastError;

	fn try_from(text: String) -> Result<Self> {
		text.parse()
	}
}

impl From<TypeDesc> for String {
	fn from(desc: TypeDesc) -> Self {
		desc.to_string()
	}
}

impl fmt::Display for TypeDesc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primitive(primitive) => f.write_str(primitive.as_str()),
			Self::Record(name) => f.write_str(name),
			Self::Union(items) => {
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str("|")?;
					}
					write!(f, "{item}")?;
				}
				Ok(())
			}
		}
	}
}
