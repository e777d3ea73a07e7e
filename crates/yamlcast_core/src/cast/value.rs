use crate::cast::Node;

/// Decoded, typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Null.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// 64-bit float scalar.
	Float(f64),
	/// Text scalar.
	String(Box<str>),
	/// Sequence kept verbatim or produced by a collection cast.
	Sequence(Vec<Value>),
	/// Mapping kept verbatim, entries in document order.
	Mapping(Vec<FieldValue>),
	/// Populated record instance.
	Record(RecordValue),
}

/// Instance of a declared record type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Record type identifier.
	pub type_name: Box<str>,
	/// Declared field values in declaration order.
	pub fields: Vec<FieldValue>,
	/// Keys attached at decode time with no declared field.
	pub dynamic: Vec<FieldValue>,
}

/// Named value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field or key name.
	pub name: Box<str>,
	/// Field value.
	pub value: Value,
}

impl RecordValue {
	/// Create an instance with no fields set.
	pub fn new(type_name: impl Into<Box<str>>) -> Self {
		Self {
			type_name: type_name.into(),
			fields: Vec::new(),
			dynamic: Vec::new(),
		}
	}

	/// Declared field value, falling back to dynamically attached fields.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields
			.iter()
			.chain(self.dynamic.iter())
			.find(|field| field.name.as_ref() == name)
			.map(|field| &field.value)
	}

	/// Assign a declared field, replacing an existing value in place.
	pub fn set(&mut self, name: &str, value: Value) {
		upsert(&mut self.fields, name, value);
	}

	/// Attach a field the record type does not declare.
	pub fn attach(&mut self, name: &str, value: Value) {
		upsert(&mut self.dynamic, name, value);
	}
}

fn upsert(fields: &mut Vec<FieldValue>, name: &str, value: Value) {
	match fields.iter_mut().find(|field| field.name.as_ref() == name) {
		Some(slot) => slot.value = value,
		None => fields.push(FieldValue {
			name: name.into(),
			value,
		}),
	}
}

impl Value {
	/// Short lowercase label of the value kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::String(_) => "string",
			Self::Sequence(_) => "sequence",
			Self::Mapping(_) => "mapping",
			Self::Record(_) => "record",
		}
	}

	/// Borrow the record payload, if this is a record.
	pub fn as_record(&self) -> Option<&RecordValue> {
		match self {
			Self::Record(item) => Some(item),
			_ => None,
		}
	}
}

/// Verbatim conversion, used for strict collection matches and dynamic fields.
impl From<&Node> for Value {
	fn from(node: &Node) -> Self {
		match node {
			Node::Null => Self::Null,
			Node::Bool(v) => Self::Bool(*v),
			Node::Int(v) => Self::Int(*v),
			Node::Float(v) => Self::Float(*v),
			Node::String(v) => Self::String(v.as_str().into()),
			Node::Sequence(items) => Self::Sequence(items.iter().map(Value::from).collect()),
			Node::Mapping(entries) => Self::Mapping(
				entries
					.iter()
					.map(|(key, value)| FieldValue {
						name: key.as_str().into(),
						value: Value::from(value),
					})
					.collect(),
			),
		}
	}
}
