use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cast::naming::to_data_key;
use crate::cast::{RecordValue, Result, TypeDesc, Value};

/// Read access to record type declarations.
///
/// The decoder never inspects a record type any other way.
pub trait Introspector {
	/// Declared fields of `record` in stable order, or `None` for unknown types.
	fn fields(&self, record: &str) -> Option<&[FieldDescriptor]>;

	/// Construct a zero-valued instance of `record`.
	fn blank(&self, record: &str) -> Option<RecordValue> {
		let fields = self.fields(record)?;
		let mut instance = RecordValue::new(record);
		for field in fields {
			instance.set(&field.name, field.ty.zero_value());
		}
		Some(instance)
	}

	/// Assign a decoded value to a declared field.
	fn set(&self, instance: &mut RecordValue, field: &FieldDescriptor, value: Value) {
		instance.set(&field.name, value);
	}
}

/// One declared field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
	/// Declared (camel case) field name.
	pub name: Box<str>,
	/// Declared type of the field; `any` when omitted.
	#[serde(rename = "type", default = "TypeDesc::any")]
	pub ty: TypeDesc,
	/// Field belongs to the type rather than the instance.
	#[serde(rename = "static", default)]
	pub is_static: bool,
	/// Field may be written from outside the type.
	#[serde(rename = "public", default = "default_public")]
	pub is_public: bool,
}

fn default_public() -> bool {
	true
}

impl FieldDescriptor {
	/// Public instance field.
	pub fn new(name: impl Into<Box<str>>, ty: TypeDesc) -> Self {
		Self {
			name: name.into(),
			ty,
			is_static: false,
			is_public: true,
		}
	}

	/// Public instance field with a textual type descriptor.
	pub fn parse(name: impl Into<Box<str>>, ty: &str) -> Result<Self> {
		Ok(Self::new(name, ty.parse()?))
	}

	/// Mark the field static.
	pub fn into_static(mut self) -> Self {
		self.is_static = true;
		self
	}

	/// Mark the field non-public.
	pub fn into_private(mut self) -> Self {
		self.is_public = false;
		self
	}

	/// Key this field is looked up under in data mappings.
	pub fn data_key(&self) -> String {
		to_data_key(&self.name)
	}
}

/// Declared record type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
	/// Record type identifier.
	pub name: Box<str>,
	/// Fields in declaration order.
	pub fields: Vec<FieldDescriptor>,
}

impl RecordType {
	/// Record with no fields.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			fields: Vec::new(),
		}
	}

	/// Append a field declaration.
	pub fn field(mut self, field: FieldDescriptor) -> Self {
		self.fields.push(field);
		self
	}
}

/// Registry of record types, built in code or loaded from a JSON document.
#[derive(Debug, Clone, Default)]
pub struct Schema {
	records: IndexMap<Box<str>, RecordType>,
}

#[derive(Deserialize)]
struct SchemaFile {
	#[serde(default)]
	records: IndexMap<String, RecordFile>,
}

#[derive(Deserialize)]
struct RecordFile {
	#[serde(default)]
	fields: Vec<FieldDescriptor>,
}

impl Schema {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parse a JSON schema document.
	pub fn from_json_str(text: &str) -> Result<Self> {
		let file: SchemaFile = serde_json::from_str(text)?;
		let mut schema = Self::new();
		for (name, record) in file.records {
			schema.insert(RecordType {
				name: name.into(),
				fields: record.fields,
			});
		}
		Ok(schema)
	}

	/// Read and parse a JSON schema file.
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
		let text = fs::read_to_string(path)?;
		Self::from_json_str(&text)
	}

	/// Register a record type, returning the registry.
	pub fn with_record(mut self, record: RecordType) -> Self {
		self.insert(record);
		self
	}

	/// Register or replace a record type.
	pub fn insert(&mut self, record: RecordType) {
		self.records.insert(record.name.clone(), record);
	}

	/// Look up a record type by name.
	pub fn record(&self, name: &str) -> Option<&RecordType> {
		self.records.get(name)
	}

	/// Iterate record types in registration order.
	pub fn records(&self) -> impl Iterator<Item = &RecordType> {
		self.records.values()
	}

	/// Number of registered record types.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Whether no record types are registered.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl Introspector for Schema {
	fn fields(&self, record: &str) -> Option<&[FieldDescriptor]> {
		self.records.get(record).map(|item| item.fields.as_slice())
	}
}
