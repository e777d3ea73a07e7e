use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::cast::coerce::{casts_to_null, to_bool, to_empty_collection, to_float, to_int, to_string};
use crate::cast::naming::to_declared_name;
use crate::cast::source::{parse_file, parse_str};
use crate::cast::{CastError, DeniedWrite, FieldDescriptor, Introspector, Node, Primitive, RecordValue, Result, Schema, TypeDesc, Value};

const ROOT_PATH: &str = "root";

/// Write policy switches, fixed for the lifetime of a decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Permit writes to fields that are not publicly writable.
	pub allow_private_writes: bool,
	/// Attach mapping keys that match no declared field instead of failing.
	pub allow_dynamic_fields: bool,
	/// Permit writes to static fields.
	pub allow_static_writes: bool,
}

impl DecodeOptions {
	/// Preset with every write permitted.
	pub fn permissive() -> Self {
		Self {
			allow_private_writes: true,
			allow_dynamic_fields: true,
			allow_static_writes: true,
		}
	}
}

/// Recursive typed-tree decoder over an [`Introspector`].
///
/// A decoder holds no state besides its options; one introspector may back
/// many decoders on different threads.
pub struct Decoder<'s, I: Introspector + ?Sized = Schema> {
	introspector: &'s I,
	options: DecodeOptions,
}

impl<I: Introspector + ?Sized> Clone for Decoder<'_, I> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<I: Introspector + ?Sized> Copy for Decoder<'_, I> {}

impl<'s, I: Introspector + ?Sized> Decoder<'s, I> {
	/// Decoder with default (strict) options.
	pub fn new(introspector: &'s I) -> Self {
		Self::with_options(introspector, DecodeOptions::default())
	}

	/// Decoder with explicit options.
	pub fn with_options(introspector: &'s I, options: DecodeOptions) -> Self {
		Self { introspector, options }
	}

	/// Options this decoder was built with.
	pub fn options(&self) -> DecodeOptions {
		self.options
	}

	/// Parse YAML text and decode it into `target`.
	pub fn decode_str(&self, text: &str, target: &TypeDesc) -> Result<Value> {
		self.decode_tree(&parse_str(text)?, target)
	}

	/// Read, parse, and decode a YAML file into `target`.
	pub fn decode_file(&self, path: impl AsRef<Path>, target: &TypeDesc) -> Result<Value> {
		self.decode_tree(&parse_file(path)?, target)
	}

	/// Decode an already-parsed tree into `target`.
	pub fn decode_tree(&self, node: &Node, target: &TypeDesc) -> Result<Value> {
		self.decode_node(node, target, None)
	}

	/// Parse YAML text and populate an existing instance in place.
	pub fn populate_str(&self, text: &str, instance: &mut RecordValue) -> Result<()> {
		self.populate_tree(&parse_str(text)?, instance)
	}

	/// Read and parse a YAML file, then populate an existing instance in place.
	pub fn populate_file(&self, path: impl AsRef<Path>, instance: &mut RecordValue) -> Result<()> {
		self.populate_tree(&parse_file(path)?, instance)
	}

	/// Populate an existing instance from a mapping node.
	///
	/// On error the instance may be left partially populated.
	pub fn populate_tree(&self, node: &Node, instance: &mut RecordValue) -> Result<()> {
		let Node::Mapping(entries) = node else {
			return Err(CastError::TypeMismatch {
				path: ROOT_PATH.to_owned(),
				target: instance.type_name.to_string(),
			});
		};
		self.populate_fields(entries, instance, None)
	}

	fn decode_node(&self, node: &Node, target: &TypeDesc, path: Option<&str>) -> Result<Value> {
		match self.try_alternatives(node, target.alternatives(), path)? {
			Some(value) => Ok(value),
			None => Err(CastError::TypeMismatch {
				path: path.unwrap_or(ROOT_PATH).to_owned(),
				target: target.to_string(),
			}),
		}
	}

	fn try_alternatives(&self, node: &Node, alternatives: &[TypeDesc], path: Option<&str>) -> Result<Option<Value>> {
		for alternative in alternatives {
			trace!(path = path.unwrap_or(ROOT_PATH), %alternative, node = node.kind(), "trying alternative");
			let matched = match alternative {
				TypeDesc::Primitive(primitive) => strict_match(node, *primitive).or_else(|| cast(node, *primitive)),
				TypeDesc::Record(name) => self.structural_match(node, name, path)?,
				TypeDesc::Union(inner) => self.try_alternatives(node, inner, path)?,
			};
			if matched.is_some() {
				return Ok(matched);
			}
		}
		Ok(None)
	}

	fn structural_match(&self, node: &Node, record: &str, path: Option<&str>) -> Result<Option<Value>> {
		let Node::Mapping(entries) = node else {
			return Ok(None);
		};
		let Some(mut instance) = self.introspector.blank(record) else {
			trace!(record, "record type unknown, skipping alternative");
			return Ok(None);
		};
		self.populate_fields(entries, &mut instance, path)?;
		Ok(Some(Value::Record(instance)))
	}

	fn populate_fields(&self, entries: &[(String, Node)], instance: &mut RecordValue, path: Option<&str>) -> Result<()> {
		let record = instance.type_name.clone();
		let fields = self.introspector.fields(&record).unwrap_or(&[]);
		let mut pending: IndexMap<&str, &Node> = entries.iter().map(|(key, value)| (key.as_str(), value)).collect();

		for field in fields {
			let key = field.data_key();
			let Some(value) = pending.shift_remove(key.as_str()) else {
				continue;
			};
			self.check_write(&record, field)?;

			let child = match path {
				Some(parent) => format!("{parent}.{key}"),
				None => key,
			};
			let decoded = self.decode_node(value, &field.ty, Some(&child))?;
			self.introspector.set(instance, field, decoded);
		}

		if pending.is_empty() {
			return Ok(());
		}
		if !self.options.allow_dynamic_fields {
			let field = pending.keys().next().map(|key| to_declared_name(key)).unwrap_or_default();
			return Err(illegal_assignment(&record, &field, DeniedWrite::DynamicField));
		}
		for (key, value) in pending {
			let name = to_declared_name(key);
			debug!(record = %record, field = %name, "attaching dynamic field");
			instance.attach(&name, Value::from(value));
		}
		Ok(())
	}

	fn check_write(&self, record: &str, field: &FieldDescriptor) -> Result<()> {
		if field.is_static && !self.options.allow_static_writes {
			return Err(illegal_assignment(record, &field.name, DeniedWrite::StaticField));
		}
		if !field.is_public && !self.options.allow_private_writes {
			return Err(illegal_assignment(record, &field.name, DeniedWrite::NonPublicField));
		}
		Ok(())
	}
}

/// The node already is the requested kind; `any` accepts everything.
fn strict_match(node: &Node, primitive: Primitive) -> Option<Value> {
	let matched = match primitive {
		Primitive::Any => true,
		Primitive::Null => matches!(node, Node::Null),
		Primitive::Int => matches!(node, Node::Int(_)),
		Primitive::Float => matches!(node, Node::Float(_)),
		Primitive::Bool => matches!(node, Node::Bool(_)),
		Primitive::String => matches!(node, Node::String(_)),
		Primitive::Scalar => node.is_scalar(),
		Primitive::Collection => matches!(node, Node::Sequence(_) | Node::Mapping(_)),
	};
	matched.then(|| Value::from(node))
}

fn cast(node: &Node, primitive: Primitive) -> Option<Value> {
	match primitive {
		Primitive::Null => casts_to_null(node).then_some(Value::Null),
		Primitive::Int => to_int(node).map(Value::Int),
		Primitive::Float => to_float(node).map(Value::Float),
		Primitive::Bool => to_bool(node).map(Value::Bool),
		Primitive::String => to_string(node).map(|text| Value::String(text.into())),
		Primitive::Collection => to_empty_collection(node).map(Value::Sequence),
		Primitive::Any | Primitive::Scalar => None,
	}
}

fn illegal_assignment(record: &str, field: &str, denied: DeniedWrite) -> CastError {
	CastError::IllegalAssignment {
		record: record.to_owned(),
		field: field.to_owned(),
		denied,
	}
}
