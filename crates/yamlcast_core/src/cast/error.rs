use std::fmt;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CastError>;

/// Policy switch that refused a field write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeniedWrite {
	/// Field is static and `allow_static_writes` is off.
	StaticField,
	/// Field is not publicly writable and `allow_private_writes` is off.
	NonPublicField,
	/// Key has no declared field and `allow_dynamic_fields` is off.
	DynamicField,
}

impl fmt::Display for DeniedWrite {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::StaticField => f.write_str("static field writes are not allowed"),
			Self::NonPublicField => f.write_str("non-public field writes are not allowed"),
			Self::DynamicField => f.write_str("dynamic properties are not allowed"),
		}
	}
}

/// Errors produced while loading, parsing, and decoding YAML trees.
#[derive(Debug, Error)]
pub enum CastError {
	/// No alternative of the target could match or cast the node.
	#[error("cannot convert {path} to {target}")]
	TypeMismatch {
		/// Dot-separated decode path, `root` at the top level.
		path: String,
		/// Rendered target descriptor or record type name.
		target: String,
	},
	/// A policy switch forbade a write the data required.
	#[error("cannot set {record}.{field} while {denied}")]
	IllegalAssignment {
		/// Record type name of the instance being populated.
		record: String,
		/// Declared-convention field name.
		field: String,
		/// Switch that refused the write.
		denied: DeniedWrite,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// YAML parser failure, propagated unchanged.
	#[error("yaml: {0}")]
	Yaml(#[from] serde_yaml::Error),
	/// JSON schema input or output failed to (de)serialize.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Source bytes were not valid UTF-8 text.
	#[error("source is not valid utf-8 (valid up to byte {valid_up_to})")]
	InvalidUtf8 {
		/// Length of the valid UTF-8 prefix.
		valid_up_to: usize,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Type descriptor text could not be parsed.
	#[error("invalid type descriptor {text:?}: {reason}")]
	InvalidTypeDescriptor {
		/// Original descriptor text.
		text: String,
		/// Short description of the problem.
		reason: &'static str,
	},
	/// Mapping key was a sequence or mapping.
	#[error("unsupported mapping key of kind {kind}")]
	UnsupportedKey {
		/// Node kind of the rejected key.
		kind: &'static str,
	},
	/// Requested record type is not registered.
	#[error("record type not found: {name}")]
	UnknownRecord {
		/// Requested record type name.
		name: String,
	},
}
