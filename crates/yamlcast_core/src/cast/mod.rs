/// Scalar-level casting rules.
pub mod coerce;
mod decode;
mod error;
/// Declared-name and data-key naming conventions.
pub mod naming;
mod node;
mod schema;
mod source;
mod types;
mod value;

/// Typed-tree decoder and its write policy.
pub use decode::{DecodeOptions, Decoder};
/// Error and result aliases.
pub use error::{CastError, DeniedWrite, Result};
/// Untyped input tree.
pub use node::Node;
/// Record type declarations and the introspector seam.
pub use schema::{FieldDescriptor, Introspector, RecordType, Schema};
/// YAML text and file loading.
pub use source::{Compression, ZSTD_MAGIC, decode_bytes, parse_file, parse_str, read_source};
/// Target type descriptors.
pub use types::{Primitive, TypeDesc};
/// Decoded runtime value types.
pub use value::{FieldValue, RecordValue, Value};
