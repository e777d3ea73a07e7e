//! Typed decoding of untyped YAML trees into primitives, collections, and declared record types.

/// Node model, coercion rules, naming conventions, schema, and the typed-tree decoder.
pub mod cast;
