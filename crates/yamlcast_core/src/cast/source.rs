use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cast::{CastError, Node, Result};

const MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;
/// zstd frame magic marking a compressed source file.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain text.
	None,
	/// zstd-compressed text.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Parse YAML text into an untyped tree. An empty document is `Null`.
///
/// Merge keys (`<<: *anchor`) are expanded before conversion.
pub fn parse_str(text: &str) -> Result<Node> {
	let mut raw: serde_yaml::Value = serde_yaml::from_str(text)?;
	raw.apply_merge()?;
	Node::try_from(raw)
}

/// Read a source file as text, decompressing zstd input transparently.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
	let path = path.as_ref();
	let (compression, bytes) = decode_bytes(fs::read(path)?)?;
	debug!(path = %path.display(), compression = compression.as_str(), len = bytes.len(), "read yaml source");

	String::from_utf8(bytes).map_err(|err| CastError::InvalidUtf8 {
		valid_up_to: err.utf8_error().valid_up_to(),
	})
}

/// Read and parse a source file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Node> {
	parse_str(&read_source(path)?)
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		return Ok((Compression::Zstd, out));
	}
	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(CastError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes, parse_file, parse_str};
	use crate::cast::{CastError, Node};

	#[test]
	fn empty_document_is_null() {
		assert_eq!(parse_str("").expect("parses"), Node::Null);
	}

	#[test]
	fn merge_keys_are_expanded() {
		let node = parse_str("base: &base\n  host: db\n  port: 1\nprod:\n  <<: *base\n  port: 2\n").expect("parses");
		let prod = node.get("prod").expect("prod mapping");
		assert_eq!(prod.get("<<"), None);
		assert_eq!(prod.get("host"), Some(&Node::String("db".to_owned())));
		assert_eq!(prod.get("port"), Some(&Node::Int(2)));
	}

	#[test]
	fn parser_errors_propagate() {
		let err = parse_str("key: [unclosed").expect_err("parse fails");
		assert!(matches!(err, CastError::Yaml(_)));
	}

	#[test]
	fn plain_bytes_pass_through() {
		let (mode, out) = decode_bytes(b"a: 1\n".to_vec()).expect("decodes");
		assert_eq!(mode, Compression::None);
		assert_eq!(out, b"a: 1\n");
	}

	#[test]
	fn zstd_bytes_are_decompressed() {
		let packed = zstd::stream::encode_all(&b"port: 8080\n"[..], 3).expect("compresses");
		let (mode, out) = decode_bytes(packed).expect("decodes");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(out, b"port: 8080\n");
	}

	#[test]
	fn compressed_file_parses() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("app.yaml.zst");
		let packed = zstd::stream::encode_all(&b"name: demo\n"[..], 3).expect("compresses");
		std::fs::write(&path, packed).expect("write fixture");

		let node = parse_file(&path).expect("parses");
		assert_eq!(node.get("name"), Some(&Node::String("demo".to_owned())));
	}

	#[test]
	fn invalid_utf8_is_reported() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("bad.yaml");
		std::fs::write(&path, [b'a', b':', b' ', 0xFF]).expect("write fixture");

		let err = parse_file(&path).expect_err("utf-8 rejected");
		assert!(matches!(err, CastError::InvalidUtf8 { valid_up_to: 3 }));
	}
}
