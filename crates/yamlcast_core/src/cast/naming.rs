//! Declared-name (camel case) and data-key (snake case) conventions.
//!
//! The two transforms are not exact inverses: runs of capitals split per letter,
//! so `HTTPPort` maps to `h_t_t_p_port` and back to `hTTPPort`.

/// Map a declared field name to its data key: `serverPort` -> `server_port`.
pub fn to_data_key(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 4);
	let mut pending_sep = false;

	for ch in name.chars() {
		if ch.is_ascii_uppercase() {
			pending_sep = true;
		}
		let ch = ch.to_ascii_lowercase();
		if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
			if pending_sep && !out.is_empty() {
				out.push('_');
			}
			pending_sep = false;
			out.push(ch);
		} else {
			pending_sep = true;
		}
	}

	out
}

/// Map a snake or kebab case data key to a declared name: `max-retries` -> `maxRetries`.
pub fn to_declared_name(key: &str) -> String {
	let mut out = String::with_capacity(key.len());
	let mut chars = key.chars().peekable();

	while let Some(ch) = chars.next() {
		if matches!(ch, '-' | '_')
			&& let Some(next) = chars.next_if(char::is_ascii_lowercase)
		{
			out.push(next.to_ascii_uppercase());
			continue;
		}
		out.push(ch);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::{to_data_key, to_declared_name};

	#[test]
	fn camel_round_trip() {
		assert_eq!(to_data_key("serverPort"), "server_port");
		assert_eq!(to_declared_name("server_port"), "serverPort");
	}

	#[test]
	fn consecutive_capitals_are_lossy() {
		assert_eq!(to_data_key("HTTPPort"), "h_t_t_p_port");
		assert_eq!(to_declared_name("h_t_t_p_port"), "hTTPPort");
	}

	#[test]
	fn data_key_collapses_and_trims_separators() {
		assert_eq!(to_data_key("name"), "name");
		assert_eq!(to_data_key("  weird--Name!! "), "weird_name");
		assert_eq!(to_data_key("_private"), "private");
		assert_eq!(to_data_key("Leading"), "leading");
		assert_eq!(to_data_key("version2Id"), "version2_id");
		assert_eq!(to_data_key("already_snake"), "already_snake");
	}

	#[test]
	fn declared_name_from_kebab_and_snake() {
		assert_eq!(to_declared_name("max-retries"), "maxRetries");
		assert_eq!(to_declared_name("a__b"), "a_B");
		assert_eq!(to_declared_name("version_2"), "version_2");
		assert_eq!(to_declared_name("trailing_"), "trailing_");
		assert_eq!(to_declared_name("Upper_Case"), "Upper_Case");
	}
}
