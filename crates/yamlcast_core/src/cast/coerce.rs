//! Scalar-level casting rules.
//!
//! Every rule is total over [`Node`]: `None` (or `false`) means the rule does
//! not apply and the decoder moves on to the next union alternative.

use crate::cast::{Node, Value};

/// Whether `node` may stand in for null.
pub fn casts_to_null(node: &Node) -> bool {
	!is_truthy(node) || render_scalar(node).is_some_and(|text| text == "null")
}

/// Cast to an integer. Null is `0`; scalars must render as `-?[0-9]+`.
pub fn to_int(node: &Node) -> Option<i64> {
	if matches!(node, Node::Null) {
		return Some(0);
	}
	let text = render_scalar(node)?;
	if !is_integer_literal(&text) {
		return None;
	}
	Some(text.parse::<i64>().unwrap_or(if text.starts_with('-') { i64::MIN } else { i64::MAX }))
}

/// Cast to a float. Null is `0.0`; scalars must render as `-?[0-9]+(\.[0-9]+)?`.
pub fn to_float(node: &Node) -> Option<f64> {
	if matches!(node, Node::Null) {
		return Some(0.0);
	}
	let text = render_scalar(node)?;
	if !is_decimal_literal(&text) {
		return None;
	}
	text.parse::<f64>().ok()
}

/// Cast to a string rendering. Null renders as `""`.
pub fn to_string(node: &Node) -> Option<String> {
	render_scalar(node)
}

/// Cast to truthiness. Not applicable to sequences and mappings.
pub fn to_bool(node: &Node) -> Option<bool> {
	match node {
		Node::Sequence(_) | Node::Mapping(_) => None,
		_ => Some(is_truthy(node)),
	}
}

/// An absent or empty scalar may stand in for an empty sequence.
pub fn to_empty_collection(node: &Node) -> Option<Vec<Value>> {
	match node {
		Node::Null | Node::Bool(false) => Some(Vec::new()),
		Node::String(text) if text.is_empty() => Some(Vec::new()),
		_ => None,
	}
}

/// Boolean truthiness: null, `false`, `0`, `0.0`, `""`, `"0"` and empty collections are falsy.
pub fn is_truthy(node: &Node) -> bool {
	match node {
		Node::Null => false,
		Node::Bool(v) => *v,
		Node::Int(v) => *v != 0,
		Node::Float(v) => *v != 0.0,
		Node::String(v) => !(v.is_empty() || v == "0"),
		Node::Sequence(items) => !items.is_empty(),
		Node::Mapping(entries) => !entries.is_empty(),
	}
}

/// String rendering of null and scalars; `None` for sequences and mappings.
pub fn render_scalar(node: &Node) -> Option<String> {
	match node {
		Node::Null | Node::Bool(false) => Some(String::new()),
		Node::Bool(true) => Some("1".to_owned()),
		Node::Int(v) => Some(v.to_string()),
		Node::Float(v) => Some(render_float(*v)),
		Node::String(v) => Some(v.clone()),
		Node::Sequence(_) | Node::Mapping(_) => None,
	}
}

/// Render a float the way scalar casts see it: 14 significant digits, `1.0` is `"1"`,
/// magnitudes from `1e14` up or below `1e-4` use `1.0E+14` form.
pub fn render_float(value: f64) -> String {
	if value.is_nan() {
		return "NAN".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "INF" } else { "-INF" }.to_owned();
	}

	let precision = SIGNIFICANT_DIGITS - 1;
	let scientific = format!("{value:.precision$e}");
	let Some((mantissa, exponent)) = scientific.split_once('e') else {
		return scientific;
	};
	let Ok(exponent) = exponent.parse::<i32>() else {
		return scientific;
	};

	if value != 0.0 && (exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32) {
		let mantissa = trim_fraction(mantissa);
		let mantissa = if mantissa.contains('.') { mantissa.to_owned() } else { format!("{mantissa}.0") };
		let sign = if exponent < 0 { '-' } else { '+' };
		return format!("{mantissa}E{sign}{}", exponent.unsigned_abs());
	}

	let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
	trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

const SIGNIFICANT_DIGITS: usize = 14;

fn trim_fraction(text: &str) -> &str {
	if !text.contains('.') {
		return text;
	}
	text.trim_end_matches('0').trim_end_matches('.')
}

fn is_integer_literal(text: &str) -> bool {
	all_digits(text.strip_prefix('-').unwrap_or(text))
}

fn is_decimal_literal(text: &str) -> bool {
	let body = text.strip_prefix('-').unwrap_or(text);
	match body.split_once('.') {
		Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
		None => all_digits(body),
	}
}

fn all_digits(text: &str) -> bool {
	!text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn s(text: &str) -> Node {
		Node::String(text.to_owned())
	}

	#[test]
	fn null_casts_to_zero_values() {
		assert_eq!(to_int(&Node::Null), Some(0));
		assert_eq!(to_float(&Node::Null), Some(0.0));
		assert_eq!(to_string(&Node::Null), Some(String::new()));
		assert_eq!(to_bool(&Node::Null), Some(false));
		assert_eq!(to_empty_collection(&Node::Null), Some(Vec::new()));
		assert!(casts_to_null(&Node::Null));
	}

	#[test]
	fn falsy_and_literal_null_cast_to_null() {
		assert!(casts_to_null(&Node::Bool(false)));
		assert!(casts_to_null(&Node::Int(0)));
		assert!(casts_to_null(&s("")));
		assert!(casts_to_null(&s("0")));
		assert!(casts_to_null(&s("null")));
		assert!(casts_to_null(&Node::Sequence(Vec::new())));
		assert!(!casts_to_null(&s("NULL")));
		assert!(!casts_to_null(&Node::Int(3)));
		assert!(!casts_to_null(&Node::Sequence(vec![Node::Null])));
	}

	#[test]
	fn int_cast_requires_full_digit_rendering() {
		assert_eq!(to_int(&s("42")), Some(42));
		assert_eq!(to_int(&s("-7")), Some(-7));
		assert_eq!(to_int(&s("007")), Some(7));
		assert_eq!(to_int(&Node::Bool(true)), Some(1));
		assert_eq!(to_int(&Node::Float(3.0)), Some(3));
		assert_eq!(to_int(&Node::Float(3.5)), None);
		assert_eq!(to_int(&s("")), None);
		assert_eq!(to_int(&Node::Bool(false)), None);
		assert_eq!(to_int(&s("12abc")), None);
		assert_eq!(to_int(&s(" 12")), None);
		assert_eq!(to_int(&Node::Sequence(Vec::new())), None);
	}

	#[test]
	fn int_cast_saturates_out_of_range_digits() {
		assert_eq!(to_int(&s("99999999999999999999")), Some(i64::MAX));
		assert_eq!(to_int(&s("-99999999999999999999")), Some(i64::MIN));
	}

	#[test]
	fn float_cast_accepts_optional_fraction() {
		assert_eq!(to_float(&s("1.25")), Some(1.25));
		assert_eq!(to_float(&s("-3")), Some(-3.0));
		assert_eq!(to_float(&Node::Int(4)), Some(4.0));
		assert_eq!(to_float(&s("1.")), None);
		assert_eq!(to_float(&s(".5")), None);
		assert_eq!(to_float(&s("1e5")), None);
		assert_eq!(to_float(&Node::Float(1e20)), None);
	}

	#[test]
	fn string_cast_renders_scalars_only() {
		assert_eq!(to_string(&Node::Bool(true)), Some("1".to_owned()));
		assert_eq!(to_string(&Node::Bool(false)), Some(String::new()));
		assert_eq!(to_string(&Node::Int(-12)), Some("-12".to_owned()));
		assert_eq!(to_string(&Node::Float(2.5)), Some("2.5".to_owned()));
		assert_eq!(to_string(&Node::Mapping(Vec::new())), None);
	}

	#[test]
	fn bool_cast_uses_truthiness() {
		assert_eq!(to_bool(&s("0")), Some(false));
		assert_eq!(to_bool(&s("false")), Some(true));
		assert_eq!(to_bool(&Node::Float(0.0)), Some(false));
		assert_eq!(to_bool(&Node::Int(2)), Some(true));
		assert_eq!(to_bool(&Node::Sequence(vec![Node::Int(1)])), None);
	}

	#[test]
	fn empty_collection_only_from_absent_scalars() {
		assert_eq!(to_empty_collection(&Node::Bool(false)), Some(Vec::new()));
		assert_eq!(to_empty_collection(&s("")), Some(Vec::new()));
		assert_eq!(to_empty_collection(&Node::Int(0)), None);
		assert_eq!(to_empty_collection(&s("0")), None);
		assert_eq!(to_empty_collection(&Node::Bool(true)), None);
		assert_eq!(to_empty_collection(&Node::Mapping(vec![("a".to_owned(), Node::Null)])), None);
	}

	#[test]
	fn float_rendering() {
		assert_eq!(render_float(1.0), "1");
		assert_eq!(render_float(-0.5), "-0.5");
		assert_eq!(render_float(0.0), "0");
		assert_eq!(render_float(1e20), "1.0E+20");
		assert_eq!(render_float(1.5e-7), "1.5E-7");
		assert_eq!(render_float(f64::INFINITY), "INF");
		assert_eq!(render_float(f64::NEG_INFINITY), "-INF");
		assert_eq!(render_float(f64::NAN), "NAN");
	}

	#[test]
	fn float_rendering_keeps_fourteen_significant_digits() {
		assert_eq!(render_float(0.1 + 0.2), "0.3");
		assert_eq!(render_float(1e14), "1.0E+14");
		assert_eq!(render_float(999_999_999_999_999.0), "1.0E+15");
		assert_eq!(render_float(12_345_678_901_234.0), "12345678901234");
		assert_eq!(render_float(0.0001), "0.0001");
		assert_eq!(render_float(0.00001), "1.0E-5");
		assert_eq!(render_float(-2.5e30), "-2.5E+30");
		assert_eq!(to_string(&Node::Float(0.1 + 0.2)), Some("0.3".to_owned()));
		assert_eq!(to_int(&Node::Float(1e14)), None);
	}
}
