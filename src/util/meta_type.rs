//! Passthroughs between runtime types and their serialized literals.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Serializes the literal of `ty` to JSON, `null` for [`None`].
///
/// # Errors
///
/// If `T`'s [`Serialize`] implementation fails.
pub fn meta_type_from_type<T: Serialize>(ty: Option<&T>) -> serde_json::Result<String> {
	serde_json::to_string(&ty)
}

/// Parses a literal produced by [`meta_type_from_type()`].
///
/// # Errors
///
/// If `meta_type` isn't valid JSON or not a literal of `T`.
pub fn type_from_meta_type<T: DeserializeOwned>(meta_type: &str) -> serde_json::Result<Option<T>> {
	serde_json::from_str(meta_type)
}

/// Serializes `value` to plain JSON with absent members dropped.
///
/// Object members serialized as `null`, e.g. from a [`None`] field, are
/// removed at every depth. `null` array elements are kept.
///
/// ```
/// # use web_pec::util::meta_type::remove_undefined;
/// # use serde_json::json;
/// let value = json!({"a": 1, "b": null, "c": [null, {"d": null}]});
/// assert_eq!(remove_undefined(&value)?, json!({"a": 1, "c": [null, {}]}));
/// # Ok::<(), serde_json::Error>(())
/// ```
///
/// # Errors
///
/// If `T`'s [`Serialize`] implementation fails.
pub fn remove_undefined<T: Serialize>(value: &T) -> serde_json::Result<Value> {
	let mut value = serde_json::to_value(value)?;
	drop_null_members(&mut value);
	Ok(value)
}

fn drop_null_members(value: &mut Value) {
	match value {
		Value::Object(members) => {
			members.retain(|_, member| !member.is_null());
			members.values_mut().for_each(drop_null_members);
		}
		Value::Array(items) => items.iter_mut().for_each(drop_null_members),
		Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => (),
	}
}
