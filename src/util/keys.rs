//! Arc keys of a user record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The parts of a user record listing arcs.
///
/// `profiles` and `shares` may reference keys that are no longer in `arcs`,
/// the record has no referential integrity.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct UserRecord {
	/// All arcs of the user.
	#[serde(default)]
	pub arcs: Option<BTreeMap<String, Value>>,
	/// Arcs used as profiles.
	#[serde(default)]
	pub profiles: Option<BTreeMap<String, Value>>,
	/// Arcs shared by the user.
	#[serde(default)]
	pub shares: Option<BTreeMap<String, Value>>,
}

impl UserRecord {
	/// Keys of arcs that are profiles, see [`intersect_arc_keys()`].
	#[must_use]
	pub fn profile_keys(&self) -> Vec<String> {
		intersect_arc_keys(self.arcs.as_ref(), self.profiles.as_ref())
	}

	/// Keys of arcs that are shared, see [`intersect_arc_keys()`].
	#[must_use]
	pub fn share_keys(&self) -> Vec<String> {
		intersect_arc_keys(self.arcs.as_ref(), self.shares.as_ref())
	}
}

/// Returns the keys of `arcs` whose entry in `other` is truthy.
///
/// Empty if either map is missing.
#[must_use]
pub fn intersect_arc_keys<T>(
	arcs: Option<&BTreeMap<String, T>>,
	other: Option<&BTreeMap<String, Value>>,
) -> Vec<String> {
	let (Some(arcs), Some(other)) = (arcs, other) else {
		return Vec::new();
	};

	arcs.keys()
		.filter(|key| other.get(*key).is_some_and(is_truthy))
		.cloned()
		.collect()
}

/// Truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(value) => *value,
		Value::Number(number) => number
			.as_f64()
			.is_some_and(|number| number != 0. && !number.is_nan()),
		Value::String(string) => !string.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}
