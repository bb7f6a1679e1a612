//! Symbolic URL maps and their remapping into absolute URLs.

mod location;

use std::collections::btree_map::{self, BTreeMap};
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub use self::location::Location;

/// Mapping from symbolic keys to paths or URLs.
///
/// Keys are stable identifiers like `assets`, `worker-entry-cdn.js` or
/// pseudo-scheme prefixes like `https://$cdn`. Entries are kept sorted by key
/// so that anything derived from a map, e.g. a serialized
/// [`Handshake`](crate::Handshake), is deterministic.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UrlMap(BTreeMap<String, String>);

/// Which build of the runtime a CDN map points workers at.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LibFlavor {
	/// The bundled build under `lib/`.
	#[default]
	Lib,
	/// The unbundled sources under `source/`.
	Source,
}

impl LibFlavor {
	/// Directory name of this build below the CDN root.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Lib => "lib",
			Self::Source => "source",
		}
	}
}

impl Display for LibFlavor {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(self.as_str())
	}
}

impl UrlMap {
	/// Key every shell map has to contain, naming the worker bootstrap script.
	pub const WORKER_ENTRY: &'static str = "worker-entry-cdn.js";

	/// Creates an empty [`UrlMap`].
	#[must_use]
	pub const fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Creates the default shell map for a runtime served from `cdn_root`.
	///
	/// Mapping `/` and `./` onto themselves lets the loader inside the worker
	/// replace the right-hand side with a fully-qualified URL.
	#[must_use]
	pub fn for_cdn(cdn_root: &str, flavor: LibFlavor) -> Self {
		[
			("/", String::from("/")),
			("./", String::from("./")),
			("assets", format!("{cdn_root}/assets")),
			("https://$cdn", cdn_root.to_owned()),
			(
				Self::WORKER_ENTRY,
				format!("{cdn_root}/{flavor}/{}", Self::WORKER_ENTRY),
			),
		]
		.into_iter()
		.collect()
	}

	/// Returns the value of [`WORKER_ENTRY`](Self::WORKER_ENTRY), if present.
	#[must_use]
	pub fn worker_entry(&self) -> Option<&str> {
		self.get(Self::WORKER_ENTRY)
	}

	/// Returns the path or URL mapped to `key`.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Maps `key` to `value`, returning the previous value.
	pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
		self.0.insert(key.into(), value.into())
	}

	/// Number of entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` if the map has no entries.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over all entries in key order.
	pub fn iter(&self) -> Iter<'_> {
		Iter(self.0.iter())
	}

	/// Produces a copy of this map whose values are usable from another
	/// execution context, e.g. a worker with a different base URL.
	///
	/// - Values starting with `/` are prefixed with the origin.
	/// - Values containing `//` are already fully-qualified and kept.
	/// - Anything else is resolved against the directory of
	///   [`Location::pathname()`].
	///
	/// Nothing is normalized or validated, malformed values produce malformed
	/// URLs.
	///
	/// ```
	/// # use web_pec::{Location, UrlMap};
	/// let map: UrlMap = [("assets", "shell/assets")].into_iter().collect();
	/// let expanded = map.expand(&Location::new("https://ex.am", "/root/leaf"));
	/// assert_eq!(expanded.get("assets"), Some("https://ex.am/root/shell/assets"));
	/// ```
	#[must_use]
	pub fn expand(&self, location: &Location) -> Self {
		self.0
			.iter()
			.map(|(key, path)| (key.clone(), expand_path(path, location)))
			.collect()
	}
}

/// Resolves a single map value, see [`UrlMap::expand()`].
fn expand_path(path: &str, location: &Location) -> String {
	if path.starts_with('/') {
		format!("{}{path}", location.origin())
	} else if path.contains("//") {
		path.to_owned()
	} else {
		format!("{}{}/{path}", location.origin(), location.dir_path())
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlMap {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for UrlMap {
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self.0.extend(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into())),
		);
	}
}

impl IntoIterator for UrlMap {
	type Item = (String, String);
	type IntoIter = btree_map::IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'map> IntoIterator for &'map UrlMap {
	type Item = (&'map str, &'map str);
	type IntoIter = Iter<'map>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the entries of a [`UrlMap`].
#[derive(Clone, Debug)]
pub struct Iter<'map>(btree_map::Iter<'map, String, String>);

impl<'map> Iterator for Iter<'map> {
	type Item = (&'map str, &'map str);

	fn next(&mut self) -> Option<Self::Item> {
		self.0
			.next()
			.map(|(key, value)| (key.as_str(), value.as_str()))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.0.size_hint()
	}
}

impl ExactSizeIterator for Iter<'_> {}
