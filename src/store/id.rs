//! Naming of stores synthesized in an arc context.

/// Returns the id of the context store for a type and set of tags.
///
/// The id is `{prefix}_{type}_{tags}`, where the first space of `type_name`
/// becomes `-`, brackets become `!` and tags are sorted, joined with `-` and
/// stripped of `#`.
///
/// ```
/// # use web_pec::store::id::context_store_id;
/// assert_eq!(
/// 	context_store_id("[Person]", &["#friends", "#all"], Some("user")),
/// 	"user_!Person!_all-friends",
/// );
/// ```
#[must_use]
pub fn context_store_id<T: AsRef<str>>(
	type_name: &str,
	tags: &[T],
	prefix: Option<&str>,
) -> String {
	let mut id = String::new();

	if let Some(prefix) = prefix.filter(|prefix| !prefix.is_empty()) {
		id.push_str(prefix);
		id.push('_');
	}

	id.extend(
		type_name
			.replacen(' ', "-", 1)
			.chars()
			.map(|character| match character {
				'[' | ']' => '!',
				character => character,
			}),
	);
	id.push('_');

	let mut tags: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
	tags.sort_unstable();
	id.extend(tags.join("-").chars().filter(|character| *character != '#'));

	tracing::trace!(id = %id, "context store id");

	id
}

/// Describes a store to `user`, e.g. `my friends` or `<b>alice's</b> notes`.
///
/// The first tag, without its leading `#`, is preferred over `name`. Returns
/// [`None`] if there is neither.
#[must_use]
pub fn store_description<T: AsRef<str>>(
	name: Option<&str>,
	tags: &[T],
	user: &str,
	owner: &str,
) -> Option<String> {
	let noun = if user == owner {
		String::from("my")
	} else {
		format!("<b>{owner}'s</b>")
	};

	if let Some(tag) = tags.first() {
		let mut chars = tag.as_ref().chars();
		chars.next();
		return Some(format!("{noun} {}", chars.as_str()));
	}

	name.filter(|name| !name.is_empty())
		.map(|name| format!("{noun} {name}"))
}
