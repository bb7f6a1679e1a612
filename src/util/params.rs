//! Reading and replacing query parameters of the current URL.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::Utf8Error;

use percent_encoding::percent_decode_str;
use url::Url;

/// Access to the URL of the current document.
///
/// [`WebNavigation`](crate::web::WebNavigation) implements this for browsers.
pub trait Navigation {
	/// Error reported by the environment.
	type Error;

	/// Returns the full URL of the current document.
	///
	/// # Errors
	///
	/// If the environment can't report its URL.
	fn href(&self) -> Result<String, Self::Error>;

	/// Replaces the URL of the current document without reloading it.
	///
	/// # Errors
	///
	/// If the environment rejects the URL.
	fn replace_url(&self, url: &str) -> Result<(), Self::Error>;
}

/// Returns the first value of the query parameter `name`.
///
/// # Errors
///
/// If the current URL can't be read or parsed.
pub fn url_param<N: Navigation>(
	navigation: &N,
	name: &str,
) -> Result<Option<String>, ParamError<N::Error>> {
	let url = current_url(navigation)?;

	Ok(url
		.query_pairs()
		.find(|(key, _)| key == name)
		.map(|(_, value)| value.into_owned()))
}

/// Sets the query parameter `name` to `value` and replaces the current URL
/// with the result, without reloading.
///
/// The first occurrence of `name` is replaced and later ones are removed,
/// otherwise the parameter is appended. The new URL is percent-decoded before
/// it is handed to [`Navigation::replace_url()`].
///
/// # Errors
///
/// If the current URL can't be read or parsed, the new URL can't be decoded
/// or the environment rejects it.
pub fn set_url_param<N: Navigation>(
	navigation: &N,
	name: &str,
	value: &str,
) -> Result<(), ParamError<N::Error>> {
	let mut url = current_url(navigation)?;
	let href = with_param(&mut url, name, value)?;

	tracing::debug!(name, value, "replacing URL parameter");

	navigation
		.replace_url(&href)
		.map_err(ParamError::Navigation)
}

/// Reads and parses the current URL.
fn current_url<N: Navigation>(navigation: &N) -> Result<Url, ParamError<N::Error>> {
	let href = navigation.href().map_err(ParamError::Navigation)?;
	Url::parse(&href).map_err(ParamError::Parse)
}

/// Sets `name` to `value` in `url` and returns the decoded result.
fn with_param<E>(url: &mut Url, name: &str, value: &str) -> Result<String, ParamError<E>> {
	let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

	if let Some(index) = pairs.iter().position(|(key, _)| key == name) {
		let mut seen = 0_usize;
		pairs.retain(|(key, _)| {
			if key == name {
				seen += 1;
				seen == 1
			} else {
				true
			}
		});

		if let Some(pair) = pairs.get_mut(index) {
			pair.1 = value.to_owned();
		}
	} else {
		pairs.push((name.to_owned(), value.to_owned()));
	}

	url.query_pairs_mut().clear().extend_pairs(pairs);

	percent_decode_str(url.as_str())
		.decode_utf8()
		.map(|href| href.into_owned())
		.map_err(ParamError::Decode)
}

/// Error reading or replacing URL parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamError<E> {
	/// The current URL isn't valid.
	Parse(url::ParseError),
	/// The updated URL doesn't decode to UTF-8.
	Decode(Utf8Error),
	/// The environment reported an error.
	Navigation(E),
}

impl<E: Display> Display for ParamError<E> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Parse(error) => write!(formatter, "invalid document URL: {error}"),
			Self::Decode(error) => write!(formatter, "URL doesn't decode to UTF-8: {error}"),
			Self::Navigation(error) => write!(formatter, "navigation failed: {error}"),
		}
	}
}

impl<E: Error + 'static> Error for ParamError<E> {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Parse(error) => Some(error),
			Self::Decode(error) => Some(error),
			Self::Navigation(error) => Some(error),
		}
	}
}

#[cfg(test)]
mod tests {
	use url::Url;

	use super::with_param;

	fn set(href: &str, name: &str, value: &str) -> String {
		let mut url = Url::parse(href).unwrap();
		with_param::<()>(&mut url, name, value).unwrap()
	}

	#[test]
	fn appends() {
		assert_eq!(
			set("https://ex.am/shell/", "arc", "abc"),
			"https://ex.am/shell/?arc=abc"
		);
	}

	#[test]
	fn replaces_first_and_drops_duplicates() {
		assert_eq!(
			set("https://ex.am/?a=1&arc=x&b=2&arc=y", "arc", "z"),
			"https://ex.am/?a=1&arc=z&b=2"
		);
	}

	#[test]
	fn decodes() {
		assert_eq!(
			set("https://ex.am/", "user", "a/b c"),
			"https://ex.am/?user=a/b+c"
		);
	}
}
