//! Explicit stand-in for the document location.

/// Origin and path of the document that remaps URLs for a worker.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Location {
	origin: String,
	pathname: String,
}

impl Location {
	/// Creates a new [`Location`].
	///
	/// `origin` is used verbatim, e.g. `https://example.com`, and `pathname`
	/// is the path of the current document, e.g. `/shell/index.html`.
	#[must_use]
	pub fn new<O: Into<String>, P: Into<String>>(origin: O, pathname: P) -> Self {
		Self {
			origin: origin.into(),
			pathname: pathname.into(),
		}
	}

	/// Returns the origin.
	#[must_use]
	pub fn origin(&self) -> &str {
		&self.origin
	}

	/// Returns the path of the current document.
	#[must_use]
	pub fn pathname(&self) -> &str {
		&self.pathname
	}

	/// Returns [`pathname`](Self::pathname) with its last segment dropped.
	///
	/// ```
	/// # use web_pec::Location;
	/// let location = Location::new("https://ex.am", "/root/leaf");
	/// assert_eq!(location.dir_path(), "/root");
	/// ```
	#[must_use]
	pub fn dir_path(&self) -> &str {
		self.pathname
			.rfind('/')
			.and_then(|index| self.pathname.get(..index))
			.unwrap_or_default()
	}
}
