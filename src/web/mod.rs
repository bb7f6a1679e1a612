//! Browser implementations of the capabilities the rest of the crate takes
//! explicitly.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use js_sys::Object;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::url_map::Location;
use crate::util::params::Navigation;

/// [`Navigation`] of the current [`Window`], replacing URLs through
/// `history.replaceState()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WebNavigation(Window);

impl WebNavigation {
	/// Navigation of the current [`Window`].
	///
	/// # Errors
	///
	/// If not called from a window, e.g. inside a worker.
	pub fn new() -> Result<Self, WebError> {
		web_sys::window().map(Self).ok_or(WebError::NoWindow)
	}

	/// Navigation of `window`.
	#[must_use]
	pub const fn from_window(window: Window) -> Self {
		Self(window)
	}
}

impl Navigation for WebNavigation {
	type Error = WebError;

	fn href(&self) -> Result<String, WebError> {
		self.0.location().href().map_err(WebError::Js)
	}

	fn replace_url(&self, url: &str) -> Result<(), WebError> {
		self.0
			.history()
			.and_then(|history| {
				history.replace_state_with_url(&Object::new(), "", Some(url))
			})
			.map_err(WebError::Js)
	}
}

/// Returns the [`Location`] of the current window.
///
/// # Errors
///
/// If not called from a window or the location is inaccessible.
pub fn current_location() -> Result<Location, WebError> {
	let location = web_sys::window().ok_or(WebError::NoWindow)?.location();
	let origin = location.origin().map_err(WebError::Js)?;
	let pathname = location.pathname().map_err(WebError::Js)?;

	Ok(Location::new(origin, pathname))
}

/// Error accessing browser state.
#[derive(Clone, Debug)]
pub enum WebError {
	/// There is no [`Window`] in this context.
	NoWindow,
	/// The browser threw.
	Js(JsValue),
}

impl Display for WebError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(formatter, "not running in a window"),
			Self::Js(error) => write!(formatter, "{error:?}"),
		}
	}
}

impl Error for WebError {}
