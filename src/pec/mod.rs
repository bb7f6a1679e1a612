//! Bootstrapping of particle execution contexts (PECs) in workers.

#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod web;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::url_map::{Location, UrlMap};

/// First and only message a freshly started worker receives.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Handshake {
	/// Identity of the inner execution context.
	pub id: String,
	/// Remapped URL map the worker resolves its imports against.
	pub base: UrlMap,
}

impl Handshake {
	/// Suffix distinguishing the worker's identity from the caller's.
	pub const INNER_SUFFIX: &'static str = ":inner";

	/// Creates the handshake for the PEC requested under `id`.
	#[must_use]
	pub fn new(id: &str, base: UrlMap) -> Self {
		Self {
			id: format!("{id}{}", Self::INNER_SUFFIX),
			base,
		}
	}
}

/// Host capable of starting workers and connecting them over message
/// channels.
///
/// [`web::WebPec`] implements this for browsers.
pub trait PecEnvironment {
	/// One endpoint of a message channel.
	type Port;
	/// Handle to a started execution unit.
	type Worker;
	/// Error reported by the host.
	type Error;

	/// Creates both endpoints of a new message channel.
	///
	/// # Errors
	///
	/// If the host fails to create the channel.
	fn channel(&self) -> Result<(Self::Port, Self::Port), Self::Error>;

	/// Starts a new execution unit running the script at `worker_path`.
	///
	/// # Errors
	///
	/// If the host fails to start the execution unit.
	fn start(&self, worker_path: &str) -> Result<Self::Worker, Self::Error>;

	/// Sends `handshake` to `worker`, transferring ownership of `transfer`.
	///
	/// # Errors
	///
	/// If the message can't be delivered.
	fn post_handshake(
		&self,
		worker: &Self::Worker,
		handshake: &Handshake,
		transfer: Self::Port,
	) -> Result<(), Self::Error>;
}

/// Starts a worker at `worker_path` and returns the endpoint connected to it.
///
/// The worker receives exactly one [`Handshake`] carrying `id` with
/// [`Handshake::INNER_SUFFIX`] and `base`, together with the other endpoint.
/// This does not wait for the worker to be ready, it picks up the handshake
/// once its own message handling is initialized.
///
/// # Errors
///
/// Any error of the [`PecEnvironment`], unchanged. Nothing is retried.
///
/// If posting the handshake fails, the worker that was already started is
/// dropped but not terminated. A browser worker keeps running until it
/// closes itself.
pub fn create_channel<E: PecEnvironment>(
	env: &E,
	worker_path: &str,
	base: &UrlMap,
	id: &str,
) -> Result<E::Port, E::Error> {
	let (inner, outer) = env.channel()?;
	let worker = env.start(worker_path)?;
	let handshake = Handshake::new(id, base.clone());

	tracing::debug!(worker_path, id = %handshake.id, "starting PEC worker");

	env.post_handshake(&worker, &handshake, inner)?;

	Ok(outer)
}

/// Creates PECs for a single arc, bound to a worker script and URL map.
pub struct PecFactory<E> {
	env: E,
	worker_path: String,
	base: UrlMap,
}

impl<E> Debug for PecFactory<E> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("PecFactory")
			.field("worker_path", &self.worker_path)
			.field("base", &self.base)
			.finish_non_exhaustive()
	}
}

impl<E: PecEnvironment> PecFactory<E> {
	/// Creates a new [`PecFactory`] for a shell `url_map`.
	///
	/// The worker script is taken from [`UrlMap::WORKER_ENTRY`] as is, while
	/// the map handed to workers is [expanded](UrlMap::expand) against
	/// `location`, since worker paths are relative to the worker.
	///
	/// # Errors
	///
	/// If `url_map` has no [`UrlMap::WORKER_ENTRY`].
	pub fn new(env: E, url_map: &UrlMap, location: &Location) -> Result<Self, PecFactoryError> {
		let worker_path = url_map
			.worker_entry()
			.ok_or(PecFactoryError::MissingWorkerEntry)?
			.to_owned();

		Ok(Self::with_worker(env, worker_path, url_map.expand(location)))
	}

	/// Creates a new [`PecFactory`] from an already remapped `base`.
	#[must_use]
	pub const fn with_worker(env: E, worker_path: String, base: UrlMap) -> Self {
		Self {
			env,
			worker_path,
			base,
		}
	}

	/// Path of the worker script.
	#[must_use]
	pub fn worker_path(&self) -> &str {
		&self.worker_path
	}

	/// Remapped URL map handed to every worker.
	#[must_use]
	pub const fn base(&self) -> &UrlMap {
		&self.base
	}

	/// Starts a PEC for `id`, see [`create_channel()`].
	///
	/// # Errors
	///
	/// Any error of the [`PecEnvironment`].
	pub fn create(&self, id: &str) -> Result<E::Port, E::Error> {
		create_channel(&self.env, &self.worker_path, &self.base, id)
	}
}

/// Error returned by [`PecFactory::new()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PecFactoryError {
	/// The URL map has no [`UrlMap::WORKER_ENTRY`].
	MissingWorkerEntry,
}

impl Display for PecFactoryError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingWorkerEntry => {
				write!(formatter, "URL map has no `{}` entry", UrlMap::WORKER_ENTRY)
			}
		}
	}
}

impl Error for PecFactoryError {}
