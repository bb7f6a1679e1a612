//! Arc creation against an injected runtime.

use std::fmt::{self, Debug, Formatter};

use crate::pec::{PecEnvironment, PecFactory, PecFactoryError};
use crate::url_map::{Location, UrlMap};

/// Handle to the external runtime that owns arcs.
///
/// Passed explicitly to whatever creates arcs, instead of being looked up
/// from global state.
pub trait ArcRuntime {
	/// Arc produced by the runtime.
	type Arc;
	/// Composer that renders slots of an arc.
	type SlotComposer;
	/// Manifest context recipes and handles are resolved against.
	type Context;
	/// Loader for particle sources.
	type Loader;
	/// Host for the arc's PECs.
	type Env: PecEnvironment;

	/// Constructs a new arc.
	fn new_arc(&self, options: ArcOptions<Self>) -> Self::Arc;
}

/// Everything the runtime needs to construct an arc.
pub struct ArcOptions<R: ArcRuntime + ?Sized> {
	/// Identity of the arc.
	pub id: String,
	/// Starts the arc's PECs.
	pub pec_factory: PecFactory<R::Env>,
	/// See [`ArcRuntime::SlotComposer`].
	pub slot_composer: Option<R::SlotComposer>,
	/// See [`ArcRuntime::Context`].
	pub context: Option<R::Context>,
	/// See [`ArcRuntime::Loader`].
	pub loader: Option<R::Loader>,
	/// Storage location of the arc, if it is persisted.
	pub storage_key: Option<String>,
}

impl<R: ArcRuntime + ?Sized> Debug for ArcOptions<R> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("ArcOptions")
			.field("id", &self.id)
			.field("pec_factory", &self.pec_factory)
			.field("slot_composer", &self.slot_composer.is_some())
			.field("context", &self.context.is_some())
			.field("loader", &self.loader.is_some())
			.field("storage_key", &self.storage_key)
			.finish()
	}
}

/// Configures and creates an arc.
///
/// # Examples
///
/// ```
/// # use web_pec::{ArcBuilder, Location, UrlMap, LibFlavor};
/// # use web_pec::{ArcRuntime, PecFactoryError};
/// # fn test<R: ArcRuntime>(runtime: &R, env: R::Env) -> Result<R::Arc, PecFactoryError> {
/// let url_map = UrlMap::for_cdn("https://cdn.ex.am", LibFlavor::Lib);
/// let location = Location::new("https://ex.am", "/shell/index.html");
/// ArcBuilder::new("arc-1", url_map, location)
/// 	.storage_key("firebase://arcs/arc-1")
/// 	.build(runtime, env)
/// # }
/// ```
#[must_use = "does nothing unless built"]
pub struct ArcBuilder<R: ArcRuntime> {
	id: String,
	url_map: UrlMap,
	location: Location,
	slot_composer: Option<R::SlotComposer>,
	context: Option<R::Context>,
	loader: Option<R::Loader>,
	storage_key: Option<String>,
}

impl<R: ArcRuntime> Debug for ArcBuilder<R> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("ArcBuilder")
			.field("id", &self.id)
			.field("url_map", &self.url_map)
			.field("location", &self.location)
			.field("storage_key", &self.storage_key)
			.finish_non_exhaustive()
	}
}

impl<R: ArcRuntime> ArcBuilder<R> {
	/// Creates a new [`ArcBuilder`].
	///
	/// Relative and root-relative entries of `url_map` are resolved against
	/// `location`, usually the location of the current document.
	pub fn new<I: Into<String>>(id: I, url_map: UrlMap, location: Location) -> Self {
		Self {
			id: id.into(),
			url_map,
			location,
			slot_composer: None,
			context: None,
			loader: None,
			storage_key: None,
		}
	}

	/// See [`ArcRuntime::SlotComposer`].
	pub fn slot_composer(mut self, slot_composer: R::SlotComposer) -> Self {
		self.slot_composer = Some(slot_composer);
		self
	}

	/// See [`ArcRuntime::Context`].
	pub fn context(mut self, context: R::Context) -> Self {
		self.context = Some(context);
		self
	}

	/// See [`ArcRuntime::Loader`].
	pub fn loader(mut self, loader: R::Loader) -> Self {
		self.loader = Some(loader);
		self
	}

	/// Storage location of the arc.
	pub fn storage_key<K: Into<String>>(mut self, storage_key: K) -> Self {
		self.storage_key = Some(storage_key.into());
		self
	}

	/// Creates the arc through `runtime`, with PECs hosted by `env`.
	///
	/// # Errors
	///
	/// If the URL map has no [`UrlMap::WORKER_ENTRY`].
	pub fn build(self, runtime: &R, env: R::Env) -> Result<R::Arc, PecFactoryError> {
		let pec_factory = PecFactory::new(env, &self.url_map, &self.location)?;

		tracing::debug!(id = %self.id, worker_path = pec_factory.worker_path(), "creating arc");

		Ok(runtime.new_arc(ArcOptions {
			id: self.id,
			pec_factory,
			slot_composer: self.slot_composer,
			context: self.context,
			loader: self.loader,
			storage_key: self.storage_key,
		}))
	}
}
