//! Synchronization of remotely described stores into an arc context.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::id::context_store_id;
use super::{CollectionStore, SingletonStore, StoreData, StoreError, StoreHandle};
use crate::util::meta_type::type_from_meta_type;

/// [`StoreHandle`] of a [`StoreContext`].
pub type ContextStore<X> =
	StoreHandle<<X as StoreContext>::Collection, <X as StoreContext>::Singleton>;

/// [`StoreData`] written to a [`ContextStore`].
pub type ContextStoreData<X> = StoreData<
	<<X as StoreContext>::Collection as CollectionStore>::Item,
	<<X as StoreContext>::Singleton as SingletonStore>::Value,
>;

/// Context of an arc holding the stores recipes are resolved against.
pub trait StoreContext {
	/// Runtime type of a store.
	///
	/// Its [`Display`] form is the type name used in
	/// [`context_store_id()`].
	type Type: DeserializeOwned + Display;
	/// See [`CollectionStore`].
	type Collection: CollectionStore;
	/// See [`SingletonStore`].
	type Singleton: SingletonStore;
	/// Error reported when creating a store.
	type Error;

	/// Returns the store with the identity `id`, if the context has one.
	fn find_store_by_id(
		&self,
		id: &str,
	) -> Option<StoreHandle<Self::Collection, Self::Singleton>>;

	/// Creates a new store of type `ty` in this context.
	///
	/// # Errors
	///
	/// If the context fails to create the store.
	fn new_store(
		&mut self,
		ty: Self::Type,
		name: Option<&str>,
		id: &str,
		tags: &[String],
	) -> Result<StoreHandle<Self::Collection, Self::Singleton>, Self::Error>;
}

/// Description of a store kept somewhere else, e.g. in a user's profile.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct StoreMetadata {
	/// Serialized type literal, see
	/// [`meta_type_from_type()`](crate::util::meta_type::meta_type_from_type).
	#[serde(rename = "type")]
	pub meta_type: String,
	/// Human readable name.
	#[serde(default)]
	pub name: Option<String>,
	/// Tags, each with a leading `#`.
	#[serde(default)]
	pub tags: Vec<String>,
}

/// Finds or creates the store described by `metadata` in `context` and
/// replaces its data with `values`.
///
/// The store's identity is [`context_store_id()`] of the decoded type, the
/// tags and `id_prefix`. Its data is written with
/// [`StoreHandle::set_store_data()`] and shares its lack of atomicity.
///
/// # Errors
///
/// - If the type literal can't be decoded or is `null`.
/// - If the context fails to create the store.
/// - If `values` doesn't have the shape of the store. A store that was
///   created is kept in the context.
pub fn create_or_update_store<X: StoreContext>(
	context: &mut X,
	metadata: &StoreMetadata,
	values: ContextStoreData<X>,
	id_prefix: Option<&str>,
) -> Result<ContextStore<X>, SyncError<X::Error>> {
	let ty: X::Type = type_from_meta_type(&metadata.meta_type)
		.map_err(SyncError::Type)?
		.ok_or(SyncError::MissingType)?;
	let id = context_store_id(&ty.to_string(), &metadata.tags, id_prefix);

	let mut store = if let Some(store) = context.find_store_by_id(&id) {
		store
	} else {
		let store = context
			.new_store(ty, metadata.name.as_deref(), &id, &metadata.tags)
			.map_err(SyncError::Context)?;
		tracing::debug!(id = %id, tags = ?metadata.tags, "synthesized store");
		store
	};

	store.set_store_data(values).map_err(SyncError::Store)?;

	Ok(store)
}

/// Error returned by [`create_or_update_store()`].
#[derive(Debug)]
pub enum SyncError<E> {
	/// The type literal isn't valid.
	Type(serde_json::Error),
	/// The type literal is `null`.
	MissingType,
	/// The context failed to create the store.
	Context(E),
	/// The data doesn't fit the store.
	Store(StoreError),
}

impl<E: Display> Display for SyncError<E> {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Type(error) => write!(formatter, "invalid type literal: {error}"),
			Self::MissingType => write!(formatter, "store has no type"),
			Self::Context(error) => write!(formatter, "failed to create store: {error}"),
			Self::Store(error) => write!(formatter, "{error}"),
		}
	}
}

impl<E: Error + 'static> Error for SyncError<E> {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Type(error) => Some(error),
			Self::MissingType => None,
			Self::Context(error) => Some(error),
			Self::Store(error) => Some(error),
		}
	}
}
