//! Helpers reading and writing the data of runtime stores.
//!
//! Stores come in two shapes, decided once when the [`StoreHandle`] is
//! created: a [`CollectionStore`] of identified items or a [`SingletonStore`]
//! holding at most one value.

pub mod context;
pub mod id;

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Item of a [`CollectionStore`].
pub trait StoreItem {
	/// Identity of this item inside its store.
	fn id(&self) -> &str;
}

/// Store holding an unordered collection of identified items.
pub trait CollectionStore {
	/// Items held by this store.
	type Item: StoreItem;

	/// Returns all items currently held.
	fn to_list(&self) -> Vec<Self::Item>;

	/// Stores `item` under the given keys.
	fn store(&mut self, item: Self::Item, keys: Vec<String>);

	/// Removes the item with the identity `id`.
	fn remove(&mut self, id: &str);

	/// Generates a new unique key.
	fn generate_id(&mut self) -> String;
}

/// Store holding a single value.
pub trait SingletonStore {
	/// Value held by this store.
	type Value;

	/// Identity of the store.
	fn id(&self) -> &str;

	/// Returns the current value.
	fn get(&self) -> Option<Self::Value>;

	/// Replaces the current value.
	fn set(&mut self, value: Self::Value);

	/// Removes the current value.
	fn clear(&mut self);
}

/// A store of either shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreHandle<C, S> {
	/// See [`CollectionStore`].
	Collection(C),
	/// See [`SingletonStore`].
	Singleton(S),
}

/// Data written to a [`StoreHandle`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreData<T, V> {
	/// Items added to a [`CollectionStore`].
	Collection(Vec<T>),
	/// Value of a [`SingletonStore`], [`None`] clears it.
	Singleton(Option<V>),
}

/// Data read from a [`StoreHandle`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreSnapshot<T, V> {
	/// All items of a [`CollectionStore`].
	Collection(Vec<T>),
	/// Value of a [`SingletonStore`].
	Singleton {
		/// Identity of the store.
		id: String,
		/// Current value.
		raw_data: Option<V>,
	},
}

impl<C, S> StoreHandle<C, S>
where
	C: CollectionStore,
	S: SingletonStore,
{
	/// Wraps a [`CollectionStore`].
	pub const fn collection(store: C) -> Self {
		Self::Collection(store)
	}

	/// Wraps a [`SingletonStore`].
	pub const fn singleton(store: S) -> Self {
		Self::Singleton(store)
	}

	/// Returns `true` for a [`CollectionStore`].
	#[must_use]
	pub const fn is_collection(&self) -> bool {
		matches!(self, Self::Collection(_))
	}

	/// Reads all data of the store.
	#[must_use]
	pub fn get_store_data(&self) -> StoreSnapshot<C::Item, S::Value> {
		match self {
			Self::Collection(store) => StoreSnapshot::Collection(store.to_list()),
			Self::Singleton(store) => StoreSnapshot::Singleton {
				id: store.id().to_owned(),
				raw_data: store.get(),
			},
		}
	}

	/// Removes all data of the store.
	///
	/// For a [`CollectionStore`] the identities present when this is called
	/// are read first and then removed one by one. Items added by someone
	/// else in the meantime are kept.
	pub fn clear_store(&mut self) {
		match self {
			Self::Collection(store) => {
				let ids: Vec<String> = store
					.to_list()
					.iter()
					.map(|item| item.id().to_owned())
					.collect();

				tracing::trace!(count = ids.len(), "clearing collection store");

				for id in &ids {
					store.remove(id);
				}
			}
			Self::Singleton(store) => store.clear(),
		}
	}

	/// Adds `data` to the store.
	///
	/// Every item added to a [`CollectionStore`] is keyed by a freshly
	/// generated id. A [`SingletonStore`] is overwritten, or cleared for
	/// [`None`].
	///
	/// # Errors
	///
	/// If the shape of `data` doesn't match the store, nothing is written.
	pub fn add_store_data(
		&mut self,
		data: StoreData<C::Item, S::Value>,
	) -> Result<(), StoreError> {
		match (self, data) {
			(Self::Collection(store), StoreData::Collection(items)) => {
				for item in items {
					let key = store.generate_id();
					store.store(item, vec![key]);
				}

				Ok(())
			}
			(Self::Singleton(store), StoreData::Singleton(Some(value))) => {
				store.set(value);
				Ok(())
			}
			(Self::Singleton(store), StoreData::Singleton(None)) => {
				store.clear();
				Ok(())
			}
			(Self::Collection(_), StoreData::Singleton(_)) => Err(StoreError::ShapeMismatch {
				store_is_collection: true,
			}),
			(Self::Singleton(_), StoreData::Collection(_)) => Err(StoreError::ShapeMismatch {
				store_is_collection: false,
			}),
		}
	}

	/// Replaces all data of the store with `data`.
	///
	/// This is [`clear_store()`](Self::clear_store) followed by
	/// [`add_store_data()`](Self::add_store_data) and is not atomic: readers
	/// and writers of the store may observe or interleave with the state in
	/// between.
	///
	/// # Errors
	///
	/// If the shape of `data` doesn't match the store. The store is left
	/// untouched in that case.
	pub fn set_store_data(
		&mut self,
		data: StoreData<C::Item, S::Value>,
	) -> Result<(), StoreError> {
		let matches = matches!(
			(&*self, &data),
			(Self::Collection(_), StoreData::Collection(_))
				| (Self::Singleton(_), StoreData::Singleton(_))
		);

		if !matches {
			return Err(StoreError::ShapeMismatch {
				store_is_collection: self.is_collection(),
			});
		}

		self.clear_store();
		self.add_store_data(data)
	}
}

/// Error writing data to a [`StoreHandle`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StoreError {
	/// The data doesn't have the shape of the store.
	ShapeMismatch {
		/// `true` if the store is a [`CollectionStore`].
		store_is_collection: bool,
	},
}

impl Display for StoreError {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::ShapeMismatch {
				store_is_collection: true,
			} => write!(formatter, "expected collection data for a collection store"),
			Self::ShapeMismatch {
				store_is_collection: false,
			} => write!(formatter, "expected a single value for a singleton store"),
		}
	}
}

impl Error for StoreError {}
