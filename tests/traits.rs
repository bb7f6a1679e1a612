use std::fmt::Debug;
use std::hash::Hash;
use std::panic::{RefUnwindSafe, UnwindSafe};

use static_assertions::{assert_impl_all, assert_not_impl_any};
#[cfg(target_family = "wasm")]
use wasm_bindgen_test::wasm_bindgen_test;
use web_pec::{
	Handshake, LibFlavor, Location, PecFactoryError, StoreError, StoreMetadata, SyncError, UrlMap,
};

#[cfg(target_family = "wasm")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
const fn basic() {
	assert_impl_all!(UrlMap: Clone, Debug, Default, Eq, PartialEq, Send, Sync, Unpin, RefUnwindSafe, UnwindSafe);
	assert_not_impl_any!(UrlMap: Copy, Hash, Ord, PartialOrd);

	assert_impl_all!(Location: Clone, Debug, Eq, Hash, PartialEq, Send, Sync, Unpin, RefUnwindSafe, UnwindSafe);
	assert_not_impl_any!(Location: Copy, Default, Ord, PartialOrd);

	assert_impl_all!(LibFlavor: Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Send, Sync);

	assert_impl_all!(Handshake: Clone, Debug, Eq, PartialEq, Send, Sync, Unpin);
	assert_not_impl_any!(Handshake: Copy, Default, Hash);

	assert_impl_all!(PecFactoryError: Clone, Copy, Debug, Eq, PartialEq, Send, Sync, std::error::Error);
	assert_impl_all!(StoreError: Clone, Copy, Debug, Eq, PartialEq, Send, Sync, std::error::Error);

	assert_impl_all!(StoreMetadata: Clone, Debug, Default, Eq, PartialEq, Send, Sync);
	assert_impl_all!(SyncError<PecFactoryError>: Debug, Send, Sync, std::error::Error);
	assert_not_impl_any!(SyncError<PecFactoryError>: Clone, PartialEq);
}
