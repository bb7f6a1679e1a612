//! Bootstrap of particle execution contexts (PECs) for the Arcs runtime in
//! browsers, plus the small helpers shells need around it.
//!
//! A shell creates an arc through [`ArcBuilder`]. The arc's [`PecFactory`]
//! [expands](UrlMap::expand) the shell's [`UrlMap`] into absolute URLs and,
//! whenever the runtime asks for a PEC, starts a worker, hands it one end of
//! a message channel together with a [`Handshake`] and returns the other end.
//!
//! Nothing here reads ambient browser state: the runtime, the document
//! [`Location`] and [`Navigation`] are passed in explicitly. The browser
//! implementations are [`WebPec`](pec::web::WebPec) and the [`web`] module,
//! both only available on `wasm32-unknown-unknown`.
//!
//! # Examples
//!
//! ```
//! # use web_pec::{Location, UrlMap};
//! let map: UrlMap = [
//! 	("root", "/"),
//! 	("cdn", "https://cdn.ex.am"),
//! 	("assets", "shell/assets"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let expanded = map.expand(&Location::new("https://ex.am", "/root/leaf"));
//! assert_eq!(expanded.get("root"), Some("https://ex.am/"));
//! assert_eq!(expanded.get("cdn"), Some("https://cdn.ex.am"));
//! assert_eq!(expanded.get("assets"), Some("https://ex.am/root/shell/assets"));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod arc;
pub mod pec;
pub mod store;
pub mod url_map;
pub mod util;
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub mod web;

pub use self::arc::{ArcBuilder, ArcOptions, ArcRuntime};
pub use self::pec::{create_channel, Handshake, PecEnvironment, PecFactory, PecFactoryError};
pub use self::store::context::{create_or_update_store, StoreContext, StoreMetadata, SyncError};
pub use self::store::{
	CollectionStore, SingletonStore, StoreData, StoreError, StoreHandle, StoreItem, StoreSnapshot,
};
pub use self::url_map::{LibFlavor, Location, UrlMap};
pub use self::util::params::{set_url_param, url_param, Navigation, ParamError};
pub use self::util::random::{random_id, random_name};
