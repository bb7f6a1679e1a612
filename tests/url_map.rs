#![cfg(test)]

#[cfg(target_family = "wasm")]
use wasm_bindgen_test::wasm_bindgen_test;
use web_pec::{LibFlavor, Location, UrlMap};

#[cfg(target_family = "wasm")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn location() -> Location {
	Location::new("https://ex.am", "/root/leaf")
}

fn sample() -> UrlMap {
	[
		("root", "/"),
		("dot", "./"),
		("absolute", "/lib/worker.js"),
		("cdn", "https://cdn.ex.am/arcs"),
		("scheme", "https://$shell"),
		("relative", "shell/assets"),
		("protocol-relative", "//cdn.ex.am/x"),
	]
	.into_iter()
	.collect()
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn drops_leaf_segment() {
	let map: UrlMap = [("assets", "shell/assets")].into_iter().collect();
	let expanded = map.expand(&location());

	assert_eq!(expanded.len(), 1);
	assert_eq!(
		expanded.get("assets"),
		Some("https://ex.am/root/shell/assets")
	);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn path_shapes() {
	let map = sample();
	let expanded = map.expand(&location());

	assert_eq!(expanded.len(), map.len());

	for (key, value) in &map {
		let result = expanded.get(key).unwrap();

		if value.starts_with('/') {
			assert_eq!(result, format!("https://ex.am{value}"), "{key}");
		} else if value.contains("//") {
			assert_eq!(result, value, "{key}");
		} else {
			assert_eq!(result, format!("https://ex.am/root/{value}"), "{key}");
		}
	}

	assert_eq!(expanded.get("root"), Some("https://ex.am/"));
	assert_eq!(expanded.get("dot"), Some("https://ex.am/root/./"));
	// Leading `/` wins over `//`.
	assert_eq!(
		expanded.get("protocol-relative"),
		Some("https://ex.am//cdn.ex.am/x")
	);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn input_untouched() {
	let map = sample();
	let copy = map.clone();
	let _ = map.expand(&location());

	assert_eq!(map, copy);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn idempotent() {
	let once = sample().expand(&location());
	let twice = once.expand(&Location::new("https://other.origin", "/a/b/c"));

	assert_eq!(once, twice);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn cdn_map() {
	let map = UrlMap::for_cdn("https://cdn.ex.am/arcs", LibFlavor::default());

	assert_eq!(map.len(), 5);
	assert_eq!(map.get("/"), Some("/"));
	assert_eq!(map.get("./"), Some("./"));
	assert_eq!(map.get("assets"), Some("https://cdn.ex.am/arcs/assets"));
	assert_eq!(map.get("https://$cdn"), Some("https://cdn.ex.am/arcs"));
	assert_eq!(
		map.worker_entry(),
		Some("https://cdn.ex.am/arcs/lib/worker-entry-cdn.js")
	);

	let source = UrlMap::for_cdn("https://cdn.ex.am/arcs", LibFlavor::Source);
	assert_eq!(
		source.get(UrlMap::WORKER_ENTRY),
		Some("https://cdn.ex.am/arcs/source/worker-entry-cdn.js")
	);
}

#[cfg_attr(not(target_family = "wasm"), test)]
#[cfg_attr(target_family = "wasm", wasm_bindgen_test)]
fn serializes_as_object() {
	let map: UrlMap = [("b", "2"), ("a", "1")].into_iter().collect();

	assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":"1","b":"2"}"#);
	assert_eq!(
		serde_json::from_str::<UrlMap>(r#"{"b":"2","a":"1"}"#).unwrap(),
		map
	);
}
