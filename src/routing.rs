//! `#item/query/<query>` location hash, so a search survives reloads and can be bookmarked.

const QUERY_PREFIX: &str = "item/query/";

pub fn query_hash(query: &str) -> String {
    format!("#{QUERY_PREFIX}{}", urlencoding::encode(query.trim()))
}

/// The query encoded in `hash`, if it is a query route with a non-empty query.
pub fn query_from_hash(hash: &str) -> Option<String> {
    let route = hash.strip_prefix('#').unwrap_or(hash);
    let encoded = route.strip_prefix(QUERY_PREFIX)?;
    let decoded = urlencoding::decode(encoded).ok()?;
    let query = decoded.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    }
}

/// The query to run after the hash changed to `hash`, unless it is the one
/// already showing.
pub fn query_to_restore(hash: &str, showing: &str) -> Option<String> {
    query_from_hash(hash).filter(|query| query != showing.trim())
}

#[cfg(target_arch = "wasm32")]
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_hash() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
pub fn remember_query(query: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_hash(&query_hash(query)) {
            tracing::debug!("could not update location hash: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remember_query(_query: &str) {}

/// Call `on_change` with the new hash whenever the location hash changes,
/// e.g. on Back/Forward or an edited URL. The listener lives as long as the page.
#[cfg(target_arch = "wasm32")]
pub fn on_hash_change<F>(mut on_change: F)
where
    F: FnMut(String) + 'static,
{
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::wrap(Box::new(move || on_change(current_hash())) as Box<dyn FnMut()>);
    if let Err(err) =
        window.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
    {
        tracing::warn!("could not listen for hashchange: {err:?}");
    }
    callback.forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn on_hash_change<F>(_on_change: F)
where
    F: FnMut(String) + 'static,
{
}
