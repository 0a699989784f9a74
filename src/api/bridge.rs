//! Cross-origin fetch bridge.
//!
//! In the browser the catalog is only reachable through script injection: the request
//! URL asks for a script-embeddable response that invokes a named global callback with
//! the payload. Every request gets its own callback name so concurrent requests to the
//! same endpoint never overwrite each other's registration. Desktop builds have no such
//! restriction and read the plain JSON output directly.

use crate::api::error::CatalogError;
use crate::api::models::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlScriptElement;

static NEXT_CALLBACK_ID: AtomicU64 = AtomicU64::new(0);

#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Unique global callback name for one request, e.g. `searchCallback_12`.
pub fn callback_name(prefix: &str) -> String {
    let id = NEXT_CALLBACK_ID.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{prefix}_{id}")
}

fn query_separator(url: &str) -> char {
    if url.contains('?') {
        '&'
    } else {
        '?'
    }
}

pub fn jsonp_url(url: &str, callback: &str) -> String {
    format!(
        "{url}{}output=jsonp&callback={callback}",
        query_separator(url)
    )
}

pub fn json_url(url: &str) -> String {
    format!("{url}{}output=json", query_separator(url))
}

/// Strict envelope check: a catalog error object, a missing `data` field or a
/// non-array `data` field all fail here instead of deep inside rendering code.
pub fn decode_page<T: DeserializeOwned>(
    endpoint: &'static str,
    value: Value,
) -> Result<Page<T>, CatalogError> {
    if let Some(error) = value.get("error") {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Err(CatalogError::Api { code, message });
    }

    match value.get("data") {
        Some(Value::Array(_)) => {}
        Some(_) => return Err(CatalogError::malformed(endpoint, "`data` is not a list")),
        None => return Err(CatalogError::malformed(endpoint, "missing `data`")),
    }

    serde_json::from_value(value).map_err(|err| CatalogError::malformed(endpoint, err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_payload(url: &str, endpoint: &'static str) -> Result<Value, CatalogError> {
    let request = callback_name(endpoint);
    debug!(%request, %url, "catalog request");

    let response = HTTP_CLIENT.get(json_url(url)).send().await.map_err(|err| {
        warn!(%request, %url, error = %err, "catalog request failed");
        CatalogError::Load {
            url: url.to_string(),
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%request, %url, %status, "catalog returned an error status");
        return Err(CatalogError::Http(format!("{url} returned {status}")));
    }

    response
        .json::<Value>()
        .await
        .map_err(|err| CatalogError::malformed(endpoint, err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn release_callback(global: &js_sys::Object, key: &JsValue, script: &HtmlScriptElement) {
    let _ = js_sys::Reflect::delete_property(global, key);
    script.remove();
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_payload(url: &str, endpoint: &'static str) -> Result<Value, CatalogError> {
    let name = callback_name(endpoint);
    debug!(callback = %name, %url, "catalog request");

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CatalogError::Unavailable("document"))?;
    let body = document
        .body()
        .ok_or(CatalogError::Unavailable("document body"))?;
    let script: HtmlScriptElement = document
        .create_element("script")
        .ok()
        .and_then(|element| element.dyn_into().ok())
        .ok_or(CatalogError::Unavailable("script element"))?;
    script.set_src(&jsonp_url(url, &name));

    let global = js_sys::global();
    let key = JsValue::from_str(&name);

    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let on_payload = {
            let global = global.clone();
            let key = key.clone();
            let script = script.clone();
            Closure::once_into_js(move |payload: JsValue| {
                let _ = resolve.call1(&JsValue::NULL, &payload);
                release_callback(&global, &key, &script);
            })
        };
        let _ = js_sys::Reflect::set(&global, &key, &on_payload);

        // Unlike a successful load, a failed one never reaches the callback, so the
        // registration is released here too.
        let on_error = {
            let global = global.clone();
            let key = key.clone();
            let script = script.clone();
            Closure::once_into_js(move |_event: JsValue| {
                release_callback(&global, &key, &script);
                let _ = reject.call0(&JsValue::NULL);
            })
        };
        script.set_onerror(Some(on_error.unchecked_ref()));
    });

    if body.append_child(&script).is_err() {
        release_callback(&global, &key, &script);
        return Err(CatalogError::Load {
            url: url.to_string(),
        });
    }

    let payload = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| {
            warn!(callback = %name, %url, "catalog script failed to load");
            CatalogError::Load {
                url: url.to_string(),
            }
        })?;

    let text = js_sys::JSON::stringify(&payload)
        .ok()
        .and_then(|json| json.as_string())
        .ok_or_else(|| CatalogError::malformed(endpoint, "payload is not JSON"))?;
    serde_json::from_str(&text).map_err(|err| CatalogError::malformed(endpoint, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Track;
    use serde_json::json;

    #[test]
    fn callback_names_are_unique_per_request() {
        let first = callback_name("searchCallback");
        let second = callback_name("searchCallback");
        assert_ne!(first, second);
        assert!(first.starts_with("searchCallback_"));
    }

    #[test]
    fn jsonp_url_picks_the_right_separator() {
        assert_eq!(
            jsonp_url("https://api.deezer.com/chart/0/albums", "albumsCallback_1"),
            "https://api.deezer.com/chart/0/albums?output=jsonp&callback=albumsCallback_1"
        );
        assert_eq!(
            jsonp_url("https://api.deezer.com/search?q=daft", "searchCallback_2"),
            "https://api.deezer.com/search?q=daft&output=jsonp&callback=searchCallback_2"
        );
        assert_eq!(
            json_url("https://api.deezer.com/artist/27/top?limit=10"),
            "https://api.deezer.com/artist/27/top?limit=10&output=json"
        );
    }

    #[test]
    fn decode_page_reads_track_lists() {
        let value = json!({
            "data": [
                {"id": 1, "title": "One", "preview": "https://cdn.example/1.mp3"},
                {"id": 2, "title": "Two", "preview": "https://cdn.example/2.mp3"}
            ],
            "total": 2
        });
        let page: Page<Track> = decode_page("search", value).expect("page decodes");
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, Some(2));
    }

    #[test]
    fn decode_page_rejects_missing_data() {
        let err = decode_page::<Track>("search", json!({"total": 0})).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { endpoint: "search", .. }));

        let err = decode_page::<Track>("search", json!({"data": {"id": 1}})).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));

        let err = decode_page::<Track>("search", json!("nope")).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }

    #[test]
    fn decode_page_surfaces_catalog_errors() {
        let value = json!({"error": {"type": "DataException", "message": "no data", "code": 800}});
        let err = decode_page::<Track>("album tracks", value).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Api {
                code: 800,
                message: "no data".to_string()
            }
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn unusable_url_is_a_load_error() {
        let err = fetch_payload("not a url", "searchCallback").await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::Load {
                url: "not a url".to_string()
            }
        );
    }

    #[test]
    fn decode_page_rejects_items_of_the_wrong_shape() {
        let value = json!({"data": [{"title": "no id"}]});
        let err = decode_page::<Track>("search", value).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }
}
