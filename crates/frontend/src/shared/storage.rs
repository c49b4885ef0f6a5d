//! Browser-side persistence: localStorage and cookies.
//!
//! Values here are client preferences only and never part of a server contract.

use wasm_bindgen::JsCast;
use web_sys::window;

pub const LOCALE_KEY: &str = "crm_locale";
pub const SIDEBAR_COLLAPSED_KEY: &str = "crm_sidebar_collapsed";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {}", key);
        }
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn get_bool(key: &str) -> Option<bool> {
    match get_item(key)?.as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn set_bool(key: &str, value: bool) {
    set_item(key, if value { "true" } else { "false" });
}

/// Raw `document.cookie`
fn document_cookie() -> Option<String> {
    let document = window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

pub fn get_cookie(name: &str) -> Option<String> {
    parse_cookie(&document_cookie()?, name)
}

/// Expires the cookie on the root path
pub fn remove_cookie(name: &str) {
    let Some(document) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    else {
        return;
    };
    let _ = document.set_cookie(&format!(
        "{}=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        name
    ));
}

/// Finds `name` in a `k1=v1; k2=v2` cookie string. Empty values count as absent.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = urlencoding::decode(value.trim()).ok()?.into_owned();
        (!value.is_empty()).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cookie() {
        let jar = "csrftoken=abc; access_token=eyJ%3D%3D; theme=dark";
        assert_eq!(parse_cookie(jar, "access_token").as_deref(), Some("eyJ=="));
        assert_eq!(parse_cookie(jar, "theme").as_deref(), Some("dark"));
        assert_eq!(parse_cookie(jar, "missing"), None);
        assert_eq!(parse_cookie("access_token=", "access_token"), None);
        assert_eq!(parse_cookie("", "access_token"), None);
    }
}
