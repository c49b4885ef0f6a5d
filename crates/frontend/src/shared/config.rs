//! Runtime configuration of the console.
//!
//! The API base is derived from the current window location (backend on
//! port 3000) unless the host page pins it with
//! `<meta name="crm-api-base" content="https://api.example.uz">`.

use crm_contracts::shared::pagination::PageSize;
use crm_contracts::system::settings::OrganizationSettings;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const API_BASE_META: &str = "crm-api-base";
const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub page_sizes: Vec<PageSize>,
    /// Tenant settings, replaced once `/settings/` has been fetched
    pub organization: OrganizationSettings,
}

impl AppConfig {
    pub fn from_window() -> Self {
        Self {
            api_base: meta_api_base().unwrap_or_else(api_base_from_location),
            page_sizes: PageSize::ALL.to_vec(),
            organization: OrganizationSettings::default(),
        }
    }

    /// Full URL of an uploaded asset. Absolute URLs pass through.
    pub fn asset_url(&self, path: &str) -> Option<String> {
        asset_url(self.organization.static_host.as_deref(), &self.api_base, path)
    }
}

fn asset_url(static_host: Option<&str>, api_base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }
    let host = static_host
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .unwrap_or(api_base)
        .trim_end_matches('/');
    Some(format!("{}/{}", host, path.trim_start_matches('/')))
}

fn meta_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
        .ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    let content = content.trim().trim_end_matches('/');
    (!content.is_empty()).then(|| content.to_string())
}

/// API base like "http://localhost:3000"; empty if window is not available
fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

pub fn use_app_config() -> RwSignal<AppConfig> {
    use_context::<RwSignal<AppConfig>>().expect("AppConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url(Some("https://cdn.example.uz/"), "http://api", "/media/a.png").as_deref(),
            Some("https://cdn.example.uz/media/a.png")
        );
        assert_eq!(
            asset_url(None, "http://api:3000", "media/a.png").as_deref(),
            Some("http://api:3000/media/a.png")
        );
        assert_eq!(
            asset_url(Some("https://cdn"), "x", "https://other/b.png").as_deref(),
            Some("https://other/b.png")
        );
        assert_eq!(asset_url(Some("https://cdn"), "x", "  "), None);
    }
}
