//! View state of list and detail screens, owned by the URL query string.
//!
//! The query string is the serialized form of [`ViewState`]: `page`, `limit`
//! and `tab` are reserved keys, every other key is a filter. Absence of a key
//! means "no filter", an empty value is never written.

mod url;

pub use url::{use_deferred_navigate, use_url_view_state, UrlViewState};

use crm_contracts::shared::pagination::PageSize;
use std::collections::BTreeMap;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const TAB_KEY: &str = "tab";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// 1-based
    pub page: u32,
    pub limit: PageSize,
    pub filters: BTreeMap<String, String>,
    pub tab: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageSize::default(),
            filters: BTreeMap::new(),
            tab: None,
        }
    }
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(|v| v.into_owned())
}

/// Flat `key=value` pairs of a query string. Each pair decodes on its own:
/// undecodable pairs and nested (`a[b]`) keys are skipped, and the first
/// occurrence of a repeated key wins.
fn query_pairs(query: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let (Some(key), Some(value)) = (decode_component(raw_key), decode_component(raw_value)) else {
            continue;
        };
        if key.is_empty() || key.contains('[') || key.contains(']') {
            continue;
        }
        params.entry(key).or_insert(value);
    }
    params
}

impl ViewState {
    /// Decode from `location.search`, with or without the leading `?`.
    /// Malformed values fall back to defaults instead of failing the view.
    pub fn from_query(query: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in query_pairs(query) {
            match key.as_str() {
                PAGE_KEY => {
                    state.page = value.trim().parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1)
                }
                LIMIT_KEY => {
                    state.limit = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .and_then(PageSize::from_value)
                        .unwrap_or_default()
                }
                TAB_KEY => state.tab = Some(value).filter(|t| !t.trim().is_empty()),
                _ => {
                    if !value.trim().is_empty() {
                        state.filters.insert(key, value);
                    }
                }
            }
        }
        state
    }

    /// Encode without the leading `?`. Keys come out sorted, so equal states
    /// produce equal URLs.
    pub fn to_query(&self) -> String {
        let mut params: BTreeMap<&str, String> = BTreeMap::new();
        for (key, value) in &self.filters {
            params.insert(key.as_str(), value.clone());
        }
        params.insert(PAGE_KEY, self.page.max(1).to_string());
        params.insert(LIMIT_KEY, self.limit.value().to_string());
        if let Some(tab) = &self.tab {
            params.insert(TAB_KEY, tab.clone());
        }
        serde_qs::to_string(&params).unwrap_or_default()
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.len()
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changing the page size always starts over from the first page
    pub fn set_limit(&mut self, limit: PageSize) {
        self.limit = limit;
        self.page = 1;
    }

    /// `None` or a blank value removes the filter. Any change resets the page
    /// so the view never lands past the last page of the narrowed result.
    pub fn set_filter(&mut self, key: &str, value: Option<String>) {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(v) => {
                self.filters.insert(key.to_string(), v);
            }
            None => {
                self.filters.remove(key);
            }
        }
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn set_tab(&mut self, tab: Option<&str>) {
        self.tab = tab.filter(|t| !t.is_empty()).map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_query() {
        assert_eq!(ViewState::from_query(""), ViewState::default());
        assert_eq!(ViewState::from_query("?"), ViewState::default());
    }

    #[test]
    fn test_decode_reserved_keys_and_filters() {
        let state = ViewState::from_query("?page=2&limit=20&branch=3&search=ali&tab=results");
        assert_eq!(state.page, 2);
        assert_eq!(state.limit, PageSize::Twenty);
        assert_eq!(state.filter("branch"), Some("3"));
        assert_eq!(state.filter("search"), Some("ali"));
        assert_eq!(state.tab.as_deref(), Some("results"));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let state = ViewState::from_query("page=0&limit=33&status=");
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, PageSize::Ten);
        assert_eq!(state.filter("status"), None);

        let state = ViewState::from_query("page=-4&limit=abc");
        assert_eq!(state.page, 1);
        assert_eq!(state.limit, PageSize::Ten);
    }

    #[test]
    fn test_set_limit_resets_page() {
        for page in [1, 2, 7, 300] {
            let mut state = ViewState::default();
            state.set_page(page);
            state.set_limit(PageSize::Fifty);
            assert_eq!(state.page, 1);
        }
    }

    #[test]
    fn test_limit_change_scenario_url() {
        let mut state = ViewState::from_query("page=2&limit=20");
        state.set_limit(PageSize::Fifty);
        assert_eq!(state.to_query(), "limit=50&page=1");
    }

    #[test]
    fn test_filter_change_resets_page_and_blank_removes() {
        let mut state = ViewState::from_query("page=5&search=old");
        state.set_filter("search", Some("new".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filter("search"), Some("new"));

        state.set_page(3);
        state.set_filter("search", Some("   ".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filter("search"), None);
        assert!(!state.to_query().contains("search"));
    }

    #[test]
    fn test_codec_is_stable() {
        let state = ViewState::from_query("tab=general&status=4&page=3&limit=100");
        assert_eq!(ViewState::from_query(&state.to_query()), state);
    }

    #[test]
    fn test_filter_values_are_escaped() {
        let mut state = ViewState::default();
        state.set_filter("search", Some("a&b c".into()));
        let decoded = ViewState::from_query(&state.to_query());
        assert_eq!(decoded.filter("search"), Some("a&b c"));
    }

    #[test]
    fn test_repeated_filter_key_keeps_page_and_limit() {
        let state = ViewState::from_query("page=3&limit=20&status=1&status=2");
        assert_eq!(state.page, 3);
        assert_eq!(state.limit, PageSize::Twenty);
        assert_eq!(state.filter("status"), Some("1"));
    }

    #[test]
    fn test_bad_key_is_dropped_alone() {
        let state = ViewState::from_query("page=3&limit=20&ids[]=1&branch=%FF&search=a%20b");
        assert_eq!(state.page, 3);
        assert_eq!(state.limit, PageSize::Twenty);
        assert_eq!(state.filter("ids[]"), None);
        assert_eq!(state.filter("branch"), None);
        assert_eq!(state.filter("search"), Some("a b"));
        assert_eq!(state.active_filters_count(), 1);
    }
}
