//! URL builders for the REST endpoints

use crate::shared::view_state::ViewState;

/// `GET <endpoint>?<filters>&page&limit`
pub fn list_url(base: &str, endpoint: &str, view: &ViewState) -> String {
    let query = ViewState {
        tab: None,
        ..view.clone()
    }
    .to_query();
    format!("{}{}?{}", base, endpoint, query)
}

/// `<endpoint><id>/` for single-record reads
pub fn detail_url(base: &str, endpoint: &str, id: i64) -> String {
    format!("{}{}{}/", base, ensure_trailing_slash(endpoint), id)
}

/// `<endpoint>?<id_field>=<id>` for updates and query-style deletes
pub fn item_url(base: &str, endpoint: &str, id_field: &str, id: i64) -> String {
    format!(
        "{}{}?{}={}",
        base,
        endpoint,
        urlencoding::encode(id_field),
        id
    )
}

fn ensure_trailing_slash(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        endpoint.to_string()
    } else {
        format!("{}/", endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_contracts::shared::pagination::PageSize;

    #[test]
    fn test_list_url_has_filters_page_and_limit_but_no_tab() {
        let mut view = ViewState::default();
        view.set_filter("branch", Some("3".into()));
        view.set_page(2);
        view.set_limit(PageSize::Twenty);
        view.set_page(2);
        view.set_tab(Some("general"));

        assert_eq!(
            list_url("http://api", "/customers/", &view),
            "http://api/customers/?branch=3&limit=20&page=2"
        );
    }

    #[test]
    fn test_item_urls() {
        assert_eq!(
            item_url("", "/customers/", "customer_id", 7),
            "/customers/?customer_id=7"
        );
        assert_eq!(detail_url("", "/applications/", 7), "/applications/7/");
        assert_eq!(detail_url("", "/applications", 7), "/applications/7/");
    }
}
