//! Option lists of relational fields (branch select, status filter, ...).

use crate::shared::api::use_api;
use crate::shared::query::{use_query_client, QueryKey};
use crate::shared::view_state::ViewState;
use crm_contracts::shared::pagination::{ListResponse, PageSize};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

/// `(id, label)` pairs in server order
pub type OptionList = Vec<(i64, String)>;

fn label_of(item: &Value, label_key: &str, id: i64) -> String {
    [label_key, "name", "full_name"]
        .iter()
        .find_map(|key| item.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", id))
}

/// Items without an integer `id` are skipped
pub fn parse_options(text: &str, label_key: &str) -> Result<OptionList, serde_json::Error> {
    let list = ListResponse::<Value>::from_json(text)?;
    Ok(list
        .results
        .iter()
        .filter_map(|item| {
            let id = item.get("id")?.as_i64()?;
            Some((id, label_of(item, label_key, id)))
        })
        .collect())
}

/// First hundred records of `endpoint` as select options.
///
/// Refetched whenever `["options", endpoint]` is invalidated, which every
/// successful write to `endpoint` does. A failed fetch
/// leaves the list empty; the select then shows raw ids.
pub fn use_relation_options(endpoint: &'static str, label_key: &'static str) -> Signal<OptionList> {
    let api = use_api();
    let client = use_query_client();
    let key = QueryKey::options(endpoint);
    client.register(&key);

    let options = RwSignal::new(OptionList::new());
    Effect::new(move |_| {
        client.generation(&key);
        let api = api.clone();
        spawn_local(async move {
            let view = ViewState {
                limit: PageSize::Hundred,
                ..ViewState::default()
            };
            let url = crate::shared::api::url::list_url(api.base(), endpoint, &view);
            match api.get_text(&url, client.retry).await {
                Ok(text) => match parse_options(&text, label_key) {
                    Ok(list) => {
                        options.try_set(list);
                    }
                    Err(e) => log::warn!("bad options payload from {}: {}", endpoint, e),
                },
                Err(e) => log::warn!("options of {} not loaded: {}", endpoint, e),
            }
        });
    });

    options.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_from_envelope_and_array() {
        let envelope = r#"{"results": [{"id": 1, "name": "Chilonzor"}, {"id": 2, "name": ""}], "count": 2}"#;
        assert_eq!(
            parse_options(envelope, "name").unwrap(),
            vec![(1, "Chilonzor".to_string()), (2, "#2".to_string())]
        );

        let bare = r#"[{"id": 5, "full_name": "Ali Valiyev"}, {"name": "no id"}]"#;
        assert_eq!(
            parse_options(bare, "full_name").unwrap(),
            vec![(5, "Ali Valiyev".to_string())]
        );
    }
}
