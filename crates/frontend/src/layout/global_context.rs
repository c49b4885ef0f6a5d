use crate::shared::i18n::Locale;
use crate::shared::storage;
use leptos::prelude::*;
use web_sys::window;

/// Shell-wide UI preferences persisted in localStorage
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub locale: RwSignal<Locale>,
    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppGlobalContext {
    /// Reads the stored preferences once; missing or garbage values fall back
    /// to the browser language and an expanded sidebar.
    pub fn new() -> Self {
        let stored_locale = storage::get_item(storage::LOCALE_KEY);
        let browser_locale = window().and_then(|w| w.navigator().language());
        Self {
            locale: RwSignal::new(initial_locale(
                stored_locale.as_deref(),
                browser_locale.as_deref(),
            )),
            sidebar_collapsed: RwSignal::new(
                storage::get_bool(storage::SIDEBAR_COLLAPSED_KEY).unwrap_or(false),
            ),
        }
    }

    /// Writes preferences back whenever they change
    pub fn init_persistence(&self) {
        let locale = self.locale;
        Effect::new(move |prev: Option<Locale>| {
            let current = locale.get();
            if prev.is_some_and(|p| p != current) {
                storage::set_item(storage::LOCALE_KEY, current.code());
                log::debug!("locale -> {}", current.code());
            }
            set_document_lang(current);
            current
        });

        let collapsed = self.sidebar_collapsed;
        Effect::new(move |prev: Option<bool>| {
            let current = collapsed.get();
            if prev.is_some_and(|p| p != current) {
                storage::set_bool(storage::SIDEBAR_COLLAPSED_KEY, current);
            }
            current
        });
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|c| *c = !*c);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context")
}

/// Stored choice first, then the browser language, then the default locale
pub fn initial_locale(stored: Option<&str>, browser: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_code)
        .or_else(|| browser.and_then(Locale::from_code))
        .unwrap_or_default()
}

fn set_document_lang(locale: Locale) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", locale.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_locale() {
        assert_eq!(initial_locale(Some("uz"), Some("en-US")), Locale::Uz);
        assert_eq!(initial_locale(Some("xx"), Some("en-US")), Locale::En);
        assert_eq!(initial_locale(None, Some("de-DE")), Locale::Ru);
        assert_eq!(initial_locale(None, None), Locale::default());
    }
}
