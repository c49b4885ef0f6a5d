//! Generic create/edit/delete scaffolding shared by every entity screen.
//!
//! Each entity implements [`AdminResource`]; the list page, the form modal
//! and the delete confirmation are then written once. State transitions live
//! in plain structs ([`form::FormMachine`], [`delete::DeleteDialog`]) so they
//! can be driven from tests without a browser.

pub mod delete;
pub mod delete_modal;
pub mod form;
pub mod form_modal;
pub mod list_page;
pub mod options;

#[cfg(test)]
pub(crate) mod test_support;

use crate::shared::columns::ColumnSpec;
use crate::shared::i18n::Strings;
use crm_contracts::domain::common::ApiResource;
use crm_contracts::system::auth::Section;
use form::{FieldSpec, FormValues};
use leptos::prelude::*;

/// Filter control shown in the list page's filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Search,
    Relation {
        endpoint: &'static str,
        label_key: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Query string key, sent to the server as is
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn search(strings: &'static Strings) -> Self {
        Self {
            key: "search",
            label: strings.search,
            kind: FilterKind::Search,
        }
    }

    pub fn relation(
        key: &'static str,
        label: &'static str,
        endpoint: &'static str,
        label_key: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Relation {
                endpoint,
                label_key,
            },
        }
    }
}

/// An entity managed through the generic list page and form modal
pub trait AdminResource: ApiResource + Send + Sync {
    const SECTION: Section;

    fn title(strings: &'static Strings) -> &'static str;

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>>;

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec>;

    /// Field values an edit form starts from
    fn form_values(&self) -> FormValues;

    fn filters(strings: &'static Strings) -> Vec<FilterSpec> {
        vec![FilterSpec::search(strings)]
    }

    /// Route of a dedicated detail screen, when the entity has one
    fn detail_path(_id: i64) -> Option<String> {
        None
    }
}

/// Mutable slot holding a state machine.
///
/// Async flows write through it after every await. A slot whose owner is
/// gone returns `None`, so a request finishing after its view unmounted is
/// a no-op.
pub trait StateCell<T> {
    fn update_state<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U>;

    fn read_state<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U> {
        self.try_update(f)
    }

    fn read_state<U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
        self.try_with_untracked(f)
    }
}
