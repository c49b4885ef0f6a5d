//! Create/edit form: field specs, client-side validation and the submit flow.

use super::StateCell;
use crate::shared::api::ApiError;
use crate::shared::i18n::{fill_one, Strings};
use crate::shared::notify::Notifier;
use crate::shared::query::{CacheInvalidator, QueryKey};
use crm_contracts::shared::api_error::FieldErrors;
use crm_contracts::shared::validation::{parse_decimal, ValidationIssue, ValidationRules, ValueFormat};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::future::Future;

/// Raw input values keyed by field name
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Phone,
    Integer,
    Decimal,
    TextArea,
    Color,
    /// Select over the records of another endpoint; the value is the record id
    Relation {
        endpoint: &'static str,
        label_key: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub rules: ValidationRules,
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        let format = match kind {
            FieldKind::Phone => ValueFormat::Phone,
            FieldKind::Integer | FieldKind::Relation { .. } => ValueFormat::Integer,
            FieldKind::Decimal => ValueFormat::Decimal,
            FieldKind::Text | FieldKind::TextArea | FieldKind::Color => ValueFormat::Any,
        };
        Self {
            name,
            label,
            kind,
            rules: ValidationRules::none().with_format(format),
        }
    }

    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn relation(
        name: &'static str,
        label: &'static str,
        endpoint: &'static str,
        label_key: &'static str,
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Relation {
                endpoint,
                label_key,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.rules = self.rules.with_max_length(max);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.rules = self.rules.with_min(min);
        self
    }
}

pub fn issue_message(issue: ValidationIssue, strings: &Strings) -> String {
    match issue {
        ValidationIssue::Required => strings.required.to_string(),
        ValidationIssue::InvalidPhone => strings.invalid_phone.to_string(),
        ValidationIssue::NotInteger => strings.not_integer.to_string(),
        ValidationIssue::NotNumber => strings.not_number.to_string(),
        ValidationIssue::TooLong(n) => fill_one(strings.too_long, n),
        ValidationIssue::BelowMin => strings.below_min.to_string(),
    }
}

pub fn validate(fields: &[FieldSpec], values: &FormValues, strings: &Strings) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        let value = values.get(field.name).map(String::as_str).unwrap_or("");
        if let Err(issue) = field.rules.validate(value) {
            errors.insert(field.name, issue_message(issue, strings));
        }
    }
    errors
}

/// JSON body of a create/update request. Blank inputs are sent as `null`.
pub fn build_payload(fields: &[FieldSpec], values: &FormValues) -> Value {
    let mut body = Map::new();
    for field in fields {
        let raw = values.get(field.name).map(|v| v.trim()).unwrap_or("");
        let value = if raw.is_empty() {
            Value::Null
        } else {
            match field.kind {
                FieldKind::Integer | FieldKind::Relation { .. } => {
                    raw.parse::<i64>().map(Value::from).unwrap_or(Value::Null)
                }
                FieldKind::Decimal => parse_decimal(raw).map(Value::from).unwrap_or(Value::Null),
                _ => Value::from(raw),
            }
        };
        body.insert(field.name.to_string(), value);
    }
    Value::Object(body)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Closed,
    /// Edit form waiting for the record
    Loading(i64),
    LoadFailed {
        id: i64,
        message: String,
    },
    Open(FormMode),
    Submitting(FormMode),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormMachine {
    pub phase: FormPhase,
    pub values: FormValues,
    pub errors: FieldErrors,
}

impl FormMachine {
    pub fn open_create(&mut self, initial: FormValues) {
        *self = Self {
            phase: FormPhase::Open(FormMode::Create),
            values: initial,
            errors: FieldErrors::new(),
        };
    }

    pub fn open_edit(&mut self, id: i64) {
        *self = Self {
            phase: FormPhase::Loading(id),
            ..Self::default()
        };
    }

    /// Ignored unless the form still waits for this record
    pub fn loaded(&mut self, id: i64, values: FormValues) -> bool {
        if self.phase != FormPhase::Loading(id) {
            return false;
        }
        self.phase = FormPhase::Open(FormMode::Edit(id));
        self.values = values;
        true
    }

    pub fn load_failed(&mut self, id: i64, message: String) {
        if self.phase == FormPhase::Loading(id) {
            self.phase = FormPhase::LoadFailed { id, message };
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Loading(_))
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting(_))
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.phase, FormPhase::Open(_))
    }

    pub fn value(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Editing a field drops its error
    pub fn set_value(&mut self, name: &str, value: String) {
        if self.is_submitting() {
            return;
        }
        self.values.insert(name.to_string(), value);
        if self.errors.get(name).is_some() {
            let (_, rest) = std::mem::take(&mut self.errors).partition_known(&[name]);
            self.errors = rest;
        }
    }

    /// Moves to `Submitting` when the form is open and `errors` is empty.
    /// Otherwise records the errors and stays open.
    pub fn begin_submit(&mut self, errors: FieldErrors) -> Option<(FormMode, FormValues)> {
        let FormPhase::Open(mode) = self.phase else {
            return None;
        };
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::new();
        self.phase = FormPhase::Submitting(mode);
        Some((mode, self.values.clone()))
    }

    pub fn succeeded(&mut self) {
        *self = Self::default();
    }

    /// Back to the open form; entered values stay
    pub fn failed(&mut self, errors: FieldErrors) {
        if let FormPhase::Submitting(mode) = self.phase {
            self.phase = FormPhase::Open(mode);
            self.errors = errors;
        }
    }

    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Self::default();
        true
    }

    /// Resets after the modal is gone. A request still in flight settles
    /// against `Closed` and changes nothing.
    pub fn dismiss(&mut self) {
        *self = Self::default();
    }
}

/// Opens an edit form and fills it once the record arrives
pub async fn load_for_edit<S, Fut>(state: &S, id: i64, strings: &Strings, fetch: Fut)
where
    S: StateCell<FormMachine>,
    Fut: Future<Output = Result<FormValues, ApiError>>,
{
    state.update_state(|m| m.open_edit(id));
    match fetch.await {
        Ok(values) => {
            state.update_state(|m| m.loaded(id, values));
        }
        Err(e) => {
            log::warn!("failed to load record {} for editing: {}", id, e);
            let message = e.user_message(strings.load_failed);
            state.update_state(|m| m.load_failed(id, message));
        }
    }
}

/// Everything the submit flow needs besides the request itself
pub struct SubmitContext<'a, I, N> {
    pub fields: &'a [FieldSpec],
    pub strings: &'a Strings,
    /// Key of the list that owns the record
    pub list_key: &'a QueryKey,
    pub invalidator: &'a I,
    pub notifier: &'a N,
}

/// Validates, sends exactly one create/update and settles the form.
///
/// Returns true when the record was saved and the form closed.
pub async fn submit_form<S, I, N, F, Fut>(state: &S, ctx: SubmitContext<'_, I, N>, send: F) -> bool
where
    S: StateCell<FormMachine>,
    I: CacheInvalidator,
    N: Notifier,
    F: FnOnce(FormMode, Value) -> Fut,
    Fut: Future<Output = Result<Value, ApiError>>,
{
    let Some(values) = state.read_state(|m| m.values.clone()) else {
        return false;
    };
    let errors = validate(ctx.fields, &values, ctx.strings);
    let Some((mode, values)) = state.update_state(|m| m.begin_submit(errors)).flatten() else {
        return false;
    };

    let payload = build_payload(ctx.fields, &values);
    match send(mode, payload).await {
        Ok(_) => {
            let message = match mode {
                FormMode::Create => ctx.strings.created_success,
                FormMode::Edit(_) => ctx.strings.saved_success,
            };
            ctx.notifier.success(message);
            state.update_state(|m| m.succeeded());
            ctx.invalidator.invalidate_written(ctx.list_key);
            true
        }
        Err(e) => {
            let known: Vec<&str> = ctx.fields.iter().map(|f| f.name).collect();
            let (matched, unmatched) = e
                .field_errors()
                .cloned()
                .unwrap_or_default()
                .partition_known(&known);

            let message = match (e.server_message(), unmatched.iter().next()) {
                (Some(m), _) if !m.trim().is_empty() => m.to_string(),
                (_, Some((path, m))) => format!("{}: {}", path, m),
                _ if !matched.is_empty() => ctx.strings.generic_error.to_string(),
                _ => e.user_message(ctx.strings.generic_error),
            };
            ctx.notifier.error(message);
            state.update_state(|m| m.failed(matched));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::test_support::{RecordingInvalidator, RecordingNotifier};
    use crate::shared::i18n::Locale;
    use crate::shared::notify::ToastKind;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn strings() -> &'static Strings {
        Locale::En.strings()
    }

    fn customer_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("full_name", "Full name").required().max_length(50),
            FieldSpec::new("phone", "Phone", FieldKind::Phone).required(),
            FieldSpec::relation("branch", "Branch", "/branches/", "name"),
            FieldSpec::new("discount", "Discount", FieldKind::Decimal).min(0.0),
        ]
    }

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn open_form(initial: FormValues) -> RefCell<FormMachine> {
        let mut machine = FormMachine::default();
        machine.open_create(initial);
        RefCell::new(machine)
    }

    #[test]
    fn test_validate_collects_messages() {
        let errors = validate(
            &customer_fields(),
            &values(&[("phone", "12ab"), ("discount", "-1")]),
            strings(),
        );
        assert_eq!(errors.get("full_name"), Some("Required field"));
        assert_eq!(errors.get("phone"), Some("Invalid phone number"));
        assert_eq!(errors.get("discount"), Some("Value is too small"));
        assert_eq!(errors.get("branch"), None);
    }

    #[test]
    fn test_build_payload_types() {
        let payload = build_payload(
            &customer_fields(),
            &values(&[
                ("full_name", " Ali Valiyev "),
                ("phone", "+998 90 123-45-67"),
                ("branch", "4"),
                ("discount", "2,5"),
            ]),
        );
        assert_eq!(
            payload,
            serde_json::json!({
                "full_name": "Ali Valiyev",
                "phone": "+998 90 123-45-67",
                "branch": 4,
                "discount": 2.5
            })
        );

        let empty = build_payload(&customer_fields(), &FormValues::new());
        assert_eq!(empty["branch"], Value::Null);
    }

    #[test]
    fn test_valid_create_issues_one_call_and_one_invalidation() {
        let state = open_form(values(&[("full_name", "Ali"), ("phone", "+998901234567")]));
        let invalidator = RecordingInvalidator::default();
        let notifier = RecordingNotifier::default();
        let key = QueryKey::table("/customers/");
        let calls = Cell::new(0);

        let saved = block_on(submit_form(
            &state,
            SubmitContext {
                fields: &customer_fields(),
                strings: strings(),
                list_key: &key,
                invalidator: &invalidator,
                notifier: &notifier,
            },
            |mode, payload| {
                calls.set(calls.get() + 1);
                assert_eq!(mode, FormMode::Create);
                assert_eq!(payload["full_name"], "Ali");
                async { Ok(serde_json::json!({"id": 10})) }
            },
        ));

        assert!(saved);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            *invalidator.keys.borrow(),
            vec![key, QueryKey::options("/customers/")]
        );
        assert_eq!(notifier.kinds(), vec![ToastKind::Success]);
        assert_eq!(notifier.last_message().as_deref(), Some("Record created"));
        assert_eq!(state.borrow().phase, FormPhase::Closed);
        assert!(state.borrow().values.is_empty());
    }

    #[test]
    fn test_invalid_form_never_reaches_network() {
        let state = open_form(values(&[("full_name", "Ali"), ("phone", "abc")]));
        let invalidator = RecordingInvalidator::default();
        let notifier = RecordingNotifier::default();
        let key = QueryKey::table("/customers/");
        let calls = Cell::new(0);

        let saved = block_on(submit_form(
            &state,
            SubmitContext {
                fields: &customer_fields(),
                strings: strings(),
                list_key: &key,
                invalidator: &invalidator,
                notifier: &notifier,
            },
            |_, _| {
                calls.set(calls.get() + 1);
                async { Ok(Value::Null) }
            },
        ));

        assert!(!saved);
        assert_eq!(calls.get(), 0);
        assert!(invalidator.keys.borrow().is_empty());
        assert!(notifier.toasts.borrow().is_empty());
        let machine = state.borrow();
        assert_eq!(machine.phase, FormPhase::Open(FormMode::Create));
        assert_eq!(machine.errors.get("phone"), Some("Invalid phone number"));
        assert_eq!(machine.value("phone"), "abc");
    }

    #[test]
    fn test_server_rejection_keeps_values_and_maps_fields() {
        let mut machine = FormMachine::default();
        machine.open_edit(7);
        machine.loaded(7, values(&[("full_name", "Ali"), ("phone", "+998901234567")]));
        let state = RefCell::new(machine);
        let invalidator = RecordingInvalidator::default();
        let notifier = RecordingNotifier::default();
        let key = QueryKey::table("/customers/");

        let saved = block_on(submit_form(
            &state,
            SubmitContext {
                fields: &customer_fields(),
                strings: strings(),
                list_key: &key,
                invalidator: &invalidator,
                notifier: &notifier,
            },
            |mode, _| {
                assert_eq!(mode, FormMode::Edit(7));
                async {
                    Err(ApiError::from_status(
                        400,
                        r#"{"phone": ["Phone already registered"]}"#,
                    ))
                }
            },
        ));

        assert!(!saved);
        assert!(invalidator.keys.borrow().is_empty());
        assert_eq!(notifier.kinds(), vec![ToastKind::Error]);
        assert_eq!(notifier.last_message().as_deref(), Some("Something went wrong. Please try again."));
        let machine = state.borrow();
        assert_eq!(machine.phase, FormPhase::Open(FormMode::Edit(7)));
        assert_eq!(machine.errors.get("phone"), Some("Phone already registered"));
        assert_eq!(machine.value("full_name"), "Ali");
    }

    #[test]
    fn test_server_message_wins_over_fallback() {
        let state = open_form(values(&[("full_name", "Ali"), ("phone", "+998901234567")]));
        let notifier = RecordingNotifier::default();
        let key = QueryKey::table("/customers/");

        block_on(submit_form(
            &state,
            SubmitContext {
                fields: &customer_fields(),
                strings: strings(),
                list_key: &key,
                invalidator: &RecordingInvalidator::default(),
                notifier: &notifier,
            },
            |_, _| async { Err(ApiError::from_status(500, r#"{"detail": "Database is read-only"}"#)) },
        ));
        assert_eq!(notifier.last_message().as_deref(), Some("Database is read-only"));

        block_on(submit_form(
            &state,
            SubmitContext {
                fields: &customer_fields(),
                strings: strings(),
                list_key: &key,
                invalidator: &RecordingInvalidator::default(),
                notifier: &notifier,
            },
            |_, _| async { Err(ApiError::from_status(400, r#"{"products": ["Empty bid"]}"#)) },
        ));
        assert_eq!(notifier.last_message().as_deref(), Some("products: Empty bid"));
    }

    #[test]
    fn test_slow_edit_load_blocks_submit_then_fails_cleanly() {
        let state = RefCell::new(FormMachine::default());
        state.borrow_mut().open_edit(7);
        assert!(state.borrow().is_loading());
        assert!(!state.borrow().can_submit());

        block_on(load_for_edit(&state, 7, strings(), async {
            Err(ApiError::Network("timeout".to_string()))
        }));

        let machine = state.borrow();
        assert_eq!(
            machine.phase,
            FormPhase::LoadFailed {
                id: 7,
                message: "Failed to load data".to_string()
            }
        );
        assert!(!machine.can_submit());
    }

    #[test]
    fn test_late_load_for_another_record_is_ignored() {
        let mut machine = FormMachine::default();
        machine.open_edit(7);
        machine.open_edit(8);
        assert!(!machine.loaded(7, values(&[("full_name", "Old")])));
        assert!(machine.loaded(8, values(&[("full_name", "New")])));
        assert_eq!(machine.value("full_name"), "New");
        assert!(machine.can_submit());
    }

    #[test]
    fn test_set_value_clears_field_error() {
        let mut machine = FormMachine::default();
        machine.open_create(FormValues::new());
        let mut errors = FieldErrors::new();
        errors.insert("phone", "bad");
        errors.insert("full_name", "required");
        assert!(machine.begin_submit(errors).is_none());

        machine.set_value("phone", "+998901234567".to_string());
        assert_eq!(machine.errors.get("phone"), None);
        assert_eq!(machine.errors.get("full_name"), Some("required"));
    }

    #[test]
    fn test_cannot_close_while_submitting() {
        let mut machine = FormMachine::default();
        machine.open_create(FormValues::new());
        assert!(machine.begin_submit(FieldErrors::new()).is_some());
        assert!(!machine.close());
        assert!(machine.begin_submit(FieldErrors::new()).is_none());
    }

    #[test]
    fn test_late_load_after_dismiss_keeps_form_closed() {
        let state = RefCell::new(FormMachine::default());
        block_on(load_for_edit(&state, 7, strings(), async {
            state.borrow_mut().dismiss();
            Ok(values(&[("full_name", "Late")]))
        }));

        let machine = state.borrow();
        assert_eq!(machine.phase, FormPhase::Closed);
        assert!(machine.values.is_empty());
    }

    #[test]
    fn test_failed_submit_after_dismiss_stays_closed() {
        let mut machine = FormMachine::default();
        machine.open_create(values(&[("full_name", "Acme")]));
        assert!(machine.begin_submit(FieldErrors::new()).is_some());
        machine.dismiss();
        machine.failed(FieldErrors::new());
        assert_eq!(machine.phase, FormPhase::Closed);
        assert!(!machine.can_submit());
    }
}
