//! Column definitions of list tables.
//!
//! A column is a pure mapping from a row to the text of its cell. Relational
//! cells go through [`resolve_relation`], which accepts the related record in
//! any shape the server may have sent it.

use crate::shared::format::format_money;
use crm_contracts::domain::common::{Record, Relation};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// How the cell text is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Text,
    /// Text is an image URL
    Image,
    /// Text is a CSS color
    Color,
}

/// Labels of related records fetched separately from the rows, per endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationLabels(HashMap<&'static str, BTreeMap<i64, String>>);

impl RelationLabels {
    pub fn extend(&mut self, endpoint: &'static str, items: impl IntoIterator<Item = (i64, String)>) {
        self.0.entry(endpoint).or_default().extend(items);
    }

    pub fn get(&self, endpoint: &str, id: i64) -> Option<&str> {
        self.0.get(endpoint)?.get(&id).map(String::as_str)
    }
}

/// Text of a relational cell.
///
/// Order: the separately fetched record, then the raw value (embedded record
/// label or bare id), then [`PLACEHOLDER`]. Blank labels count as absent.
pub fn resolve_relation<T: Record>(raw: Option<&Relation<T>>, fetched: Option<&str>) -> String {
    if let Some(label) = fetched.map(str::trim).filter(|l| !l.is_empty()) {
        return label.to_string();
    }
    match raw {
        Some(Relation::Inline(record)) => {
            let label = record.label();
            if label.trim().is_empty() {
                PLACEHOLDER.to_string()
            } else {
                label
            }
        }
        Some(Relation::Reference(id)) => id.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or a named color.
/// Anything else is not safe to put into a `style` attribute.
pub fn css_color(value: &str) -> Option<&str> {
    let value = value.trim();
    let valid = match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => (3..=20).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphabetic()),
    };
    valid.then_some(value)
}

pub fn text_or_placeholder(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

type CellRenderer<R> = Arc<dyn Fn(&R, &RelationLabels) -> String + Send + Sync>;

pub struct ColumnSpec<R> {
    pub key: &'static str,
    pub title: &'static str,
    pub align: Align,
    pub kind: CellKind,
    render: CellRenderer<R>,
}

impl<R> Clone for ColumnSpec<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            align: self.align,
            kind: self.kind,
            render: self.render.clone(),
        }
    }
}

impl<R: 'static> ColumnSpec<R> {
    pub fn text(
        key: &'static str,
        title: &'static str,
        f: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            title,
            align: Align::Left,
            kind: CellKind::Text,
            render: Arc::new(move |row, _| f(row)),
        }
    }

    pub fn optional(
        key: &'static str,
        title: &'static str,
        f: fn(&R) -> Option<&str>,
    ) -> Self {
        Self::text(key, title, move |row| text_or_placeholder(f(row)))
    }

    pub fn money(
        key: &'static str,
        title: &'static str,
        f: impl Fn(&R) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            align: Align::Right,
            ..Self::text(key, title, move |row| format_money(f(row)))
        }
    }

    /// Cell for a relational field; labels from `endpoint` win over the row's own value
    pub fn relation<T: Record + 'static>(
        key: &'static str,
        title: &'static str,
        endpoint: &'static str,
        f: fn(&R) -> Option<&Relation<T>>,
    ) -> Self {
        Self {
            key,
            title,
            align: Align::Left,
            kind: CellKind::Text,
            render: Arc::new(move |row, labels| {
                let raw = f(row);
                let fetched = raw.and_then(|r| match r {
                    Relation::Reference(id) => labels.get(endpoint, *id),
                    Relation::Inline(_) => None,
                });
                resolve_relation(raw, fetched)
            }),
        }
    }

    pub fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn render(&self, row: &R, labels: &RelationLabels) -> String {
        (self.render)(row, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_contracts::domain::a001_branch::Branch;
    use crm_contracts::domain::a003_customer::Customer;

    fn branch(name: &str) -> Branch {
        Branch {
            id: 4,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_relation_is_total() {
        let inline = Relation::Inline(branch("Yunusobod"));
        let reference: Relation<Branch> = Relation::Reference(4);

        for fetched in [None, Some("Chilonzor")] {
            for raw in [None, Some(&inline), Some(&reference)] {
                let text = resolve_relation(raw, fetched);
                assert!(!text.is_empty());
            }
        }

        assert_eq!(resolve_relation(Some(&inline), Some("Chilonzor")), "Chilonzor");
        assert_eq!(resolve_relation(Some(&inline), None), "Yunusobod");
        assert_eq!(resolve_relation(Some(&reference), None), "4");
        assert_eq!(resolve_relation::<Branch>(None, None), PLACEHOLDER);
    }

    #[test]
    fn test_blank_labels_fall_through() {
        let blank = Relation::Inline(branch("  "));
        assert_eq!(resolve_relation(Some(&blank), Some("")), PLACEHOLDER);
        assert_eq!(resolve_relation::<Branch>(None, Some(" ")), PLACEHOLDER);
    }

    #[test]
    fn test_relation_column_prefers_fetched_label() {
        let column = ColumnSpec::<Customer>::relation("branch", "Branch", "/branches/", |c| {
            c.branch.as_ref()
        });
        let mut customer = Customer {
            id: 1,
            full_name: "Ali".to_string(),
            branch: Some(Relation::Reference(4)),
            ..Default::default()
        };

        let mut labels = RelationLabels::default();
        assert_eq!(column.render(&customer, &labels), "4");

        labels.extend("/branches/", [(4, "Chilonzor".to_string())]);
        assert_eq!(column.render(&customer, &labels), "Chilonzor");

        customer.branch = None;
        assert_eq!(column.render(&customer, &labels), PLACEHOLDER);
    }

    #[test]
    fn test_money_column_is_right_aligned() {
        let column = ColumnSpec::<f64>::money("price", "Price", |v| *v);
        assert_eq!(column.align, Align::Right);
        assert_eq!(column.render(&1500.0, &RelationLabels::default()), "1 500.00");
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(" #1a2B3c "), Some("#1a2B3c"));
        assert_eq!(css_color("#fff"), Some("#fff"));
        assert_eq!(css_color("teal"), Some("teal"));
        assert_eq!(css_color("#12345"), None);
        assert_eq!(css_color("red; background-image: url(x)"), None);
        assert_eq!(css_color("#ggg"), None);
        assert_eq!(css_color(""), None);
    }
}
