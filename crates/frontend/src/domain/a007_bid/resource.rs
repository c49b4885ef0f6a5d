use crate::shared::columns::ColumnSpec;
use crate::shared::crud::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::crud::{AdminResource, FilterSpec};
use crate::shared::format::format_opt_datetime;
use crate::shared::i18n::{fill_one, Strings};
use crm_contracts::domain::a001_branch::Branch;
use crm_contracts::domain::a003_customer::Customer;
use crm_contracts::domain::a006_factory_status::FactoryStatus;
use crm_contracts::domain::a007_bid::Bid;
use crm_contracts::domain::common::{ApiResource, Relation};
use crm_contracts::system::auth::Section;

pub fn bid_path(id: i64) -> String {
    format!("/bids/{}", id)
}

fn relation_id<T: crm_contracts::domain::common::Record>(value: Option<&Relation<T>>) -> String {
    value.map(|r| r.id().to_string()).unwrap_or_default()
}

impl AdminResource for Bid {
    const SECTION: Section = Section::Bids;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_bids
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::text("id", strings.field_id, |b: &Bid| fill_one("#{}", b.id)),
            ColumnSpec::relation("customer", strings.field_customer, Customer::ENDPOINT, |b: &Bid| {
                b.customer.as_ref()
            }),
            ColumnSpec::relation("branch", strings.field_branch, Branch::ENDPOINT, |b: &Bid| {
                b.branch.as_ref()
            }),
            ColumnSpec::relation("status", strings.field_status, FactoryStatus::ENDPOINT, |b: &Bid| {
                b.status.as_ref()
            }),
            ColumnSpec::text("created_at", strings.field_created_at, |b: &Bid| {
                format_opt_datetime(b.created_at.as_ref())
            }),
            ColumnSpec::money("total", strings.field_total, |b: &Bid| b.totals.total),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![
            FieldSpec::relation("customer", strings.field_customer, Customer::ENDPOINT, "full_name")
                .required(),
            FieldSpec::relation("branch", strings.field_branch, Branch::ENDPOINT, "name").required(),
            FieldSpec::relation("status", strings.field_status, FactoryStatus::ENDPOINT, "name"),
            FieldSpec::new("comment", strings.field_comment, FieldKind::TextArea).max_length(1000),
        ]
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("customer".to_string(), relation_id(self.customer.as_ref())),
            ("branch".to_string(), relation_id(self.branch.as_ref())),
            ("status".to_string(), relation_id(self.status.as_ref())),
            ("comment".to_string(), self.comment.clone().unwrap_or_default()),
        ])
    }

    fn filters(strings: &'static Strings) -> Vec<FilterSpec> {
        vec![
            FilterSpec::search(strings),
            FilterSpec::relation("status", strings.field_status, FactoryStatus::ENDPOINT, "name"),
            FilterSpec::relation("branch", strings.field_branch, Branch::ENDPOINT, "name"),
        ]
    }

    fn detail_path(id: i64) -> Option<String> {
        Some(bid_path(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::columns::RelationLabels;
    use crate::shared::i18n::Locale;

    #[test]
    fn test_bid_row_with_mixed_relation_shapes() {
        let row: Bid = serde_json::from_str(
            r#"{
                "id": 31,
                "customer": {"id": 11, "full_name": "Dilnoza", "phone": "+998901234567"},
                "branch": 3,
                "status": null,
                "created_at": "2024-03-15T14:02:26Z",
                "totals": {"total": 1500}
            }"#,
        )
        .unwrap();
        let mut labels = RelationLabels::default();
        labels.extend(Branch::ENDPOINT, vec![(3, "Chilonzor".to_string())]);

        let cells: Vec<String> = Bid::columns(Locale::En.strings())
            .iter()
            .map(|c| c.render(&row, &labels))
            .collect();
        assert_eq!(
            cells,
            vec!["#31", "Dilnoza", "Chilonzor", "-", "15.03.2024 14:02", "1 500.00"]
        );
        assert_eq!(Bid::detail_path(31).as_deref(), Some("/bids/31"));
    }

    #[test]
    fn test_form_values_take_ids() {
        let row: Bid = serde_json::from_str(r#"{"id": 1, "customer": 11, "branch": {"id": 3, "name": "X"}}"#)
            .unwrap();
        let values = row.form_values();
        assert_eq!(values["customer"], "11");
        assert_eq!(values["branch"], "3");
        assert_eq!(values["status"], "");
    }
}
