use crate::shared::columns::ColumnSpec;
use crate::shared::crud::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::crud::{AdminResource, FilterSpec};
use crate::shared::i18n::Strings;
use crm_contracts::domain::a001_branch::Branch;
use crm_contracts::domain::a003_customer::Customer;
use crm_contracts::domain::common::ApiResource;
use crm_contracts::system::auth::Section;

impl AdminResource for Customer {
    const SECTION: Section = Section::Customers;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_customers
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::text("id", strings.field_id, |c: &Customer| c.id.to_string()),
            ColumnSpec::text("full_name", strings.field_full_name, |c: &Customer| {
                c.full_name.clone()
            }),
            ColumnSpec::text("phone", strings.field_phone, |c: &Customer| c.phone.clone()),
            ColumnSpec::relation("branch", strings.field_branch, Branch::ENDPOINT, |c: &Customer| {
                c.branch.as_ref()
            }),
            ColumnSpec::optional("address", strings.field_address, |c| c.address.as_deref()),
            ColumnSpec::optional("comment", strings.field_comment, |c| c.comment.as_deref()),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("full_name", strings.field_full_name)
                .required()
                .max_length(150),
            FieldSpec::new("phone", strings.field_phone, FieldKind::Phone).required(),
            FieldSpec::relation("branch", strings.field_branch, Branch::ENDPOINT, "name").required(),
            FieldSpec::text("address", strings.field_address).max_length(255),
            FieldSpec::new("comment", strings.field_comment, FieldKind::TextArea).max_length(1000),
        ]
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("full_name".to_string(), self.full_name.clone()),
            ("phone".to_string(), self.phone.clone()),
            (
                "branch".to_string(),
                self.branch.as_ref().map(|b| b.id().to_string()).unwrap_or_default(),
            ),
            ("address".to_string(), self.address.clone().unwrap_or_default()),
            ("comment".to_string(), self.comment.clone().unwrap_or_default()),
        ])
    }

    fn filters(strings: &'static Strings) -> Vec<FilterSpec> {
        vec![
            FilterSpec::search(strings),
            FilterSpec::relation("branch", strings.field_branch, Branch::ENDPOINT, "name"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::columns::RelationLabels;
    use crate::shared::crud::form::build_payload;
    use crate::shared::i18n::Locale;
    use crm_contracts::domain::common::Relation;

    fn customer(branch: Option<Relation<Branch>>) -> Customer {
        Customer {
            id: 11,
            full_name: "Dilnoza Karimova".into(),
            phone: "+998901234567".into(),
            branch,
            address: None,
            comment: None,
        }
    }

    fn branch_cell(row: &Customer, labels: &RelationLabels) -> String {
        let columns = Customer::columns(Locale::En.strings());
        let column = columns.iter().find(|c| c.key == "branch").unwrap();
        column.render(row, labels)
    }

    #[test]
    fn test_branch_cell_renders_both_shapes() {
        let inline = customer(Some(Relation::Inline(Branch {
            id: 3,
            name: "Chilonzor".into(),
            ..Branch::default()
        })));
        assert_eq!(branch_cell(&inline, &RelationLabels::default()), "Chilonzor");

        let by_id = customer(Some(Relation::Reference(3)));
        assert_eq!(branch_cell(&by_id, &RelationLabels::default()), "3");

        let mut labels = RelationLabels::default();
        labels.extend(Branch::ENDPOINT, vec![(3, "Chilonzor".to_string())]);
        assert_eq!(branch_cell(&by_id, &labels), "Chilonzor");

        assert_eq!(branch_cell(&customer(None), &labels), "-");
    }

    #[test]
    fn test_edit_form_sends_branch_id() {
        let strings = Locale::En.strings();
        let row = customer(Some(Relation::Inline(Branch {
            id: 3,
            name: "Chilonzor".into(),
            ..Branch::default()
        })));
        let payload = build_payload(&Customer::form_fields(strings), &row.form_values());
        assert_eq!(payload["branch"], serde_json::json!(3));
        assert_eq!(payload["comment"], serde_json::Value::Null);
        assert_eq!(Customer::delete_body(11), serde_json::json!({"customer_id": 11}));
    }
}
