use crate::shared::columns::ColumnSpec;
use crate::shared::crud::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::crud::AdminResource;
use crate::shared::i18n::Strings;
use crm_contracts::domain::a001_branch::Branch;
use crm_contracts::system::auth::Section;

impl AdminResource for Branch {
    const SECTION: Section = Section::Catalog;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_branches
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::text("id", strings.field_id, |b: &Branch| b.id.to_string()),
            ColumnSpec::text("name", strings.field_name, |b: &Branch| b.name.clone()),
            ColumnSpec::optional("address", strings.field_address, |b| b.address.as_deref()),
            ColumnSpec::optional("phone", strings.field_phone, |b| b.phone.as_deref()),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", strings.field_name).required().max_length(100),
            FieldSpec::text("address", strings.field_address).max_length(255),
            FieldSpec::new("phone", strings.field_phone, FieldKind::Phone),
        ]
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("address".to_string(), self.address.clone().unwrap_or_default()),
            ("phone".to_string(), self.phone.clone().unwrap_or_default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::columns::RelationLabels;
    use crate::shared::crud::form::validate;
    use crate::shared::i18n::Locale;

    #[test]
    fn test_branch_row_and_form() {
        let strings = Locale::En.strings();
        let branch = Branch {
            id: 2,
            name: "Yunusobod".into(),
            address: None,
            phone: Some("+998 90 123-45-67".into()),
        };
        let cells: Vec<String> = Branch::columns(strings)
            .iter()
            .map(|c| c.render(&branch, &RelationLabels::default()))
            .collect();
        assert_eq!(cells, vec!["2", "Yunusobod", "-", "+998 90 123-45-67"]);

        let errors = validate(&Branch::form_fields(strings), &branch.form_values(), strings);
        assert!(errors.is_empty());
    }
}
