use crate::shared::columns::{CellKind, ColumnSpec};
use crate::shared::crud::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::crud::AdminResource;
use crate::shared::i18n::Strings;
use crm_contracts::domain::a006_factory_status::FactoryStatus;
use crm_contracts::system::auth::Section;

impl AdminResource for FactoryStatus {
    const SECTION: Section = Section::Catalog;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_factory_statuses
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::text("id", strings.field_id, |s: &FactoryStatus| s.id.to_string()),
            ColumnSpec::text("name", strings.field_name, |s: &FactoryStatus| s.name.clone()),
            ColumnSpec::optional("color", strings.field_color, |s: &FactoryStatus| s.color.as_deref())
                .with_kind(CellKind::Color),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", strings.field_name).required().max_length(50),
            FieldSpec::new("color", strings.field_color, FieldKind::Color).max_length(7),
        ]
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("color".to_string(), self.color.clone().unwrap_or_default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_contracts::domain::common::{ApiResource, DeleteStyle};

    #[test]
    fn test_status_deletes_by_body() {
        assert_eq!(FactoryStatus::DELETE_STYLE, DeleteStyle::Body);
        assert_eq!(FactoryStatus::delete_body(9), serde_json::json!({"id": 9}));
    }
}
