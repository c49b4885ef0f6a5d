use crate::shared::columns::ColumnSpec;
use crate::shared::crud::form::{FieldSpec, FormValues};
use crate::shared::crud::AdminResource;
use crate::shared::i18n::Strings;
use crm_contracts::domain::a002_category::Category;
use crm_contracts::system::auth::Section;

impl AdminResource for Category {
    const SECTION: Section = Section::Catalog;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_categories
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::text("id", strings.field_id, |r: &Category| r.id.to_string()),
            ColumnSpec::text("name", strings.field_name, |r: &Category| r.name.clone()),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![FieldSpec::text("name", strings.field_name).required().max_length(100)]
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([("name".to_string(), self.name.clone())])
    }
}
