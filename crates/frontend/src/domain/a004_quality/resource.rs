use crate::shared::columns::ColumnSpec;
use crate::shared::crud::form::{FieldSpec, FormValues};
use crate::shared::crud::AdminResource;
use crate::shared::i18n::Strings;
use crm_contracts::domain::a004_quality::Quality;
use crm_contracts::system::auth::Section;

impl AdminResource for Quality {
    const SECTION: Section = Section::Catalog;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_qualities
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::text("id", strings.field_id, |r: &Quality| r.id.to_string()),
            ColumnSpec::text("name", strings.field_name, |r: &Quality| r.name.clone()),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![FieldSpec::text("name", strings.field_name).required().max_length(50)]
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([("name".to_string(), self.name.clone())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::form::validate;
    use crate::shared::i18n::Locale;

    #[test]
    fn test_quality_name_limits() {
        let strings = Locale::En.strings();
        let fields = Quality::form_fields(strings);
        let too_long = FormValues::from([("name".to_string(), "x".repeat(51))]);
        assert_eq!(
            validate(&fields, &too_long, strings).get("name"),
            Some("At most 50 characters")
        );
        let blank = Quality::default().form_values();
        assert_eq!(validate(&fields, &blank, strings).get("name"), Some("Required field"));
    }
}
