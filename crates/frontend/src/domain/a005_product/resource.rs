use crate::shared::columns::{CellKind, ColumnSpec};
use crate::shared::crud::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::crud::{AdminResource, FilterSpec};
use crate::shared::i18n::Strings;
use crm_contracts::domain::a002_category::Category;
use crm_contracts::domain::a004_quality::Quality;
use crm_contracts::domain::a005_product::Product;
use crm_contracts::domain::common::ApiResource;
use crm_contracts::system::auth::Section;

impl AdminResource for Product {
    const SECTION: Section = Section::Catalog;

    fn title(strings: &'static Strings) -> &'static str {
        strings.nav_products
    }

    fn columns(strings: &'static Strings) -> Vec<ColumnSpec<Self>> {
        vec![
            ColumnSpec::optional("image", strings.field_image, |p: &Product| p.image.as_deref())
                .with_kind(CellKind::Image),
            ColumnSpec::text("name", strings.field_name, |p: &Product| p.name.clone()),
            ColumnSpec::relation("category", strings.field_category, Category::ENDPOINT, |p: &Product| {
                p.category.as_ref()
            }),
            ColumnSpec::relation("quality", strings.field_quality, Quality::ENDPOINT, |p: &Product| {
                p.quality.as_ref()
            }),
            ColumnSpec::money("price", strings.field_price, |p: &Product| p.price),
        ]
    }

    fn form_fields(strings: &'static Strings) -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("name", strings.field_name).required().max_length(150),
            FieldSpec::relation("category", strings.field_category, Category::ENDPOINT, "name")
                .required(),
            FieldSpec::relation("quality", strings.field_quality, Quality::ENDPOINT, "name"),
            FieldSpec::new("price", strings.field_price, FieldKind::Decimal)
                .required()
                .min(0.0),
            FieldSpec::text("image", strings.field_image).max_length(255),
        ]
    }

    fn form_values(&self) -> FormValues {
        let relation_id = |id: Option<i64>| id.map(|id| id.to_string()).unwrap_or_default();
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("category".to_string(), relation_id(self.category.as_ref().map(|c| c.id()))),
            ("quality".to_string(), relation_id(self.quality.as_ref().map(|q| q.id()))),
            ("price".to_string(), self.price.to_string()),
            ("image".to_string(), self.image.clone().unwrap_or_default()),
        ])
    }

    fn filters(strings: &'static Strings) -> Vec<FilterSpec> {
        vec![
            FilterSpec::search(strings),
            FilterSpec::relation("category", strings.field_category, Category::ENDPOINT, "name"),
            FilterSpec::relation("quality", strings.field_quality, Quality::ENDPOINT, "name"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::columns::{Align, RelationLabels};
    use crate::shared::crud::form::validate;
    use crate::shared::i18n::Locale;

    #[test]
    fn test_product_columns() {
        let strings = Locale::En.strings();
        let product: Product = serde_json::from_str(
            r#"{"id": 5, "name": "Ковёр 2x3", "category": {"id": 1, "name": "Ковры"}, "quality": 2, "price": 1250.5}"#,
        )
        .unwrap();
        let columns = Product::columns(strings);
        let labels = RelationLabels::default();
        let cells: Vec<String> = columns.iter().map(|c| c.render(&product, &labels)).collect();
        assert_eq!(cells, vec!["-", "Ковёр 2x3", "Ковры", "2", "1 250.50"]);
        assert_eq!(columns[4].align, Align::Right);
        assert_eq!(columns[0].kind, CellKind::Image);
    }

    #[test]
    fn test_negative_price_rejected() {
        let strings = Locale::En.strings();
        let mut values = Product::default().form_values();
        values.insert("name".into(), "Panel".into());
        values.insert("category".into(), "1".into());
        values.insert("price".into(), "-3".into());
        let errors = validate(&Product::form_fields(strings), &values, strings);
        assert_eq!(errors.get("price"), Some(strings.below_min));
        assert_eq!(errors.get("quality"), None);
    }
}
