use serde::de::DeserializeOwned;
use serde::Serialize;

/// Any record the server identifies by an integer id
pub trait Record {
    fn id(&self) -> i64;

    /// Human readable name used wherever the record is referenced from another row
    fn label(&self) -> String;
}

/// How the server expects a delete to carry the record id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStyle {
    /// `DELETE <endpoint>?<id_field>=<id>`
    Query,
    /// `DELETE <endpoint>` with `{ "<id_field>": id }` as the body
    Body,
}

/// REST description of a record type: where it lives and how it is addressed.
pub trait ApiResource: Record + Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Collection path, e.g. `/branches/`
    const ENDPOINT: &'static str;
    const ID_FIELD: &'static str = "id";
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Query;

    /// Body sent for [`DeleteStyle::Body`] deletes
    fn delete_body(id: i64) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert(Self::ID_FIELD.to_string(), serde_json::Value::from(id));
        serde_json::Value::Object(map)
    }
}
