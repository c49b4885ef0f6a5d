use serde::{Deserialize, Serialize};

use super::Record;

/// Relational field as the server returns it.
///
/// List endpoints and create responses embed the related record, detail
/// endpoints used by edit forms often return only its id. Both shapes must be
/// renderable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Reference(i64),
    Inline(T),
}

impl<T: Record> Relation<T> {
    pub fn id(&self) -> i64 {
        match self {
            Self::Reference(id) => *id,
            Self::Inline(record) => record.id(),
        }
    }

    pub fn inline(&self) -> Option<&T> {
        match self {
            Self::Inline(record) => Some(record),
            Self::Reference(_) => None,
        }
    }

    /// Collapse to the id-only shape used in request payloads
    pub fn to_reference(&self) -> Relation<T> {
        Self::Reference(self.id())
    }
}
