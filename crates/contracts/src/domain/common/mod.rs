//! Common types and traits for all records

pub mod relation;
pub mod resource;

// Re-exports
pub use relation::Relation;
pub use resource::{ApiResource, DeleteStyle, Record};
