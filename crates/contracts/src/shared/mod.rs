pub mod api_error;
pub mod pagination;
pub mod validation;
