pub mod forecast;
pub mod resource;
pub mod ui;
