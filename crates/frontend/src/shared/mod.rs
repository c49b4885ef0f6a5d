pub mod api;
pub mod columns;
pub mod components;
pub mod config;
pub mod crud;
pub mod events;
pub mod format;
pub mod i18n;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
pub mod query;
pub mod storage;
pub mod table;
pub mod view_state;
