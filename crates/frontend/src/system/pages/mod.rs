pub mod full_page;
pub mod login;
