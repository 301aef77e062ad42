pub mod app;
pub mod common;
pub mod login;
pub mod register;
pub mod layout;
pub mod dashboard;
pub mod records;
pub mod clinical_forms;
pub mod files;
pub mod prescriptions;
pub mod admin;

pub use app::render_app;
