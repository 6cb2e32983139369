// ============================================================================
// VIEWS MODULE - Render functions, one per screen
// ============================================================================

pub mod about;
pub mod app;
pub mod chatbot;
pub mod contact;
pub mod dashboards;
pub mod find_blood_banks;
pub mod gallery;
pub mod home;
pub mod login;
pub mod widgets;

pub use app::render_app;
