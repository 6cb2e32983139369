// ============================================================================
// SERVICES MODULE - Backend communication
// ============================================================================

pub mod api_client;
pub mod chat_service;

pub use api_client::ApiClient;
