/// Backend base URL.
/// Configured at compile time:
/// - Development: http://localhost:5000 (default)
/// - Production: via BACKEND_URL env var (.env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Google Maps Embed API key, used by the find-blood-banks map search.
pub const GOOGLE_MAPS_API_KEY: &str = match option_env!("GOOGLE_MAPS_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Generative-language API key for the chatbot widget.
pub const GEMINI_API_KEY: &str = match option_env!("GEMINI_API_KEY") {
    Some(key) => key,
    None => "",
};

/// localStorage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Milliseconds before transient status messages clear themselves.
pub const STATUS_CLEAR_MS: u32 = 3000;
