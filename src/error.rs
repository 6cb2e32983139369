// ============================================================================
// ERROR - API layer failures, flattened to strings at each screen boundary
// ============================================================================

use thiserror::Error;

/// Errors produced by the API client. Every screen catches these at its own
/// boundary and turns them into a user-visible status string; an `Auth` error
/// additionally clears the session.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Whether the failing call should clear the session and force re-login.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }

    /// Classify an HTTP status, folding 401/403 into `Auth`.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 || status == 403 {
            ApiError::Auth(message)
        } else {
            ApiError::Http { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_status_is_auth() {
        assert!(ApiError::from_status(401, "no token".into()).is_auth());
        assert!(ApiError::from_status(403, "denied".into()).is_auth());
        assert!(!ApiError::from_status(500, "boom".into()).is_auth());
    }
}
