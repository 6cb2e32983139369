// ============================================================================
// DASHBOARDS - One screen per role
// ============================================================================

pub mod admin;
pub mod doctor;
pub mod donor;
pub mod hospital;
pub mod staff;
pub mod supervisor;

use crate::error::ApiError;
use crate::routing::View;
use crate::state::AppState;
use crate::views::widgets::flash_status;

/// Mutation-failure policy shared by every dashboard: an auth error clears
/// the session and sends the user back to the login screen; everything else
/// becomes a transient status message on the owning screen.
pub fn handle_action_error(state: &AppState, err: &ApiError, status_id: &str) {
    if err.is_auth() {
        log::error!("🔒 Auth error, clearing session: {}", err);
        state.clear_session();
        state.navigate(View::Login);
        crate::rerender_app();
    } else {
        flash_status(status_id, &format!("Error: {}", err));
    }
}
