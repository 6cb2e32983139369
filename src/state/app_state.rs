// ============================================================================
// APP STATE - Root state container with Rc<RefCell> interior mutability
// ============================================================================
// Screens receive this explicitly; the session store is injected so nothing
// reaches into localStorage on its own.
// ============================================================================

use std::rc::Rc;

use crate::models::auth::AuthUser;
use crate::routing::{dashboard_view, resolve_on_load, View};
use crate::session::SessionStore;
use crate::state::nav_state::NavState;
use crate::state::session_state::SessionState;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub nav: NavState,
    store: Rc<SessionStore>,
}

impl AppState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            session: SessionState::new(),
            nav: NavState::new(),
            store: Rc::new(store),
        }
    }

    /// Restore a persisted session at startup and apply the reload rule:
    /// public deep links stay, anything else lands on the role's dashboard.
    pub fn hydrate(&self) {
        if let Some(session) = self.store.load() {
            log::info!("💾 Session restored from storage (role: {})", session.user.role.as_str());
            let next = resolve_on_load(self.nav.current_view(), Some(&session));
            self.session.set(Some(session));
            self.nav.set_view(next);
        }
    }

    /// Explicit navigation; closes the mobile menu overlay as a side effect.
    pub fn navigate(&self, view: View) {
        self.nav.set_view(view);
        self.nav.set_menu_open(false);
    }

    /// Successful login: persist the token and jump to the role's dashboard.
    pub fn login(&self, token: String, user: AuthUser) {
        let role = user.role;
        let session = self.store.login(token, user);
        self.session.set(Some(session));
        self.navigate(dashboard_view(role));
        log::info!("🔐 Logged in, token stored. User role: {}", role.as_str());
    }

    /// Logout from any view returns to home. Safe to call twice.
    pub fn logout(&self) {
        self.store.logout();
        self.session.set(None);
        self.navigate(View::Home);
        log::info!("👋 User logged out");
    }

    /// Drop the session without navigating; used when a protected call
    /// comes back with an auth error.
    pub fn clear_session(&self) {
        self.store.logout();
        self.session.set(None);
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    use super::*;
    use crate::models::auth::Role;
    use crate::session::{MemorySlot, TokenSlot};

    fn forge_token(role: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}");
        let body = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&serde_json::json!({
                "user": { "id": "u1", "role": role }
            }))
            .unwrap(),
        );
        format!("{header}.{body}.sig")
    }

    fn state_with_stored(token: Option<&str>) -> AppState {
        let slot = MemorySlot::default();
        if let Some(t) = token {
            slot.write(t);
        }
        AppState::new(SessionStore::new(Box::new(slot)))
    }

    #[test]
    fn login_as_hospital_lands_on_hospital_dashboard() {
        let state = state_with_stored(None);
        state.login(
            forge_token("hospital"),
            AuthUser { id: "h1".into(), role: Role::Hospital },
        );
        assert_eq!(state.nav.current_view(), View::Dashboard(Role::Hospital));
        assert!(state.session.is_logged_in());
    }

    #[test]
    fn logout_from_any_view_returns_home() {
        let state = state_with_stored(None);
        state.login(
            forge_token("admin"),
            AuthUser { id: "a1".into(), role: Role::Admin },
        );
        state.navigate(View::Gallery);
        state.logout();
        assert_eq!(state.nav.current_view(), View::Home);
        assert!(!state.session.is_logged_in());

        // Second logout is a no-op, not an error.
        state.logout();
        assert!(!state.session.is_logged_in());
    }

    #[test]
    fn hydrate_with_valid_token_restores_dashboard_from_default_view() {
        let token = forge_token("donor");
        let state = state_with_stored(Some(&token));
        // Simulate a reload that left the app on a non-public view.
        state.nav.set_view(View::Dashboard(Role::Admin));
        state.hydrate();
        assert_eq!(state.nav.current_view(), View::Dashboard(Role::Donor));
    }

    #[test]
    fn hydrate_keeps_public_deep_links() {
        let token = forge_token("donor");
        let state = state_with_stored(Some(&token));
        state.nav.set_view(View::Gallery);
        state.hydrate();
        assert_eq!(state.nav.current_view(), View::Gallery);
        assert!(state.session.is_logged_in());
    }

    #[test]
    fn hydrate_with_garbage_token_stays_logged_out() {
        let state = state_with_stored(Some("garbage"));
        state.hydrate();
        assert!(!state.session.is_logged_in());
        assert_eq!(state.nav.current_view(), View::Home);
    }

    #[test]
    fn navigate_closes_the_mobile_menu() {
        let state = state_with_stored(None);
        state.nav.set_menu_open(true);
        state.navigate(View::About);
        assert!(!state.nav.is_menu_open());
        assert_eq!(state.nav.current_view(), View::About);
    }
}
