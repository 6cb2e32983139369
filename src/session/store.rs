// ============================================================================
// SESSION STORE - Persisted token + derived identity
// ============================================================================
// Purely local: one token value in a storage slot, no network calls. The
// slot is a trait so screens receive an explicit store instead of reaching
// into localStorage themselves; tests swap in the in-memory slot.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::auth::AuthUser;
use crate::session::token::decode_claims;
use crate::utils::{self, TOKEN_STORAGE_KEY};

/// A live session. `user` is always derived from `token`, so "identity
/// present iff token present and well-formed" holds by construction.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

/// Where the raw token lives between page loads.
pub trait TokenSlot {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Browser slot backed by localStorage.
pub struct LocalStorageSlot;

impl TokenSlot for LocalStorageSlot {
    fn read(&self) -> Option<String> {
        utils::get_raw(TOKEN_STORAGE_KEY)
    }

    fn write(&self, token: &str) {
        if let Err(e) = utils::set_raw(TOKEN_STORAGE_KEY, token) {
            log::error!("❌ Error persisting token: {}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = utils::remove_from_storage(TOKEN_STORAGE_KEY) {
            log::error!("❌ Error clearing token: {}", e);
        }
    }
}

/// In-memory slot for tests.
#[derive(Default)]
pub struct MemorySlot {
    value: Rc<RefCell<Option<String>>>,
}

impl TokenSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.value.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}

/// Session store with the {load, login, logout} contract.
pub struct SessionStore {
    slot: Box<dyn TokenSlot>,
}

impl SessionStore {
    pub fn new(slot: Box<dyn TokenSlot>) -> Self {
        Self { slot }
    }

    pub fn browser() -> Self {
        Self::new(Box::new(LocalStorageSlot))
    }

    /// Hydrate from the persisted token. A malformed token clears the slot
    /// (fail-closed) and yields no session.
    pub fn load(&self) -> Option<Session> {
        let token = self.slot.read()?;
        match decode_claims(&token) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                log::error!("❌ Invalid token in storage ({}), clearing session", e);
                self.slot.clear();
                None
            }
        }
    }

    /// Persist the token handed back by the auth endpoint.
    pub fn login(&self, token: String, user: AuthUser) -> Session {
        self.slot.write(&token);
        Session { token, user }
    }

    /// Drop the persisted token. Safe to call with no session.
    pub fn logout(&self) {
        self.slot.clear();
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    use super::*;
    use crate::models::auth::Role;

    fn store_with(token: Option<&str>) -> SessionStore {
        let slot = MemorySlot::default();
        if let Some(t) = token {
            slot.write(t);
        }
        SessionStore::new(Box::new(slot))
    }

    fn forge_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}");
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&payload).unwrap());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn load_with_empty_slot_yields_no_session() {
        assert!(store_with(None).load().is_none());
    }

    #[test]
    fn load_with_valid_token_restores_identity() {
        let token = forge_token(serde_json::json!({
            "user": { "id": "u1", "role": "donor" }
        }));
        let session = store_with(Some(&token)).load().unwrap();
        assert_eq!(session.user.id, "u1");
        assert_eq!(session.user.role, Role::Donor);
        assert_eq!(session.token, token);
    }

    #[test]
    fn malformed_token_clears_the_slot() {
        let store = store_with(Some("not.a-real.token"));
        assert!(store.load().is_none());
        // Slot was cleared, so a second load starts from nothing.
        assert!(store.load().is_none());
        assert!(store.slot.read().is_none());
    }

    #[test]
    fn token_missing_claims_clears_the_slot() {
        let token = forge_token(serde_json::json!({ "user": { "id": "u1" } }));
        let store = store_with(Some(&token));
        assert!(store.load().is_none());
        assert!(store.slot.read().is_none());
    }

    #[test]
    fn login_persists_and_load_round_trips() {
        let store = store_with(None);
        let token = forge_token(serde_json::json!({
            "user": { "id": "h7", "role": "hospital" }
        }));
        let session = store.login(
            token.clone(),
            AuthUser { id: "h7".into(), role: Role::Hospital },
        );
        assert_eq!(session.token, token);
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.user.role, Role::Hospital);
    }

    #[test]
    fn logout_is_idempotent() {
        let token = forge_token(serde_json::json!({
            "user": { "id": "u1", "role": "donor" }
        }));
        let store = store_with(Some(&token));
        store.logout();
        assert!(store.load().is_none());
        store.logout();
        assert!(store.load().is_none());
    }
}
