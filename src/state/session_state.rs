// ============================================================================
// SESSION STATE - Current session shared across screens
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::session::Session;

#[derive(Clone, Default)]
pub struct SessionState {
    session: Rc<RefCell<Option<Session>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    pub fn get(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Raw token for the x-auth-token header, if any.
    pub fn token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }
}
