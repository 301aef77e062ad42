// ============================================================================
// AUTH STATE - Bearer token and the identity decoded from it
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Identity, Role, Session};

/// Authentication state. Token and identity are set and cleared together.
#[derive(Clone, Default)]
pub struct AuthState {
    pub session: Rc<RefCell<Option<Session>>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_session(&self, session: Session) {
        *self.session.borrow_mut() = Some(session);
    }

    pub fn get_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn get_identity(&self) -> Option<Identity> {
        self.session.borrow().as_ref().map(|s| s.identity.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.borrow().as_ref().map(|s| s.identity.role)
    }

    /// Logout - drop token and identity
    pub fn logout(&self) {
        *self.session.borrow_mut() = None;
    }
}
