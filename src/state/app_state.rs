// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Role;
use crate::state::view::{is_allowed, AuthScreen, View};
use crate::state::{AuthState, DataState, FormState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner shown above the active page until dismissed or replaced
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub data: DataState,
    pub forms: FormState,

    // UI State
    pub active_view: Rc<RefCell<View>>,
    pub auth_screen: Rc<RefCell<AuthScreen>>,
    /// Single flag for every in-flight request; disables submit buttons
    pub loading: Rc<RefCell<bool>>,
    /// Pharmacist filter: only undispensed prescriptions
    pub pending_only: Rc<RefCell<bool>>,
    pub notice: Rc<RefCell<Option<Notice>>>,

    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            data: DataState::new(),
            forms: FormState::new(),
            active_view: Rc::new(RefCell::new(View::Dashboard)),
            auth_screen: Rc::new(RefCell::new(AuthScreen::Login)),
            loading: Rc::new(RefCell::new(false)),
            pending_only: Rc::new(RefCell::new(false)),
            notice: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_subscribers(&self) {
        // Clone first: a subscriber may subscribe again while rendering
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    pub fn active_view(&self) -> View {
        *self.active_view.borrow()
    }

    /// Switch pages. Refused (returns false, state unchanged) when there is no
    /// session or the role has no nav entry for `view`.
    pub fn navigate(&self, view: View) -> bool {
        let role = match self.auth.role() {
            Some(role) => role,
            None => return false,
        };
        if !is_allowed(role, view) {
            log::warn!("⚠️ [NAV] {} cannot open {}", role, view.id());
            return false;
        }
        *self.active_view.borrow_mut() = view;
        true
    }

    pub fn reset_view(&self) {
        *self.active_view.borrow_mut() = View::Dashboard;
    }

    pub fn role(&self) -> Option<Role> {
        self.auth.role()
    }

    pub fn auth_screen(&self) -> AuthScreen {
        *self.auth_screen.borrow()
    }

    pub fn set_auth_screen(&self, screen: AuthScreen) {
        *self.auth_screen.borrow_mut() = screen;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    /// Claim the loading flag for a form submission. False while another
    /// submission holds it.
    pub fn try_begin_submit(&self) -> bool {
        let mut loading = self.loading.borrow_mut();
        if *loading {
            return false;
        }
        *loading = true;
        true
    }

    pub fn pending_only(&self) -> bool {
        *self.pending_only.borrow()
    }

    pub fn set_pending_only(&self, pending_only: bool) {
        *self.pending_only.borrow_mut() = pending_only;
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }

    pub fn set_notice(&self, notice: Option<Notice>) {
        *self.notice.borrow_mut() = notice;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identity, Session};
    use std::cell::Cell;

    fn signed_in(role: Role) -> AppState {
        let state = AppState::new();
        state.auth.set_session(Session {
            token: "t".into(),
            identity: Identity {
                user_id: 1,
                username: "u".into(),
                email: None,
                role,
                patient_id: None,
                doctor_id: None,
                pharmacist_id: None,
                exp: None,
            },
        });
        state
    }

    #[test]
    fn navigation_needs_a_session() {
        let state = AppState::new();
        assert!(!state.navigate(View::Dashboard));
    }

    #[test]
    fn disallowed_navigation_leaves_view_unchanged() {
        let state = signed_in(Role::Pharmacist);
        assert!(state.navigate(View::Prescriptions));
        assert!(!state.navigate(View::Import));
        assert_eq!(state.active_view(), View::Prescriptions);
    }

    #[test]
    fn subscribers_are_notified() {
        let state = AppState::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        state.subscribe_to_changes(move || counter.set(counter.get() + 1));
        state.notify_subscribers();
        state.notify_subscribers();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn second_submit_is_refused_until_the_first_finishes() {
        let state = AppState::new();
        assert!(state.try_begin_submit());
        assert!(!state.try_begin_submit());
        state.set_loading(false);
        assert!(state.try_begin_submit());
    }
}
