// ============================================================================
// SESSION VIEWMODEL - Login, registration, logout, restore
// ============================================================================
// Reads drafts from AppState, talks to the API, writes the outcome back.
// Views only re-render afterwards.
// ============================================================================

use crate::error::ApiError;
use crate::models::Session;
use crate::services::{decode_current_identity, ApiClient, HospitalApi, LocalTokenStore, TokenStore};
use crate::state::{AppState, AuthScreen, Notice};

pub const LOGIN_FAILED: &str = "Login failed";
pub const CONNECTION_ERROR: &str = "Connection error";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_OK: &str = "Registration successful! Please login.";

pub fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

pub struct SessionViewModel<A = ApiClient, S = LocalTokenStore> {
    api: A,
    store: S,
}

impl SessionViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
            store: LocalTokenStore::new(),
        }
    }
}

impl Default for SessionViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: HospitalApi, S: TokenStore> SessionViewModel<A, S> {
    pub fn with(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Startup: pick up a token left by a previous page load
    pub fn restore(&self, state: &AppState) -> bool {
        match self.store.load() {
            Some(token) => {
                log::info!("🔑 [SESSION] Stored token found, restoring session");
                self.adopt_token(state, &token).is_ok()
            }
            None => {
                log::info!("🔑 [SESSION] No stored token, showing login");
                false
            }
        }
    }

    /// Decode `token` and make it the current session. An undecodable or
    /// expired token forces a logout.
    pub fn adopt_token(&self, state: &AppState, token: &str) -> Result<Session, ApiError> {
        match decode_current_identity(token, now_secs()) {
            Ok(identity) => {
                log::info!("✅ [SESSION] {} signed in as {}", identity.username, identity.role);
                let session = Session { token: token.to_string(), identity };
                state.auth.set_session(session.clone());
                state.reset_view();
                Ok(session)
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] {}", e);
                self.force_logout(state);
                Err(e)
            }
        }
    }

    pub async fn login(&self, state: &AppState) -> Result<Session, ApiError> {
        let request = match state.forms.login.borrow().to_request() {
            Ok(request) => request,
            Err(e) => {
                state.set_notice(Some(Notice::error(e.user_message(LOGIN_FAILED))));
                return Err(e);
            }
        };

        log::info!("🔐 [SESSION] Login for {}", request.username);
        state.set_loading(true);
        let result = self.api.login(&request).await;
        state.set_loading(false);

        let token = match result {
            Ok(token) => token,
            Err(e) => {
                log::warn!("❌ [SESSION] Login rejected: {}", e);
                let message = if e.is_network() {
                    CONNECTION_ERROR.to_string()
                } else {
                    e.user_message(LOGIN_FAILED)
                };
                state.set_notice(Some(Notice::error(message)));
                return Err(e);
            }
        };

        let session = match self.adopt_token(state, &token) {
            Ok(session) => session,
            Err(e) => {
                state.set_notice(Some(Notice::error(LOGIN_FAILED)));
                return Err(e);
            }
        };
        if let Err(e) = self.store.save(&token) {
            // Session still works for this page load
            log::warn!("⚠️ [SESSION] {}", e);
        }
        state.forms.reset_all();
        state.set_notice(None);
        Ok(session)
    }

    /// Create a patient account. Never signs in: the user goes back to the
    /// login screen.
    pub async fn register(&self, state: &AppState) -> Result<(), ApiError> {
        let request = match state.forms.register.borrow().to_request() {
            Ok(request) => request,
            Err(e) => {
                state.set_notice(Some(Notice::error(e.user_message(REGISTRATION_FAILED))));
                return Err(e);
            }
        };

        log::info!("📝 [SESSION] Registering {}", request.username);
        state.set_loading(true);
        let result = self.api.register(&request).await;
        state.set_loading(false);

        match result {
            Ok(_) => {
                *state.forms.register.borrow_mut() = Default::default();
                state.set_auth_screen(AuthScreen::Login);
                state.set_notice(Some(Notice::success(REGISTRATION_OK)));
                Ok(())
            }
            Err(e) => {
                log::warn!("❌ [SESSION] Registration rejected: {}", e);
                let message = if e.is_network() {
                    CONNECTION_ERROR.to_string()
                } else {
                    e.user_message(REGISTRATION_FAILED)
                };
                state.set_notice(Some(Notice::error(message)));
                Err(e)
            }
        }
    }

    pub fn logout(&self, state: &AppState) {
        log::info!("👋 [SESSION] Logout");
        self.clear_everything(state);
        state.set_notice(None);
    }

    /// Same teardown as logout, but the user is told why
    pub fn force_logout(&self, state: &AppState) {
        log::warn!("⚠️ [SESSION] Session token rejected, logging out");
        self.clear_everything(state);
        state.set_notice(Some(Notice::error("Your session has expired. Please login again.")));
    }

    fn clear_everything(&self, state: &AppState) {
        self.store.clear();
        state.auth.logout();
        state.data.clear();
        state.forms.reset_all();
        state.reset_view();
        state.set_pending_only(false);
        state.set_loading(false);
        state.set_auth_screen(AuthScreen::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Visit};
    use crate::services::mock_api::MockApi;
    use crate::services::token::encode_test_token;
    use crate::services::MemoryTokenStore;
    use crate::state::{nav_items, View};
    use futures::executor::block_on;
    use serde_json::json;

    fn doctor_token() -> String {
        encode_test_token(&json!({
            "user_id": 2, "username": "dr_anil", "role": "Doctor", "doctor_id": 1,
            "exp": 4_102_444_800i64
        }))
    }

    fn vm(api: MockApi, store: MemoryTokenStore) -> SessionViewModel<MockApi, MemoryTokenStore> {
        SessionViewModel::with(api, store)
    }

    #[test]
    fn no_stored_token_shows_login() {
        let state = AppState::new();
        let vm = vm(MockApi::new(), MemoryTokenStore::new());
        assert!(!vm.restore(&state));
        assert!(!state.auth.is_logged_in());
    }

    #[test]
    fn stored_token_restores_role_navigation() {
        let state = AppState::new();
        let vm = vm(MockApi::new(), MemoryTokenStore::with_token(&doctor_token()));
        assert!(vm.restore(&state));
        assert_eq!(state.role(), Some(Role::Doctor));
        assert_eq!(nav_items(Role::Doctor).len(), 5);
        assert!(!state.navigate(View::Import));
    }

    #[test]
    fn garbage_stored_token_is_cleared() {
        let state = AppState::new();
        let store = MemoryTokenStore::with_token("garbage");
        let vm = vm(MockApi::new(), store.clone());
        assert!(!vm.restore(&state));
        assert_eq!(store.load(), None);
        assert!(!state.auth.is_logged_in());
    }

    #[test]
    fn expired_stored_token_forces_logout() {
        let token = encode_test_token(&json!({
            "user_id": 2, "username": "dr_anil", "role": "Doctor", "exp": 1_000
        }));
        let state = AppState::new();
        let store = MemoryTokenStore::with_token(&token);
        let vm = vm(MockApi::new(), store.clone());
        assert!(!vm.restore(&state));
        assert_eq!(store.load(), None);
        assert!(state.notice().is_some());
    }

    #[test]
    fn successful_login_persists_token() {
        let state = AppState::new();
        state.forms.login.borrow_mut().username = "dr_anil".into();
        state.forms.login.borrow_mut().password = "doctor123".into();
        let store = MemoryTokenStore::new();
        let api = MockApi { token: doctor_token(), ..MockApi::new() };
        let vm = vm(api, store.clone());

        let session = block_on(vm.login(&state)).unwrap();
        assert_eq!(session.identity.doctor_id, Some(1));
        assert_eq!(store.load(), Some(doctor_token()));
        assert!(state.auth.is_logged_in());
        assert_eq!(state.forms.login.borrow().username, "");
        assert!(!state.is_loading());
    }

    #[test]
    fn wrong_credentials_keep_login_screen() {
        let state = AppState::new();
        state.forms.login.borrow_mut().username = "dr_anil".into();
        state.forms.login.borrow_mut().password = "wrong".into();
        let store = MemoryTokenStore::new();
        let api = MockApi::new().failing(
            "login",
            ApiError::Server { status: 401, message: "Invalid credentials".into() },
        );
        let vm = vm(api, store.clone());

        assert!(block_on(vm.login(&state)).is_err());
        assert_eq!(store.load(), None);
        assert!(!state.auth.is_logged_in());
        assert_eq!(state.notice(), Some(Notice::error("Invalid credentials")));
        // draft kept so the user can fix it
        assert_eq!(state.forms.login.borrow().username, "dr_anil");
    }

    #[test]
    fn unreachable_backend_reports_connection_error() {
        let state = AppState::new();
        state.forms.login.borrow_mut().username = "a".into();
        state.forms.login.borrow_mut().password = "b".into();
        let api = MockApi::new().failing("login", ApiError::Network("refused".into()));
        let vm = vm(api, MemoryTokenStore::new());

        assert!(block_on(vm.login(&state)).is_err());
        assert_eq!(state.notice(), Some(Notice::error(CONNECTION_ERROR)));
    }

    #[test]
    fn empty_login_sends_nothing() {
        let state = AppState::new();
        let vm = vm(MockApi::new(), MemoryTokenStore::new());
        assert!(matches!(block_on(vm.login(&state)), Err(ApiError::Validation(_))));
        assert!(vm.api().calls().is_empty());
    }

    #[test]
    fn server_token_that_cannot_be_decoded_is_not_persisted() {
        let state = AppState::new();
        state.forms.login.borrow_mut().username = "a".into();
        state.forms.login.borrow_mut().password = "b".into();
        let store = MemoryTokenStore::new();
        let api = MockApi { token: "opaque".into(), ..MockApi::new() };
        let vm = vm(api, store.clone());

        assert!(matches!(block_on(vm.login(&state)), Err(ApiError::InvalidToken(_))));
        assert_eq!(store.load(), None);
        assert_eq!(state.notice(), Some(Notice::error(LOGIN_FAILED)));
    }

    #[test]
    fn registration_returns_to_login_without_signing_in() {
        let state = AppState::new();
        state.set_auth_screen(AuthScreen::Register);
        {
            let mut draft = state.forms.register.borrow_mut();
            draft.username = "rahul_p".into();
            draft.password = "pw".into();
            draft.name = "Rahul P".into();
            draft.email = "rahul@example.com".into();
            draft.dob = "1990-01-15".into();
            draft.phone = "9876543210".into();
            draft.address = "Mumbai".into();
        }
        let store = MemoryTokenStore::new();
        let vm = vm(MockApi::new(), store.clone());

        block_on(vm.register(&state)).unwrap();
        assert_eq!(state.auth_screen(), AuthScreen::Login);
        assert_eq!(state.notice(), Some(Notice::success(REGISTRATION_OK)));
        assert_eq!(state.forms.register.borrow().username, "");
        assert_eq!(store.load(), None);
        assert!(!state.auth.is_logged_in());
    }

    #[test]
    fn incomplete_registration_is_rejected_locally() {
        let state = AppState::new();
        state.forms.register.borrow_mut().username = "rahul_p".into();
        let vm = vm(MockApi::new(), MemoryTokenStore::new());
        assert!(block_on(vm.register(&state)).is_err());
        assert!(!vm.api().called("register"));
    }

    #[test]
    fn logout_clears_session_and_cached_data() {
        let state = AppState::new();
        let store = MemoryTokenStore::with_token(&doctor_token());
        let vm = vm(MockApi::new(), store.clone());
        vm.restore(&state);
        state.navigate(View::Records);
        state.data.set_visits(vec![Visit {
            visit_id: 1,
            patient_id: None,
            patient_name: None,
            doctor_id: None,
            doctor_name: None,
            visit_date: None,
            reason: None,
            vital_signs: None,
            notes: None,
            status: None,
        }]);

        vm.logout(&state);
        assert_eq!(store.load(), None);
        assert!(!state.auth.is_logged_in());
        assert!(state.data.visits.borrow().is_empty());
        assert_eq!(state.active_view(), View::Dashboard);
    }
}
