// ============================================================================
// DATA VIEWMODEL - Role-based fetch plan
// ============================================================================
// Runs whenever the session or the active page changes. Each fetch is
// best-effort: a failure is logged and the others still run.
// ============================================================================

use futures::future::join_all;

use crate::error::ApiError;
use crate::models::{Identity, Role};
use crate::services::{ApiClient, HospitalApi};
use crate::state::{AppState, View};

/// One collection the dashboard can load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Stats,
    AllRecords,
    MyRecords,
    Doctors,
    Patients,
    Visits,
    Prescriptions,
    OwnFiles,
}

/// Collections to load for `identity`, in request order
pub fn fetch_plan(identity: &Identity) -> Vec<Fetch> {
    let mut plan = match identity.role {
        Role::Doctor => vec![Fetch::AllRecords, Fetch::Doctors, Fetch::Patients, Fetch::Visits],
        Role::Patient => {
            let mut fetches = vec![Fetch::MyRecords];
            if identity.patient_id.is_some() {
                fetches.push(Fetch::OwnFiles);
            }
            fetches
        }
        Role::Pharmacist => vec![Fetch::Prescriptions],
        Role::Admin => vec![Fetch::Patients],
        Role::Unknown => Vec::new(),
    };
    plan.push(Fetch::Stats);
    plan
}

pub struct DataViewModel<A = ApiClient> {
    api: A,
}

impl DataViewModel {
    pub fn new() -> Self {
        Self { api: ApiClient::new() }
    }
}

impl Default for DataViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: HospitalApi> DataViewModel<A> {
    pub fn with(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Run the whole plan for the signed-in user. No-op without a session.
    /// All requests are in flight together; a slow one holds up nothing else.
    pub async fn refresh(&self, state: &AppState) {
        let identity = match state.auth.get_identity() {
            Some(identity) => identity,
            None => return,
        };
        let requests = fetch_plan(&identity).into_iter().map(|fetch| async move {
            if let Err(e) = self.fetch(state, fetch).await {
                log::error!("❌ [DATA] {:?} failed: {}", fetch, e);
            }
        });
        join_all(requests).await;
    }

    /// Switch to `view` and reload the role's collections. A view the role
    /// cannot open is refused without any request.
    pub async fn open(&self, state: &AppState, view: View) -> bool {
        if !state.navigate(view) {
            return false;
        }
        state.set_notice(None);
        state.notify_subscribers();
        self.refresh(state).await;
        true
    }

    /// Load one collection into `state.data`
    pub async fn fetch(&self, state: &AppState, fetch: Fetch) -> Result<(), ApiError> {
        // Token and ids are copied out: no borrow survives the await
        let session = state
            .auth
            .get_session()
            .ok_or_else(|| ApiError::InvalidToken("no session".to_string()))?;
        let token = session.token.as_str();
        let data = &state.data;

        match fetch {
            Fetch::Stats => data.set_stats(self.api.dashboard_stats(token).await?),
            Fetch::AllRecords => data.set_records(self.api.all_records(token).await?),
            Fetch::MyRecords => data.set_records(self.api.my_records(token).await?),
            Fetch::Doctors => data.set_doctors(self.api.doctors(token).await?),
            Fetch::Patients => data.set_patients(self.api.patients(token).await?),
            Fetch::Visits => data.set_visits(self.api.visits(token).await?),
            Fetch::Prescriptions => {
                let pending_only = state.pending_only();
                data.set_prescriptions(self.api.prescriptions(token, pending_only).await?)
            }
            Fetch::OwnFiles => {
                let patient_id = session
                    .identity
                    .patient_id
                    .ok_or_else(|| ApiError::Validation("No patient linked to this account".to_string()))?;
                data.set_files(self.api.patient_files(token, patient_id).await?)
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DashboardStats, Prescription, Session};
    use crate::services::mock_api::MockApi;
    use crate::state::Notice;
    use futures::executor::block_on;
    use futures::FutureExt;

    fn identity(role: Role, patient_id: Option<i64>) -> Identity {
        Identity {
            user_id: 1,
            username: "user".into(),
            email: None,
            role,
            patient_id,
            doctor_id: None,
            pharmacist_id: None,
            exp: None,
        }
    }

    fn signed_in(role: Role, patient_id: Option<i64>) -> AppState {
        let state = AppState::new();
        state.auth.set_session(Session { token: "tok".into(), identity: identity(role, patient_id) });
        state
    }

    fn prescription(id: i64, dispensed: bool) -> Prescription {
        Prescription {
            prescription_id: id,
            patient_id: None,
            patient_name: None,
            medicine_name: "Paracetamol".into(),
            dosage: None,
            frequency: None,
            duration: None,
            instructions: None,
            is_dispensed: dispensed,
            dispensed_date: None,
            doctor_name: None,
            visit_date: None,
        }
    }

    #[test]
    fn plans_follow_role() {
        assert_eq!(
            fetch_plan(&identity(Role::Doctor, None)),
            vec![Fetch::AllRecords, Fetch::Doctors, Fetch::Patients, Fetch::Visits, Fetch::Stats]
        );
        assert_eq!(
            fetch_plan(&identity(Role::Patient, Some(7))),
            vec![Fetch::MyRecords, Fetch::OwnFiles, Fetch::Stats]
        );
        assert_eq!(fetch_plan(&identity(Role::Pharmacist, None)), vec![Fetch::Prescriptions, Fetch::Stats]);
        assert_eq!(fetch_plan(&identity(Role::Admin, None)), vec![Fetch::Patients, Fetch::Stats]);
        assert_eq!(fetch_plan(&identity(Role::Unknown, None)), vec![Fetch::Stats]);
    }

    #[test]
    fn patient_without_link_skips_files() {
        assert_eq!(fetch_plan(&identity(Role::Patient, None)), vec![Fetch::MyRecords, Fetch::Stats]);
    }

    #[test]
    fn failed_fetch_does_not_stop_the_rest() {
        let state = signed_in(Role::Doctor, None);
        let api = MockApi {
            stats: DashboardStats { total_patients: 4, ..Default::default() },
            ..MockApi::new()
        }
        .failing("doctors", ApiError::Network("down".into()));
        let vm = DataViewModel::with(api);

        block_on(vm.refresh(&state));
        assert_eq!(
            vm.api().calls(),
            vec!["all_records", "doctors", "patients", "visits", "stats"]
        );
        assert_eq!(state.data.stats.borrow().total_patients, 4);
    }

    #[test]
    fn stalled_fetch_does_not_hold_up_the_rest() {
        let state = signed_in(Role::Doctor, None);
        let api = MockApi {
            stats: DashboardStats { total_patients: 4, ..Default::default() },
            ..MockApi::new()
        }
        .stalling("doctors");
        let vm = DataViewModel::with(api);

        assert!(vm.refresh(&state).now_or_never().is_none());
        assert_eq!(
            vm.api().calls(),
            vec!["all_records", "doctors", "patients", "visits", "stats"]
        );
        assert_eq!(state.data.stats.borrow().total_patients, 4);
    }

    #[test]
    fn refresh_leaves_submit_flag_alone() {
        let state = signed_in(Role::Admin, None);
        assert!(state.try_begin_submit());
        let vm = DataViewModel::with(MockApi::new());

        block_on(vm.refresh(&state));
        assert!(state.is_loading());
        assert!(!state.try_begin_submit());
    }

    #[test]
    fn opening_a_view_reloads_the_role_plan() {
        let state = signed_in(Role::Doctor, None);
        state.set_notice(Some(Notice::error("old")));
        let vm = DataViewModel::with(MockApi::new());

        assert!(block_on(vm.open(&state, View::Records)));
        assert_eq!(state.active_view(), View::Records);
        assert_eq!(state.notice(), None);
        assert_eq!(
            vm.api().calls(),
            vec!["all_records", "doctors", "patients", "visits", "stats"]
        );
    }

    #[test]
    fn refused_view_issues_no_requests() {
        let state = signed_in(Role::Doctor, None);
        let vm = DataViewModel::with(MockApi::new());

        assert!(!block_on(vm.open(&state, View::Import)));
        assert_eq!(state.active_view(), View::Dashboard);
        assert!(vm.api().calls().is_empty());
    }

    #[test]
    fn refresh_without_session_does_nothing() {
        let state = AppState::new();
        let vm = DataViewModel::with(MockApi::new());
        block_on(vm.refresh(&state));
        assert!(vm.api().calls().is_empty());
    }

    #[test]
    fn pending_filter_changes_query_and_result() {
        let state = signed_in(Role::Pharmacist, None);
        let api = MockApi {
            prescriptions: vec![prescription(1, false), prescription(2, true)],
            ..MockApi::new()
        };
        let vm = DataViewModel::with(api);

        block_on(vm.fetch(&state, Fetch::Prescriptions)).unwrap();
        assert_eq!(state.data.prescriptions.borrow().len(), 2);

        state.set_pending_only(true);
        block_on(vm.fetch(&state, Fetch::Prescriptions)).unwrap();
        assert_eq!(vm.api().calls(), vec!["prescriptions", "prescriptions?pending=1"]);
        let shown = state.data.prescriptions.borrow();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].prescription_id, 1);
    }

    #[test]
    fn patient_files_use_linked_id() {
        let state = signed_in(Role::Patient, Some(7));
        let vm = DataViewModel::with(MockApi::new());
        block_on(vm.refresh(&state));
        assert!(vm.api().called("files/7"));
    }
}
