// ============================================================================
// ACTIONS VIEWMODEL - Form submissions and other writes
// ============================================================================
// Every action: draft → request → submit with the bearer token. On success the
// draft resets, a confirmation is shown and the affected collection reloads.
// On failure the draft is left as typed and the server's message is shown.
// ============================================================================

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{ImportResult, MedicalFile, Session};
use crate::services::{ApiClient, HospitalApi};
use crate::state::{AppState, Notice};
use crate::utils::constants::{IMPORT_EXTENSIONS, UPLOAD_EXTENSIONS};
use crate::viewmodels::data_viewmodel::{DataViewModel, Fetch};

pub const VISIT_CREATED: &str = "Visit created successfully";
pub const DIAGNOSIS_ADDED: &str = "Diagnosis added successfully";
pub const PRESCRIPTION_ADDED: &str = "Prescription added successfully";
pub const PRESCRIPTION_DISPENSED: &str = "Prescription dispensed successfully";
pub const FILE_UPLOADED: &str = "File uploaded successfully";

pub struct ActionsViewModel<A = ApiClient> {
    data: DataViewModel<A>,
    max_upload_bytes: u64,
}

impl ActionsViewModel {
    pub fn new() -> Self {
        Self::with(ApiClient::new())
    }
}

impl Default for ActionsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: HospitalApi> ActionsViewModel<A> {
    pub fn with(api: A) -> Self {
        Self {
            data: DataViewModel::with(api),
            max_upload_bytes: CONFIG.max_upload_bytes(),
        }
    }

    pub fn api(&self) -> &A {
        self.data.api()
    }

    fn session(state: &AppState) -> Result<Session, ApiError> {
        state
            .auth
            .get_session()
            .ok_or_else(|| ApiError::InvalidToken("no session".to_string()))
    }

    /// Shared tail of every action
    async fn settle<T>(
        &self,
        state: &AppState,
        result: Result<T, ApiError>,
        success: &str,
        fallback: &str,
        refetch: Fetch,
    ) -> Result<T, ApiError> {
        state.set_loading(false);
        match result {
            Ok(value) => {
                log::info!("✅ [ACTION] {}", success);
                state.set_notice(Some(Notice::success(success)));
                if let Err(e) = self.data.fetch(state, refetch).await {
                    log::error!("❌ [DATA] {:?} failed: {}", refetch, e);
                }
                Ok(value)
            }
            Err(e) => {
                log::error!("❌ [ACTION] {}: {}", fallback, e);
                state.set_notice(Some(Notice::error(e.user_message(fallback))));
                Err(e)
            }
        }
    }

    fn reject<T>(state: &AppState, error: ApiError, fallback: &str) -> Result<T, ApiError> {
        state.set_notice(Some(Notice::error(error.user_message(fallback))));
        Err(error)
    }

    pub async fn create_visit(&self, state: &AppState) -> Result<(), ApiError> {
        const FAILED: &str = "Failed to create visit";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };
        let request = match state.forms.visit.borrow().to_request() {
            Ok(request) => request,
            Err(e) => return Self::reject(state, e, FAILED),
        };

        state.set_loading(true);
        let result = self.api().create_visit(&session.token, &request).await;
        if result.is_ok() {
            *state.forms.visit.borrow_mut() = Default::default();
        }
        self.settle(state, result, VISIT_CREATED, FAILED, Fetch::Visits).await.map(|_| ())
    }

    pub async fn add_diagnosis(&self, state: &AppState) -> Result<(), ApiError> {
        const FAILED: &str = "Failed to add diagnosis";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };
        let request = match state.forms.diagnosis.borrow().to_request() {
            Ok(request) => request,
            Err(e) => return Self::reject(state, e, FAILED),
        };

        state.set_loading(true);
        let result = self.api().add_diagnosis(&session.token, &request).await;
        if result.is_ok() {
            *state.forms.diagnosis.borrow_mut() = Default::default();
        }
        self.settle(state, result, DIAGNOSIS_ADDED, FAILED, Fetch::AllRecords).await.map(|_| ())
    }

    pub async fn add_prescription(&self, state: &AppState) -> Result<(), ApiError> {
        const FAILED: &str = "Failed to add prescription";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };
        let request = match state.forms.prescription.borrow().to_request() {
            Ok(request) => request,
            Err(e) => return Self::reject(state, e, FAILED),
        };

        state.set_loading(true);
        let result = self.api().add_prescription(&session.token, &request).await;
        if result.is_ok() {
            *state.forms.prescription.borrow_mut() = Default::default();
        }
        self.settle(state, result, PRESCRIPTION_ADDED, FAILED, Fetch::AllRecords).await.map(|_| ())
    }

    /// Mark a prescription dispensed. The list only changes once it is
    /// fetched again.
    pub async fn dispense(&self, state: &AppState, prescription_id: i64) -> Result<(), ApiError> {
        const FAILED: &str = "Failed to dispense prescription";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };

        state.set_loading(true);
        let result = self.api().dispense_prescription(&session.token, prescription_id).await;
        self.settle(state, result, PRESCRIPTION_DISPENSED, FAILED, Fetch::Prescriptions).await.map(|_| ())
    }

    pub async fn set_pending_only(&self, state: &AppState, pending_only: bool) {
        state.set_pending_only(pending_only);
        if let Err(e) = self.data.fetch(state, Fetch::Prescriptions).await {
            log::error!("❌ [DATA] Prescriptions failed: {}", e);
        }
    }

    pub async fn upload_file(&self, state: &AppState) -> Result<(), ApiError> {
        const FAILED: &str = "Failed to upload file";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };
        let request = state.forms.upload.borrow().to_request(
            session.identity.patient_id,
            UPLOAD_EXTENSIONS,
            self.max_upload_bytes,
        );
        let request = match request {
            Ok(request) => request,
            Err(e) => return Self::reject(state, e, FAILED),
        };

        state.set_loading(true);
        let result = self.api().upload_file(&session.token, &request).await;
        if result.is_ok() {
            *state.forms.upload.borrow_mut() = Default::default();
        }
        self.settle(state, result, FILE_UPLOADED, FAILED, Fetch::OwnFiles).await.map(|_| ())
    }

    pub async fn import_patients(&self, state: &AppState) -> Result<ImportResult, ApiError> {
        const FAILED: &str = "Failed to import patients";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };
        let file = state
            .forms
            .import
            .borrow()
            .to_request(IMPORT_EXTENSIONS, self.max_upload_bytes);
        let file = match file {
            Ok(file) => file,
            Err(e) => return Self::reject(state, e, FAILED),
        };

        state.set_loading(true);
        let result = self.api().import_patients(&session.token, &file).await;
        let summary = match &result {
            Ok(outcome) => {
                state.data.set_import_result(Some(outcome.clone()));
                *state.forms.import.borrow_mut() = Default::default();
                import_summary(outcome)
            }
            Err(_) => String::new(),
        };
        self.settle(state, result, &summary, FAILED, Fetch::Patients).await
    }

    /// Bytes of a stored file; the view hands them to the browser
    pub async fn download_file(&self, state: &AppState, file: &MedicalFile) -> Result<Vec<u8>, ApiError> {
        const FAILED: &str = "Failed to download file";
        let session = match Self::session(state) {
            Ok(session) => session,
            Err(e) => return Self::reject(state, e, FAILED),
        };
        match self.api().download_file(&session.token, file.file_id).await {
            Ok(bytes) => {
                log::info!("📥 [ACTION] {} ({} bytes)", file.file_name, bytes.len());
                Ok(bytes)
            }
            Err(e) => {
                log::error!("❌ [ACTION] {}: {}", FAILED, e);
                Self::reject(state, e, FAILED)
            }
        }
    }
}

pub fn import_summary(result: &ImportResult) -> String {
    let headline = result
        .message
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "Import completed".to_string());
    format!(
        "{}: {} imported, {} failed (of {})",
        headline, result.successful, result.failed, result.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identity, Prescription, Role, SelectedFile, VisitDraft};
    use crate::services::mock_api::MockApi;
    use futures::executor::block_on;

    fn signed_in(role: Role, patient_id: Option<i64>) -> AppState {
        let state = AppState::new();
        state.auth.set_session(Session {
            token: "tok".into(),
            identity: Identity {
                user_id: 1,
                username: "user".into(),
                email: None,
                role,
                patient_id,
                doctor_id: None,
                pharmacist_id: None,
                exp: None,
            },
        });
        state
    }

    fn file(name: &str) -> SelectedFile {
        SelectedFile { name: name.into(), size: 2048, handle: None }
    }

    fn fill_visit(state: &AppState) {
        let mut draft = state.forms.visit.borrow_mut();
        draft.patient_id = Some(3);
        draft.doctor_id = Some(1);
        draft.reason = "Fever".into();
        draft.status = "Completed".into();
    }

    #[test]
    fn created_visit_resets_draft_and_refetches_visits() {
        let state = signed_in(Role::Doctor, None);
        fill_visit(&state);
        let vm = ActionsViewModel::with(MockApi::new());

        block_on(vm.create_visit(&state)).unwrap();
        assert_eq!(*state.forms.visit.borrow(), VisitDraft::default());
        assert_eq!(vm.api().calls(), vec!["create_visit", "visits"]);
        assert_eq!(state.notice(), Some(Notice::success(VISIT_CREATED)));
        assert_eq!(vm.api().bodies.borrow()[0]["patient_id"], 3);
        assert!(!state.is_loading());
    }

    #[test]
    fn rejected_visit_keeps_draft_and_shows_server_error() {
        let state = signed_in(Role::Doctor, None);
        fill_visit(&state);
        let api = MockApi::new().failing(
            "create_visit",
            ApiError::Server { status: 400, message: "Patient not found".into() },
        );
        let vm = ActionsViewModel::with(api);

        assert!(block_on(vm.create_visit(&state)).is_err());
        assert_eq!(state.forms.visit.borrow().reason, "Fever");
        assert_eq!(state.notice(), Some(Notice::error("Patient not found")));
        assert!(!vm.api().called("visits"));
    }

    #[test]
    fn network_failure_uses_fallback_text() {
        let state = signed_in(Role::Doctor, None);
        fill_visit(&state);
        let api = MockApi::new().failing("create_visit", ApiError::Network("offline".into()));
        let vm = ActionsViewModel::with(api);

        assert!(block_on(vm.create_visit(&state)).is_err());
        assert_eq!(state.notice(), Some(Notice::error("Failed to create visit")));
    }

    #[test]
    fn diagnosis_and_prescription_refetch_records() {
        let state = signed_in(Role::Doctor, None);
        {
            let mut diagnosis = state.forms.diagnosis.borrow_mut();
            diagnosis.visit_id = Some(12);
            diagnosis.name = "Influenza".into();
        }
        {
            let mut prescription = state.forms.prescription.borrow_mut();
            prescription.visit_id = Some(12);
            prescription.medicine = "Paracetamol".into();
            prescription.dosage = "500mg".into();
            prescription.frequency = "Twice daily".into();
            prescription.duration = "5 days".into();
        }
        let vm = ActionsViewModel::with(MockApi::new());

        block_on(vm.add_diagnosis(&state)).unwrap();
        block_on(vm.add_prescription(&state)).unwrap();
        assert_eq!(
            vm.api().calls(),
            vec!["add_diagnosis", "all_records", "add_prescription", "all_records"]
        );
        assert_eq!(state.notice(), Some(Notice::success(PRESCRIPTION_ADDED)));
    }

    #[test]
    fn dispensed_prescription_leaves_pending_list() {
        let state = signed_in(Role::Pharmacist, None);
        state.set_pending_only(true);
        let mut api = MockApi::new();
        api.prescriptions = vec![Prescription {
            prescription_id: 5,
            patient_id: None,
            patient_name: None,
            medicine_name: "Amoxicillin".into(),
            dosage: None,
            frequency: None,
            duration: None,
            instructions: None,
            is_dispensed: true,
            dispensed_date: Some("2024-03-02".into()),
            doctor_name: None,
            visit_date: None,
        }];
        let vm = ActionsViewModel::with(api);

        block_on(vm.dispense(&state, 5)).unwrap();
        assert_eq!(vm.api().calls(), vec!["dispense/5", "prescriptions?pending=1"]);
        assert!(state.data.prescriptions.borrow().iter().all(|p| p.prescription_id != 5));
        assert_eq!(state.notice(), Some(Notice::success(PRESCRIPTION_DISPENSED)));
    }

    #[test]
    fn toggling_pending_refetches_with_new_value() {
        let state = signed_in(Role::Pharmacist, None);
        let vm = ActionsViewModel::with(MockApi::new());
        block_on(vm.set_pending_only(&state, true));
        block_on(vm.set_pending_only(&state, false));
        assert_eq!(vm.api().calls(), vec!["prescriptions?pending=1", "prescriptions"]);
        assert!(!state.pending_only());
    }

    #[test]
    fn upload_without_file_sends_nothing() {
        let state = signed_in(Role::Patient, Some(7));
        let vm = ActionsViewModel::with(MockApi::new());
        assert!(matches!(block_on(vm.upload_file(&state)), Err(ApiError::Validation(_))));
        assert!(vm.api().calls().is_empty());
        assert_eq!(state.notice(), Some(Notice::error("Please select a file")));
    }

    #[test]
    fn upload_rejects_unsupported_extension() {
        let state = signed_in(Role::Patient, Some(7));
        state.forms.upload.borrow_mut().file = Some(file("notes.exe"));
        let vm = ActionsViewModel::with(MockApi::new());
        assert!(block_on(vm.upload_file(&state)).is_err());
        assert!(vm.api().calls().is_empty());
    }

    #[test]
    fn upload_sends_linked_patient_and_refetches_files() {
        let state = signed_in(Role::Patient, Some(7));
        {
            let mut draft = state.forms.upload.borrow_mut();
            draft.file = Some(file("xray.png"));
            draft.description = "Chest".into();
            draft.visit_id = "12".into();
        }
        let vm = ActionsViewModel::with(MockApi::new());

        block_on(vm.upload_file(&state)).unwrap();
        let uploads = vm.api().uploads.borrow();
        assert_eq!(uploads[0].patient_id, 7);
        assert_eq!(uploads[0].visit_id.as_deref(), Some("12"));
        assert_eq!(vm.api().calls(), vec!["upload", "files/7"]);
        assert!(state.forms.upload.borrow().file.is_none());
    }

    #[test]
    fn import_keeps_result_panel_and_refetches_patients() {
        let state = signed_in(Role::Admin, None);
        state.forms.import.borrow_mut().file = Some(file("patients.csv"));
        let mut api = MockApi::new();
        api.import_result = ImportResult {
            message: Some("Import completed".into()),
            total: 3,
            successful: 2,
            failed: 1,
            errors: vec!["Row 3: Email already exists".into()],
        };
        let vm = ActionsViewModel::with(api);

        let result = block_on(vm.import_patients(&state)).unwrap();
        assert_eq!(result.failed, 1);
        assert_eq!(state.data.import_result.borrow().as_ref().map(|r| r.successful), Some(2));
        assert_eq!(vm.api().calls(), vec!["import", "patients"]);
        assert_eq!(
            state.notice(),
            Some(Notice::success("Import completed: 2 imported, 1 failed (of 3)"))
        );
    }

    #[test]
    fn import_without_file_sends_nothing() {
        let state = signed_in(Role::Admin, None);
        let vm = ActionsViewModel::with(MockApi::new());
        assert!(block_on(vm.import_patients(&state)).is_err());
        assert!(vm.api().calls().is_empty());
    }

    #[test]
    fn actions_need_a_session() {
        let state = AppState::new();
        fill_visit(&state);
        let vm = ActionsViewModel::with(MockApi::new());
        assert!(matches!(block_on(vm.create_visit(&state)), Err(ApiError::InvalidToken(_))));
        assert!(vm.api().calls().is_empty());
    }

    #[test]
    fn download_returns_bytes() {
        let state = signed_in(Role::Patient, Some(7));
        let mut api = MockApi::new();
        api.download = vec![1, 2, 3];
        let vm = ActionsViewModel::with(api);
        let stored = MedicalFile {
            file_id: 4,
            file_type: None,
            file_name: "xray.png".into(),
            file_size: 3,
            description: None,
            uploaded_at: None,
            uploaded_by: None,
        };
        assert_eq!(block_on(vm.download_file(&state, &stored)).unwrap(), vec![1, 2, 3]);
        assert!(vm.api().called("download/4"));
    }
}
