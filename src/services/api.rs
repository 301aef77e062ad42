// ============================================================================
// HOSPITAL API - The REST surface this client consumes
// ============================================================================
// `ApiClient` talks to the real backend over fetch; tests plug in a mock.
// Every method except login/register takes the bearer token.
// ============================================================================

use crate::error::ApiError;
use crate::models::{
    DashboardStats, Doctor, FileUpload, ImportResult, LoginRequest, MedicalFile, MedicalRecord,
    MessageResponse, NewDiagnosis, NewPrescription, NewVisit, Patient, Prescription,
    RegisterRequest, SelectedFile, Visit,
};

#[allow(async_fn_in_trait)]
pub trait HospitalApi {
    /// `POST /auth/login` → bearer token
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;
    /// `POST /auth/register`
    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError>;

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError>;
    async fn all_records(&self, token: &str) -> Result<Vec<MedicalRecord>, ApiError>;
    async fn my_records(&self, token: &str) -> Result<Vec<MedicalRecord>, ApiError>;
    async fn patients(&self, token: &str) -> Result<Vec<Patient>, ApiError>;
    async fn doctors(&self, token: &str) -> Result<Vec<Doctor>, ApiError>;
    async fn visits(&self, token: &str) -> Result<Vec<Visit>, ApiError>;

    async fn create_visit(&self, token: &str, visit: &NewVisit) -> Result<MessageResponse, ApiError>;
    async fn add_diagnosis(&self, token: &str, diagnosis: &NewDiagnosis) -> Result<MessageResponse, ApiError>;

    /// `GET /prescriptions`, with `?pending=1` when `pending_only`
    async fn prescriptions(&self, token: &str, pending_only: bool) -> Result<Vec<Prescription>, ApiError>;
    async fn add_prescription(&self, token: &str, prescription: &NewPrescription) -> Result<MessageResponse, ApiError>;
    async fn dispense_prescription(&self, token: &str, prescription_id: i64) -> Result<MessageResponse, ApiError>;

    async fn patient_files(&self, token: &str, patient_id: i64) -> Result<Vec<MedicalFile>, ApiError>;
    /// Multipart `POST /files/upload`
    async fn upload_file(&self, token: &str, upload: &FileUpload) -> Result<MessageResponse, ApiError>;
    /// Raw bytes of `GET /files/download/:id`
    async fn download_file(&self, token: &str, file_id: i64) -> Result<Vec<u8>, ApiError>;

    /// Multipart `POST /admin/import-patients`
    async fn import_patients(&self, token: &str, file: &SelectedFile) -> Result<ImportResult, ApiError>;
}

/// Path and query for the prescription list
pub fn prescriptions_path(pending_only: bool) -> &'static str {
    if pending_only {
        "/prescriptions?pending=1"
    } else {
        "/prescriptions"
    }
}
