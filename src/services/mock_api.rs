// In-memory HospitalApi for viewmodel tests. Records every call by route name
// and fails the routes listed in `failures`.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::ApiError;
use crate::models::{
    DashboardStats, Doctor, FileUpload, ImportResult, LoginRequest, MedicalFile, MedicalRecord,
    MessageResponse, NewDiagnosis, NewPrescription, NewVisit, Patient, Prescription,
    RegisterRequest, SelectedFile, Visit,
};
use crate::services::api::HospitalApi;

#[derive(Default)]
pub struct MockApi {
    pub token: String,
    pub stats: DashboardStats,
    pub all_records: Vec<MedicalRecord>,
    pub my_records: Vec<MedicalRecord>,
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub visits: Vec<Visit>,
    pub prescriptions: Vec<Prescription>,
    pub files: Vec<MedicalFile>,
    pub download: Vec<u8>,
    pub import_result: ImportResult,
    pub failures: HashMap<&'static str, ApiError>,
    /// Routes whose response never arrives
    pub stalled: HashSet<&'static str>,
    pub calls: RefCell<Vec<String>>,
    pub bodies: RefCell<Vec<serde_json::Value>>,
    pub uploads: RefCell<Vec<FileUpload>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, route: &'static str, error: ApiError) -> Self {
        self.failures.insert(route, error);
        self
    }

    pub fn stalling(mut self, route: &'static str) -> Self {
        self.stalled.insert(route);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, route: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == route)
    }

    async fn hit(&self, route: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(route.to_string());
        if self.stalled.contains(route) {
            futures::future::pending::<()>().await;
        }
        match self.failures.get(route) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn body<T: serde::Serialize>(&self, body: &T) {
        if let Ok(value) = serde_json::to_value(body) {
            self.bodies.borrow_mut().push(value);
        }
    }

    fn created() -> MessageResponse {
        MessageResponse { message: Some("ok".to_string()) }
    }
}

impl HospitalApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        self.body(request);
        self.hit("login").await?;
        Ok(self.token.clone())
    }

    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.body(request);
        self.hit("register").await?;
        Ok(Self::created())
    }

    async fn dashboard_stats(&self, _token: &str) -> Result<DashboardStats, ApiError> {
        self.hit("stats").await?;
        Ok(self.stats.clone())
    }

    async fn all_records(&self, _token: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        self.hit("all_records").await?;
        Ok(self.all_records.clone())
    }

    async fn my_records(&self, _token: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        self.hit("my_records").await?;
        Ok(self.my_records.clone())
    }

    async fn patients(&self, _token: &str) -> Result<Vec<Patient>, ApiError> {
        self.hit("patients").await?;
        Ok(self.patients.clone())
    }

    async fn doctors(&self, _token: &str) -> Result<Vec<Doctor>, ApiError> {
        self.hit("doctors").await?;
        Ok(self.doctors.clone())
    }

    async fn visits(&self, _token: &str) -> Result<Vec<Visit>, ApiError> {
        self.hit("visits").await?;
        Ok(self.visits.clone())
    }

    async fn create_visit(&self, _token: &str, visit: &NewVisit) -> Result<MessageResponse, ApiError> {
        self.body(visit);
        self.hit("create_visit").await?;
        Ok(Self::created())
    }

    async fn add_diagnosis(&self, _token: &str, diagnosis: &NewDiagnosis) -> Result<MessageResponse, ApiError> {
        self.body(diagnosis);
        self.hit("add_diagnosis").await?;
        Ok(Self::created())
    }

    async fn prescriptions(&self, _token: &str, pending_only: bool) -> Result<Vec<Prescription>, ApiError> {
        if pending_only {
            self.hit("prescriptions?pending=1").await?;
            Ok(self.prescriptions.iter().filter(|p| p.is_pending()).cloned().collect())
        } else {
            self.hit("prescriptions").await?;
            Ok(self.prescriptions.clone())
        }
    }

    async fn add_prescription(&self, _token: &str, prescription: &NewPrescription) -> Result<MessageResponse, ApiError> {
        self.body(prescription);
        self.hit("add_prescription").await?;
        Ok(Self::created())
    }

    async fn dispense_prescription(&self, _token: &str, prescription_id: i64) -> Result<MessageResponse, ApiError> {
        self.hit(&format!("dispense/{}", prescription_id)).await?;
        Ok(Self::created())
    }

    async fn patient_files(&self, _token: &str, patient_id: i64) -> Result<Vec<MedicalFile>, ApiError> {
        self.hit(&format!("files/{}", patient_id)).await?;
        Ok(self.files.clone())
    }

    async fn upload_file(&self, _token: &str, upload: &FileUpload) -> Result<MessageResponse, ApiError> {
        self.uploads.borrow_mut().push(upload.clone());
        self.hit("upload").await?;
        Ok(Self::created())
    }

    async fn download_file(&self, _token: &str, file_id: i64) -> Result<Vec<u8>, ApiError> {
        self.hit(&format!("download/{}", file_id)).await?;
        Ok(self.download.clone())
    }

    async fn import_patients(&self, _token: &str, _file: &SelectedFile) -> Result<ImportResult, ApiError> {
        self.hit("import").await?;
        Ok(self.import_result.clone())
    }
}
