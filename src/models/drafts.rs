// ============================================================================
// DRAFTS - Unsaved form state and the request bodies built from it
// ============================================================================
// A draft is reset to `Default` after a successful submit and left untouched
// when the submit fails.
// ============================================================================

use serde::Serialize;

use crate::error::ApiError;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::utils::format::file_extension;

/// File picked in an `<input type="file">`.
/// `handle` is the browser object; it is `None` outside the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub handle: Option<web_sys::File>,
}

impl SelectedFile {
    pub fn from_browser(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            handle: Some(file),
        }
    }

    /// Check extension and size before anything is sent
    pub fn check(&self, allowed_extensions: &[&str], max_bytes: u64) -> Result<(), ApiError> {
        let ext = file_extension(&self.name).unwrap_or_default();
        if !allowed_extensions.contains(&ext.as_str()) {
            return Err(ApiError::Validation(format!(
                "File type not allowed. Accepted: {}",
                allowed_extensions.join(", ")
            )));
        }
        if self.size > max_bytes {
            return Err(ApiError::Validation(format!(
                "File is too large (max {} MB)",
                max_bytes / 1024 / 1024
            )));
        }
        Ok(())
    }
}

fn require(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn require_id(value: Option<i64>, field: &str) -> Result<i64, ApiError> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ApiError::Validation(format!("Please select a {}", field))),
    }
}

// ---------------------------------------------------------------------------
// Login / register
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        require(&self.username, "Username")?;
        require(&self.password, "Password")?;
        Ok(LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterDraft {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub gender: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub blood_group: String,
    pub emergency_contact: String,
    pub emergency_contact_name: String,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            email: String::new(),
            name: String::new(),
            gender: "Male".to_string(),
            dob: String::new(),
            phone: String::new(),
            address: String::new(),
            blood_group: "O+".to_string(),
            emergency_contact: String::new(),
            emergency_contact_name: String::new(),
        }
    }
}

impl RegisterDraft {
    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        require(&self.username, "Username")?;
        require(&self.password, "Password")?;
        require(&self.name, "Full name")?;
        require(&self.email, "Email")?;
        if !self.email.contains('@') {
            return Err(ApiError::Validation("Invalid email address".to_string()));
        }
        require(&self.gender, "Gender")?;
        require(&self.dob, "Date of birth")?;
        require(&self.phone, "Phone number")?;
        require(&self.address, "Address")?;
        require(&self.blood_group, "Blood group")?;

        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            gender: self.gender.clone(),
            dob: self.dob.clone(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            blood_group: self.blood_group.clone(),
            emergency_contact: self.emergency_contact.trim().to_string(),
            emergency_contact_name: self.emergency_contact_name.trim().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Doctor forms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewVisit {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub reason: String,
    pub vital_signs: String,
    pub notes: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisitDraft {
    pub patient_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub reason: String,
    /// Free text, conventionally JSON like `{"bp": "120/80"}`
    pub vital_signs: String,
    pub notes: String,
    pub status: String,
}

impl Default for VisitDraft {
    fn default() -> Self {
        Self {
            patient_id: None,
            doctor_id: None,
            reason: String::new(),
            vital_signs: String::new(),
            notes: String::new(),
            status: "Scheduled".to_string(),
        }
    }
}

impl VisitDraft {
    pub fn to_request(&self) -> Result<NewVisit, ApiError> {
        let patient_id = require_id(self.patient_id, "patient")?;
        let doctor_id = require_id(self.doctor_id, "doctor")?;
        require(&self.reason, "Reason for visit")?;
        Ok(NewVisit {
            patient_id,
            doctor_id,
            reason: self.reason.trim().to_string(),
            vital_signs: self.vital_signs.clone(),
            notes: self.notes.clone(),
            status: self.status.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDiagnosis {
    pub visit_id: i64,
    pub name: String,
    pub description: String,
    pub is_chronic: bool,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisDraft {
    pub visit_id: Option<i64>,
    pub name: String,
    pub description: String,
    pub is_chronic: bool,
    pub severity: String,
}

impl Default for DiagnosisDraft {
    fn default() -> Self {
        Self {
            visit_id: None,
            name: String::new(),
            description: String::new(),
            is_chronic: false,
            severity: "Mild".to_string(),
        }
    }
}

impl DiagnosisDraft {
    pub fn to_request(&self) -> Result<NewDiagnosis, ApiError> {
        let visit_id = require_id(self.visit_id, "visit")?;
        require(&self.name, "Diagnosis name")?;
        Ok(NewDiagnosis {
            visit_id,
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            is_chronic: self.is_chronic,
            severity: self.severity.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPrescription {
    pub visit_id: i64,
    pub medicine: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrescriptionDraft {
    pub visit_id: Option<i64>,
    pub medicine: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub instructions: String,
}

impl PrescriptionDraft {
    pub fn to_request(&self) -> Result<NewPrescription, ApiError> {
        let visit_id = require_id(self.visit_id, "visit")?;
        require(&self.medicine, "Medicine name")?;
        require(&self.dosage, "Dosage")?;
        require(&self.frequency, "Frequency")?;
        require(&self.duration, "Duration")?;
        Ok(NewPrescription {
            visit_id,
            medicine: self.medicine.trim().to_string(),
            dosage: self.dosage.trim().to_string(),
            frequency: self.frequency.trim().to_string(),
            duration: self.duration.trim().to_string(),
            instructions: self.instructions.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Multipart forms
// ---------------------------------------------------------------------------

/// Fields of the `POST /files/upload` multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file: SelectedFile,
    pub patient_id: i64,
    pub file_type: String,
    pub description: String,
    pub visit_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileUploadDraft {
    pub file: Option<SelectedFile>,
    pub file_type: String,
    pub description: String,
    pub visit_id: String,
}

impl Default for FileUploadDraft {
    fn default() -> Self {
        Self {
            file: None,
            file_type: "X-Ray".to_string(),
            description: String::new(),
            visit_id: String::new(),
        }
    }
}

impl FileUploadDraft {
    pub fn to_request(
        &self,
        patient_id: Option<i64>,
        allowed_extensions: &[&str],
        max_bytes: u64,
    ) -> Result<FileUpload, ApiError> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| ApiError::Validation("Please select a file".to_string()))?;
        file.check(allowed_extensions, max_bytes)?;
        let patient_id = patient_id.ok_or_else(|| {
            ApiError::Validation("Only patient accounts can upload files".to_string())
        })?;
        let visit_id = Some(self.visit_id.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        Ok(FileUpload {
            file,
            patient_id,
            file_type: self.file_type.clone(),
            description: self.description.clone(),
            visit_id,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportDraft {
    pub file: Option<SelectedFile>,
}

impl ImportDraft {
    pub fn to_request(&self, allowed_extensions: &[&str], max_bytes: u64) -> Result<SelectedFile, ApiError> {
        let file = self
            .file
            .clone()
            .ok_or_else(|| ApiError::Validation("Please select a file".to_string()))?;
        file.check(allowed_extensions, max_bytes)?;
        Ok(file)
    }
}
