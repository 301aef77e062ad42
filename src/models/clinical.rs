use serde::{Deserialize, Serialize};

/// Row of `GET /visits`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    #[serde(rename = "VisitID")]
    pub visit_id: i64,
    #[serde(rename = "PatientID", default)]
    pub patient_id: Option<i64>,
    #[serde(rename = "PatientName", default)]
    pub patient_name: Option<String>,
    #[serde(rename = "DoctorID", default)]
    pub doctor_id: Option<i64>,
    #[serde(rename = "DoctorName", default)]
    pub doctor_name: Option<String>,
    #[serde(rename = "VisitDate", default)]
    pub visit_date: Option<String>,
    #[serde(rename = "ReasonForVisit", default)]
    pub reason: Option<String>,
    #[serde(rename = "VitalSigns", default)]
    pub vital_signs: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

impl Visit {
    /// "Visit #12 - Rahul P (2024-03-01)"
    pub fn option_label(&self) -> String {
        let patient = self.patient_name.as_deref().unwrap_or("Unknown patient");
        match self.visit_date.as_deref() {
            Some(date) => format!(
                "Visit #{} - {} ({})",
                self.visit_id,
                patient,
                crate::utils::format::display_date(date)
            ),
            None => format!("Visit #{} - {}", self.visit_id, patient),
        }
    }
}

/// Joined visit/diagnosis/prescription row of `GET /records/all` and `GET /records/my`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    #[serde(rename = "VisitID", default)]
    pub visit_id: Option<i64>,
    #[serde(rename = "PatientName", default)]
    pub patient_name: Option<String>,
    #[serde(rename = "BloodGroup", default)]
    pub blood_group: Option<String>,
    #[serde(rename = "DoctorName", default)]
    pub doctor_name: Option<String>,
    #[serde(rename = "Specialty", default)]
    pub specialty: Option<String>,
    #[serde(rename = "VisitDate", default)]
    pub visit_date: Option<String>,
    #[serde(rename = "DiagnosisName", default)]
    pub diagnosis_name: Option<String>,
    #[serde(rename = "MedicineName", default)]
    pub medicine_name: Option<String>,
    #[serde(rename = "IsDispensed", default)]
    pub is_dispensed: Option<bool>,
}

impl MedicalRecord {
    pub fn is_dispensed(&self) -> bool {
        self.is_dispensed.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(rename = "PrescriptionID")]
    pub prescription_id: i64,
    #[serde(rename = "PatientID", default)]
    pub patient_id: Option<i64>,
    #[serde(rename = "PatientName", default)]
    pub patient_name: Option<String>,
    #[serde(rename = "MedicineName", default)]
    pub medicine_name: String,
    #[serde(rename = "Dosage", default)]
    pub dosage: Option<String>,
    #[serde(rename = "Frequency", default)]
    pub frequency: Option<String>,
    #[serde(rename = "Duration", default)]
    pub duration: Option<String>,
    #[serde(rename = "Instructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "IsDispensed", default)]
    pub is_dispensed: bool,
    #[serde(rename = "DispensedDate", default)]
    pub dispensed_date: Option<String>,
    #[serde(rename = "DoctorName", default)]
    pub doctor_name: Option<String>,
    #[serde(rename = "VisitDate", default)]
    pub visit_date: Option<String>,
}

impl Prescription {
    pub fn is_pending(&self) -> bool {
        !self.is_dispensed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalFile {
    #[serde(rename = "FileID")]
    pub file_id: i64,
    #[serde(rename = "FileType", default)]
    pub file_type: Option<String>,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "FileSize", default)]
    pub file_size: u64,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "UploadedAt", default)]
    pub uploaded_at: Option<String>,
    #[serde(rename = "UploadedByUsername", default)]
    pub uploaded_by: Option<String>,
}

/// Summary counts of `GET /dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_patients: u64,
    #[serde(default)]
    pub total_doctors: u64,
    #[serde(default)]
    pub today_visits: u64,
    #[serde(default)]
    pub pending_prescriptions: u64,
    #[serde(default)]
    pub pending_tests: u64,
}

/// Outcome of `POST /admin/import-patients`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub successful: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub errors: Vec<String>,
}
