use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "PatientID")]
    pub patient_id: i64,
    #[serde(rename = "PatientName")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "DateOfBirth", default)]
    pub date_of_birth: Option<String>,
    #[serde(rename = "PhoneNumber", default)]
    pub phone: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "BloodGroup", default)]
    pub blood_group: Option<String>,
    #[serde(rename = "EmergencyContact", default)]
    pub emergency_contact: Option<String>,
    #[serde(rename = "EmergencyContactName", default)]
    pub emergency_contact_name: Option<String>,
}

impl Patient {
    /// Label used in select options: "Name - O+"
    pub fn option_label(&self) -> String {
        match &self.blood_group {
            Some(group) if !group.is_empty() => format!("{} - {}", self.name, group),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "DoctorID")]
    pub doctor_id: i64,
    #[serde(rename = "DoctorName")]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Specialty", default)]
    pub specialty: Option<String>,
    #[serde(rename = "PhoneNumber", default)]
    pub phone: Option<String>,
    #[serde(rename = "LicenseNumber", default)]
    pub license_number: Option<String>,
    #[serde(rename = "YearsOfExperience", default)]
    pub years_of_experience: Option<i64>,
}

impl Doctor {
    pub fn option_label(&self) -> String {
        match &self.specialty {
            Some(specialty) if !specialty.is_empty() => format!("{} - {}", self.name, specialty),
            _ => self.name.clone(),
        }
    }
}
