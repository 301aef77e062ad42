/// Local storage key holding the raw bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

pub const VISIT_STATUSES: &[&str] = &["Scheduled", "In Progress", "Completed"];
pub const SEVERITIES: &[&str] = &["Mild", "Moderate", "Severe"];
pub const GENDERS: &[&str] = &["Male", "Female", "Other"];
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

/// (value sent to the backend, label)
pub const FILE_TYPES: &[(&str, &str)] = &[
    ("X-Ray", "X-Ray"),
    ("MRI", "MRI Scan"),
    ("CT Scan", "CT Scan"),
    ("Blood Test", "Blood Test"),
    ("Report", "Medical Report"),
    ("Prescription", "Prescription"),
    ("Other", "Other"),
];

/// Extensions the backend accepts for medical files
pub const UPLOAD_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf", "dcm"];
/// Extensions the backend accepts for patient imports
pub const IMPORT_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];

pub const IMPORT_COLUMNS: &[&str] = &["Name", "Email", "Gender", "DOB", "Phone", "Address", "BloodGroup"];
pub const IMPORT_TEMPLATE_SAMPLE_ROW: &str = "John Doe,john@email.com,Male,1990-01-15,9876543210,Mumbai,O+";

/// Demo accounts seeded in the backend database
pub const DEMO_CREDENTIALS: &[(&str, &str, &str)] = &[
    ("👨‍⚕️", "Doctor", "dr_anil / doctor123"),
    ("👤", "Patient", "rahul_p / password123"),
    ("💊", "Pharmacist", "pharm_amit / pharmacy123"),
    ("🔐", "Admin", "admin / admin123"),
];
