pub mod auth;
pub mod identity;
pub mod people;
pub mod clinical;
pub mod drafts;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, ErrorBody, MessageResponse};
pub use identity::{Role, Identity, Session};
pub use people::{Patient, Doctor};
pub use clinical::{Visit, MedicalRecord, Prescription, MedicalFile, DashboardStats, ImportResult};
pub use drafts::*;
