use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

/// New-patient self registration
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
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

/// Error body returned by every failing endpoint
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic `{message, ...}` body returned by create endpoints
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
