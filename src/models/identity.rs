use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role carried in the token payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Doctor,
    Patient,
    Pharmacist,
    Admin,
    /// Any role string this client does not know about
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "Doctor",
            Role::Patient => "Patient",
            Role::Pharmacist => "Pharmacist",
            Role::Admin => "Admin",
            Role::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Role::Doctor => "🩺",
            Role::Patient => "👤",
            Role::Pharmacist => "💊",
            Role::Admin => "🛡️",
            Role::Unknown => "❔",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity decoded from the token payload. The backend signs it; this client
/// only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub pharmacist_id: Option<i64>,
    /// Expiry, seconds since the Unix epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Identity {
    pub fn is_expired_at(&self, now_secs: i64) -> bool {
        matches!(self.exp, Some(exp) if exp <= now_secs)
    }
}

/// Bearer token plus the identity derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_strings_decode_to_unknown() {
        let role: Role = serde_json::from_str("\"Nurse\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn identity_without_linked_ids_decodes() {
        let json = r#"{"user_id": 4, "username": "admin", "role": "Admin"}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.patient_id, None);
        assert!(!identity.is_expired_at(i64::MAX));
    }

    #[test]
    fn expiry_is_inclusive() {
        let json = r#"{"user_id": 1, "username": "x", "role": "Patient", "exp": 100}"#;
        let identity: Identity = serde_json::from_str(json).unwrap();
        assert!(!identity.is_expired_at(99));
        assert!(identity.is_expired_at(100));
    }
}
