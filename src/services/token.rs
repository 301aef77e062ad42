// ============================================================================
// TOKEN - Read the identity out of a JWT payload (no signature check)
// ============================================================================

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::ApiError;
use crate::models::Identity;

/// base64url, with or without `=` padding
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode the payload segment of `token` into an [`Identity`].
///
/// The signature is not verified: the backend issued the token and checks it
/// on every request, the client only needs the role and linked ids.
pub fn decode_identity(token: &str) -> Result<Identity, ApiError> {
    let mut segments = token.trim().split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(_header), Some(payload)) if !payload.is_empty() => payload,
        _ => return Err(ApiError::InvalidToken("expected header.payload.signature".to_string())),
    };

    let bytes = PAYLOAD_ENGINE
        .decode(payload)
        .map_err(|e| ApiError::InvalidToken(format!("payload is not base64url: {}", e)))?;

    serde_json::from_slice::<Identity>(&bytes)
        .map_err(|e| ApiError::InvalidToken(format!("payload is not an identity: {}", e)))
}

/// Decode and reject identities whose `exp` is at or before `now_secs`
pub fn decode_current_identity(token: &str, now_secs: i64) -> Result<Identity, ApiError> {
    let identity = decode_identity(token)?;
    if identity.is_expired_at(now_secs) {
        return Err(ApiError::InvalidToken("token expired".to_string()));
    }
    Ok(identity)
}

/// Build an unsigned token around `payload`. Test helper.
#[cfg(test)]
pub fn encode_test_token(payload: &serde_json::Value) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{}.{}.signature", header, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use base64::engine::general_purpose::URL_SAFE;
    use serde_json::json;

    #[test]
    fn decodes_doctor_payload() {
        let token = encode_test_token(&json!({
            "user_id": 2, "username": "dr_anil", "email": "anil@example.com",
            "role": "Doctor", "patient_id": null, "doctor_id": 1, "pharmacist_id": null,
            "exp": 4_102_444_800i64
        }));
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.role, Role::Doctor);
        assert_eq!(identity.doctor_id, Some(1));
        assert_eq!(identity.patient_id, None);
    }

    #[test]
    fn accepts_padded_payload() {
        let payload = json!({"user_id": 5, "username": "rahul_p", "role": "Patient", "patient_id": 7});
        let body = URL_SAFE.encode(payload.to_string());
        let token = format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", body);
        let identity = decode_identity(&token).unwrap();
        assert_eq!(identity.patient_id, Some(7));
    }

    #[test]
    fn payload_with_url_safe_characters_decodes() {
        let token = encode_test_token(&json!({
            "user_id": 9, "username": "a?>b~~~", "role": "Admin"
        }));
        assert_eq!(decode_identity(&token).unwrap().username, "a?>b~~~");
    }

    #[test]
    fn rejects_garbage() {
        for token in ["", "not-a-jwt", "a..c", "a.!!!.c"] {
            assert!(
                matches!(decode_identity(token), Err(ApiError::InvalidToken(_))),
                "token {:?} should be rejected",
                token
            );
        }
    }

    #[test]
    fn rejects_payload_without_role() {
        let token = encode_test_token(&json!({"user_id": 1, "username": "x"}));
        assert!(matches!(decode_identity(&token), Err(ApiError::InvalidToken(_))));
    }

    #[test]
    fn expired_token_is_not_current() {
        let token = encode_test_token(&json!({
            "user_id": 1, "username": "x", "role": "Admin", "exp": 1_000
        }));
        assert!(decode_identity(&token).is_ok());
        assert!(decode_current_identity(&token, 999).is_ok());
        assert!(matches!(decode_current_identity(&token, 1_000), Err(ApiError::InvalidToken(_))));
    }
}
