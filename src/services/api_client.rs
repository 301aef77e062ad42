// ============================================================================
// API CLIENT - HTTP ONLY (Stateless)
// ============================================================================
// No business logic here: builds requests, sends them, maps the response.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    DashboardStats, Doctor, ErrorBody, FileUpload, ImportResult, LoginRequest, LoginResponse,
    MedicalFile, MedicalRecord, MessageResponse, NewDiagnosis, NewPrescription, NewVisit, Patient,
    Prescription, RegisterRequest, SelectedFile, Visit,
};
use crate::services::api::{prescriptions_path, HospitalApi};

/// API client - HTTP communication only (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T, ApiError> {
        let response = Self::authorized(Request::get(&self.url(path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        token: Option<&str>,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let mut builder = Request::post(&self.url(path));
        if let Some(token) = token {
            builder = Self::authorized(builder, token);
        }
        let response = builder
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_form<T: DeserializeOwned>(&self, token: &str, path: &str, form: FormData) -> Result<T, ApiError> {
        let response = Self::authorized(Request::post(&self.url(path)), token)
            .body(form)
            .map_err(|e| ApiError::Parse(format!("Form error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a finished response to `T`, or to `ApiError::Server` when it is not 2xx
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(server_error(&response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn server_error(response: &Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_default();
    log::warn!("❌ [API] HTTP {} {}", status, response.url());
    ApiError::Server { status, message }
}

/// The `error` field of a JSON error body, if there is one
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
}

fn form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|_| ApiError::Validation("Could not build upload form".to_string()))
}

fn append_file(form: &FormData, file: &SelectedFile) -> Result<(), ApiError> {
    let handle = file
        .handle
        .as_ref()
        .ok_or_else(|| ApiError::Validation("Please select a file".to_string()))?;
    form.append_with_blob_and_filename("file", handle, &file.name)
        .map_err(|_| ApiError::Validation("Could not attach file".to_string()))
}

fn append_field(form: &FormData, name: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(name, value)
        .map_err(|_| ApiError::Validation(format!("Could not attach {}", name)))
}

impl HospitalApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        log::info!("🔐 [API] Login for user: {}", request.username);
        let response: LoginResponse = self.post_json(None, "/auth/login", request).await?;
        Ok(response.token)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        log::info!("📝 [API] Registering patient account: {}", request.username);
        self.post_json(None, "/auth/register", request).await
    }

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        self.get_json(token, "/dashboard/stats").await
    }

    async fn all_records(&self, token: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        self.get_json(token, "/records/all").await
    }

    async fn my_records(&self, token: &str) -> Result<Vec<MedicalRecord>, ApiError> {
        self.get_json(token, "/records/my").await
    }

    async fn patients(&self, token: &str) -> Result<Vec<Patient>, ApiError> {
        self.get_json(token, "/patients").await
    }

    async fn doctors(&self, token: &str) -> Result<Vec<Doctor>, ApiError> {
        self.get_json(token, "/doctors").await
    }

    async fn visits(&self, token: &str) -> Result<Vec<Visit>, ApiError> {
        self.get_json(token, "/visits").await
    }

    async fn create_visit(&self, token: &str, visit: &NewVisit) -> Result<MessageResponse, ApiError> {
        log::info!("🩺 [API] Creating visit for patient {}", visit.patient_id);
        self.post_json(Some(token), "/visits", visit).await
    }

    async fn add_diagnosis(&self, token: &str, diagnosis: &NewDiagnosis) -> Result<MessageResponse, ApiError> {
        log::info!("🩺 [API] Adding diagnosis to visit {}", diagnosis.visit_id);
        self.post_json(Some(token), "/diagnosis", diagnosis).await
    }

    async fn prescriptions(&self, token: &str, pending_only: bool) -> Result<Vec<Prescription>, ApiError> {
        self.get_json(token, prescriptions_path(pending_only)).await
    }

    async fn add_prescription(&self, token: &str, prescription: &NewPrescription) -> Result<MessageResponse, ApiError> {
        log::info!("💊 [API] Adding prescription to visit {}", prescription.visit_id);
        self.post_json(Some(token), "/prescriptions", prescription).await
    }

    async fn dispense_prescription(&self, token: &str, prescription_id: i64) -> Result<MessageResponse, ApiError> {
        log::info!("💊 [API] Dispensing prescription {}", prescription_id);
        let path = format!("/prescriptions/{}/dispense", prescription_id);
        let response = Self::authorized(Request::post(&self.url(&path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(server_error(&response).await);
        }
        // Some backends answer 204 or a non-JSON body here
        Ok(response.json::<MessageResponse>().await.unwrap_or_default())
    }

    async fn patient_files(&self, token: &str, patient_id: i64) -> Result<Vec<MedicalFile>, ApiError> {
        self.get_json(token, &format!("/files/patient/{}", patient_id)).await
    }

    async fn upload_file(&self, token: &str, upload: &FileUpload) -> Result<MessageResponse, ApiError> {
        log::info!("📤 [API] Uploading {} ({} bytes)", upload.file.name, upload.file.size);
        let form = form_data()?;
        append_file(&form, &upload.file)?;
        append_field(&form, "patient_id", &upload.patient_id.to_string())?;
        append_field(&form, "file_type", &upload.file_type)?;
        append_field(&form, "description", &upload.description)?;
        if let Some(visit_id) = &upload.visit_id {
            append_field(&form, "visit_id", visit_id)?;
        }
        self.post_form(token, "/files/upload", form).await
    }

    async fn download_file(&self, token: &str, file_id: i64) -> Result<Vec<u8>, ApiError> {
        log::info!("📥 [API] Downloading file {}", file_id);
        let path = format!("/files/download/{}", file_id);
        let response = Self::authorized(Request::get(&self.url(&path)), token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(server_error(&response).await);
        }
        response.binary().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn import_patients(&self, token: &str, file: &SelectedFile) -> Result<ImportResult, ApiError> {
        log::info!("📥 [API] Importing patients from {}", file.name);
        let form = form_data()?;
        append_file(&form, file)?;
        let result: ImportResult = self.post_form(token, "/admin/import-patients", form).await?;
        log::info!(
            "✅ [API] Import finished: {}/{} imported, {} failed",
            result.successful,
            result.total,
            result.failed
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_becomes_message() {
        assert_eq!(
            error_message(r#"{"error":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
    }

    #[test]
    fn missing_or_blank_error_field_is_none() {
        assert_eq!(error_message(r#"{"message":"nope"}"#), None);
        assert_eq!(error_message(r#"{"error":"  "}"#), None);
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:5000/api/");
        assert_eq!(client.url("/patients"), "http://localhost:5000/api/patients");
    }
}
