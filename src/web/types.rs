// src/web/types.rs
use chrono::{DateTime, Utc};
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::serde::Serialize;

use crate::validation::ValidationError;

pub type ApiResult<T> = Result<Json<T>, (Status, Json<StandardErrorResponse>)>;

#[derive(Debug, Serialize, PartialEq)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Data,
    Error,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Identifier of an accepted submission, serialized under its own key.
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub enum SubmissionId {
    #[serde(rename = "inquiry_id")]
    Inquiry(String),
    #[serde(rename = "subscriber_id")]
    Subscriber(String),
    #[serde(rename = "application_id")]
    Application(String),
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SubmissionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    #[serde(flatten)]
    pub id: SubmissionId,
}

impl SubmissionResponse {
    pub fn new(message: &str, id: SubmissionId) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message: message.to_string(),
            id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    /// Shown to the visitor as-is.
    pub message: String,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl StandardErrorResponse {
    pub fn new(message: &str, error: String, error_code: &str, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            message: message.to_string(),
            error,
            error_code: error_code.to_string(),
            suggestions,
        }
    }

    /// 400 response for a rejected submission. `missing_message` is the
    /// form-specific text shown when required fields are absent.
    pub fn validation(
        err: &ValidationError,
        missing_message: &str,
    ) -> (Status, Json<StandardErrorResponse>) {
        let (message, suggestions): (&str, Vec<String>) = match err {
            ValidationError::MissingFields(fields) => (
                missing_message,
                fields
                    .iter()
                    .map(|f| format!("Provide a value for '{}'", f))
                    .collect(),
            ),
            ValidationError::InvalidEmail(_) => (
                INVALID_EMAIL_MESSAGE,
                vec!["Use an address like name@example.com".to_string()],
            ),
        };

        (
            Status::BadRequest,
            Json(Self::new(
                message,
                err.to_string(),
                err.error_code(),
                suggestions,
            )),
        )
    }

    pub fn internal(error: String, error_code: &str) -> (Status, Json<StandardErrorResponse>) {
        (
            Status::InternalServerError,
            Json(Self::new(
                GENERIC_FAILURE_MESSAGE,
                error,
                error_code,
                vec!["Try again in a few moments".to_string()],
            )),
        )
    }
}

pub const INVALID_EMAIL_MESSAGE: &str = "รูปแบบอีเมลไม่ถูกต้อง";
pub const GENERIC_FAILURE_MESSAGE: &str = "เกิดข้อผิดพลาด กรุณาลองใหม่อีกครั้ง";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_id_is_flattened() {
        let response = SubmissionResponse::new("ok", SubmissionId::Inquiry("INQ1".to_string()));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "data");
        assert_eq!(json["success"], true);
        assert_eq!(json["inquiry_id"], "INQ1");
    }

    #[test]
    fn test_validation_response() {
        let err = ValidationError::MissingFields(vec!["email".to_string()]);
        let (status, body) = StandardErrorResponse::validation(&err, "กรุณากรอกอีเมล");
        assert_eq!(status, Status::BadRequest);
        assert_eq!(body.error_code, "MISSING_FIELDS");
        assert_eq!(body.message, "กรุณากรอกอีเมล");
        assert!(!body.success);

        let err = ValidationError::InvalidEmail("x".to_string());
        let (_, body) = StandardErrorResponse::validation(&err, "unused");
        assert_eq!(body.error_code, "INVALID_EMAIL");
        assert_eq!(body.message, INVALID_EMAIL_MESSAGE);
    }
}
