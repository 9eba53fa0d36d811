//! Enrollment Client
//!
//! Wire types and the HTTP client for the remote enrollment endpoint.
//! The endpoint is an external collaborator: a JSON POST answered with a
//! JSON object carrying `success` and, on failure, an optional `error`.

#![allow(async_fn_in_trait)]

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domain::config::EnrollmentConfig;
use crate::domain::Course;
use crate::error::Result;
use crate::state::EnrollmentForm;

/// Request body sent to the endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnrollmentRequest {
    pub student_name: String,
    pub student_email: String,
    pub phone: String,
    pub course_id: u32,
    pub course_title: String,
}

impl EnrollmentRequest {
    /// Build from the form and the targeted course. All text fields are trimmed.
    pub fn new(form: &EnrollmentForm, course: &Course) -> Self {
        Self {
            student_name: form.student_name.trim().to_string(),
            student_email: form.student_email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            course_id: course.id,
            course_title: course.title.to_string(),
        }
    }
}

/// Status and parsed body of an endpoint response
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentReply {
    pub status: u16,
    pub body: Value,
}

impl EnrollmentReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx status and a truthy `success` field
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.body.get("success").is_some_and(is_truthy)
    }

    /// Server-provided `error` message, if a non-blank string
    pub fn server_error(&self) -> Option<&str> {
        self.body
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.trim().is_empty())
    }
}

/// JavaScript-style truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Transport to the enrollment endpoint
pub trait EnrollmentApi {
    /// Issue exactly one request. `Err` means transport or parse failure;
    /// any parsed response, successful or not, is `Ok`.
    async fn enroll(&self, request: &EnrollmentRequest) -> Result<EnrollmentReply>;
}

/// reqwest-backed client
#[derive(Debug, Clone)]
pub struct HttpEnrollmentClient {
    client: Client,
    endpoint: String,
}

impl HttpEnrollmentClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &EnrollmentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EnrollmentApi for HttpEnrollmentClient {
    async fn enroll(&self, request: &EnrollmentRequest) -> Result<EnrollmentReply> {
        info!(
            course_id = request.course_id,
            course_title = %request.course_title,
            "Submitting enrollment"
        );

        let resp = self.client.post(&self.endpoint).json(request).send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;
        debug!(status, body_len = text.len(), "Enrollment response received");

        let body: Value = serde_json::from_str(&text)?;
        Ok(EnrollmentReply::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_course;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let form = EnrollmentForm {
            student_name: "  Anna Petrova ".to_string(),
            student_email: "anna@example.com".to_string(),
            phone: String::new(),
        };
        let course = find_course(3).expect("course");
        let value = serde_json::to_value(EnrollmentRequest::new(&form, course)).expect("json");
        assert_eq!(
            value,
            json!({
                "student_name": "Anna Petrova",
                "student_email": "anna@example.com",
                "phone": "",
                "course_id": 3,
                "course_title": "UI/UX Design Principles",
            })
        );
    }

    #[test]
    fn test_phone_sent_trimmed() {
        let form = EnrollmentForm {
            student_name: "Anna".to_string(),
            student_email: "anna@example.com".to_string(),
            phone: " +7 900 123 45 67\t".to_string(),
        };
        let request = EnrollmentRequest::new(&form, find_course(1).expect("course"));
        assert_eq!(request.phone, "+7 900 123 45 67");
    }

    #[test]
    fn test_success_needs_status_and_flag() {
        assert!(EnrollmentReply::new(200, json!({"success": true})).is_success());
        assert!(EnrollmentReply::new(201, json!({"success": 1})).is_success());
        assert!(!EnrollmentReply::new(500, json!({"success": true})).is_success());
        assert!(!EnrollmentReply::new(200, json!({"success": false})).is_success());
        assert!(!EnrollmentReply::new(200, json!({"success": ""})).is_success());
        assert!(!EnrollmentReply::new(200, json!({})).is_success());
        assert!(!EnrollmentReply::new(200, json!([1, 2])).is_success());
    }

    #[test]
    fn test_server_error_message() {
        let reply = EnrollmentReply::new(400, json!({"error": "Invalid input", "details": []}));
        assert_eq!(reply.server_error(), Some("Invalid input"));
        assert_eq!(EnrollmentReply::new(500, json!({"error": 42})).server_error(), None);
        assert_eq!(EnrollmentReply::new(500, json!({"error": " "})).server_error(), None);
    }
}
