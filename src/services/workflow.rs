//! Enrollment Workflow
//!
//! validate → submit → report. One best-effort attempt per user action:
//!
//! ```text
//! begin_submission (validate, submitting = true)
//!       │
//!       ▼
//! send_enrollment (single request)
//!       │
//!       ▼
//! finish_submission (submitting = false; on success clear form + close dialog)
//! ```
//!
//! Each attempt is tagged with the dialog session it started in. A reply that
//! arrives after the dialog was closed or reopened only resets `submitting`.
//!
//! `submit_enrollment` runs all three against a borrowed `ViewState`. The GPUI
//! shell runs the phases separately so the request can await on the tokio
//! runtime without holding the entity.

use snafu::Snafu;
use tracing::{debug, info, warn};

use crate::i18n::Dictionary;
use crate::services::{EnrollmentApi, EnrollmentRequest};
use crate::state::{Toast, ViewState};

/// Why an enrollment attempt did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum EnrollmentError {
    /// No course targeted; the dialog cannot normally open without one
    #[snafu(display("No course selected"))]
    NoCourseSelected,

    /// Name or email blank after trimming. No request was made.
    #[snafu(display("Required fields are missing"))]
    Validation,

    /// A request for this form is already in flight
    #[snafu(display("Enrollment already in progress"))]
    InFlight,

    /// Transport failure, non-success status, failure flag or unparseable body
    #[snafu(display("Enrollment failed: {}", message.as_deref().unwrap_or("no details")))]
    Submission { message: Option<String> },
}

impl EnrollmentError {
    /// Localized text for the error notification. A server-provided message
    /// is shown verbatim.
    pub fn user_message(&self, dict: &Dictionary) -> String {
        match self {
            EnrollmentError::NoCourseSelected | EnrollmentError::Validation => {
                dict.get("enrollment.errorFields").to_string()
            }
            EnrollmentError::InFlight => dict.get("enrollment.errorBusy").to_string(),
            EnrollmentError::Submission { message: Some(message) } => message.clone(),
            EnrollmentError::Submission { message: None } => {
                dict.get("enrollment.errorFailed").to_string()
            }
        }
    }
}

/// Confirmation of a successful enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentReceipt {
    pub course_id: u32,
    /// Title exactly as sent to the endpoint
    pub course_title: String,
}

impl EnrollmentReceipt {
    /// "You have been enrolled in <title>"
    pub fn success_message(&self, dict: &Dictionary) -> String {
        format!("{} {}", dict.get("enrollment.successDesc"), self.course_title)
    }
}

/// Map an outcome to the notification shown to the user
pub fn outcome_toast(dict: &Dictionary, outcome: &Result<EnrollmentReceipt, EnrollmentError>) -> Toast {
    match outcome {
        Ok(receipt) => Toast::success(
            dict.get("enrollment.successTitle"),
            receipt.success_message(dict),
        ),
        Err(e) => Toast::error(dict.get("enrollment.errorTitle"), e.user_message(dict)),
    }
}

/// Check preconditions and mark the state as submitting.
///
/// Fails without touching `submitting` when a request is already in flight,
/// no course is selected, or a required field is blank.
pub fn begin_submission(state: &mut ViewState) -> Result<EnrollmentRequest, EnrollmentError> {
    if state.is_submitting() {
        return Err(EnrollmentError::InFlight);
    }
    let Some(course) = state.selected_course() else {
        return Err(EnrollmentError::NoCourseSelected);
    };
    if !state.form.has_required_fields() {
        return Err(EnrollmentError::Validation);
    }

    let request = EnrollmentRequest::new(&state.form, course);
    state.submitting = true;
    state.submission_session = Some(state.dialog_session());
    Ok(request)
}

/// Issue the single request and classify the reply
pub async fn send_enrollment<A: EnrollmentApi>(
    api: &A,
    request: &EnrollmentRequest,
) -> Result<EnrollmentReceipt, EnrollmentError> {
    match api.enroll(request).await {
        Ok(reply) if reply.is_success() => {
            info!(course_id = request.course_id, "Enrollment confirmed");
            Ok(EnrollmentReceipt {
                course_id: request.course_id,
                course_title: request.course_title.clone(),
            })
        }
        Ok(reply) => {
            warn!(
                status = reply.status,
                error = reply.server_error().unwrap_or_default(),
                "Enrollment rejected"
            );
            Err(EnrollmentError::Submission {
                message: reply.server_error().map(str::to_string),
            })
        }
        Err(e) => {
            warn!(error = %e, "Enrollment request failed");
            Err(EnrollmentError::Submission { message: None })
        }
    }
}

/// Apply the outcome: always clears `submitting`. A confirmed success clears
/// the form and closes the dialog, but only if the dialog is still in the
/// session the request was sent from.
pub fn finish_submission(state: &mut ViewState, outcome: &Result<EnrollmentReceipt, EnrollmentError>) {
    state.submitting = false;
    let sent_from = state.submission_session.take();
    let Ok(receipt) = outcome else {
        return;
    };

    let current = state.is_enrollment_dialog_open() && sent_from == Some(state.dialog_session());
    if current {
        state.close_enrollment_dialog();
    } else {
        debug!(course_id = receipt.course_id, "Late enrollment reply, dialog left as is");
    }
}

/// Resets `submitting` when dropped, including when the future is dropped
/// mid-request.
struct SubmittingGuard<'a> {
    state: &'a mut ViewState,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.submitting = false;
        self.state.submission_session = None;
    }
}

/// Validate, submit and apply the outcome to `state`.
///
/// Not reentrant for one form: a second call while one is in flight fails
/// with `InFlight`.
pub async fn submit_enrollment<A: EnrollmentApi>(
    state: &mut ViewState,
    api: &A,
) -> Result<EnrollmentReceipt, EnrollmentError> {
    let request = begin_submission(state)?;
    let guard = SubmittingGuard { state };

    let outcome = send_enrollment(api, &request).await;
    finish_submission(&mut *guard.state, &outcome);
    drop(guard);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_course;
    use crate::error::{Error, Result};
    use crate::i18n::{get_dictionary, Language};
    use crate::services::EnrollmentReply;
    use crate::state::{EnrollmentForm, ToastKind};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    enum Canned {
        Reply(u16, Value),
        Transport,
    }

    struct FakeApi {
        canned: Canned,
        calls: Mutex<Vec<EnrollmentRequest>>,
    }

    impl FakeApi {
        fn replying(status: u16, body: Value) -> Self {
            Self {
                canned: Canned::Reply(status, body),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                canned: Canned::Transport,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<EnrollmentRequest> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }
    }

    impl EnrollmentApi for FakeApi {
        async fn enroll(&self, request: &EnrollmentRequest) -> Result<EnrollmentReply> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(request.clone());
            }
            match &self.canned {
                Canned::Reply(status, body) => Ok(EnrollmentReply::new(*status, body.clone())),
                Canned::Transport => Err(Error::Io {
                    source: std::io::Error::new(
                        std::io::ErrorKind::ConnectionRefused,
                        "connection refused",
                    ),
                }),
            }
        }
    }

    fn filled_form() -> EnrollmentForm {
        EnrollmentForm {
            student_name: "Dmitry Ivanov".to_string(),
            student_email: "dmitry@example.com".to_string(),
            phone: "+7 900 000 00 00".to_string(),
        }
    }

    fn open_state(course_id: u32, form: EnrollmentForm) -> ViewState {
        let mut state = ViewState::new();
        state.select_course(find_course(course_id).expect("course").clone());
        assert!(state.open_enrollment_dialog());
        state.form = form;
        state
    }

    #[tokio::test]
    async fn test_blank_name_makes_no_call() {
        let api = FakeApi::replying(200, json!({"success": true}));
        let mut form = filled_form();
        form.student_name = "   ".to_string();
        let mut state = open_state(1, form.clone());

        let outcome = submit_enrollment(&mut state, &api).await;

        assert_eq!(outcome, Err(EnrollmentError::Validation));
        assert!(api.calls().is_empty());
        assert_eq!(state.form, form);
        assert!(state.is_enrollment_dialog_open());
        assert!(!state.is_submitting());
    }

    #[tokio::test]
    async fn test_blank_email_makes_no_call() {
        let api = FakeApi::replying(200, json!({"success": true}));
        let mut form = filled_form();
        form.student_email.clear();
        let mut state = open_state(1, form);

        assert_eq!(
            submit_enrollment(&mut state, &api).await,
            Err(EnrollmentError::Validation)
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_no_course_is_precondition_error() {
        let api = FakeApi::replying(200, json!({"success": true}));
        let mut state = ViewState::new();
        state.form = filled_form();

        assert_eq!(
            submit_enrollment(&mut state, &api).await,
            Err(EnrollmentError::NoCourseSelected)
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success_resets_form_and_closes_dialog() {
        let api = FakeApi::replying(200, json!({"success": true, "message": "ok"}));
        let mut state = open_state(2, filled_form());

        let outcome = submit_enrollment(&mut state, &api).await;

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].course_id, 2);
        assert_eq!(calls[0].course_title, "React Advanced Patterns");
        assert_eq!(calls[0].phone, "+7 900 000 00 00");

        let receipt = outcome.clone().expect("success");
        assert_eq!(receipt.course_title, calls[0].course_title);
        assert!(state.form.is_empty());
        assert!(!state.is_enrollment_dialog_open());
        assert!(!state.is_submitting());

        let toast = outcome_toast(&get_dictionary(Language::En), &outcome);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Success!");
        assert_eq!(
            toast.description,
            "You have been enrolled in React Advanced Patterns"
        );
    }

    #[tokio::test]
    async fn test_server_failure_surfaces_message_and_keeps_form() {
        let api = FakeApi::replying(200, json!({"success": false, "error": "Course full"}));
        let form = filled_form();
        let mut state = open_state(1, form.clone());

        let outcome = submit_enrollment(&mut state, &api).await;

        assert_eq!(
            outcome,
            Err(EnrollmentError::Submission {
                message: Some("Course full".to_string())
            })
        );
        assert_eq!(state.form, form);
        assert!(state.is_enrollment_dialog_open());
        assert!(!state.is_submitting());

        let toast = outcome_toast(&get_dictionary(Language::Ru), &outcome);
        assert_eq!(toast.description, "Course full");
        assert_eq!(toast.title, "Ошибка");
    }

    #[tokio::test]
    async fn test_error_status_without_message_uses_fallback() {
        let api = FakeApi::replying(500, json!({"success": true}));
        let mut state = open_state(1, filled_form());

        let outcome = submit_enrollment(&mut state, &api).await;

        assert_eq!(outcome, Err(EnrollmentError::Submission { message: None }));
        let toast = outcome_toast(&get_dictionary(Language::En), &outcome);
        assert_eq!(toast.description, "Failed to enroll. Please try again.");
    }

    #[tokio::test]
    async fn test_transport_failure_uses_localized_fallback() {
        let api = FakeApi::unreachable();
        let form = filled_form();
        let mut state = open_state(3, form.clone());

        let outcome = submit_enrollment(&mut state, &api).await;

        assert_eq!(api.calls().len(), 1);
        assert!(!state.is_submitting());
        assert_eq!(state.form, form);
        let ru = get_dictionary(Language::Ru);
        assert_eq!(
            outcome_toast(&ru, &outcome).description,
            "Не удалось записаться. Попробуйте еще раз."
        );
    }

    #[test]
    fn test_phases_track_submitting() {
        let mut state = open_state(1, filled_form());

        let request = begin_submission(&mut state).expect("valid");
        assert!(state.is_submitting());
        assert_eq!(request.student_name, "Dmitry Ivanov");

        assert_eq!(begin_submission(&mut state), Err(EnrollmentError::InFlight));
        assert!(state.is_submitting());

        let failed = Err(EnrollmentError::Submission { message: None });
        finish_submission(&mut state, &failed);
        assert!(!state.is_submitting());
        assert!(state.is_enrollment_dialog_open());
        assert!(!state.form.is_empty());
    }

    #[test]
    fn test_late_success_leaves_reopened_dialog_alone() {
        let mut state = open_state(1, filled_form());
        let request = begin_submission(&mut state).expect("valid");

        // User gives up on course 1 and starts typing for course 2
        state.close_enrollment_dialog();
        state.select_course(find_course(2).expect("course").clone());
        assert!(state.open_enrollment_dialog());
        state.form.student_name = "Typed for course two".to_string();

        let late = Ok(EnrollmentReceipt {
            course_id: request.course_id,
            course_title: request.course_title.clone(),
        });
        finish_submission(&mut state, &late);

        assert!(!state.is_submitting());
        assert!(state.is_enrollment_dialog_open());
        assert_eq!(state.form.student_name, "Typed for course two");
        assert_eq!(state.selected_course().map(|c| c.id), Some(2));

        // The new session submits normally afterwards
        state.form = filled_form();
        let request = begin_submission(&mut state).expect("valid");
        assert_eq!(request.course_id, 2);
        let on_time = Ok(EnrollmentReceipt {
            course_id: request.course_id,
            course_title: request.course_title,
        });
        finish_submission(&mut state, &on_time);
        assert!(!state.is_enrollment_dialog_open());
        assert!(state.form.is_empty());
    }

    #[test]
    fn test_late_success_after_close_keeps_dialog_closed() {
        let mut state = open_state(1, filled_form());
        let request = begin_submission(&mut state).expect("valid");
        state.close_enrollment_dialog();

        let late = Ok(EnrollmentReceipt {
            course_id: request.course_id,
            course_title: request.course_title,
        });
        finish_submission(&mut state, &late);

        assert!(!state.is_submitting());
        assert!(!state.is_enrollment_dialog_open());
        assert!(state.open_enrollment_dialog());
        assert!(state.form.is_empty());
    }

    #[test]
    fn test_validation_message_localized() {
        let en = get_dictionary(Language::En);
        assert_eq!(
            EnrollmentError::Validation.user_message(&en),
            "Please fill in all required fields"
        );
        assert_eq!(
            EnrollmentError::NoCourseSelected.user_message(&en),
            EnrollmentError::Validation.user_message(&en)
        );
    }
}
