//! Enrollment Controller
//!
//! Runs the submission phases against the shared `ViewState` entity. The
//! request itself runs on tokio; the outcome is applied through a weak handle
//! so a late reply after the entity is gone is dropped.

use gpui::App;

use crate::app::entities::{AppEntities, EnrollmentService};
use crate::services::{
    begin_submission, finish_submission, outcome_toast, run_in_tokio, send_enrollment,
};
use crate::state::EnrollmentForm;

/// Editable fields of the enrollment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

impl FormField {
    fn slot(self, form: &mut EnrollmentForm) -> &mut String {
        match self {
            FormField::Name => &mut form.student_name,
            FormField::Email => &mut form.student_email,
            FormField::Phone => &mut form.phone,
        }
    }
}

/// Enrollment dialog controller
#[derive(Clone)]
pub struct EnrollmentController {
    entities: AppEntities,
}

impl EnrollmentController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Mirror an input's value into the form
    pub fn update_field(&self, field: FormField, value: String, cx: &mut App) {
        self.entities.view.update(cx, |view, _cx| {
            *field.slot(&mut view.form) = value;
        });
    }

    /// Close the dialog and discard the form
    pub fn cancel(&self, cx: &mut App) {
        self.entities.view.update(cx, |view, cx| {
            view.close_enrollment_dialog();
            cx.notify();
        });
    }

    /// Validate, send and report. Validation failures are reported without
    /// a request.
    pub fn submit(&self, cx: &mut App) {
        let client = cx.try_global::<EnrollmentService>().map(EnrollmentService::client);
        let Some(client) = client else {
            tracing::error!("Enrollment service not initialized");
            return;
        };

        let begun = self.entities.view.update(cx, |view, cx| {
            let begun = begin_submission(view);
            cx.notify();
            begun
        });

        let request = match begun {
            Ok(request) => request,
            Err(e) => {
                tracing::info!("Enrollment not sent: {}", e);
                let dict = self.entities.i18n.read(cx).dictionary();
                self.entities.show_toast(outcome_toast(&dict, &Err(e)), cx);
                return;
            }
        };

        let view = self.entities.view.downgrade();
        let entities = self.entities.clone();

        cx.spawn(async move |cx| {
            let outcome =
                run_in_tokio(async move { send_enrollment(client.as_ref(), &request).await })
                    .await;

            let applied = view.update(cx, |view, cx| {
                finish_submission(view, &outcome);
                cx.notify();
            });
            if applied.is_err() {
                tracing::debug!("View released before enrollment finished, ignoring reply");
                return;
            }

            let shown = cx.update(|cx| {
                let dict = entities.i18n.read(cx).dictionary();
                entities.show_toast(outcome_toast(&dict, &outcome), cx);
            });
            if let Err(e) = shown {
                tracing::debug!("Could not show enrollment toast: {}", e);
            }
        })
        .detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_field_slots() {
        let mut form = EnrollmentForm::default();
        *FormField::Name.slot(&mut form) = "Ann".to_string();
        *FormField::Email.slot(&mut form) = "ann@example.com".to_string();
        *FormField::Phone.slot(&mut form) = "+1".to_string();

        assert_eq!(form.student_name, "Ann");
        assert_eq!(form.student_email, "ann@example.com");
        assert_eq!(form.phone, "+1");
    }
}
