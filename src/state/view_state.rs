//! ViewState - Tab, Course Selection and Dialog State
//!
//! Plain state with total transitions. The GPUI shell wraps it in an
//! `Entity` and calls `cx.notify()` after each transition.

use std::fmt;
use std::sync::Arc;

use crate::domain::Course;
use crate::services::VisibilityObserver;
use crate::state::EnrollmentForm;

/// Content sections of the single-page view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentTab {
    #[default]
    Home,
    Courses,
    Schedule,
    Reviews,
}

impl ContentTab {
    /// Get the translation key for the tab title
    pub fn title_key(&self) -> &'static str {
        match self {
            ContentTab::Home => "nav.home",
            ContentTab::Courses => "nav.courses",
            ContentTab::Schedule => "nav.schedule",
            ContentTab::Reviews => "nav.reviews",
        }
    }

    /// Tabs in header order
    pub fn all() -> &'static [ContentTab] {
        &[
            ContentTab::Home,
            ContentTab::Schedule,
            ContentTab::Reviews,
            ContentTab::Courses,
        ]
    }
}

/// In-memory record of which tab, course and dialogs are active
#[derive(Default)]
pub struct ViewState {
    active_tab: ContentTab,
    selected_course: Option<Course>,
    enrollment_dialog_open: bool,
    intro_dialog_open: bool,
    /// Set only while an enrollment request is in flight
    pub(crate) submitting: bool,
    /// Bumped on every dialog open and close; a reply only applies to the
    /// dialog session it was sent from
    dialog_session: u64,
    /// Dialog session of the request in flight
    pub(crate) submission_session: Option<u64>,
    /// Form owned by the enrollment dialog
    pub form: EnrollmentForm,
    observer: Option<Arc<dyn VisibilityObserver>>,
}

impl fmt::Debug for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewState")
            .field("active_tab", &self.active_tab)
            .field("selected_course", &self.selected_course.as_ref().map(|c| c.id))
            .field("enrollment_dialog_open", &self.enrollment_dialog_open)
            .field("intro_dialog_open", &self.intro_dialog_open)
            .field("submitting", &self.submitting)
            .field("dialog_session", &self.dialog_session)
            .finish_non_exhaustive()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a visibility observer, notified on every tab switch
    pub fn with_observer(mut self, observer: Arc<dyn VisibilityObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    // ==================== Getters ====================

    pub fn active_tab(&self) -> ContentTab {
        self.active_tab
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_course.as_ref()
    }

    pub fn is_enrollment_dialog_open(&self) -> bool {
        self.enrollment_dialog_open
    }

    pub fn is_intro_dialog_open(&self) -> bool {
        self.intro_dialog_open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Identifies the current open/close cycle of the enrollment dialog
    pub fn dialog_session(&self) -> u64 {
        self.dialog_session
    }

    // ==================== Transitions ====================

    /// Show a content section
    pub fn select_tab(&mut self, tab: ContentTab) {
        self.active_tab = tab;
        if let Some(observer) = &self.observer {
            observer.section_shown(tab);
        }
    }

    /// Target a course for the intro or enrollment dialog
    pub fn select_course(&mut self, course: Course) {
        self.selected_course = Some(course);
    }

    /// Open the enrollment dialog for the selected course.
    ///
    /// Returns `false` and stays closed when no course is selected.
    pub fn open_enrollment_dialog(&mut self) -> bool {
        if self.selected_course.is_none() {
            tracing::warn!("Enrollment dialog requested without a selected course");
            return false;
        }
        if !self.enrollment_dialog_open {
            self.enrollment_dialog_open = true;
            self.dialog_session += 1;
        }
        true
    }

    /// Close the enrollment dialog and reset the form. The selection stays.
    pub fn close_enrollment_dialog(&mut self) {
        if self.enrollment_dialog_open {
            self.dialog_session += 1;
        }
        self.enrollment_dialog_open = false;
        self.form.clear();
    }

    /// Open the intro-video dialog for the selected course
    pub fn open_intro_dialog(&mut self) -> bool {
        if self.selected_course.is_none() {
            return false;
        }
        self.intro_dialog_open = true;
        true
    }

    pub fn close_intro_dialog(&mut self) {
        self.intro_dialog_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{courses, find_course};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        shown: Mutex<Vec<ContentTab>>,
    }

    impl VisibilityObserver for RecordingObserver {
        fn section_shown(&self, tab: ContentTab) {
            if let Ok(mut shown) = self.shown.lock() {
                shown.push(tab);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.active_tab(), ContentTab::Home);
        assert!(state.selected_course().is_none());
        assert!(!state.is_enrollment_dialog_open());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_select_tab_notifies_observer() {
        let observer = Arc::new(RecordingObserver::default());
        let mut state = ViewState::new().with_observer(observer.clone());

        state.select_tab(ContentTab::Schedule);
        state.select_tab(ContentTab::Courses);

        assert_eq!(state.active_tab(), ContentTab::Courses);
        let shown = observer.shown.lock().expect("lock");
        assert_eq!(*shown, vec![ContentTab::Schedule, ContentTab::Courses]);
    }

    #[test]
    fn test_open_requires_selection() {
        let mut state = ViewState::new();
        assert!(!state.open_enrollment_dialog());
        assert!(!state.is_enrollment_dialog_open());
        assert!(!state.open_intro_dialog());
    }

    #[test]
    fn test_open_close_resets_form_keeps_selection() {
        let course = find_course(1).expect("course").clone();
        let mut state = ViewState::new();
        state.select_course(course.clone());
        assert!(state.open_enrollment_dialog());

        state.form.student_name = "Anna".to_string();
        state.form.student_email = "anna@example.com".to_string();
        state.form.phone = "+7 900".to_string();
        state.close_enrollment_dialog();

        assert!(!state.is_enrollment_dialog_open());
        assert!(state.form.is_empty());
        assert_eq!(state.selected_course(), Some(&course));
    }

    #[test]
    fn test_reopen_starts_new_dialog_session() {
        let mut state = ViewState::new();
        state.select_course(courses()[0].clone());
        assert!(state.open_enrollment_dialog());
        let first = state.dialog_session();

        // Opening twice is the same session
        assert!(state.open_enrollment_dialog());
        assert_eq!(state.dialog_session(), first);

        state.close_enrollment_dialog();
        assert!(state.open_enrollment_dialog());
        assert_ne!(state.dialog_session(), first);
    }

    #[test]
    fn test_dialog_flags_independent() {
        let mut state = ViewState::new();
        state.select_course(courses()[2].clone());
        assert!(state.open_intro_dialog());
        assert!(state.open_enrollment_dialog());
        state.close_intro_dialog();
        assert!(!state.is_intro_dialog_open());
        assert!(state.is_enrollment_dialog_open());
    }

    #[test]
    fn test_tab_order() {
        assert_eq!(ContentTab::all().len(), 4);
        assert_eq!(ContentTab::all()[0], ContentTab::Home);
    }
}
