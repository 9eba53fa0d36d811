//! Courses Controller
//!
//! Course selection and the intro / enrollment dialog transitions.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::Course;
use crate::state::ContentTab;

/// Courses page controller
#[derive(Clone)]
pub struct CoursesController {
    entities: AppEntities,
}

impl CoursesController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Switch to a content section
    pub fn show_tab(&self, tab: ContentTab, cx: &mut App) {
        self.entities.view.update(cx, |view, cx| {
            view.select_tab(tab);
            cx.notify();
        });
    }

    /// Target `course` and open its intro video
    pub fn watch_intro(&self, course: &Course, cx: &mut App) {
        self.entities.view.update(cx, |view, cx| {
            view.select_course(course.clone());
            view.open_intro_dialog();
            cx.notify();
        });
    }

    pub fn close_intro(&self, cx: &mut App) {
        self.entities.view.update(cx, |view, cx| {
            view.close_intro_dialog();
            cx.notify();
        });
    }

    /// Target `course` and open the enrollment dialog
    pub fn enroll(&self, course: &Course, cx: &mut App) {
        self.entities.view.update(cx, |view, cx| {
            view.close_intro_dialog();
            view.select_course(course.clone());
            view.open_enrollment_dialog();
            cx.notify();
        });
    }

    /// "Enroll now" from inside the intro dialog
    pub fn enroll_from_intro(&self, cx: &mut App) {
        self.entities.view.update(cx, |view, cx| {
            view.close_intro_dialog();
            view.open_enrollment_dialog();
            cx.notify();
        });
    }
}
