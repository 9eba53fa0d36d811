//! Workspace - Main Shell
//!
//! The workspace holds the header, the active section, the footer, the
//! dialogs and the toast stack. Dialog views exist only while open.

use gpui::{
    div, prelude::*, AnyElement, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::toast_stack::ToastStack;
use crate::components::layout::footer::Footer;
use crate::components::layout::header::Header;
use crate::features::courses::controller::CoursesController;
use crate::features::courses::intro_dialog::IntroDialog;
use crate::features::courses::page::CoursesPage;
use crate::features::enrollment::dialog::EnrollmentDialog;
use crate::features::home::page::HomePage;
use crate::features::reviews::page::ReviewsPage;
use crate::features::schedule::page::SchedulePage;
use crate::state::ContentTab;
use crate::theme::colors::BrandColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    toast_stack: Entity<ToastStack>,
    home_page: Entity<HomePage>,
    courses_page: Entity<CoursesPage>,
    schedule_page: Entity<SchedulePage>,
    reviews_page: Entity<ReviewsPage>,
    enrollment_dialog: Option<Entity<EnrollmentDialog>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let toast_stack = cx.new(|cx| ToastStack::new(entities.clone(), cx));

        let home_page = cx.new(|cx| HomePage::new(entities.clone(), cx));
        let courses_page = cx.new(|cx| CoursesPage::new(entities.clone(), cx));
        let schedule_page = cx.new(|cx| SchedulePage::new(entities.clone(), cx));
        let reviews_page = cx.new(|cx| ReviewsPage::new(entities.clone(), cx));

        // Observe view state for tab and dialog changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            header,
            toast_stack,
            home_page,
            courses_page,
            schedule_page,
            reviews_page,
            enrollment_dialog: None,
        }
    }

    fn page(&self, tab: ContentTab) -> AnyElement {
        match tab {
            ContentTab::Home => self.home_page.clone().into_any_element(),
            ContentTab::Courses => self.courses_page.clone().into_any_element(),
            ContentTab::Schedule => self.schedule_page.clone().into_any_element(),
            ContentTab::Reviews => self.reviews_page.clone().into_any_element(),
        }
    }

    /// Create the enrollment dialog on open, drop it on close
    fn sync_enrollment_dialog(&mut self, open: bool, window: &mut Window, cx: &mut Context<Self>) {
        match (open, self.enrollment_dialog.is_some()) {
            (true, false) => {
                let entities = self.entities.clone();
                self.enrollment_dialog =
                    Some(cx.new(|cx| EnrollmentDialog::new(entities, window, cx)));
            }
            (false, true) => self.enrollment_dialog = None,
            _ => {}
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.entities.view.read(cx);
        let active_tab = view.active_tab();
        let enrollment_open = view.is_enrollment_dialog_open();
        let intro_course = view
            .is_intro_dialog_open()
            .then(|| view.selected_course().cloned())
            .flatten();
        let dict = self.entities.i18n.read(cx).dictionary();

        self.sync_enrollment_dialog(enrollment_open, window, cx);

        div()
            .size_full()
            .relative()
            .flex()
            .flex_col()
            .bg(BrandColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .id("workspace-content")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(self.page(active_tab))
                    .child(Footer::new(dict)),
            )
            .when_some(intro_course, |el, course| {
                let controller = CoursesController::new(self.entities.clone());
                el.child(IntroDialog::new(course, dict, controller))
            })
            .when_some(self.enrollment_dialog.clone(), |el, dialog| el.child(dialog))
            .child(self.toast_stack.clone())
    }
}
