//! Courses Page
//!
//! Catalog cards with level, duration, rating and student count.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::domain::{courses, Course, CourseLevel};
use crate::features::courses::controller::CoursesController;
use crate::i18n::Dictionary;
use crate::theme::colors::BrandColors;

const CARD_WIDTH: f32 = 360.0;

/// Courses page component
pub struct CoursesPage {
    entities: AppEntities,
    controller: CoursesController,
}

impl CoursesPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = CoursesController::new(entities.clone());

        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            controller,
        }
    }

    fn cover_color(level: CourseLevel) -> gpui::Rgba {
        match level {
            CourseLevel::Beginner => BrandColors::brand_cyan(),
            CourseLevel::Intermediate => BrandColors::brand_pink(),
            CourseLevel::Advanced => BrandColors::primary(),
        }
    }

    fn render_card(&self, course: &'static Course, dict: Dictionary) -> impl IntoElement {
        let watch = self.controller.clone();
        let enroll = self.controller.clone();
        let students = course.student_count.to_string();
        let weeks = course.duration_weeks.to_string();

        div()
            .w(px(CARD_WIDTH))
            .bg(BrandColors::card_bg())
            .rounded_lg()
            .shadow_md()
            .overflow_hidden()
            .flex()
            .flex_col()
            // Cover
            .child(
                div()
                    .h(px(140.0))
                    .w_full()
                    .bg(Self::cover_color(course.level))
                    .p_3()
                    .flex()
                    .justify_between()
                    .items_start()
                    .child(Badge::new(dict.get(course.level.label_key())))
                    .child(Badge::new(dict.format("courses.weeks", &[("count", weeks.as_str())]))),
            )
            // Body
            .child(
                div()
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(18.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(BrandColors::text_primary())
                            .child(dict.get(course.title_key)),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(BrandColors::text_secondary())
                            .child(dict.get(course.description_key)),
                    )
                    .child(
                        div()
                            .flex()
                            .justify_between()
                            .text_size(px(13.0))
                            .child(
                                div()
                                    .text_color(BrandColors::star())
                                    .child(format!("★ {}", course.rating_label())),
                            )
                            .child(
                                div()
                                    .text_color(BrandColors::text_muted())
                                    .child(dict.format("courses.students", &[("count", students.as_str())])),
                            ),
                    )
                    .child(
                        div()
                            .pt_2()
                            .flex()
                            .gap_2()
                            .child(
                                Button::outline(("course-intro", course.id as usize), dict.get("courses.watchIntro"))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        watch.watch_intro(course, cx)
                                    }),
                            )
                            .child(
                                Button::primary(("course-enroll", course.id as usize), dict.get("courses.enrollNow"))
                                    .on_click(move |_event: &ClickEvent, _window, cx| {
                                        enroll.enroll(course, cx)
                                    }),
                            ),
                    ),
            )
    }
}

impl Render for CoursesPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dict = self.entities.i18n.read(cx).dictionary();

        div()
            .w_full()
            .p_8()
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .text_size(px(30.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(BrandColors::text_primary())
                    .child(dict.get("courses.title")),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap_6()
                    .children(courses().iter().map(|course| self.render_card(course, dict))),
            )
    }
}
