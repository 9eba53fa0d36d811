//! Intro Video Dialog

use gpui::{
    div, px, App, ClickEvent, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::components::composite::modal::Modal;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::Course;
use crate::features::courses::controller::CoursesController;
use crate::i18n::Dictionary;
use crate::theme::colors::BrandColors;

/// Intro-video dialog for the selected course
#[derive(IntoElement)]
pub struct IntroDialog {
    course: Course,
    dict: Dictionary,
    controller: CoursesController,
}

impl IntroDialog {
    pub fn new(course: Course, dict: Dictionary, controller: CoursesController) -> Self {
        Self {
            course,
            dict,
            controller,
        }
    }
}

impl RenderOnce for IntroDialog {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let dict = self.dict;
        let title = format!(
            "{}: {}",
            dict.get("courses.introTitle"),
            dict.get(self.course.title_key)
        );

        let close = self.controller.clone();
        let enroll = self.controller;

        Modal::new("intro-dialog", title)
            .width(640.0)
            .on_close(move |_window, cx| close.close_intro(cx))
            .child(
                // Video placeholder: the player is external, show where it lives
                div()
                    .h(px(300.0))
                    .w_full()
                    .rounded_md()
                    .bg(BrandColors::text_primary())
                    .flex()
                    .flex_col()
                    .items_center()
                    .justify_center()
                    .gap_2()
                    .child(
                        div()
                            .text_size(px(40.0))
                            .text_color(BrandColors::text_on_brand())
                            .child("▶"),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BrandColors::text_muted())
                            .child(dict.get("courses.introVideo")),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BrandColors::brand_cyan())
                            .child(self.course.intro_video_url),
                    ),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(BrandColors::text_secondary())
                    .child(dict.get(self.course.description_key)),
            )
            .child(
                div().flex().justify_end().child(
                    Button::primary("intro-enroll", dict.get("courses.enrollNow"))
                        .size(ButtonSize::Large)
                        .on_click(move |_event: &ClickEvent, _window, cx| {
                            enroll.enroll_from_intro(cx)
                        }),
                ),
            )
    }
}
