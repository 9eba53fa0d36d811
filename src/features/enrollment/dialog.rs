//! Enrollment Dialog
//!
//! Created when the dialog opens and dropped when it closes, so the inputs
//! always start from the (empty) form.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};

use crate::app::entities::AppEntities;
use crate::components::composite::modal::Modal;
use crate::components::primitives::button::Button;
use crate::features::enrollment::controller::{EnrollmentController, FormField};
use crate::i18n::Dictionary;
use crate::theme::colors::BrandColors;

/// Enrollment dialog view
pub struct EnrollmentDialog {
    entities: AppEntities,
    controller: EnrollmentController,
    name_input: Entity<InputState>,
    email_input: Entity<InputState>,
    phone_input: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl EnrollmentDialog {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let controller = EnrollmentController::new(entities.clone());
        let dict = entities.i18n.read(cx).dictionary();

        let name_input = cx.new(|cx| {
            InputState::new(window, cx).placeholder(dict.get("enrollment.name"))
        });
        let email_input = cx.new(|cx| {
            InputState::new(window, cx).placeholder(dict.get("enrollment.email"))
        });
        let phone_input = cx.new(|cx| {
            InputState::new(window, cx).placeholder(dict.get("enrollment.phone"))
        });

        let mut subscriptions = Vec::new();
        for (input, field) in [
            (&name_input, FormField::Name),
            (&email_input, FormField::Email),
            (&phone_input, FormField::Phone),
        ] {
            subscriptions.push(cx.subscribe(input, move |this, state, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let value = state.read(cx).value().to_string();
                    this.controller.update_field(field, value, cx);
                }
            }));
        }

        subscriptions.push(cx.observe(&entities.i18n, |_this, _, cx| cx.notify()));
        subscriptions.push(cx.observe(&entities.view, |_this, _, cx| cx.notify()));

        Self {
            entities,
            controller,
            name_input,
            email_input,
            phone_input,
            _subscriptions: subscriptions,
        }
    }

    fn render_field(
        label: &'static str,
        required: bool,
        input: &Entity<InputState>,
    ) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(BrandColors::text_secondary())
                    .child(if required {
                        SharedString::from(format!("{label} *"))
                    } else {
                        SharedString::from(label)
                    }),
            )
            .child(Input::new(input))
    }

    fn title(dict: &Dictionary, course_title: Option<&'static str>) -> String {
        match course_title {
            Some(key) => dict.format("enrollment.dialogTitle", &[("course", dict.get(key))]),
            None => dict.get("courses.enrollNow").to_string(),
        }
    }
}

impl Render for EnrollmentDialog {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dict = self.entities.i18n.read(cx).dictionary();
        let view = self.entities.view.read(cx);
        let submitting = view.is_submitting();
        let title = Self::title(&dict, view.selected_course().map(|c| c.title_key));

        let close = self.controller.clone();
        let cancel = self.controller.clone();
        let submit = self.controller.clone();

        Modal::new("enrollment-dialog", title)
            .on_close(move |_window, cx| close.cancel(cx))
            .child(Self::render_field(dict.get("enrollment.name"), true, &self.name_input))
            .child(Self::render_field(dict.get("enrollment.email"), true, &self.email_input))
            .child(Self::render_field(dict.get("enrollment.phone"), false, &self.phone_input))
            .child(
                div()
                    .pt_2()
                    .flex()
                    .justify_end()
                    .gap_2()
                    .child(
                        Button::outline("enrollment-cancel", dict.get("enrollment.cancel"))
                            .on_click(move |_event: &ClickEvent, _window, cx| cancel.cancel(cx)),
                    )
                    .child(
                        Button::primary("enrollment-submit", dict.get("enrollment.enroll"))
                            .loading(submitting.then(|| dict.get("enrollment.submitting")))
                            .on_click(move |_event: &ClickEvent, _window, cx| submit.submit(cx)),
                    ),
            )
    }
}
