//! Toast Stack
//!
//! Bottom-right column of notifications, newest at the bottom.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::state::ToastEntry;
use crate::theme::colors::BrandColors;

/// Toast stack view
pub struct ToastStack {
    entities: AppEntities,
}

impl ToastStack {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.toasts, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_toast(&self, entry: &ToastEntry) -> impl IntoElement {
        let accent = if entry.toast.is_error() {
            BrandColors::danger()
        } else {
            BrandColors::success()
        };

        let id = entry.id;
        let toasts = self.entities.toasts.clone();

        div()
            .id(("toast", id as usize))
            .w(px(340.0))
            .bg(BrandColors::card_bg())
            .rounded_md()
            .shadow_lg()
            .border_l_4()
            .border_color(accent)
            .px_4()
            .py_3()
            .flex()
            .items_start()
            .justify_between()
            .gap_3()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(14.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(accent)
                            .child(entry.toast.title.clone()),
                    )
                    .child(
                        div()
                            .text_size(px(13.0))
                            .text_color(BrandColors::text_secondary())
                            .child(entry.toast.description.clone()),
                    ),
            )
            .child(
                div()
                    .id(("toast-dismiss", id as usize))
                    .text_color(BrandColors::text_muted())
                    .cursor_pointer()
                    .hover(|s| s.text_color(BrandColors::text_primary()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        toasts.update(cx, |toasts, cx| {
                            toasts.dismiss(id);
                            cx.notify();
                        });
                    })
                    .child("×"),
            )
    }
}

impl Render for ToastStack {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toasts: Vec<_> = self
            .entities
            .toasts
            .read(cx)
            .entries()
            .map(|entry| self.render_toast(entry).into_any_element())
            .collect();

        div()
            .absolute()
            .bottom_4()
            .right_4()
            .flex()
            .flex_col()
            .gap_2()
            .children(toasts)
    }
}
