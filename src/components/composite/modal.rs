//! Modal Component
//!
//! Centered dialog over a dimmed backdrop. Clicking the backdrop or the close
//! glyph runs the close handler.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::BrandColors;

type CloseHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// Modal component
#[derive(IntoElement)]
pub struct Modal {
    id: SharedString,
    title: SharedString,
    width: f32,
    children: Vec<AnyElement>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    /// Create a new modal; `id` must be unique among open modals
    pub fn new(id: impl Into<SharedString>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            width: 480.0,
            children: Vec::new(),
            on_close: None,
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Add a child element
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    /// Set the close handler
    pub fn on_close(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl RenderOnce for Modal {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let backdrop_close = self.on_close.clone();
        let button_close = self.on_close;

        // Backdrop
        div()
            .id(SharedString::from(format!("{}-backdrop", self.id)))
            .absolute()
            .inset_0()
            .bg(BrandColors::backdrop())
            .flex()
            .items_center()
            .justify_center()
            .when_some(backdrop_close, |el, handler| {
                el.on_click(move |_event: &ClickEvent, window, cx| handler(window, cx))
            })
            .child(
                // Modal container; swallows clicks so they don't reach the backdrop
                div()
                    .id(self.id.clone())
                    .bg(BrandColors::card_bg())
                    .rounded_lg()
                    .shadow_lg()
                    .w(px(self.width))
                    .flex()
                    .flex_col()
                    .on_click(|_event: &ClickEvent, _window, cx| cx.stop_propagation())
                    // Header
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .border_b_1()
                            .border_color(BrandColors::border())
                            .flex()
                            .items_center()
                            .justify_between()
                            .child(
                                div()
                                    .text_size(px(18.0))
                                    .font_weight(gpui::FontWeight::SEMIBOLD)
                                    .text_color(BrandColors::text_primary())
                                    .child(self.title),
                            )
                            .when_some(button_close, |el, handler| {
                                el.child(
                                    div()
                                        .id(SharedString::from(format!("{}-close", self.id)))
                                        .size(px(24.0))
                                        .rounded_sm()
                                        .flex()
                                        .items_center()
                                        .justify_center()
                                        .text_color(BrandColors::text_muted())
                                        .text_size(px(16.0))
                                        .cursor_pointer()
                                        .hover(|s| s.bg(BrandColors::hover_bg()))
                                        .on_click(move |_event: &ClickEvent, window, cx| {
                                            handler(window, cx);
                                        })
                                        .child("×"),
                                )
                            }),
                    )
                    // Content
                    .child(
                        div()
                            .px_6()
                            .py_4()
                            .flex()
                            .flex_col()
                            .gap_4()
                            .children(self.children),
                    ),
            )
    }
}
