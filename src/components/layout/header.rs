//! Header Component
//!
//! Brand, section tabs and the language switcher.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::constants::HEADER_HEIGHT;
use crate::theme::colors::BrandColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe tab changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let i18n = self.entities.i18n.read(cx);
        let dict = i18n.dictionary();
        let language = i18n.language();
        let active = self.entities.view.read(cx).active_tab();

        let tabs = crate::state::ContentTab::all().iter().map(|&tab| {
            let view = self.entities.view.clone();
            Button::ghost(("nav-tab", tab as usize), dict.get(tab.title_key()))
                .active(tab == active)
                .on_click(move |_event: &ClickEvent, _window, cx| {
                    view.update(cx, |view, cx| {
                        view.select_tab(tab);
                        cx.notify();
                    });
                })
        });

        let i18n_entity = self.entities.i18n.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(BrandColors::header_bg())
            .border_b_1()
            .border_color(BrandColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            // Left side: brand
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(36.0))
                            .rounded_md()
                            .bg(BrandColors::primary())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(BrandColors::text_on_brand())
                            .font_weight(gpui::FontWeight::BOLD)
                            .child("OL"),
                    )
                    .child(
                        div()
                            .text_color(BrandColors::text_primary())
                            .text_size(px(20.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .child(dict.get("app.brand")),
                    ),
            )
            // Center: section tabs
            .child(div().flex().items_center().gap_1().children(tabs))
            // Right side: language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .border_1()
                    .border_color(BrandColors::border())
                    .text_color(BrandColors::text_secondary())
                    .text_size(px(13.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .cursor_pointer()
                    .hover(|s| s.bg(BrandColors::hover_bg()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        i18n_entity.update(cx, |i18n, cx| {
                            if let Err(e) = i18n.toggle() {
                                tracing::error!("Failed to save language preference: {}", e);
                            }
                            cx.notify();
                        });
                    })
                    .child(language.toggled().short_label()),
            )
    }
}
