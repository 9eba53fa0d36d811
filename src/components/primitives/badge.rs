//! Badge Component

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled, Window};

use crate::theme::colors::BrandColors;

/// Small rounded label (course level, duration)
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    bg: Rgba,
    fg: Rgba,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            bg: BrandColors::badge_bg(),
            fg: BrandColors::badge_text(),
        }
    }

    /// Override the colors
    pub fn colors(mut self, bg: Rgba, fg: Rgba) -> Self {
        self.bg = bg;
        self.fg = fg;
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(self.bg)
            .text_color(self.fg)
            .text_size(px(11.0))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .child(self.label)
    }
}
