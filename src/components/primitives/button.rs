//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::BrandColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled brand button
    #[default]
    Primary,
    /// Bordered button on white
    Outline,
    /// Transparent button (tabs, toggles)
    Ghost,
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    active: bool,
    disabled: bool,
    /// Replaces the label while set; also disables the button
    loading_label: Option<SharedString>,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            active: false,
            disabled: false,
            loading_label: None,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Highlight as the current selection (active tab)
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show `label` instead of the normal label and ignore clicks
    pub fn loading(mut self, label: Option<impl Into<SharedString>>) -> Self {
        self.loading_label = label.map(Into::into);
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                BrandColors::button_primary_bg(),
                BrandColors::text_on_brand(),
                BrandColors::button_primary_hover(),
            ),
            ButtonVariant::Outline => (
                BrandColors::card_bg(),
                BrandColors::button_outline_text(),
                BrandColors::hover_bg(),
            ),
            ButtonVariant::Ghost => (
                gpui::rgba(0x00000000),
                if self.active {
                    BrandColors::primary()
                } else {
                    BrandColors::text_secondary()
                },
                BrandColors::hover_bg(),
            ),
        };

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(10.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(28.0), px(12.0), px(18.0)),
        };

        let inert = self.disabled || self.loading_label.is_some();
        let label = self.loading_label.unwrap_or(self.label);

        let mut element = div()
            .id(self.id)
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .font_weight(gpui::FontWeight::MEDIUM)
            .rounded_md()
            .when(self.variant == ButtonVariant::Outline, |el| {
                el.border_1().border_color(BrandColors::border())
            })
            .opacity(if inert { 0.5 } else { 1.0 })
            .child(label);

        if !inert {
            element = element.cursor_pointer().hover(move |s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
