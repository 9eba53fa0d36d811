//! Footer Component

use gpui::{div, px, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::i18n::Dictionary;
use crate::theme::colors::BrandColors;

/// Link columns: heading key, then item keys
const COLUMNS: &[(&str, &[&str])] = &[
    (
        "footer.courses",
        &["footer.webDev", "footer.design", "footer.business", "footer.marketing"],
    ),
    (
        "footer.company",
        &["footer.about", "footer.careers", "footer.blog", "footer.contact"],
    ),
];

/// Page footer with brand tagline and link columns
#[derive(IntoElement)]
pub struct Footer {
    dict: Dictionary,
}

impl Footer {
    pub fn new(dict: Dictionary) -> Self {
        Self { dict }
    }
}

impl RenderOnce for Footer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let dict = self.dict;

        let columns = COLUMNS.iter().map(|(heading, items)| {
            div()
                .flex()
                .flex_col()
                .gap_2()
                .child(
                    div()
                        .text_color(BrandColors::text_on_brand())
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .child(dict.get(heading)),
                )
                .children(items.iter().map(|key| {
                    div()
                        .text_size(px(13.0))
                        .text_color(BrandColors::text_muted())
                        .child(dict.get(key))
                }))
        });

        div()
            .w_full()
            .mt_8()
            .px_8()
            .py_8()
            .bg(BrandColors::text_primary())
            .flex()
            .flex_col()
            .gap_6()
            .child(
                div()
                    .flex()
                    .justify_between()
                    .gap_8()
                    .child(
                        div()
                            .flex()
                            .flex_col()
                            .gap_2()
                            .max_w(px(320.0))
                            .child(
                                div()
                                    .text_size(px(18.0))
                                    .font_weight(gpui::FontWeight::BOLD)
                                    .text_color(BrandColors::text_on_brand())
                                    .child(dict.get("app.brand")),
                            )
                            .child(
                                div()
                                    .text_size(px(13.0))
                                    .text_color(BrandColors::text_muted())
                                    .child(dict.get("footer.tagline")),
                            ),
                    )
                    .children(columns)
                    .child(
                        div()
                            .text_color(BrandColors::text_on_brand())
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(dict.get("footer.connect")),
                    ),
            )
            .child(
                div()
                    .pt_4()
                    .border_t_1()
                    .border_color(BrandColors::text_secondary())
                    .text_size(px(12.0))
                    .text_color(BrandColors::text_muted())
                    .child(dict.get("footer.copyright")),
            )
    }
}
