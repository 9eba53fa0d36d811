//! Reviews Page

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::domain::{reviews, Review};
use crate::i18n::Dictionary;
use crate::theme::colors::BrandColors;

/// Reviews page component
pub struct ReviewsPage {
    entities: AppEntities,
}

impl ReviewsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_review(review: &Review, dict: Dictionary) -> impl IntoElement {
        div()
            .flex_1()
            .p_6()
            .bg(BrandColors::card_bg())
            .rounded_lg()
            .shadow_md()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_color(BrandColors::star())
                    .text_size(px(18.0))
                    .child(review.stars()),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .italic()
                    .text_color(BrandColors::text_secondary())
                    .child(format!("\"{}\"", dict.get(review.text_key))),
            )
            .child(
                div()
                    .pt_2()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .text_color(BrandColors::text_primary())
                            .child(review.author),
                    )
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(BrandColors::text_muted())
                            .child(review.course_label),
                    ),
            )
    }
}

impl Render for ReviewsPage {
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
                    .child(dict.get("reviews.title")),
            )
            .child(
                div()
                    .flex()
                    .gap_6()
                    .children(reviews().iter().map(|review| Self::render_review(review, dict))),
            )
    }
}
