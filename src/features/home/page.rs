//! Home Page
//!
//! Hero banner and the three feature cards.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, IntoElement, ParentElement, Render, Rgba, Styled,
    Window,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::{Button, ButtonSize};
use crate::domain::courses;
use crate::features::courses::controller::CoursesController;
use crate::i18n::Dictionary;
use crate::state::ContentTab;
use crate::theme::colors::BrandColors;

/// Feature cards: icon glyph, title key, description key
const FEATURES: &[(&str, &str, &str)] = &[
    ("▶", "features.videoTitle", "features.videoDesc"),
    ("◷", "features.scheduleTitle", "features.scheduleDesc"),
    ("✓", "features.certificateTitle", "features.certificateDesc"),
];

/// Home page component
pub struct HomePage {
    entities: AppEntities,
    controller: CoursesController,
}

impl HomePage {
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

    fn render_hero(&self, dict: Dictionary) -> impl IntoElement {
        let explore = self.controller.clone();
        let demo = self.controller.clone();

        div()
            .w_full()
            .px_8()
            .py(px(72.0))
            .flex()
            .flex_col()
            .items_center()
            .gap_6()
            .child(
                div()
                    .text_size(px(52.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(BrandColors::primary())
                    .child(dict.get("hero.title")),
            )
            .child(
                div()
                    .max_w(px(640.0))
                    .text_size(px(18.0))
                    .text_color(BrandColors::text_secondary())
                    .child(dict.get("hero.subtitle")),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(
                        Button::primary("hero-explore", dict.get("hero.exploreCourses"))
                            .size(ButtonSize::Large)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                explore.show_tab(ContentTab::Courses, cx)
                            }),
                    )
                    .child(
                        Button::outline("hero-demo", dict.get("hero.watchDemo"))
                            .size(ButtonSize::Large)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                // Demo plays the first course's intro
                                if let Some(course) = courses().first() {
                                    demo.watch_intro(course, cx);
                                }
                            }),
                    ),
            )
    }

    fn render_feature(glyph: &'static str, title: &'static str, desc: &'static str, accent: Rgba) -> impl IntoElement {
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
                    .size(px(48.0))
                    .rounded_full()
                    .bg(accent)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(22.0))
                    .text_color(BrandColors::text_on_brand())
                    .child(glyph),
            )
            .child(
                div()
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(BrandColors::text_primary())
                    .child(title),
            )
            .child(
                div()
                    .text_size(px(14.0))
                    .text_color(BrandColors::text_secondary())
                    .child(desc),
            )
    }
}

impl Render for HomePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dict = self.entities.i18n.read(cx).dictionary();
        let accents = [
            BrandColors::brand_pink(),
            BrandColors::brand_cyan(),
            BrandColors::brand_yellow(),
        ];

        let cards = FEATURES
            .iter()
            .zip(accents)
            .map(|(&(glyph, title, desc), accent)| {
                Self::render_feature(glyph, dict.get(title), dict.get(desc), accent)
            });

        div()
            .w_full()
            .flex()
            .flex_col()
            .child(self.render_hero(dict))
            .child(div().w_full().px_8().flex().gap_6().children(cards))
    }
}
