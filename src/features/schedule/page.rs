//! Schedule Page
//!
//! Weekly live sessions as a four-column table.

use gpui::{div, prelude::*, px, Context, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::domain::{schedule, ScheduleEntry};
use crate::i18n::Dictionary;
use crate::theme::colors::BrandColors;

/// Column header keys and relative widths
const COLUMNS: &[(&str, f32)] = &[
    ("schedule.day", 1.0),
    ("schedule.time", 1.0),
    ("schedule.course", 2.0),
    ("schedule.instructor", 1.5),
];
const COLUMN_WEIGHT_TOTAL: f32 = 5.5;

/// Schedule page component
pub struct SchedulePage {
    entities: AppEntities,
}

impl SchedulePage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn cell(text: impl Into<gpui::SharedString>, weight: f32) -> gpui::Div {
        div()
            .w(gpui::relative(weight / COLUMN_WEIGHT_TOTAL))
            .px_4()
            .py_3()
            .child(text.into())
    }

    fn render_row(index: usize, entry: &ScheduleEntry, dict: Dictionary) -> impl IntoElement {
        let values = [
            dict.get(entry.day.label_key()),
            entry.time,
            entry.course_title,
            entry.instructor,
        ];

        div()
            .w_full()
            .flex()
            .text_size(px(14.0))
            .text_color(BrandColors::text_primary())
            .when(index % 2 == 1, |el| el.bg(BrandColors::background()))
            .children(
                values
                    .into_iter()
                    .zip(COLUMNS)
                    .map(|(value, &(_, weight))| Self::cell(value, weight)),
            )
    }
}

impl Render for SchedulePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let dict = self.entities.i18n.read(cx).dictionary();

        let header = div()
            .w_full()
            .flex()
            .bg(BrandColors::primary())
            .text_color(BrandColors::text_on_brand())
            .text_size(px(14.0))
            .font_weight(gpui::FontWeight::SEMIBOLD)
            .children(
                COLUMNS
                    .iter()
                    .map(|&(key, weight)| Self::cell(dict.get(key), weight)),
            );

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
                    .child(dict.get("schedule.title")),
            )
            .child(
                div()
                    .w_full()
                    .bg(BrandColors::card_bg())
                    .rounded_lg()
                    .shadow_md()
                    .overflow_hidden()
                    .child(header)
                    .children(
                        schedule()
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| Self::render_row(index, entry, dict)),
                    ),
            )
    }
}
