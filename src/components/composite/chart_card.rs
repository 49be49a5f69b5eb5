//! Chart Card Component
//!
//! Titled frame around one visualization.

use gpui::{
    AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};

use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;

/// Card with a title row and a body that fills the remaining height
#[derive(IntoElement)]
pub struct ChartCard {
    title: SharedString,
    subtitle: Option<SharedString>,
    body: Option<AnyElement>,
}

impl ChartCard {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            body: None,
        }
    }

    /// Muted line under the title
    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn body(mut self, body: impl IntoElement) -> Self {
        self.body = Some(body.into_any_element());
        self
    }
}

impl RenderOnce for ChartCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_2()
            .p_4()
            .rounded_lg()
            .bg(VindColors::card_bg())
            .border_1()
            .border_color(VindColors::card_border())
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(VindColors::text_primary())
                    .child(self.title),
            )
            .when_some(self.subtitle, |el, subtitle| {
                el.child(
                    div()
                        .text_size(px(Typography::TEXT_SM))
                        .text_color(VindColors::text_secondary())
                        .child(subtitle),
                )
            })
            .child(
                div()
                    .flex_1()
                    .relative()
                    .overflow_hidden()
                    .children(self.body),
            )
    }
}
