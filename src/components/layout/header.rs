//! Header Component
//!
//! Title, time span selector, refresh button, last update time and the
//! language switcher.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::domain::TimeSpan;
use crate::i18n::{Locale, t, t_args};
use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_time;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_span_option(
        &self,
        span: TimeSpan,
        selected: bool,
        locale: Locale,
    ) -> impl IntoElement {
        let entities = self.entities.clone();
        let label = t_args(locale, "header-minutes", &[("n", &span.minutes().to_string())]);

        div()
            .id(("timespan", span.minutes() as usize))
            .px_3()
            .py_1()
            .rounded_md()
            .text_size(px(Typography::TEXT_SM))
            .text_color(VindColors::text_primary())
            .cursor_pointer()
            .when(selected, |el| el.bg(VindColors::control_selected()))
            .when(!selected, |el| el.hover(|s| s.bg(VindColors::control_hover())))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.select_time_span(span, cx);
            })
            .child(label)
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale(cx);
        let dashboard = self.entities.dashboard.read(cx);
        let selected = dashboard.time_span();
        let loading = dashboard.is_loading();
        let status = match dashboard.coordinator().last_dispatch_at() {
            _ if loading => t(locale, "header-loading"),
            Some(at) => t_args(locale, "header-last-update", &[("time", &format_time(&at))]),
            None => t(locale, "header-never-updated"),
        };

        let refresh_entities = self.entities.clone();
        let lang_entities = self.entities.clone();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_3()
            .px_6()
            .pt_6()
            // Title row
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(VindColors::text_primary())
                            .child(t(locale, "app-title")),
                    )
                    // Language switcher
                    .child(
                        div()
                            .id("lang-switcher")
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .bg(VindColors::card_bg())
                            .text_color(VindColors::text_primary())
                            .text_size(px(Typography::TEXT_SM))
                            .cursor_pointer()
                            .hover(|s| s.bg(VindColors::control_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                lang_entities.toggle_locale(cx);
                            })
                            .child(locale.display_name()),
                    ),
            )
            // Controls row
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .mr_2()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(VindColors::text_secondary())
                            .child(t(locale, "header-timespan")),
                    )
                    .children(
                        TimeSpan::ALL
                            .iter()
                            .map(|&span| self.render_span_option(span, span == selected, locale)),
                    )
                    .child(
                        div()
                            .id("refresh")
                            .ml_4()
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .border_1()
                            .border_color(VindColors::card_border())
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(VindColors::text_primary())
                            .cursor_pointer()
                            .hover(|s| s.bg(VindColors::control_hover()))
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                refresh_entities
                                    .dashboard
                                    .update(cx, |dashboard, cx| dashboard.refresh(None, cx));
                            })
                            .child(t(locale, "action-refresh")),
                    )
                    .child(
                        div()
                            .ml_2()
                            .text_size(px(Typography::TEXT_XS))
                            .text_color(VindColors::text_muted())
                            .child(status),
                    ),
            )
    }
}
