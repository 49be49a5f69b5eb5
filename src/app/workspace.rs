//! Workspace - Main Shell with Layout and Overlay
//!
//! Holds the header and the three chart views, or a single chart in
//! fullscreen mode, and puts the error overlay on top when the dashboard
//! reports a failed or empty fetch.

use gpui::{
    AnyView, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    linear_color_stop, linear_gradient, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::app::launch::FullscreenChart;
use crate::components::charts::{GaugeChart, LineChart, WindRoseChart};
use crate::components::composite::ErrorOverlay;
use crate::components::layout::header::Header;
use crate::constants::LINE_CHART_HEIGHT;
use crate::i18n::t;
use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    fullscreen: Option<FullscreenChart>,
    header: Entity<Header>,
    line_chart: Entity<LineChart>,
    gauge_chart: Entity<GaugeChart>,
    wind_rose: Entity<WindRoseChart>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        fullscreen: Option<FullscreenChart>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let line_chart = cx.new(|cx| LineChart::new(entities.clone(), cx));
        let gauge_chart = cx.new(|cx| GaugeChart::new(entities.clone(), cx));
        let wind_rose = cx.new(|cx| WindRoseChart::new(entities.clone(), cx));

        // Overlay visibility follows the dashboard
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            fullscreen,
            header,
            line_chart,
            gauge_chart,
            wind_rose,
        }
    }

    fn fullscreen_view(&self, chart: FullscreenChart) -> AnyView {
        match chart {
            FullscreenChart::Line => self.line_chart.clone().into(),
            FullscreenChart::Gauge => self.gauge_chart.clone().into(),
            FullscreenChart::Rose => self.wind_rose.clone().into(),
        }
    }

    fn render_dashboard(&self) -> impl IntoElement {
        div()
            .id("dashboard")
            .flex_1()
            .overflow_y_scroll()
            .px_6()
            .py_4()
            .flex()
            .flex_col()
            .gap_4()
            .child(div().w_full().h(px(LINE_CHART_HEIGHT)).child(self.line_chart.clone()))
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_wrap()
                    .gap_4()
                    .child(
                        div()
                            .flex_1()
                            .min_w(px(320.0))
                            .h(px(360.0))
                            .child(self.gauge_chart.clone()),
                    )
                    .child(
                        div()
                            .flex_1()
                            .min_w(px(320.0))
                            .h(px(420.0))
                            .child(self.wind_rose.clone()),
                    ),
            )
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.locale(cx);
        let error = self.entities.dashboard.read(cx).error_state();
        let entities = self.entities.clone();

        let content = match self.fullscreen {
            Some(chart) => div()
                .size_full()
                .p_4()
                .child(self.fullscreen_view(chart))
                .into_any_element(),
            None => div()
                .size_full()
                .flex()
                .flex_col()
                .child(self.header.clone())
                .child(self.render_dashboard())
                .child(
                    div()
                        .w_full()
                        .py_2()
                        .flex()
                        .justify_center()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(VindColors::text_muted())
                        .child(t(locale, "app-footer")),
                )
                .into_any_element(),
        };

        div()
            .size_full()
            .relative()
            .bg(linear_gradient(
                180.,
                linear_color_stop(VindColors::background_top_hsla(), 0.),
                linear_color_stop(VindColors::background_bottom_hsla(), 1.),
            ))
            .text_color(VindColors::text_primary())
            .child(content)
            .when(error.is_visible(), |el| {
                el.child(ErrorOverlay::new(error, locale).on_retry(move |cx| {
                    entities
                        .dashboard
                        .update(cx, |dashboard, cx| dashboard.retry(cx));
                }))
            })
    }
}
