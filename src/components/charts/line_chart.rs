//! Line Chart View
//!
//! Gust over time with the average-to-gust band shaded underneath and a
//! tooltip for the hovered sample.

use gpui::{
    Bounds, Context, InteractiveElement, IntoElement, ParentElement, Pixels, Render,
    StatefulInteractiveElement, Styled, Window, canvas, div, prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::charts::{LineSeries, line_series};
use crate::components::charts::paint::{fill_polygon, stroke_polyline};
use crate::components::charts::size_probe;
use crate::components::composite::ChartCard;
use crate::constants::{CHART_FALLBACK_WIDTH, LINE_CHART_HEIGHT};
use crate::helpers::{ContainerSize, ResponsiveSize};
use crate::i18n::{Locale, t, t_args};
use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;
use crate::utils::format::{format_axis_time, format_clock, format_knots};

const TARGET: &str = "line-chart";
/// Plot margins: left, top, right, bottom
const MARGIN: (f32, f32, f32, f32) = (36.0, 8.0, 12.0, 22.0);
/// Hover targets across the plot
const MAX_HOVER_COLUMNS: usize = 60;
const TICK_STEP_KN: f64 = 5.0;

/// Plot rectangle inside the container: (x, y, width, height)
fn plot_rect(size: ContainerSize) -> (f32, f32, f32, f32) {
    let (left, top, right, bottom) = MARGIN;
    (
        left,
        top,
        (size.width - left - right).max(0.0),
        (size.height - top - bottom).max(0.0),
    )
}

fn to_local(rect: (f32, f32, f32, f32), (fx, fy): (f64, f64)) -> (f32, f32) {
    (
        rect.0 + fx as f32 * rect.2,
        rect.1 + (1.0 - fy as f32) * rect.3,
    )
}

/// Gust graph for the selected span
pub struct LineChart {
    entities: AppEntities,
    size: ResponsiveSize,
    hovered: Option<usize>,
}

impl LineChart {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.dashboard, |this, _, cx| {
            this.hovered = None;
            cx.notify();
        })
        .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let mut size = ResponsiveSize::new(ContainerSize::new(CHART_FALLBACK_WIDTH, LINE_CHART_HEIGHT));
        size.attach(&entities.resize, TARGET);

        Self {
            entities,
            size,
            hovered: None,
        }
    }

    fn render_plot(&self, series: LineSeries, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let size = self.size.size();
        let rect = plot_rect(size);
        let hovered = self.hovered.and_then(|i| series.points.get(i).cloned());
        let hovered_x = self
            .hovered
            .and_then(|i| series.normalized().get(i).copied())
            .map(|p| to_local(rect, p).0);

        let ticks: Vec<f64> = (0u32..)
            .map(|i| f64::from(i) * TICK_STEP_KN)
            .take_while(|v| *v <= series.y_max)
            .collect();

        let columns = series.points.len().min(MAX_HOVER_COLUMNS);
        let hover_targets: Vec<Option<usize>> = (0..columns)
            .map(|c| series.nearest((c as f64 + 0.5) / columns as f64))
            .collect();

        let first_label = series.points.first().map(|p| format_axis_time(&p.timestamp));
        let last_label = series.points.last().map(|p| format_axis_time(&p.timestamp));

        let paint_series = series.clone();
        let paint_ticks = ticks.clone();
        let plot = canvas(
            |_, _, _| {},
            move |bounds: Bounds<Pixels>, _, window, _| {
                let local = ContainerSize::new(f32::from(bounds.size.width), f32::from(bounds.size.height));
                let rect = plot_rect(local);

                for tick in &paint_ticks {
                    let y = to_local(rect, (0.0, tick / paint_series.y_max)).1;
                    stroke_polyline(window, bounds, &[(rect.0, y), (rect.0 + rect.2, y)], 1.0, VindColors::grid());
                }

                let normalized = paint_series.normalized();
                let gusts: Vec<(f32, f32)> = normalized.iter().map(|&p| to_local(rect, p)).collect();
                let mut band = gusts.clone();
                band.extend(
                    normalized
                        .iter()
                        .zip(&paint_series.points)
                        .rev()
                        .map(|(&(x, _), p)| to_local(rect, (x, (p.interval.0 / paint_series.y_max).clamp(0.0, 1.0)))),
                );

                fill_polygon(window, bounds, &band, VindColors::gust_band());
                stroke_polyline(window, bounds, &gusts, 2.0, VindColors::gust_line());
            },
        )
        .size_full();

        div()
            .size_full()
            .relative()
            .child(plot)
            .child(size_probe(self.entities.resize.clone(), TARGET.into(), cx.entity().downgrade()))
            // Y axis labels
            .children(ticks.into_iter().map(|tick| {
                let y = to_local(rect, (0.0, tick / series.y_max)).1;
                div()
                    .absolute()
                    .left_0()
                    .top(px(y - 7.0))
                    .w(px(MARGIN.0 - 6.0))
                    .flex()
                    .justify_end()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(VindColors::text_muted())
                    .child(format!("{tick:.0}"))
            }))
            // X axis labels
            .child(
                div()
                    .absolute()
                    .bottom_0()
                    .left(px(rect.0))
                    .w(px(rect.2))
                    .flex()
                    .justify_between()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(VindColors::text_muted())
                    .children(first_label)
                    .children(last_label),
            )
            // Hover targets
            .child(
                div()
                    .absolute()
                    .left(px(rect.0))
                    .top(px(rect.1))
                    .w(px(rect.2))
                    .h(px(rect.3))
                    .flex()
                    .children(hover_targets.into_iter().enumerate().map(|(column, target)| {
                        div()
                            .id(("line-hover", column))
                            .flex_1()
                            .h_full()
                            .on_hover(cx.listener(move |this, hovered: &bool, _, cx| {
                                if *hovered {
                                    this.hovered = target;
                                } else if this.hovered == target {
                                    this.hovered = None;
                                }
                                cx.notify();
                            }))
                    })),
            )
            .when_some(hovered.zip(hovered_x), |el, (point, x)| {
                let left = (x + 8.0).min((size.width - 180.0).max(0.0));
                el.child(
                    div()
                        .absolute()
                        .top(px(rect.1))
                        .left(px(left))
                        .w(px(170.0))
                        .p_2()
                        .rounded_md()
                        .bg(VindColors::tooltip_bg())
                        .text_color(VindColors::tooltip_text())
                        .text_size(px(Typography::TEXT_XS))
                        .flex()
                        .flex_col()
                        .child(format!("{}: {}", t(locale, "tooltip-time"), format_clock(&point.tooltip.time)))
                        .child(format!(
                            "{}: {} kn",
                            t(locale, "tooltip-avg"),
                            format_knots(point.tooltip.avg_wind)
                        ))
                        .child(format!(
                            "{}: {} kn",
                            t(locale, "tooltip-gust"),
                            format_knots(point.tooltip.gust)
                        )),
                )
            })
    }
}

impl Render for LineChart {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if let Some(size) = self.size.poll_change() {
            tracing::trace!(?size, "Line chart resized");
        }

        let locale = self.entities.locale(cx);
        let snapshot = self.entities.dashboard.read(cx).snapshot().clone();
        let title = t_args(locale, "line-title", &[("n", &snapshot.span.minutes().to_string())]);

        let body = match line_series(snapshot.data()) {
            Some(series) => self.render_plot(series, locale, cx).into_any_element(),
            None => pending(locale).into_any_element(),
        };

        ChartCard::new(title).body(body)
    }
}

/// Placeholder while the snapshot is pending
pub(crate) fn pending(locale: Locale) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(Typography::TEXT_SM))
        .text_color(VindColors::text_muted())
        .child(t(locale, "chart-pending"))
}
