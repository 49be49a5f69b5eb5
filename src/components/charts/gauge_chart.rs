//! Gauge Chart View
//!
//! Half-circle dial showing the strongest gust of the span.

use gpui::{
    Bounds, Context, IntoElement, ParentElement, Pixels, Render, Styled, Window, canvas, div,
    prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::charts::{GaugeGeometry, GaugeReading, gauge_reading};
use crate::components::charts::line_chart::pending;
use crate::components::charts::paint::{arc_points, stroke_polyline};
use crate::components::charts::size_probe;
use crate::components::composite::ChartCard;
use crate::constants::{CHART_FALLBACK_HEIGHT, CHART_FALLBACK_WIDTH};
use crate::helpers::{ContainerSize, ResponsiveSize};
use crate::i18n::{Locale, t_args};
use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;
use crate::utils::format::format_knots;

const TARGET: &str = "gauge-chart";
const ARC_STEPS: usize = 64;

/// Dial centre for a half circle of `radius` inside `size`
fn dial_center(size: ContainerSize, radius: f32) -> (f32, f32) {
    (size.width / 2.0, (size.height + radius) / 2.0)
}

/// Max gust gauge
pub struct GaugeChart {
    entities: AppEntities,
    size: ResponsiveSize,
}

impl GaugeChart {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let mut size = ResponsiveSize::new(ContainerSize::new(CHART_FALLBACK_WIDTH, CHART_FALLBACK_HEIGHT));
        size.attach(&entities.resize, TARGET);

        Self { entities, size }
    }

    fn render_dial(&self, reading: GaugeReading, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let size = self.size.size();
        let geometry = GaugeGeometry::fit(size);
        let radius = geometry.diameter / 2.0;
        let (center_x, center_y) = dial_center(size, radius);
        let fraction = reading.fraction();
        let color = VindColors::zone(reading.zone);

        let dial = canvas(
            |_, _, _| {},
            move |bounds: Bounds<Pixels>, _, window, _| {
                let local = ContainerSize::new(f32::from(bounds.size.width), f32::from(bounds.size.height));
                let geometry = GaugeGeometry::fit(local);
                let radius = geometry.diameter / 2.0 - geometry.track_width / 2.0;
                if radius <= 0.0 {
                    return;
                }
                let center = dial_center(local, geometry.diameter / 2.0);

                let track = arc_points(center, radius, -90.0, 90.0, ARC_STEPS);
                stroke_polyline(window, bounds, &track, geometry.track_width, VindColors::card_border());

                if fraction > 0.0 {
                    let steps = ((ARC_STEPS as f64 * fraction).ceil() as usize).max(1);
                    let value = arc_points(center, radius, -90.0, -90.0 + 180.0 * fraction, steps);
                    stroke_polyline(window, bounds, &value, geometry.track_width, color);
                }
            },
        )
        .size_full();

        let latest = reading.latest_avg.map(|avg| {
            t_args(locale, "gauge-latest-avg", &[("v", &format_knots(avg))])
        });

        div()
            .size_full()
            .relative()
            .child(dial)
            .child(size_probe(self.entities.resize.clone(), TARGET.into(), cx.entity().downgrade()))
            // Readout under the arc's apex
            .child(
                div()
                    .absolute()
                    .left_0()
                    .w_full()
                    .top(px((center_y - radius / 2.0).max(0.0)))
                    .flex()
                    .flex_col()
                    .items_center()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_DISPLAY))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(color)
                            .child(format!("{} kn", format_knots(reading.gust))),
                    )
                    .children(latest.map(|latest| {
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(VindColors::text_secondary())
                            .child(latest)
                    })),
            )
            // Scale ends
            .child(
                div()
                    .absolute()
                    .top(px(center_y + 4.0))
                    .left(px((center_x - radius).max(0.0)))
                    .w(px(geometry.diameter))
                    .flex()
                    .justify_between()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(VindColors::text_muted())
                    .child("0")
                    .child(format!("{:.0}", reading.max)),
            )
    }
}

impl Render for GaugeChart {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if let Some(size) = self.size.poll_change() {
            tracing::trace!(?size, "Gauge resized");
        }

        let locale = self.entities.locale(cx);
        let snapshot = self.entities.dashboard.read(cx).snapshot().clone();
        let title = t_args(locale, "gauge-title", &[("n", &snapshot.span.minutes().to_string())]);

        let body = match gauge_reading(snapshot.data(), snapshot.span) {
            Some(reading) => self.render_dial(reading, locale, cx).into_any_element(),
            None => pending(locale).into_any_element(),
        };

        ChartCard::new(title).body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_sits_centered_with_arc_inside() {
        let (x, y) = dial_center(ContainerSize::new(400.0, 300.0), 100.0);
        assert_eq!(x, 200.0);
        assert_eq!(y, 200.0);
        // Apex of the half circle stays inside the container
        assert!(y - 100.0 >= 0.0);
    }
}
