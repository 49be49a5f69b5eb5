//! Wind Rose View
//!
//! Stacked sector wedges per speed band, with compass labels and a band legend.

use gpui::{
    Bounds, Context, IntoElement, ParentElement, Pixels, Render, Styled, Window, canvas, div,
    prelude::*, px,
};

use crate::app::entities::AppEntities;
use crate::charts::rose::SPEED_BANDS_KN;
use crate::charts::{RoseGeometry, WindRose, wind_rose};
use crate::components::charts::line_chart::pending;
use crate::components::charts::paint::{arc_points, fill_polygon, stroke_polyline};
use crate::components::charts::size_probe;
use crate::components::composite::ChartCard;
use crate::constants::{CHART_FALLBACK_HEIGHT, CHART_FALLBACK_WIDTH};
use crate::helpers::{ContainerSize, ResponsiveSize};
use crate::i18n::{Locale, t_args};
use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;

const TARGET: &str = "wind-rose";
/// Angular gap between neighbouring wedges
const WEDGE_GAP_DEG: f64 = 1.5;
const WEDGE_STEPS: usize = 6;
const LABEL_OFFSET: f32 = 12.0;

/// Wedge outline from `inner` to `outer` (fractions of the radius)
fn wedge(geometry: &RoseGeometry, center_deg: f64, inner: f64, outer: f64) -> Vec<(f32, f32)> {
    let half = 360.0 / 32.0 - WEDGE_GAP_DEG / 2.0;
    let radius = f64::from(geometry.radius);
    let mut points = arc_points(
        geometry.center,
        (radius * outer) as f32,
        center_deg - half,
        center_deg + half,
        WEDGE_STEPS,
    );
    if inner > 0.0 {
        let mut inner_arc = arc_points(
            geometry.center,
            (radius * inner) as f32,
            center_deg - half,
            center_deg + half,
            WEDGE_STEPS,
        );
        inner_arc.reverse();
        points.extend(inner_arc);
    } else {
        points.push(geometry.center);
    }
    points
}

/// Legend label for a speed band
fn band_label(index: usize) -> String {
    match SPEED_BANDS_KN.get(index + 1) {
        Some(upper) => format!("{:.0}-{:.0}", SPEED_BANDS_KN[index], upper),
        None => format!("{:.0}+", SPEED_BANDS_KN[index]),
    }
}

/// Direction frequency chart
pub struct WindRoseChart {
    entities: AppEntities,
    size: ResponsiveSize,
}

impl WindRoseChart {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.dashboard, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        let mut size = ResponsiveSize::new(ContainerSize::new(CHART_FALLBACK_WIDTH, CHART_FALLBACK_HEIGHT));
        size.attach(&entities.resize, TARGET);

        Self { entities, size }
    }

    fn render_rose(&self, rose: WindRose, locale: Locale, cx: &mut Context<Self>) -> impl IntoElement {
        let geometry = RoseGeometry::fit(self.size.size());
        let scale = rose.max_sector_total();
        let undirected = rose.undirected;

        let labels: Vec<_> = rose
            .sectors
            .iter()
            .step_by(2)
            .map(|sector| {
                let (x, y) = arc_points(
                    geometry.center,
                    geometry.radius + LABEL_OFFSET,
                    sector.center_deg,
                    sector.center_deg,
                    1,
                )[0];
                (sector.label, x, y)
            })
            .collect();

        let plot = canvas(
            |_, _, _| {},
            move |bounds: Bounds<Pixels>, _, window, _| {
                let local = ContainerSize::new(f32::from(bounds.size.width), f32::from(bounds.size.height));
                let geometry = RoseGeometry::fit(local);
                if geometry.radius <= 0.0 {
                    return;
                }

                for ring in 1..=4 {
                    let r = geometry.radius * ring as f32 / 4.0;
                    let circle = arc_points(geometry.center, r, 0.0, 360.0, 64);
                    stroke_polyline(window, bounds, &circle, 1.0, VindColors::grid());
                }

                if scale <= 0.0 {
                    return;
                }
                for sector in &rose.sectors {
                    let mut inner = 0.0;
                    for (band, value) in sector.bands.iter().enumerate() {
                        if *value <= 0.0 {
                            continue;
                        }
                        let outer = inner + value / scale;
                        let outline = wedge(&geometry, sector.center_deg, inner, outer);
                        fill_polygon(window, bounds, &outline, VindColors::speed_band(band));
                        inner = outer;
                    }
                }
            },
        )
        .size_full();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex_1()
                    .relative()
                    .child(plot)
                    .child(size_probe(self.entities.resize.clone(), TARGET.into(), cx.entity().downgrade()))
                    .children(labels.into_iter().map(|(label, x, y)| {
                        div()
                            .absolute()
                            .left(px(x - 14.0))
                            .top(px(y - 8.0))
                            .w(px(28.0))
                            .flex()
                            .justify_center()
                            .text_size(px(Typography::TEXT_XS))
                            .text_color(VindColors::text_secondary())
                            .child(label)
                    })),
            )
            // Legend
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .justify_center()
                    .gap_3()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(VindColors::text_secondary())
                    .children((0..SPEED_BANDS_KN.len()).map(|band| {
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(div().size(px(10.0)).rounded_sm().bg(VindColors::speed_band(band)))
                            .child(format!("{} kn", band_label(band)))
                    })),
            )
            .when(undirected > 0, |el| {
                el.child(
                    div()
                        .flex()
                        .justify_center()
                        .text_size(px(Typography::TEXT_XS))
                        .text_color(VindColors::text_muted())
                        .child(t_args(locale, "rose-undirected", &[("n", &undirected.to_string())])),
                )
            })
    }
}

impl Render for WindRoseChart {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if let Some(size) = self.size.poll_change() {
            tracing::trace!(?size, "Wind rose resized");
        }

        let locale = self.entities.locale(cx);
        let snapshot = self.entities.dashboard.read(cx).snapshot().clone();
        let title = t_args(locale, "rose-title", &[("n", &snapshot.span.minutes().to_string())]);

        let body = match wind_rose(snapshot.data(), snapshot.span) {
            Some(rose) => self.render_rose(rose, locale, cx).into_any_element(),
            None => pending(locale).into_any_element(),
        };

        ChartCard::new(title).body(body)
    }
}
