//! Chart Views
//!
//! GPUI views over the shared dashboard snapshot. Each view measures its own
//! container through the resize observer and repaints when the size or the
//! snapshot changes.

pub mod gauge_chart;
pub mod line_chart;
pub mod paint;
pub mod wind_rose;

use gpui::{IntoElement, SharedString, Styled, WeakEntity, canvas};

use crate::helpers::{ContainerSize, ResizeObserver};

pub use gauge_chart::GaugeChart;
pub use line_chart::LineChart;
pub use wind_rose::WindRoseChart;

/// Invisible element that reports its bounds for `target` and wakes `view`
/// when they change
pub(crate) fn size_probe<V: 'static>(
    observer: ResizeObserver,
    target: SharedString,
    view: WeakEntity<V>,
) -> impl IntoElement {
    canvas(
        move |bounds, _window, cx| {
            let size = ContainerSize::new(
                f32::from(bounds.size.width),
                f32::from(bounds.size.height),
            );
            if observer.report(&target, size) {
                tracing::trace!(target = %target, ?size, "Container resized");
                cx.defer(move |cx| {
                    let _ = view.update(cx, |_, cx| cx.notify());
                });
            }
        },
        |_, _, _, _| {},
    )
    .absolute()
    .size_full()
}
