//! Error Overlay Component
//!
//! Full-window dismissible overlay for a failed or empty fetch. Clicking
//! anywhere on it is the recovery action.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce, Rgba,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};

use crate::i18n::{Locale, t};
use crate::state::ErrorState;
use crate::theme::colors::VindColors;
use crate::theme::typography::Typography;

/// Overlay for a visible [`ErrorState`]
#[derive(IntoElement)]
pub struct ErrorOverlay {
    state: ErrorState,
    locale: Locale,
    on_retry: Option<Box<dyn Fn(&mut App) + 'static>>,
}

impl ErrorOverlay {
    pub fn new(state: ErrorState, locale: Locale) -> Self {
        Self {
            state,
            locale,
            on_retry: None,
        }
    }

    /// Set the click handler
    pub fn on_retry(mut self, handler: impl Fn(&mut App) + 'static) -> Self {
        self.on_retry = Some(Box::new(handler));
        self
    }

    /// Headline, hint and accent for the state
    fn copy(&self) -> (&'static str, &'static str, Rgba) {
        match self.state {
            ErrorState::NoData => ("overlay-no-data", "overlay-no-data-hint", VindColors::warning()),
            _ => ("overlay-error", "overlay-error-hint", VindColors::danger()),
        }
    }
}

impl RenderOnce for ErrorOverlay {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (headline, hint, accent) = self.copy();
        let locale = self.locale;
        let on_retry = self.on_retry;

        // Backdrop
        div()
            .id("error-overlay")
            .absolute()
            .inset_0()
            .occlude()
            .bg(VindColors::overlay_backdrop())
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .when_some(on_retry, |el, handler| {
                el.on_click(move |_event: &ClickEvent, _window, cx| {
                    handler(cx);
                })
            })
            .child(
                div()
                    .max_w(px(520.0))
                    .px_8()
                    .py_6()
                    .rounded_lg()
                    .border_2()
                    .border_color(accent)
                    .bg(VindColors::background_bottom())
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(accent)
                            .child(t(locale, headline)),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_BASE))
                            .text_color(VindColors::text_secondary())
                            .child(t(locale, hint)),
                    )
                    .child(
                        div()
                            .mt_2()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(VindColors::text_primary())
                            .child(t(locale, "overlay-retry")),
                    ),
            )
    }
}
