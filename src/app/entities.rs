//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access. State is split
//! by update frequency: the dashboard changes on every fetch, the rest rarely.

use std::sync::Arc;

use gpui::{App, AppContext, Entity, Global};

use crate::domain::TimeSpan;
use crate::helpers::ResizeObserver;
use crate::i18n::Locale;
use crate::services::WindSource;
use crate::state::{DashboardState, I18nState, VindSettings};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Refresh coordinator and the shared snapshot
    pub dashboard: Entity<DashboardState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Persisted settings
    pub settings: Entity<VindSettings>,
    /// Container size registry shared by every chart
    pub resize: ResizeObserver,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(
        cx: &mut App,
        settings: VindSettings,
        source: Arc<dyn WindSource>,
        time_span: TimeSpan,
    ) -> Self {
        let locale = settings.locale();
        Self {
            dashboard: cx.new(|_| DashboardState::new(source, time_span)),
            i18n: cx.new(|_| I18nState::new(locale)),
            settings: cx.new(|_| settings),
            resize: ResizeObserver::new(),
        }
    }

    pub fn locale(&self, cx: &App) -> Locale {
        self.i18n.read(cx).locale
    }

    /// Select a span, fetch it and remember it for the next launch
    pub fn select_time_span(&self, span: TimeSpan, cx: &mut App) {
        self.dashboard
            .update(cx, |dashboard, cx| dashboard.select_time_span(span, cx));
        self.update_settings(cx, |settings| settings.set_default_time_span(span));
    }

    /// Switch language and remember it
    pub fn toggle_locale(&self, cx: &mut App) {
        let locale = self.i18n.update(cx, |i18n, cx| {
            i18n.toggle_locale();
            cx.notify();
            i18n.locale
        });
        self.update_settings(cx, |settings| settings.set_locale(locale));
    }

    /// Apply `f` and write the settings file off the UI thread
    fn update_settings(&self, cx: &mut App, f: impl FnOnce(&mut VindSettings)) {
        let snapshot = self.settings.update(cx, |settings, _| {
            f(settings);
            settings.clone()
        });

        cx.background_spawn(async move {
            if let Err(e) = snapshot.save() {
                tracing::error!(error = %e, "Failed to save settings");
            }
        })
        .detach();
    }
}
