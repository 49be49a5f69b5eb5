//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px, size,
};

use crate::app::entities::AppEntities;
use crate::app::launch::LaunchOptions;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::error::Result;
use crate::i18n::t;
use crate::services::HttpWindSource;
use crate::state::VindSettings;

actions!(vind, [Quit, RefreshNow, DismissError]);

/// Run the Vind GUI application
pub fn run_app(options: LaunchOptions) -> Result<()> {
    let settings = VindSettings::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Falling back to default settings");
        VindSettings::default()
    });
    let source = HttpWindSource::new(settings.endpoint(), settings.request_timeout())?.shared();
    let time_span = options.time_span.unwrap_or(settings.default_time_span());
    let auto_refresh = settings.auto_refresh();

    tracing::info!(
        endpoint = settings.endpoint(),
        minutes = time_span.minutes(),
        fullscreen = ?options.fullscreen,
        "Starting dashboard"
    );

    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("secondary-q", Quit, None),
            KeyBinding::new("secondary-r", RefreshNow, None),
            KeyBinding::new("escape", DismissError, None),
        ]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(cx, settings, source, time_span);
        cx.set_global(entities.clone());

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        let refresh_entities = entities.clone();
        cx.on_action(move |_: &RefreshNow, cx: &mut App| {
            refresh_entities
                .dashboard
                .update(cx, |dashboard, cx| dashboard.refresh(None, cx));
        });
        let dismiss_entities = entities.clone();
        cx.on_action(move |_: &DismissError, cx: &mut App| {
            dismiss_entities.dashboard.update(cx, |dashboard, cx| {
                if dashboard.error_state().is_visible() {
                    dashboard.retry(cx);
                }
            });
        });

        // Mount: first fetch and the periodic timer
        entities.dashboard.update(cx, |dashboard, cx| {
            dashboard.refresh(None, cx);
            if let Some(interval) = auto_refresh {
                dashboard.start_auto_refresh(interval, cx);
            }
        });

        let title = t(entities.locale(cx), "app-title");
        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        let fullscreen = options.fullscreen;
        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), fullscreen, cx))
        }) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
