//! Vind GUI - Main Entry Point
//!
//! Real-time wind telemetry dashboard

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use vind_gui::app::application::run_app;
use vind_gui::app::launch::LaunchOptions;
use vind_gui::helpers::get_or_create_data_dir;

fn main() -> anyhow::Result<()> {
    // Daily rolling log file next to stdout; the guard flushes on exit
    let (file_writer, _guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "vind-gui.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(fmt::layer())
        .with(file_writer.map(|writer| fmt::layer().with_ansi(false).with_writer(writer)))
        .init();

    tracing::info!("Starting Vind GUI...");

    let options = LaunchOptions::from_args(std::env::args().skip(1));
    run_app(options).inspect_err(|e| tracing::error!(error = %e, "Vind GUI failed to start"))?;
    Ok(())
}
