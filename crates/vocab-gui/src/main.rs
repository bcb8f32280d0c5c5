//! Vocabulary Studio - Desktop GUI Application
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use anyhow::Context;
use iced::{Size, window};
use tracing_subscriber::EnvFilter;
use vocab_gui::app::App;
use vocab_gui::component::LUCIDE_FONT_BYTES;
use vocab_gui::state::Settings;

/// Application entry point.
fn main() -> anyhow::Result<()> {
    let settings = Settings::load();

    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Vocabulary Studio");

    if !Settings::config_path().exists()
        && let Err(err) = settings.save()
    {
        tracing::warn!("{}", err);
    }

    let boot = move || App::new(settings.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(720.0, 640.0),
            min_size: Some(Size::new(480.0, 400.0)),
            ..Default::default()
        })
        .run()
        .context("GUI event loop failed")
}
