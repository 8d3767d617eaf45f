#![windows_subsystem = "windows"]

mod app;
mod i18n;
mod state;
mod task;
mod ui;

use iced::window;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todos=info")),
        )
        .init();

    std::sync::LazyLock::force(&i18n::LANGUAGE_LOADER);

    iced::application(app::Todos::new, app::Todos::update, app::Todos::view)
        .subscription(app::Todos::subscription)
        .title(app::Todos::title)
        .theme(app::Todos::theme)
        .window(window::Settings {
            size: (500.0, 800.0).into(),
            min_size: Some((500.0, 600.0).into()),
            ..window::Settings::default()
        })
        .run()
}
