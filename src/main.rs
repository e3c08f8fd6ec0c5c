// SPDX-License-Identifier: GPL-3.0-only

//! Floatboard demo host
//!
//! Opens a window with one text field. Clicking the field shows the
//! floating keyboard, which can be dragged around by its handle.

use floatboard::{app, app_settings, i18n};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("floatboard=info".parse().unwrap()),
        )
        .init();

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            app_settings::DEFAULT_WIDTH,
            app_settings::DEFAULT_HEIGHT,
        ))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(app_settings::MIN_WIDTH)
                .min_height(app_settings::MIN_HEIGHT),
        );

    tracing::info!(
        "Starting {} at {}x{}",
        app_settings::APP_ID,
        app_settings::DEFAULT_WIDTH,
        app_settings::DEFAULT_HEIGHT
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<app::AppModel>(settings, ())
}
