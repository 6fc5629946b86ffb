// PX to REM Converter - unit conversion widget with native GUI

#![warn(clippy::all)]
#![windows_subsystem = "windows"]

mod app;
mod convert;
mod store;
mod theme;
mod types;

use app::PxRemConverter;
use iced::{application, Font, Settings, Size};
use theme::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    application(
        "PX to REM Converter",
        PxRemConverter::update,
        PxRemConverter::view,
    )
    .theme(PxRemConverter::theme)
    .settings(Settings {
        default_font: Font::DEFAULT,
        default_text_size: theme::FONT_MD.into(),
        antialiasing: true,
        ..Settings::default()
    })
    .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
    .run_with(PxRemConverter::new)
}
