//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI showcase.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use tracing::{error, info};

use crate::app::showcase::Showcase;
use crate::assets::Assets;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, WINDOW_TITLE};
use crate::settings::UiSettings;
use crate::surface;

actions!(dashboard_ui, [Quit]);

/// Run the showcase application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        if surface::init().is_err() {
            cx.quit();
            return;
        }

        let settings = UiSettings::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load settings, using defaults");
            UiSettings::default()
        });
        cx.set_global(settings);

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(WINDOW_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Showcase::new(window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open showcase window");
            cx.quit();
            return;
        }

        info!("Showcase window opened");
        cx.activate(true);
    });
}
