//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;

use crate::app::entities::{AppEntities, EnrollmentService};
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{default_settings_path, load_settings_or_default};
use crate::i18n::t;
use crate::services::{FilePreferenceStore, HttpEnrollmentClient};

actions!(online_learning, [Quit]);

/// Run the Online Learning application
pub fn run_app() -> anyhow::Result<()> {
    let settings_path = default_settings_path()?;
    let settings = load_settings_or_default(&settings_path);
    let client = HttpEnrollmentClient::new(&settings.enrollment)?;
    tracing::info!(endpoint = client.endpoint(), "Enrollment endpoint configured");

    let store = FilePreferenceStore::new(settings_path);

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(Box::new(store), cx);
        cx.set_global(entities.clone());
        cx.set_global(EnrollmentService::new(client));

        let language = entities.i18n.read(cx).language();

        // Create main window
        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(t(language, "app.title"))),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let workspace = cx.new(|cx| Workspace::new(entities.clone(), cx));
            cx.new(|cx| Root::new(workspace, window, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open main window: {}", e);
            cx.quit();
            return;
        }

        cx.activate(true);
    });

    Ok(())
}
