//! First-person sandbox - renders the world and handles player input

mod camera;
mod crosshair;
mod input;
mod settings;
mod states;
mod systems;
mod ui;

use bevy::asset::AssetPlugin;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::{MonitorSelection, WindowMode, WindowResolution};
use states::GameState;

/// Get the asset path - for bundled macOS apps, use path relative to executable
fn get_asset_path() -> String {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let bundled_assets = exe_dir.join("assets");
            if bundled_assets.exists() {
                return bundled_assets.to_string_lossy().to_string();
            }
        }
    }
    // Fall back to default "assets" folder (for development)
    "assets".to_string()
}

fn main() {
    let (settings, origin) = settings::load_or_default(&settings::settings_path());

    let window = &settings.window;
    let mode = if window.fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: window.title.clone(),
                    resolution: WindowResolution::new(window.width, window.height),
                    mode,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: get_asset_path(),
                ..default()
            })
            .set(LogPlugin {
                filter: settings.log_filter.clone(),
                ..default()
            }),
    );

    // FPS readout in the HUD
    app.add_plugins(FrameTimeDiagnosticsPlugin::default());

    app.init_state::<GameState>();
    app.insert_resource(settings);
    app.insert_resource(origin);
    app.init_resource::<input::InputState>();

    app.add_plugins(ui::HudPlugin);
    app.add_plugins(ui::PauseMenuPlugin);

    // Assets must exist before anything spawns objects.
    app.add_systems(
        Startup,
        (
            settings::log_settings_origin,
            systems::setup_rendering,
            systems::setup_object_assets,
            systems::spawn_ground_grid,
            systems::spawn_player,
            crosshair::spawn_crosshair,
        )
            .chain(),
    );

    app.add_systems(Update, input::handle_exit_key);
    app.add_systems(
        Update,
        input::resume_on_click.run_if(in_state(GameState::Paused)),
    );

    // ORDER MATTERS: input -> player -> spawn -> objects -> camera.
    app.add_systems(
        Update,
        (
            input::pause_on_focus_loss,
            input::read_player_input,
            systems::step_player,
            systems::handle_fire_input,
            systems::update_objects,
            systems::despawn_expired_objects,
            systems::sync_object_transforms,
            camera::update_camera,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    );

    // Drawing keeps going while paused so the frozen scene stays visible.
    app.add_systems(
        Update,
        (
            systems::draw_world_axes,
            systems::draw_object_lines,
            crosshair::update_crosshair_visibility,
        ),
    );

    info!("Starting client");
    app.run();
}
