//! Settings file loading
//!
//! `settings.ron` overrides any subset of `GameSettings`; everything missing
//! keeps its default. A broken file never stops the game from starting.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use shared::{Keybinds, ModelKind, MovementTuning, ProjectileTuning};

/// Default settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = "settings.ron";

/// Environment variable that points at an alternative settings file.
pub const SETTINGS_ENV: &str = "GRASSLAND_SETTINGS";

/// Errors from reading the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid value: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Borderless fullscreen on the current monitor.
    pub fullscreen: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Grassland".to_string(),
            width: 1280,
            height: 720,
            fullscreen: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Optional asset overrides, relative to the asset folder.
///
/// When unset the client generates its own stand-ins.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub grass_texture: Option<String>,
    /// glTF files; scene 0 is used.
    pub bullet_model: Option<String>,
    pub beach_ball_model: Option<String>,
}

impl AssetSettings {
    pub fn model_path(&self, kind: ModelKind) -> Option<&str> {
        match kind {
            ModelKind::Bullet => self.bullet_model.as_deref(),
            ModelKind::BeachBall => self.beach_ball_model.as_deref(),
        }
    }
}

/// Everything tweakable without recompiling.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub movement: MovementTuning,
    pub projectiles: ProjectileTuning,
    pub keybinds: Keybinds,
    pub assets: AssetSettings,
    /// `tracing` env-filter directives passed to the log plugin.
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            camera: CameraSettings::default(),
            movement: MovementTuning::default(),
            projectiles: ProjectileTuning::default(),
            keybinds: Keybinds::default(),
            assets: AssetSettings::default(),
            log_filter: "wgpu=error,naga=warn".to_string(),
        }
    }
}

impl GameSettings {
    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = ron::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.movement.validate().map_err(SettingsError::Invalid)?;
        self.projectiles.validate().map_err(SettingsError::Invalid)?;
        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(SettingsError::Invalid(format!(
                "camera.fov_degrees must be in (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(SettingsError::Invalid(format!(
                "camera planes need 0 < near < far, got near {} far {}",
                camera.near, camera.far
            )));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_ron(&text)
    }
}

/// Where the active settings came from.
///
/// Logging isn't up until the app is built, so the outcome is kept and
/// reported by `log_settings_origin` at startup.
#[derive(Resource, Clone, Debug, PartialEq)]
pub enum SettingsOrigin {
    File(PathBuf),
    Defaults,
    Fallback { path: PathBuf, error: String },
}

/// Settings path: `$GRASSLAND_SETTINGS`, or `settings.ron` in the working directory.
pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

/// Load settings, falling back to defaults on any error.
pub fn load_or_default(path: &Path) -> (GameSettings, SettingsOrigin) {
    match GameSettings::load(path) {
        Ok(settings) => (settings, SettingsOrigin::File(path.to_path_buf())),
        Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            (GameSettings::default(), SettingsOrigin::Defaults)
        }
        Err(e) => (
            GameSettings::default(),
            SettingsOrigin::Fallback {
                path: path.to_path_buf(),
                error: e.to_string(),
            },
        ),
    }
}

pub fn log_settings_origin(origin: Res<SettingsOrigin>) {
    match origin.as_ref() {
        SettingsOrigin::File(path) => info!("Loaded settings from {:?}", path),
        SettingsOrigin::Defaults => info!("No settings file found, using defaults"),
        SettingsOrigin::Fallback { path, error } => {
            warn!("Ignoring settings file {:?} ({}); using defaults", path, error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("grassland-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = GameSettings::from_ron(
            "(window: (fullscreen: false), movement: (walk_speed: 2.5), keybinds: (jump: KeyF))",
        )
        .unwrap();

        assert!(!settings.window.fullscreen);
        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.movement.walk_speed, 2.5);
        assert_eq!(settings.movement.sprint_multiplier, 3.0);
        assert_eq!(settings.keybinds.jump, KeyCode::KeyF);
        assert_eq!(settings.camera.fov_degrees, 45.0);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(GameSettings::from_ron("()").unwrap(), GameSettings::default());
    }

    #[test]
    fn test_example_file_parses() {
        let settings = GameSettings::from_ron(include_str!("../../settings.example.ron")).unwrap();
        assert!(!settings.window.fullscreen);
        assert_eq!(settings.keybinds, Keybinds::default());
        assert_eq!(settings.movement, MovementTuning::default());
        assert_eq!(settings.projectiles, ProjectileTuning::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("grassland-does-not-exist.ron");
        let (settings, origin) = load_or_default(&path);
        assert_eq!(settings, GameSettings::default());
        assert_eq!(origin, SettingsOrigin::Defaults);
    }

    #[test]
    fn test_bad_file_falls_back() {
        let path = temp_file("bad.ron", "(window: (width: \"wide\"))");
        assert!(matches!(GameSettings::load(&path), Err(SettingsError::Parse(_))));

        let (settings, origin) = load_or_default(&path);
        assert_eq!(settings, GameSettings::default());
        assert!(matches!(origin, SettingsOrigin::Fallback { .. }));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_tuning_falls_back() {
        let path = temp_file("invalid.ron", "(movement: (zoom_rate: -1.0, pitch_limit_degrees: -10.0))");
        assert!(matches!(GameSettings::load(&path), Err(SettingsError::Invalid(_))));

        let (settings, origin) = load_or_default(&path);
        assert_eq!(settings, GameSettings::default());
        match origin {
            SettingsOrigin::Fallback { error, .. } => assert!(error.contains("movement.")),
            other => panic!("expected fallback, got {other:?}"),
        }
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_camera_is_rejected() {
        assert!(matches!(
            GameSettings::from_ron("(camera: (near: 10.0, far: 1.0))"),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            GameSettings::from_ron("(camera: (fov_degrees: 0.0))"),
            Err(SettingsError::Invalid(_))
        ));
    }

    #[test]
    fn test_model_paths_by_kind() {
        let settings = GameSettings::from_ron(
            "(assets: (beach_ball_model: Some(\"ball.glb\")), projectiles: (model: BeachBall))",
        )
        .unwrap();
        assert_eq!(settings.projectiles.model, ModelKind::BeachBall);
        assert_eq!(settings.assets.model_path(ModelKind::BeachBall), Some("ball.glb"));
        assert_eq!(settings.assets.model_path(ModelKind::Bullet), None);
    }

    #[test]
    fn test_good_file_is_loaded() {
        let path = temp_file("good.ron", "(assets: (grass_texture: Some(\"grass.png\")))");
        let (settings, origin) = load_or_default(&path);
        assert_eq!(settings.assets.grass_texture.as_deref(), Some("grass.png"));
        assert_eq!(origin, SettingsOrigin::File(path.clone()));
        let _ = std::fs::remove_file(path);
    }
}
