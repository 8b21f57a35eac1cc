//! Maze settings
//!
//! Loaded from a JSON file. Missing fields take their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{MazeError, SettingsError};
use crate::sim::{MazeConfig, WorldDims};

/// Maze and world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Grid ===
    /// Cells per column (cellsVertical)
    pub rows: usize,
    /// Cells per row (cellsHorizontal)
    pub cols: usize,

    // === World ===
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,

    /// Downward gravity once the goal is reached
    pub unlock_gravity: f32,

    /// Fixed seed; a fresh one is picked per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,

            width: 800.0,
            height: 600.0,
            wall_thickness: 5.0,

            unlock_gravity: 1.0,

            seed: None,
        }
    }
}

impl Settings {
    pub fn maze_config(&self) -> MazeConfig {
        MazeConfig {
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn world_dims(&self) -> WorldDims {
        WorldDims {
            width: self.width,
            height: self.height,
            wall_thickness: self.wall_thickness,
        }
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(0.0, self.unlock_gravity)
    }

    /// Reject settings that cannot produce a maze
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(MazeError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(self.unlock_gravity.is_finite() && self.unlock_gravity > 0.0) {
            return Err(MazeError::InvalidGravity {
                gravity: self.unlock_gravity,
            });
        }
        self.world_dims().validate()
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.maze_config(), MazeConfig { rows: 10, cols: 10 });
        assert_eq!(settings.gravity(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "rows": 4, "seed": 12 }"#).unwrap();
        assert_eq!(settings.rows, 4);
        assert_eq!(settings.cols, 10);
        assert_eq!(settings.seed, Some(12));
        assert_eq!(settings.width, 800.0);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "cols": 0 }"#),
            Err(SettingsError::Invalid(MazeError::InvalidDimension { .. }))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "height": -1.0 }"#),
            Err(SettingsError::Invalid(MazeError::InvalidWorldSize { .. }))
        ));
        for gravity in ["0.0", "-1.0"] {
            let json = format!(r#"{{ "unlock_gravity": {gravity} }}"#);
            assert!(matches!(
                Settings::from_json(&json),
                Err(SettingsError::Invalid(MazeError::InvalidGravity { .. }))
            ));
        }
        let nan = Settings {
            unlock_gravity: f32::NAN,
            ..Settings::default()
        };
        assert!(matches!(nan.validate(), Err(MazeError::InvalidGravity { .. })));
        assert!(matches!(
            Settings::from_json(r#"{ "wall_thickness": 0.0 }"#),
            Err(SettingsError::Invalid(MazeError::InvalidWallThickness { thickness })) if thickness == 0.0
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/maze-drop/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
