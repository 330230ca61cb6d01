/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name used for the config file in every resolved location.
const CONFIG_FILE_NAME: &str = "statepad.json";

/// Environment variable overriding the config file location.
const CONFIG_ENV_VAR: &str = "STATEPAD_CONFIG";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Starting state for the editor scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorDefaults {
    pub initial_content: String,
}

impl Default for EditorDefaults {
    fn default() -> Self {
        Self {
            initial_content: "Initial content".to_string(),
        }
    }
}

/// Starting state for the game scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDefaults {
    pub level: u32,
    /// Starting health, 0..=100.
    pub health: u32,
    pub position: String,
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            level: 1,
            health: 100,
            position: "start".to_string(),
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,
    pub editor: EditorDefaults,
    pub game: GameDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            editor: EditorDefaults::default(),
            game: GameDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `STATEPAD_CONFIG` environment variable
    /// 2. `statepad/statepad.json` in the platform config directory
    /// 3. `statepad.json` next to the executable
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        if let Some(dir) = dirs::config_dir() {
            return dir.join("statepad").join(CONFIG_FILE_NAME);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        let level = self.log_level.trim().to_ascii_lowercase();
        self.log_level = if VALID_LOG_LEVELS.contains(&level.as_str()) {
            level
        } else {
            "info".to_string()
        };

        self.game.level = self.game.level.max(1);
        self.game.health = self.game.health.min(100);
        if self.game.position.trim().is_empty() {
            self.game.position = GameDefaults::default().position;
        }
    }
}
