pub mod config;

pub use config::{AppConfig, EditorDefaults, GameDefaults};
