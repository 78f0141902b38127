use std::{env, path::PathBuf};

use crate::error::{Error, Result};
use crate::game::settings::Settings;

// Runtime knobs read from the environment (gameplay tuning lives in Settings).

pub const SETTINGS_ENV: &str = "ALIEN_INVASION_SETTINGS";
pub const LOG_ENV: &str = "ALIEN_INVASION_LOG";
pub const FPS_ENV: &str = "ALIEN_INVASION_FPS";

/// TOML file with `Settings` overrides, if any.
pub fn settings_path() -> Option<PathBuf> {
    env::var_os(SETTINGS_ENV).map(PathBuf::from)
}

/// Log file. The terminal belongs to the game, so logs only go to a file.
pub fn log_path() -> Option<PathBuf> {
    env::var_os(LOG_ENV).map(PathBuf::from)
}

pub fn fps_override() -> Result<Option<u32>> {
    match env::var(FPS_ENV) {
        Ok(value) => parse_fps(&value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_fps(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(fps) if fps > 0 => Ok(fps),
        _ => Err(Error::InvalidSetting(format!(
            "{FPS_ENV} must be a positive integer, got {value:?}"
        ))),
    }
}

/// Defaults, then the settings file, then the frame rate override.
pub fn load_settings() -> Result<Settings> {
    let mut settings = match settings_path() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    if let Some(fps) = fps_override()? {
        settings.frames_per_second = fps;
    }
    Ok(settings)
}
