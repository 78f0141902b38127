//! Gameplay tuning.
//!
//! The static part is plain configuration, optionally overridden from a TOML
//! file. The dynamic part (current speeds, point value, fleet direction) is
//! what levels scale up; it is restored by [`Settings::reset_dynamic`] at the
//! start of every game.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    // Screen
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    // Ship
    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_color: Rgb,
    pub ship_limit: u32,
    pub initial_ship_speed: f32,

    // Bullets
    pub initial_bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullets_allowed: usize,

    // Aliens
    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_color: Rgb,
    pub initial_alien_speed: f32,
    pub initial_alien_points: u64,
    pub fleet_drop_speed: i32,

    // Level scaling
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Pacing
    pub frames_per_second: u32,
    pub ship_hit_pause_ms: u64,

    // Dynamic
    #[serde(skip)]
    pub ship_speed: f32,
    #[serde(skip)]
    pub bullet_speed: f32,
    #[serde(skip)]
    pub alien_speed: f32,
    #[serde(skip)]
    pub alien_points: u64,
    /// 1 moves the fleet right, -1 left.
    #[serde(skip)]
    pub fleet_direction: i32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: (230, 230, 230),

            ship_width: 60,
            ship_height: 48,
            ship_color: (40, 90, 200),
            ship_limit: 3,
            initial_ship_speed: 1.5,

            initial_bullet_speed: 3.0,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: (60, 60, 60),
            bullets_allowed: 3,

            alien_width: 60,
            alien_height: 58,
            alien_color: (40, 160, 60),
            initial_alien_speed: 1.0,
            initial_alien_points: 50,
            fleet_drop_speed: 10,

            speedup_scale: 1.1,
            score_scale: 1.5,

            frames_per_second: 60,
            ship_hit_pause_ms: 500,

            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            alien_points: 0,
            fleet_direction: 1,
        };
        settings.reset_dynamic();
        settings
    }
}

impl Settings {
    /// Load overrides from a TOML file. Keys not present keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Parse overrides from TOML text; `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let mut settings: Settings = toml::from_str(text).map_err(|source| Error::SettingsParse {
            path: origin.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        settings.reset_dynamic();
        Ok(settings)
    }

    /// Restore the values that change as the game progresses.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = self.initial_ship_speed;
        self.bullet_speed = self.initial_bullet_speed;
        self.alien_speed = self.initial_alien_speed;
        self.alien_points = self.initial_alien_points;
        self.fleet_direction = 1;
    }

    /// Called once per cleared fleet.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        // Float-to-int casts saturate, so deep levels pin at u64::MAX.
        self.alien_points = (self.alien_points as f64 * f64::from(self.score_scale)) as u64;
    }

    pub fn reverse_fleet(&mut self) {
        self.fleet_direction = -self.fleet_direction;
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frames_per_second.max(1)))
    }

    /// The ship-hit pause expressed in whole frames, never less than one.
    pub fn hit_pause_ticks(&self) -> u32 {
        let ticks = self.ship_hit_pause_ms as f64 * f64::from(self.frames_per_second) / 1000.0;
        (ticks.round() as u32).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
        ];
        for (name, value) in positive {
            if value <= 0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.fleet_drop_speed < 0 {
            return Err(invalid(format!(
                "fleet_drop_speed must not be negative, got {}",
                self.fleet_drop_speed
            )));
        }

        let speeds = [
            ("initial_ship_speed", self.initial_ship_speed),
            ("initial_bullet_speed", self.initial_bullet_speed),
            ("initial_alien_speed", self.initial_alien_speed),
        ];
        for (name, value) in speeds {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        for (name, value) in [("speedup_scale", self.speedup_scale), ("score_scale", self.score_scale)] {
            if !(value.is_finite() && value > 1.0) {
                return Err(invalid(format!("{name} must be greater than 1, got {value}")));
            }
        }

        if self.ship_limit == 0 {
            return Err(invalid("ship_limit must be at least 1".into()));
        }
        if self.bullets_allowed == 0 {
            return Err(invalid("bullets_allowed must be at least 1".into()));
        }
        if self.frames_per_second == 0 {
            return Err(invalid("frames_per_second must be at least 1".into()));
        }
        if self.ship_width > self.screen_width {
            return Err(invalid("ship is wider than the screen".into()));
        }

        let (columns, rows) = super::fleet::layout(self);
        if columns == 0 || rows == 0 {
            return Err(invalid(format!(
                "a {}x{} screen has no room for a fleet of {}x{} aliens",
                self.screen_width, self.screen_height, self.alien_width, self.alien_height
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidSetting(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.ship_speed, 1.5);
        assert_eq!(settings.bullet_speed, 3.0);
        assert_eq!(settings.alien_speed, 1.0);
        assert_eq!(settings.alien_points, 50);
        assert_eq!(settings.fleet_direction, 1);
    }

    #[test]
    fn increase_speed_scales_speeds_and_points() {
        let mut settings = Settings::default();
        settings.increase_speed();
        assert!((settings.ship_speed - 1.65).abs() < 1e-5);
        assert!((settings.bullet_speed - 3.3).abs() < 1e-5);
        assert!((settings.alien_speed - 1.1).abs() < 1e-5);
        assert_eq!(settings.alien_points, 75);

        settings.increase_speed();
        assert_eq!(settings.alien_points, 112);
    }

    #[test]
    fn alien_points_grow_exactly_then_saturate() {
        let mut settings = Settings::default();
        let mut previous = settings.alien_points;
        for _ in 0..200 {
            settings.increase_speed();
            if previous < 1 << 50 {
                assert_eq!(settings.alien_points, previous * 3 / 2);
            } else {
                assert!(settings.alien_points >= previous);
            }
            previous = settings.alien_points;
        }
        assert_eq!(settings.alien_points, u64::MAX);
    }

    #[test]
    fn reset_dynamic_restores_baseline() {
        let mut settings = Settings::default();
        settings.increase_speed();
        settings.increase_speed();
        settings.reverse_fleet();

        settings.reset_dynamic();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn hit_pause_is_half_a_second_of_frames() {
        let mut settings = Settings::default();
        assert_eq!(settings.hit_pause_ticks(), 30);

        settings.ship_hit_pause_ms = 0;
        assert_eq!(settings.hit_pause_ticks(), 1);
    }

    #[test]
    fn toml_overrides_keep_missing_defaults() {
        let text = "bullets_allowed = 5\ninitial_alien_speed = 2.5\nbg_color = [0, 0, 0]\n";
        let settings = Settings::from_toml_str(text, Path::new("test.toml")).unwrap();
        assert_eq!(settings.bullets_allowed, 5);
        assert_eq!(settings.alien_speed, 2.5);
        assert_eq!(settings.bg_color, (0, 0, 0));
        assert_eq!(settings.screen_width, 1200);
        assert_eq!(settings.ship_limit, 3);
    }

    #[test]
    fn toml_rejects_unknown_keys_and_dynamic_fields() {
        let err = Settings::from_toml_str("alien_speed = 9.0\n", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, Error::SettingsParse { .. }));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let cases = [
            "speedup_scale = 1.0\n",
            "bullets_allowed = 0\n",
            "alien_width = 0\n",
            "screen_height = 100\n",
            "frames_per_second = 0\n",
        ];
        for text in cases {
            let err = Settings::from_toml_str(text, Path::new("x.toml")).unwrap_err();
            assert!(matches!(err, Error::InvalidSetting(_)), "{text} -> {err}");
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("alien-invasion-does-not-exist.toml");
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, Error::SettingsRead { .. }));
    }
}
