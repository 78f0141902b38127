//! Alien Invasion: a terminal arcade shooter.
//!
//! - `game`: settings, entities, collision and the per-frame simulation
//! - `app`: terminal input mapped onto game operations
//! - `event`: background terminal event reader
//! - `ui`: ratatui rendering (braille field, scoreboard, play button)
//! - `config`: environment-driven runtime options

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod ui;

pub use error::{Error, Result};
pub use game::settings::Settings;
pub use game::AlienInvasion;
