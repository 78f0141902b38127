use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tracing::info;

use crate::event::Event;
use crate::game::settings::Settings;
use crate::game::AlienInvasion;

/// How long a freshly pressed key counts as held without further events.
/// Covers the OS delay before key repeat kicks in.
const FIRST_PRESS_HOLD: Duration = Duration::from_millis(500);
/// How long a repeating key counts as held after its last repeat.
const REPEAT_HOLD: Duration = Duration::from_millis(120);

#[derive(Clone, Copy)]
struct Held {
    last_frame: u64,
    repeating: bool,
}

/// Movement keys currently held down.
///
/// Terminals with keyboard enhancement report releases, and a key stays held
/// until its release arrives. Elsewhere only presses (and OS repeats that look
/// like presses) are seen, so a key expires after a quiet window instead.
pub struct HeldKeys {
    keys: HashMap<KeyCode, Held>,
    reports_release: bool,
    first_press_frames: u64,
    repeat_frames: u64,
}

impl HeldKeys {
    pub fn new(reports_release: bool, frames_per_second: u32) -> Self {
        Self {
            keys: HashMap::new(),
            reports_release,
            first_press_frames: frames_for(FIRST_PRESS_HOLD, frames_per_second),
            repeat_frames: frames_for(REPEAT_HOLD, frames_per_second),
        }
    }

    pub fn press(&mut self, code: KeyCode, frame: u64) {
        self.keys
            .entry(code)
            .and_modify(|held| {
                held.last_frame = frame;
                held.repeating = true;
            })
            .or_insert(Held {
                last_frame: frame,
                repeating: false,
            });
    }

    pub fn release(&mut self, code: KeyCode) {
        self.keys.remove(&code);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        let Some(held) = self.keys.get(&code) else {
            return false;
        };
        if self.reports_release {
            return true;
        }
        let window = if held.repeating {
            self.repeat_frames
        } else {
            self.first_press_frames
        };
        frame.saturating_sub(held.last_frame) <= window
    }
}

fn frames_for(window: Duration, frames_per_second: u32) -> u64 {
    ((window.as_millis() as u64 * u64::from(frames_per_second)) / 1000).max(1)
}

pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    /// Terminal area the field was last drawn into; maps clicks back to
    /// logical pixels.
    pub field_area: Rect,
    held: HeldKeys,
    frame: u64,
}

impl App {
    pub fn new(settings: Settings, reports_release: bool) -> Self {
        let held = HeldKeys::new(reports_release, settings.frames_per_second);
        Self {
            should_quit: false,
            game: AlienInvasion::new(settings),
            field_area: Rect::default(),
            held,
            frame: 0,
        }
    }

    pub fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Click { column, row } => self.on_click(column, row),
            Event::Resize => {}
        }
    }

    pub fn on_tick(&mut self) {
        self.frame += 1;
        self.game.ship.moving_left = self.held.is_held(KeyCode::Left, self.frame);
        self.game.ship.moving_right = self.held.is_held(KeyCode::Right, self.frame);
        self.game.tick();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Release => {
                self.held.release(key.code);
                return;
            }
            KeyEventKind::Repeat => {
                if is_movement(key.code) {
                    self.held.press(key.code, self.frame);
                }
                return;
            }
            KeyEventKind::Press => {}
        }

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Right => self.held.press(key.code, self.frame),
            KeyCode::Char(' ') => {
                self.game.fire_bullet();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => self.game.start_game(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        if let Some(pos) = crate::ui::to_logical(self.field_area, &self.game.settings, column, row) {
            self.game.click(pos);
        }
    }

    fn quit(&mut self) {
        info!(
            score = self.game.stats.score,
            high_score = self.game.stats.high_score,
            "quit"
        );
        self.held.clear();
        self.should_quit = true;
    }
}

fn is_movement(code: KeyCode) -> bool {
    matches!(code, KeyCode::Left | KeyCode::Right)
}
