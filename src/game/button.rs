use super::rect::Rect;
use super::settings::{Rgb, Settings};

/// The "Play Game" button shown while no game is running.
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub button_color: Rgb,
    pub text_color: Rgb,
}

impl Button {
    pub const WIDTH: i32 = 200;
    pub const HEIGHT: i32 = 50;

    pub fn new(settings: &Settings, label: &str) -> Self {
        let mut rect = Rect::new(0, 0, Self::WIDTH, Self::HEIGHT);
        rect.set_center((settings.screen_width / 2, settings.screen_height / 2));
        Self {
            rect,
            label: label.to_string(),
            button_color: (0, 255, 0),
            text_color: (255, 255, 255),
        }
    }

    pub fn contains(&self, pos: (i32, i32)) -> bool {
        self.rect.collidepoint(pos)
    }
}
