use super::rect::Rect;
use super::settings::Settings;
use super::Sprite;

/// A single member of the fleet.
///
/// Only `x` moves every frame; the vertical position changes when the whole
/// fleet drops after touching an edge.
#[derive(Debug, Clone)]
pub struct Alien {
    rect: Rect,
    x: f32,
}

impl Alien {
    pub fn new(settings: &Settings, x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
            x: x as f32,
        }
    }

    /// Touching or past the left or right edge of the screen.
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.rect.right() >= settings.screen_width || self.rect.left() <= 0
    }

    pub fn drop_by(&mut self, step: i32) {
        self.rect.y += step;
    }
}

impl Sprite for Alien {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction as f32;
        self.rect.x = self.x as i32;
    }
}
