use super::rect::Rect;
use super::settings::Settings;
use super::Sprite;

/// The player's ship. Moves horizontally along the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Ship {
    rect: Rect,
    /// Sub-pixel horizontal position; `rect.x` is derived from it.
    x: f32,
    pub moving_right: bool,
    pub moving_left: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            rect: Rect::new(0, 0, settings.ship_width, settings.ship_height),
            x: 0.0,
            moving_right: false,
            moving_left: false,
        };
        ship.center(settings);
        ship
    }

    /// Park the ship at the bottom center of the screen.
    pub fn center(&mut self, settings: &Settings) {
        self.rect
            .set_midbottom((settings.screen_width / 2, settings.screen_height));
        self.x = self.rect.x as f32;
    }

    pub fn x(&self) -> f32 {
        self.x
    }
}

impl Sprite for Ship {
    fn rect(&self) -> Rect {
        self.rect
    }

    /// Holding both directions cancels out.
    fn update(&mut self, settings: &Settings) {
        if self.moving_right {
            self.x += settings.ship_speed;
        }
        if self.moving_left {
            self.x -= settings.ship_speed;
        }
        let max_x = (settings.screen_width - self.rect.w) as f32;
        self.x = self.x.clamp(0.0, max_x);
        self.rect.x = self.x as i32;
    }
}
