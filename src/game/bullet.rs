use super::rect::Rect;
use super::settings::Settings;
use super::Sprite;

/// A projectile fired straight up from the ship.
#[derive(Debug, Clone)]
pub struct Bullet {
    rect: Rect,
    y: f32,
}

impl Bullet {
    /// Spawn with the bullet's midtop on `origin` (the ship's midtop).
    pub fn new(settings: &Settings, origin: (i32, i32)) -> Self {
        let mut rect = Rect::new(0, 0, settings.bullet_width, settings.bullet_height);
        rect.set_midtop(origin);
        Self {
            rect,
            y: rect.y as f32,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Fully above the top edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0
    }
}

impl Sprite for Bullet {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
        self.rect.y = self.y as i32;
    }
}
