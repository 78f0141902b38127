//! Alien Invasion game state and per-frame simulation.
//!
//! [`AlienInvasion`] owns every entity plus the settings and stats, and is
//! driven from outside through a handful of input operations and one
//! [`AlienInvasion::tick`] per frame. Nothing in here touches the terminal.

pub mod alien;
pub mod bullet;
pub mod button;
pub mod collision;
pub mod fleet;
pub mod rect;
pub mod scoreboard;
pub mod settings;
pub mod ship;
pub mod stats;

use tracing::{debug, info, warn};

use alien::Alien;
use bullet::Bullet;
use button::Button;
use rect::Rect;
use scoreboard::Scoreboard;
use settings::Settings;
use ship::Ship;
use stats::GameStats;

/// Anything with a bounding rect that advances once per frame.
pub trait Sprite {
    fn rect(&self) -> Rect;
    fn update(&mut self, settings: &Settings);
}

pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub play_button: Button,
    cursor_visible: bool,
    /// Frames left before the simulation resumes after a ship hit.
    hit_pause: u32,
}

impl AlienInvasion {
    pub fn new(settings: Settings) -> Self {
        let stats = GameStats::new(&settings);
        let scoreboard = Scoreboard::new(&stats);
        let ship = Ship::new(&settings);
        let aliens = fleet::create_fleet(&settings);
        let play_button = Button::new(&settings, "Play Game");
        Self {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Vec::new(),
            aliens,
            play_button,
            cursor_visible: true,
            hit_pause: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stats.game_active
    }

    pub fn is_paused(&self) -> bool {
        self.hit_pause > 0
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    // ── Input operations ───────────────────────────────────────────────

    /// Start a fresh game. Allowed at any time; the high score survives.
    pub fn start_game(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset(&self.settings);
        self.stats.game_active = true;
        self.scoreboard.prep_all(&self.stats);

        self.aliens = fleet::create_fleet(&self.settings);
        self.bullets.clear();
        self.ship.center(&self.settings);
        self.hit_pause = 0;
        self.cursor_visible = false;

        info!(high_score = self.stats.high_score, "new game");
    }

    /// Start a game if `pos` (logical pixels) lands on the play button while
    /// no game is running. Returns whether a game was started.
    pub fn click(&mut self, pos: (i32, i32)) -> bool {
        if self.play_button.contains(pos) && !self.stats.game_active {
            self.start_game();
            true
        } else {
            false
        }
    }

    /// Fire from the ship unless the in-flight limit is reached.
    pub fn fire_bullet(&mut self) -> bool {
        if !self.stats.game_active || self.is_paused() {
            return false;
        }
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.bullets
            .push(Bullet::new(&self.settings, self.ship.rect().midtop()));
        true
    }

    // ── Per-frame simulation ───────────────────────────────────────────

    /// Advance one fixed step. Does nothing while inactive or paused.
    pub fn tick(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.hit_pause > 0 {
            self.hit_pause -= 1;
            return;
        }
        self.ship.update(&self.settings);
        self.update_bullets();
        self.update_aliens();
    }

    fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    fn check_bullet_alien_collisions(&mut self) {
        let hits = collision::group_collide(&self.bullets, &self.aliens);
        if !hits.is_empty() {
            let destroyed: usize = hits.iter().map(|hit| hit.targets.len()).sum();
            let earned = self.settings.alien_points.saturating_mul(destroyed as u64);
            self.stats.score = self.stats.score.saturating_add(earned);

            collision::remove_indices(&mut self.bullets, hits.iter().map(|hit| hit.shooter));
            collision::remove_indices(
                &mut self.aliens,
                hits.iter().flat_map(|hit| hit.targets.iter().copied()),
            );

            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
            debug!(destroyed, score = self.stats.score, "aliens destroyed");
        }

        if self.aliens.is_empty() {
            self.aliens = fleet::create_fleet(&self.settings);
            self.settings.increase_speed();
            self.stats.level += 1;
            self.scoreboard.prep_level(&self.stats);
            info!(
                level = self.stats.level,
                alien_speed = self.settings.alien_speed,
                alien_points = self.settings.alien_points,
                "fleet cleared"
            );
        }
    }

    fn update_aliens(&mut self) {
        fleet::check_fleet_edges(&mut self.aliens, &mut self.settings);
        fleet::update_fleet(&mut self.aliens, &self.settings);

        if collision::collide_any(&self.ship, &self.aliens).is_some() {
            warn!(ships_left = self.stats.ships_left, "ship hit by alien");
            self.ship_hit();
            return;
        }
        self.check_aliens_bottom();
    }

    fn check_aliens_bottom(&mut self) {
        let bottom = self.settings.screen_height;
        if self.aliens.iter().any(|alien| alien.rect().bottom() >= bottom) {
            warn!(ships_left = self.stats.ships_left, "alien reached the bottom");
            self.ship_hit();
        }
    }

    /// Lose a ship. With ships to spare the board is reset and the simulation
    /// holds for the hit pause; losing the last one ends the game.
    pub fn ship_hit(&mut self) {
        if self.stats.ships_left > 1 {
            self.stats.ships_left -= 1;
            self.scoreboard.prep_ships(&self.stats);

            self.aliens = fleet::create_fleet(&self.settings);
            self.bullets.clear();
            self.ship.center(&self.settings);

            self.hit_pause = self.settings.hit_pause_ticks();
        } else {
            self.stats.ships_left = 0;
            self.scoreboard.prep_ships(&self.stats);
            self.stats.game_active = false;
            self.hit_pause = 0;
            self.cursor_visible = true;
            info!(
                score = self.stats.score,
                level = self.stats.level,
                high_score = self.stats.high_score,
                "game over"
            );
        }
    }
}

impl Default for AlienInvasion {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
