use super::settings::Settings;

/// Per-game statistics plus the process-lifetime high score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    pub score: u64,
    pub level: u32,
    pub ships_left: u32,
    pub game_active: bool,
    /// Survives `reset`; only ever grows.
    pub high_score: u64,
}

impl GameStats {
    /// The game starts inactive, waiting for the play button.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = Self {
            score: 0,
            level: 1,
            ships_left: 0,
            game_active: false,
            high_score: 0,
        };
        stats.reset(settings);
        stats
    }

    pub fn reset(&mut self, settings: &Settings) {
        self.score = 0;
        self.level = 1;
        self.ships_left = settings.ship_limit;
    }

    /// Promote the current score if it beats the high score. Returns whether it did.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive_with_full_ships() {
        let stats = GameStats::new(&Settings::default());
        assert!(!stats.game_active);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.ships_left, 3);
    }

    #[test]
    fn reset_keeps_high_score() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.score = 1_250;
        stats.level = 4;
        stats.ships_left = 1;
        assert!(stats.check_high_score());

        stats.reset(&settings);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.ships_left, 3);
        assert_eq!(stats.high_score, 1_250);
    }

    #[test]
    fn high_score_never_decreases() {
        let mut stats = GameStats::new(&Settings::default());
        stats.score = 500;
        stats.check_high_score();
        stats.score = 200;
        assert!(!stats.check_high_score());
        assert_eq!(stats.high_score, 500);
    }
}
