//! Display-ready text for the HUD.
//!
//! The scoreboard caches formatted strings and is refreshed explicitly by the
//! orchestrator whenever the underlying stat changes, so the renderer never
//! formats numbers itself.

use super::stats::GameStats;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub ships: u32,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Self::default();
        sb.prep_all(stats);
        sb
    }

    pub fn prep_all(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level = stats.level.to_string();
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships = stats.ships_left;
    }

    /// Promote the score to high score when beaten and refresh its text.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.check_high_score() {
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten (halves go up) and group thousands with commas.
pub fn format_score(score: u64) -> String {
    let rounded = score.saturating_add(5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
