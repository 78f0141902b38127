//! Fleet layout and collective movement.

use super::alien::Alien;
use super::settings::Settings;
use super::Sprite;

/// Columns and rows of aliens that fit on screen.
///
/// Aliens are spaced one alien-width apart horizontally and one alien-height
/// apart vertically, with a margin of one alien on each side, three alien
/// heights plus the ship kept clear vertically.
pub fn layout(settings: &Settings) -> (u32, u32) {
    let (aw, ah) = (settings.alien_width, settings.alien_height);
    let space_x = settings.screen_width - 2 * aw;
    let space_y = settings.screen_height - 3 * ah - settings.ship_height;
    (fit(space_x, 2 * aw), fit(space_y, 2 * ah))
}

fn fit(space: i32, step: i32) -> u32 {
    if space <= 0 || step <= 0 {
        0
    } else {
        (space / step) as u32
    }
}

/// Top-left corner of the alien at `column`, `row`.
pub fn position(settings: &Settings, column: u32, row: u32) -> (i32, i32) {
    let (aw, ah) = (settings.alien_width, settings.alien_height);
    (aw + 2 * aw * column as i32, ah + 2 * ah * row as i32)
}

/// A full fleet, row by row.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let (columns, rows) = layout(settings);
    let mut aliens = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            let (x, y) = position(settings, column, row);
            aliens.push(Alien::new(settings, x, y));
        }
    }
    aliens
}

/// If any alien touches an edge, drop the whole fleet and reverse it.
/// Returns whether the fleet changed direction.
pub fn check_fleet_edges(aliens: &mut [Alien], settings: &mut Settings) -> bool {
    if !aliens.iter().any(|alien| alien.check_edges(settings)) {
        return false;
    }
    for alien in aliens.iter_mut() {
        alien.drop_by(settings.fleet_drop_speed);
    }
    settings.reverse_fleet();
    true
}

pub fn update_fleet(aliens: &mut [Alien], settings: &Settings) {
    for alien in aliens.iter_mut() {
        alien.update(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(alien: (i32, i32), ship_height: i32) -> Settings {
        Settings {
            alien_width: alien.0,
            alien_height: alien.1,
            ship_height,
            ..Settings::default()
        }
    }

    #[test]
    fn layout_for_40x30_aliens() {
        let settings = sized((40, 30), 50);
        assert_eq!(layout(&settings), (14, 10));
        assert_eq!(create_fleet(&settings).len(), 140);
    }

    #[test]
    fn layout_for_default_sizes() {
        let settings = Settings::default();
        assert_eq!(layout(&settings), (9, 4));
    }

    #[test]
    fn layout_without_room_is_empty() {
        let settings = sized((700, 30), 50);
        assert_eq!(layout(&settings).0, 0);
        assert!(create_fleet(&settings).is_empty());
    }

    #[test]
    fn positions_leave_one_alien_gap() {
        let settings = sized((40, 30), 50);
        let fleet = create_fleet(&settings);
        assert_eq!(fleet[0].rect().x, 40);
        assert_eq!(fleet[0].rect().y, 30);
        assert_eq!(fleet[1].rect().x, 120);
        assert_eq!(fleet[14].rect().x, 40);
        assert_eq!(fleet[14].rect().y, 90);
        let last = fleet.last().unwrap().rect();
        assert_eq!((last.x, last.y), (40 + 80 * 13, 30 + 60 * 9));
    }

    #[test]
    fn edge_contact_drops_and_reverses_everyone() {
        let mut settings = Settings::default();
        let mut fleet = vec![
            Alien::new(&settings, 1140, 58),
            Alien::new(&settings, 500, 174),
        ];
        assert!(check_fleet_edges(&mut fleet, &mut settings));
        assert_eq!(settings.fleet_direction, -1);
        assert_eq!(fleet[0].rect().y, 68);
        assert_eq!(fleet[1].rect().y, 184);
    }

    #[test]
    fn no_edge_contact_leaves_fleet_alone() {
        let mut settings = Settings::default();
        let mut fleet = create_fleet(&settings);
        let before: Vec<_> = fleet.iter().map(|a| a.rect()).collect();
        assert!(!check_fleet_edges(&mut fleet, &mut settings));
        assert_eq!(settings.fleet_direction, 1);
        let after: Vec<_> = fleet.iter().map(|a| a.rect()).collect();
        assert_eq!(before, after);
    }
}
