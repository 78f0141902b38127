use alien_invasion::game::alien::Alien;
use alien_invasion::game::bullet::Bullet;
use alien_invasion::game::fleet;
use alien_invasion::game::ship::Ship;
use alien_invasion::game::stats::GameStats;
use alien_invasion::game::Sprite;
use alien_invasion::{AlienInvasion, Settings};

use proptest::prelude::*;

fn playing() -> AlienInvasion {
    let mut game = AlienInvasion::default();
    game.start_game();
    game
}

fn snapshot(stats: &GameStats) -> (u64, u32, u32, bool) {
    (stats.score, stats.level, stats.ships_left, stats.game_active)
}

// ── Fleet layout ──────────────────────────────────────────────────────────────

#[test]
fn layout_matches_reference_dimensions() {
    let settings = Settings {
        alien_width: 40,
        alien_height: 30,
        ship_height: 50,
        ..Settings::default()
    };
    assert_eq!(fleet::layout(&settings), (14, 10));
    assert_eq!(fleet::create_fleet(&settings).len(), 140);
}

// ── Firing ────────────────────────────────────────────────────────────────────

#[test]
fn firing_at_the_cap_is_a_no_op() {
    let mut game = playing();
    while game.bullets.len() < game.settings.bullets_allowed {
        assert!(game.fire_bullet());
    }
    assert!(!game.fire_bullet());
    assert_eq!(game.bullets.len(), 3);
}

#[test]
fn bullets_spawn_at_the_ship_nose() {
    let mut game = playing();
    game.fire_bullet();
    assert_eq!(game.bullets[0].rect().midtop(), game.ship.rect().midtop());
}

// ── Collisions ────────────────────────────────────────────────────────────────

#[test]
fn two_bullets_on_one_alien_score_it_once() {
    let mut game = playing();
    let points = game.settings.alien_points;
    game.aliens = vec![
        Alien::new(&game.settings, 100, 300),
        Alien::new(&game.settings, 700, 100),
    ];
    game.bullets = vec![
        Bullet::new(&game.settings, (120, 320)),
        Bullet::new(&game.settings, (140, 330)),
    ];
    game.tick();

    assert_eq!(game.stats.score, points);
    assert_eq!(game.aliens.len(), 1);
    // The second bullet found nothing left to hit and keeps flying.
    assert_eq!(game.bullets.len(), 1);
}

#[test]
fn clearing_a_fleet_regenerates_and_speeds_up_once() {
    let mut game = playing();
    let full = fleet::create_fleet(&game.settings).len();
    let speed = game.settings.alien_speed;
    game.aliens = vec![Alien::new(&game.settings, 100, 300)];
    game.bullets = vec![Bullet::new(&game.settings, (130, 320))];
    game.tick();

    assert_eq!(game.aliens.len(), full);
    assert_eq!(game.stats.level, 2);
    let expected = speed * game.settings.speedup_scale;
    assert!((game.settings.alien_speed - expected).abs() < 1e-6);
}

// ── Ship hits ─────────────────────────────────────────────────────────────────

#[test]
fn ship_hit_with_spare_ships_resets_the_board() {
    let mut game = playing();
    game.ship.moving_right = true;
    for _ in 0..40 {
        game.tick();
    }
    game.fire_bullet();
    game.aliens.truncate(3);

    game.ship_hit();
    assert_eq!(game.stats.ships_left, 2);
    assert!(game.is_active());
    assert!(game.bullets.is_empty());
    assert_eq!(game.aliens.len(), 36);
    assert_eq!(game.ship.rect().center().0, 600);
}

#[test]
fn losing_every_ship_ends_the_game() {
    let mut game = playing();
    for _ in 0..game.settings.ship_limit {
        assert!(game.is_active());
        game.ship_hit();
    }
    assert!(!game.is_active());
    assert_eq!(game.scoreboard.ships, 0);
    assert!(game.cursor_visible());

    // The play button works again.
    assert!(game.click((600, 400)));
    assert!(game.is_active());
}

#[test]
fn an_undefended_fleet_eventually_lands() {
    let mut game = playing();
    let mut frames = 0;
    while game.is_active() && frames < 200_000 {
        game.tick();
        frames += 1;
    }
    assert!(!game.is_active());
    assert_eq!(game.stats.score, 0);
    assert_eq!(game.stats.level, 1);
}

// ── New game ──────────────────────────────────────────────────────────────────

#[test]
fn new_game_twice_gives_identical_stats() {
    let mut game = playing();
    game.stats.score = 4_321;
    game.scoreboard.check_high_score(&mut game.stats);
    game.stats.level = 7;
    for _ in 0..game.settings.ship_limit {
        game.ship_hit();
    }

    game.start_game();
    let first = snapshot(&game.stats);
    game.start_game();
    let second = snapshot(&game.stats);

    assert_eq!(first, second);
    assert_eq!(first, (0, 1, 3, true));
    assert_eq!(game.stats.high_score, 4_321);
    assert_eq!(game.scoreboard.high_score, "4,320");
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ship_never_leaves_the_screen(moves in prop::collection::vec((any::<bool>(), any::<bool>()), 1..400)) {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        for (left, right) in moves {
            ship.moving_left = left;
            ship.moving_right = right;
            ship.update(&settings);
            let rect = ship.rect();
            prop_assert!(rect.left() >= 0);
            prop_assert!(rect.right() <= settings.screen_width);
        }
    }

    #[test]
    fn fleet_fits_between_margins(aw in 8i32..200, ah in 8i32..150, ship_h in 8i32..120) {
        let settings = Settings {
            alien_width: aw,
            alien_height: ah,
            ship_height: ship_h,
            ..Settings::default()
        };
        let (columns, rows) = fleet::layout(&settings);
        let aliens = fleet::create_fleet(&settings);
        prop_assert_eq!(aliens.len(), (columns * rows) as usize);
        for alien in &aliens {
            let rect = alien.rect();
            prop_assert!(rect.left() >= aw);
            prop_assert!(rect.right() <= settings.screen_width - aw);
            prop_assert!(rect.bottom() <= settings.screen_height - 2 * ah - ship_h);
        }
    }
}
