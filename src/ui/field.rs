//! Braille rendering of the logical play field.
//!
//! Each terminal cell holds a 2x4 grid of braille dots, so a `w`x`h` cell
//! area gives a `2w`x`4h` dot canvas. Logical pixels are scaled onto that
//! canvas independently on each axis.

use std::collections::HashMap;

use ratatui::prelude::*;

use crate::game::rect::Rect as PixelRect;
use crate::game::settings::{Rgb, Settings};
use crate::game::{AlienInvasion, Sprite};

type DotMap = HashMap<(usize, usize), u8>;

const ALIEN_SPRITE: &[&str] = &[
    "..#.....#..",
    "...#...#...",
    "..#######..",
    ".##.###.##.",
    "###########",
    "#.#######.#",
    "#.#.....#.#",
    "...##.##...",
];

const SHIP_SPRITE: &[&str] = &[
    "....#....",
    "...###...",
    "...###...",
    ".#######.",
    "#########",
    "#########",
];

const SOLID: &[&str] = &["#"];

/// Dot canvas dimensions plus the logical screen it represents.
struct Canvas {
    bw: i32,
    bh: i32,
    screen_w: i32,
    screen_h: i32,
}

impl Canvas {
    fn new(width: usize, height: usize, settings: &Settings) -> Self {
        Self {
            bw: (width * 2) as i32,
            bh: (height * 4) as i32,
            screen_w: settings.screen_width,
            screen_h: settings.screen_height,
        }
    }

    /// Dot span covered by a pixel span; never empty so thin things stay visible.
    fn span(start: i32, end: i32, dots: i32, pixels: i32) -> (i32, i32) {
        let d0 = (start * dots).div_euclid(pixels);
        let d1 = (end * dots).div_euclid(pixels).max(d0 + 1);
        (d0, d1)
    }

    /// Scale `sprite` into `rect`, nearest-neighbour.
    fn stamp(&self, map: &mut DotMap, rect: PixelRect, sprite: &[&str]) {
        let (x0, x1) = Self::span(rect.left(), rect.right(), self.bw, self.screen_w);
        let (y0, y1) = Self::span(rect.top(), rect.bottom(), self.bh, self.screen_h);
        let rows = sprite.len() as i32;
        let cols = sprite[0].len() as i32;

        for by in y0..y1 {
            let v = ((by - y0) * rows / (y1 - y0)) as usize;
            let row = sprite[v].as_bytes();
            for bx in x0..x1 {
                let u = ((bx - x0) * cols / (x1 - x0)) as usize;
                if row[u] == b'#' {
                    set_dot(map, bx, by, self.bw, self.bh);
                }
            }
        }
    }
}

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut DotMap, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    let sx = bx as usize % 2;
    let sy = by as usize % 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(sx, sy);
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bg: Color, bold: bool) {
    let h = grid.len();
    for (&(cx, cy), &bits) in map {
        if cy < h && cx < grid[cy].len() && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(bg);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            grid[cy][cx] = (ch, style);
        }
    }
}

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Draw aliens, bullets and the ship into `width`x`height` cells.
pub fn render_field(game: &AlienInvasion, width: usize, height: usize) -> Vec<Line<'static>> {
    let settings = &game.settings;
    let canvas = Canvas::new(width, height, settings);
    let bg = rgb(settings.bg_color);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', Style::default().bg(bg)); width]; height];

    let mut aliens = DotMap::new();
    for alien in &game.aliens {
        canvas.stamp(&mut aliens, alien.rect(), ALIEN_SPRITE);
    }
    write_layer(&mut grid, &aliens, rgb(settings.alien_color), bg, false);

    let mut bullets = DotMap::new();
    for bullet in &game.bullets {
        canvas.stamp(&mut bullets, bullet.rect(), SOLID);
    }
    write_layer(&mut grid, &bullets, rgb(settings.bullet_color), bg, true);

    let mut ship = DotMap::new();
    canvas.stamp(&mut ship, game.ship.rect(), SHIP_SPRITE);
    write_layer(&mut grid, &ship, rgb(settings.ship_color), bg, true);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
