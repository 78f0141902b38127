pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::rect::Rect as PixelRect;
use crate::game::settings::Settings;
use crate::game::AlienInvasion;

use field::rgb;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(100, 255, 100))
                .add_modifier(Modifier::BOLD),
        );

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Scoreboard
            Constraint::Min(4),    // Field
            Constraint::Length(1), // Help
        ])
        .split(inner);

    render_scoreboard(frame, &app.game, chunks[0]);

    let field_area = chunks[1];
    app.field_area = field_area;
    if field_area.width > 0 && field_area.height > 0 {
        let lines = field::render_field(
            &app.game,
            field_area.width as usize,
            field_area.height as usize,
        );
        frame.render_widget(Paragraph::new(lines), field_area);
    }

    if !app.game.is_active() {
        render_play_button(frame, &app.game, field_area);
    }

    render_help(frame, &app.game, chunks[2]);
}

fn render_scoreboard(frame: &mut Frame, game: &AlienInvasion, area: Rect) {
    let sb = &game.scoreboard;
    let ships = "\u{25b2} ".repeat(sb.ships as usize);
    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let status = Line::from(vec![
        Span::styled(" \u{1f47e} ", Style::default()),
        Span::styled(
            format!("Ships: {ships}"),
            Style::default()
                .fg(rgb(game.settings.ship_color))
                .add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("Score: {} ", sb.score),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("High: {} ", sb.high_score),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        Span::styled(
            format!("Level: {} ", sb.level),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, game: &AlienInvasion, area: Rect) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };
    let text = |t: &'static str| Span::styled(t, Style::default().fg(Color::DarkGray));

    let line = if !game.is_active() {
        Line::from(vec![
            text(" Click "),
            key("Play Game"),
            text(" or press "),
            key("P"),
            text(" to start | "),
            key("Q"),
            text(" Quit"),
        ])
    } else if game.is_paused() {
        Line::from(vec![Span::styled(
            " SHIP HIT! Get ready... ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )])
    } else {
        Line::from(vec![
            text(" \u{2190}\u{2192} Move | "),
            key("Space"),
            text(" Shoot | "),
            key("P"),
            text(" Restart | "),
            key("Q"),
            text(" Quit"),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_play_button(frame: &mut Frame, game: &AlienInvasion, field_area: Rect) {
    let button = &game.play_button;
    let Some(cells) = to_cells(field_area, &game.settings, button.rect) else {
        return;
    };
    let style = Style::default()
        .fg(rgb(button.text_color))
        .bg(rgb(button.button_color))
        .add_modifier(Modifier::BOLD);

    frame.render_widget(Clear, cells);
    // Vertically center the label inside the button.
    let pad = cells.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); pad as usize];
    lines.push(Line::from(button.label.as_str()));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(style),
        cells,
    );
}

/// Map a terminal cell inside `area` to the logical pixel at its center.
pub fn to_logical(area: Rect, settings: &Settings, column: u16, row: u16) -> Option<(i32, i32)> {
    if area.width == 0
        || area.height == 0
        || column < area.x
        || row < area.y
        || column >= area.x + area.width
        || row >= area.y + area.height
    {
        return None;
    }
    let center = |offset: u16, cells: u16, pixels: i32| -> i32 {
        let doubled = i64::from(offset) * 2 + 1;
        (doubled * i64::from(pixels) / (i64::from(cells) * 2)) as i32
    };
    Some((
        center(column - area.x, area.width, settings.screen_width),
        center(row - area.y, area.height, settings.screen_height),
    ))
}

/// Cells covering a logical rect, at least one cell in each direction.
pub fn to_cells(area: Rect, settings: &Settings, rect: PixelRect) -> Option<Rect> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let scale = |v: i32, cells: u16, pixels: i32| -> u16 {
        let v = v.clamp(0, pixels) as i64;
        (v * i64::from(cells) / i64::from(pixels)) as u16
    };
    let x0 = scale(rect.left(), area.width, settings.screen_width);
    let x1 = scale(rect.right(), area.width, settings.screen_width).max(x0 + 1);
    let y0 = scale(rect.top(), area.height, settings.screen_height);
    let y1 = scale(rect.bottom(), area.height, settings.screen_height).max(y0 + 1);

    let cells = Rect::new(area.x + x0, area.y + y0, x1 - x0, y1 - y0);
    Some(cells.intersection(area))
}
