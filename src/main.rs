use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use alien_invasion::app::App;
use alien_invasion::config;
use alien_invasion::event::EventHandler;
use alien_invasion::ui;

fn init_tracing(path: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Leave the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, cursor::Show);
        tracing::error!(%info, "panic");
        default_hook(info);
    }));
}

fn main() -> anyhow::Result<()> {
    let settings = config::load_settings().context("loading settings")?;
    init_tracing(config::log_path())?;
    install_panic_hook();
    info!(fps = settings.frames_per_second, "starting alien invasion");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

    // Key release events let held arrows stop exactly; other terminals fall
    // back to repeat-based holding.
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true))
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(settings, keyboard_enhanced);
    let events = EventHandler::new();

    let result = run(&mut terminal, &mut app, &events);

    // Restore terminal
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result.context("running game loop")
}

fn run<B: Backend + Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    let frame_interval = app.game.settings.frame_interval();
    let mut mouse_captured = true;

    loop {
        let frame_start = Instant::now();

        for event in events.pending()? {
            app.on_event(event);
        }
        if app.should_quit {
            return Ok(());
        }

        app.on_tick();

        // Mouse input only matters while the play button is up.
        let want_mouse = app.game.cursor_visible();
        if want_mouse != mouse_captured {
            if want_mouse {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            mouse_captured = want_mouse;
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_interval {
            thread::sleep(frame_interval - elapsed);
        }
    }
}
