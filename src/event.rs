use std::io;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use crossterm::event::{self, KeyEvent, MouseButton, MouseEventKind};

pub enum Event {
    /// Press, repeat and (on enhanced terminals) release.
    Key(KeyEvent),
    /// Left button down at a terminal cell.
    Click { column: u16, row: u16 },
    Resize,
}

/// Reads terminal events on a dedicated thread so the frame loop never blocks
/// on input.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(event::Event::Key(key)) => Event::Key(key),
                Ok(event::Event::Mouse(mouse)) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => Event::Click {
                        column: mouse.column,
                        row: mouse.row,
                    },
                    _ => continue,
                },
                Ok(event::Event::Resize(..)) => Event::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(%err, "terminal event reader stopped");
                    return;
                }
            };
            if tx.send(forwarded).is_err() {
                return;
            }
        });

        Self { rx }
    }

    /// Everything queued since the last call, without blocking.
    pub fn pending(&self) -> io::Result<Vec<Event>> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => return Ok(events),
                Err(TryRecvError::Disconnected) if !events.is_empty() => return Ok(events),
                Err(TryRecvError::Disconnected) => {
                    return Err(io::Error::new(
                        io::ErrorKind::BrokenPipe,
                        "terminal event reader stopped",
                    ))
                }
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
