//! Terminal event source.
//!
//! A background thread multiplexes crossterm input and a tick timer into
//! one channel; the draw loop blocks on [`EventHandler::next`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// What the draw loop can be woken by.
#[derive(Debug)]
pub enum Event {
    /// Tick timer fired; animated charts advance a frame.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize,
}

/// Owns the polling thread and the receiving end of its channel.
pub struct EventHandler {
    rx: Receiver<Event>,
    /// Holding a sender here keeps the channel open for the handler's
    /// lifetime.
    _tx: Sender<Event>,
}

impl EventHandler {
    /// Spawns the polling thread. `tick_rate` is both the poll timeout and
    /// the animation tick interval.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            // Windows terminals deliver both press and
                            // release; only presses count.
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Event::Key(key)
                            }
                            CrosstermEvent::Resize(_, _) => Event::Resize,
                            _ => continue,
                        };
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                } else {
                    // No input within the tick interval.
                    if event_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Blocks until the next event. Errors only once the polling thread
    /// is gone.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}
