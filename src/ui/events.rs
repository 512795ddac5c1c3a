use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::controller::Completion;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A summarize request settled on the runtime.
    Summary(Completion),
    /// The terminal stopped delivering input. The input thread has exited.
    InputClosed(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It exits once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || pump_events(read_terminal, &event_tx, tick_rate));

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Wait up to `timeout` for one crossterm event.
fn read_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward events from `source` and emit a tick every `tick_rate`.
///
/// Returns when the receiver is gone or `source` fails. A failure is sent
/// as [`AppEvent::InputClosed`] first so the UI loop can shut down.
pub fn pump_events<F>(mut source: F, tx: &Sender<AppEvent>, tick_rate: Duration)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let forwarded = match source(timeout) {
            Ok(Some(Event::Key(key))) => Some(AppEvent::Key(key)),
            Ok(Some(Event::Paste(text))) => Some(AppEvent::Paste(text)),
            Ok(Some(Event::Resize(cols, rows))) => Some(AppEvent::Resize(cols, rows)),
            Ok(_) => None,
            Err(err) => {
                tracing::error!(error = %err, "Terminal input failed");
                let _ = tx.send(AppEvent::InputClosed(err.to_string()));
                return;
            }
        };
        if let Some(app_event) = forwarded {
            if tx.send(app_event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
