use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::session::SessionEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize,
    /// Background upload or generation finished.
    Session(SessionEvent),
    /// The terminal stopped delivering input.
    Terminated,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            forward_events(
                |timeout| {
                    if event::poll(timeout)? {
                        event::read().map(Some)
                    } else {
                        Ok(None)
                    }
                },
                &event_tx,
                tick_rate,
            )
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Pump terminal input and ticks into `tx` until the receiver is gone or
/// `read_event` fails. A failure is reported as [`AppEvent::Terminated`].
fn forward_events<F>(mut read_event: F, tx: &Sender<AppEvent>, tick_rate: Duration)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match read_event(timeout) {
            Ok(Some(Event::Key(key))) => tx.send(AppEvent::Key(key)),
            Ok(Some(Event::Paste(text))) => tx.send(AppEvent::Paste(text)),
            Ok(Some(Event::Resize(_, _))) => tx.send(AppEvent::Resize),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Terminal input failed");
                let _ = tx.send(AppEvent::Terminated);
                return;
            }
        };
        // Receiver gone: the UI loop has exited.
        if forwarded.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
