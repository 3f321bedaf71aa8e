use crate::document::PageExtractor;
use crate::generation::Generator;
use crate::session::{EventSink, Orchestrator};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;

/// Settings for one interactive session.
pub struct UiOptions {
    pub model: String,
    pub tick_rate: Duration,
    /// File to upload on start.
    pub initial_file: Option<PathBuf>,
}

pub fn run(
    generator: Arc<dyn Generator>,
    extractor: Arc<dyn PageExtractor>,
    runtime: Handle,
    options: UiOptions,
) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = options.tick_rate;
    let events = EventHandler::new(tick_rate);

    let sender = Mutex::new(events.sender());
    let sink: EventSink = Arc::new(move |event| {
        if let Ok(sender) = sender.lock() {
            let _ = sender.send(AppEvent::Session(event));
        }
    });
    let orchestrator = Orchestrator::new(generator, extractor, runtime, sink);
    let mut app = App::new(orchestrator, options.model);
    if let Some(path) = options.initial_file {
        app.upload(&path.to_string_lossy());
    }
    tracing::info!("Interactive session started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Session(event)) => app.on_session_event(event),
            Ok(AppEvent::Terminated) => break,
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Interactive session ended");
    Ok(())
}
