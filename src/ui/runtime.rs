use crate::client::{HttpSummaryClient, SummaryService};
use crate::config::Config;
use crate::controller::{CompletionSink, SummaryRequestController};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::{anyhow, Context};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive UI until the user quits.
///
/// Requests are spawned on `runtime`; everything else happens on the
/// calling thread.
pub fn run(config: Config, runtime: Handle) -> anyhow::Result<()> {
    let client = Arc::new(
        HttpSummaryClient::new(&config.endpoint).context("Failed to build HTTP client")?,
    );
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let completion_tx = events.sender();
    let sink: CompletionSink = Arc::new(move |completion| {
        let _ = completion_tx.send(AppEvent::Summary(completion));
    });
    let controller = SummaryRequestController::new(client, runtime, sink);
    let mut app = App::new(controller, config.endpoint.url.clone());

    tracing::info!(endpoint = %config.endpoint.url, "Starting UI");

    let (mut terminal, guard) = setup_terminal().context("Failed to initialise terminal")?;
    let size = terminal.size().context("Failed to read terminal size")?;
    app.on_resize(size.width, size.height);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event)?,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI closed");
    Ok(())
}

/// Apply one event to the app. Fails when terminal input is gone.
pub fn handle_event<S: SummaryService>(app: &mut App<S>, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "Terminal resized");
            app.on_resize(cols, rows);
        }
        AppEvent::Summary(completion) => app.on_completion(completion),
        AppEvent::InputClosed(reason) => return Err(anyhow!("Terminal input closed: {reason}")),
    }
    Ok(())
}
