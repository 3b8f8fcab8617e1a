use crate::graphql::CountryClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::table::ViewState;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

/// Runs the table UI until the user quits.
///
/// The single fetch is spawned on `runtime`; everything else happens on the
/// calling thread.
pub fn run(
    runtime: &Handle,
    client: CountryClient,
    view: ViewState,
    tick_rate: Duration,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(view);
    let events = EventHandler::new(tick_rate);

    info!(endpoint = client.endpoint(), "starting country fetch");
    app.on_fetch_started();
    let fetch_tx = events.sender();
    runtime.spawn(async move {
        let result = client.fetch_countries().await;
        // The UI may already be gone; nothing to report then.
        let _ = fetch_tx.send(AppEvent::FetchCompleted(result));
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => debug!(cols, rows, "terminal resized"),
            Ok(AppEvent::FetchCompleted(result)) => app.on_fetch_completed(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    info!("exiting");
    Ok(())
}
