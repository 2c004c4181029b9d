use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_submit_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive form until the user quits.
pub fn run(mut app: App, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);
    app.attach_commands(spawn_submit_worker(runtime, app.service(), events.sender()));
    tracing::info!(endpoint = app.endpoint(), "Product form started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => {
                if !dispatch(&mut app, event) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Product form closed");
    Ok(())
}

/// Applies one event to the app. Returns `false` when the loop must stop.
fn dispatch(app: &mut App, event: AppEvent) -> bool {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::trace!(cols, rows, "Terminal resized");
        }
        AppEvent::SubmissionFinished { attempt, outcome } => {
            app.on_submission_finished(attempt, outcome);
        }
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, leaving the form");
            return false;
        }
    }
    true
}
