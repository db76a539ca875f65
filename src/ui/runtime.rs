use crate::config::ConfigStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::time::Duration;

/// Mount the terminal, run the event/render loop, unmount on exit.
///
/// Rendering is notification driven: after the initial paint the loop only
/// redraws when the field store signals a change, the terminal resizes, or a
/// tick fires. Notifications are drained after event handling, so a frame
/// always reflects the most recent completed mutation.
pub fn run(config: ConfigStore) -> anyhow::Result<()> {
    let ui = config.get().ui;
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);

    let (mut terminal, guard) =
        setup_terminal(ui.mouse_capture).context("failed to mount terminal")?;
    tracing::info!(mouse_capture = ui.mouse_capture, "terminal mounted");

    let mut app = App::new(config);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let changes = app.field_store().subscribe();
    let events = EventHandler::new(tick_rate);

    terminal.draw(|frame| draw(frame, &app))?;

    loop {
        if app.should_quit() {
            break;
        }

        let mut needs_redraw = false;
        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                needs_redraw = true;
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }

        // Re-render on store change notifications (coalesced wakeups).
        while changes.try_recv().is_ok() {
            needs_redraw = true;
        }

        if needs_redraw || app.should_quit() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
    }

    events.shutdown();
    drop(guard);
    tracing::info!("terminal restored");
    Ok(())
}
