//! The desktop event loop.

use anyhow::{Context as _, Result};
use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use folio_execution::ClockTicker;
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::app::{AppBootstrap, DesktopState};
use crate::commands::{self, map_key, map_mouse};
use crate::tui::{Term, TuiGuard};
use crate::ui::{self, layout::DesktopLayout};

/// Applies one terminal event. Resizes only need the redraw that follows.
pub fn handle_event(state: &mut DesktopState, layout: &DesktopLayout, event: Event) {
    let command = match event {
        Event::Key(key) => map_key(state, key),
        Event::Mouse(mouse) => map_mouse(state, layout, mouse),
        _ => None,
    };
    if let Some(command) = command {
        tracing::trace!(?command, "[Desktop] Command");
        commands::apply(state, layout, command);
    }
}

fn draw(terminal: &mut Term, state: &DesktopState) -> Result<DesktopLayout> {
    let frame = terminal
        .draw(|frame| ui::draw(frame, state))
        .context("Failed to draw desktop")?;
    Ok(DesktopLayout::new(frame.area))
}

async fn event_loop(
    terminal: &mut Term,
    state: &mut DesktopState,
    ticks: &mut mpsc::UnboundedReceiver<DateTime<Local>>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut layout = draw(terminal, state)?;

    while !state.should_quit() {
        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => handle_event(state, &layout, event),
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
            Some(now) = ticks.recv() => state.set_clock(now),
        }
        layout = draw(terminal, state)?;
    }
    Ok(())
}

/// Takes over the terminal and runs the desktop until the user quits.
///
/// The clock ticker is stopped and the terminal restored whether the loop
/// ends normally or with an error.
pub async fn run(bootstrap: AppBootstrap) -> Result<()> {
    let AppBootstrap {
        mut state,
        tick_interval,
        log_guard: _log_guard,
    } = bootstrap;

    let mut tui = TuiGuard::enter()?;
    let (sender, mut ticks) = mpsc::unbounded_channel();
    let ticker = ClockTicker::new(tick_interval).start(sender);
    tracing::info!("[Desktop] Started");

    let result = event_loop(&mut tui.terminal, &mut state, &mut ticks).await;

    ticker.stop().await;
    drop(tui);
    match &result {
        Ok(()) => tracing::info!("[Desktop] Exited"),
        Err(e) => tracing::error!("[Desktop] Exited with error: {:#}", e),
    }
    result
}
