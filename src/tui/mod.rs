//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, turns crossterm input into
//! core `Event`s, feeds them through `update()`, and carries out the
//! `Effect`s that come back.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! terminal ──▶ event::poll ──▶ update() ──▶ Effect::Persist ──▶ writer task (save)
//!                                 ▲                                   │
//!                                 └──────── PersistResult ◀── mpsc ───┘
//! ```
//!
//! The loop only redraws after something changed. Saves go to a single
//! writer task in request order, so a later snapshot always lands on disk
//! after an earlier one. Results come back through a std `mpsc` channel and
//! are drained once per iteration, so the reducer is only ever called from
//! this thread.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::Duration;

use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use crate::core::action::{Effect, Event, PersistRequest, update};
use crate::core::inventory::InventoryStore;
use crate::core::state::Session;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

pub fn run(session: Session, store: Arc<dyn InventoryStore>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, session, store);
    ratatui::restore();
    info!("MCP Hub shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    mut session: Session,
    store: Arc<dyn InventoryStore>,
) -> std::io::Result<()> {
    // Channel for results from background saves
    let (tx, rx) = mpsc::channel();
    let writer = spawn_writer(store, tx);

    // The core shows "Loading..." until it has been told a size.
    let size = terminal.size()?;
    session = update(
        session,
        Event::Resize {
            width: size.width,
            height: size.height,
        },
    )
    .0;
    info!("Terminal {}x{}, layout {}", size.width, size.height, session.layout.mode.name());

    let mut needs_redraw = true;
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &session))?;
            needs_redraw = false;
        }

        let mut events = Vec::new();
        if let Some(first) = poll_event_timeout(POLL_TIMEOUT)? {
            events.push(first);
            // Drain everything already queued before the next draw
            while let Some(event) = poll_event_immediate()? {
                events.push(event);
            }
        }

        // Handle background save results
        events.extend(rx.try_iter());

        for event in events {
            needs_redraw = true;
            debug!("Event loop received: {:?}", event);
            let (next, effect) = update(session, event);
            session = next;
            if dispatch(effect, &writer) {
                if !session.pending_persists.is_empty() {
                    warn!(
                        "Exiting with {} save(s) still in flight",
                        session.pending_persists.len()
                    );
                }
                return Ok(());
            }
        }
    }
}

/// Carry out one effect. Returns `true` when the loop should stop.
fn dispatch(effect: Option<Effect>, writer: &UnboundedSender<PersistRequest>) -> bool {
    match effect {
        Some(Effect::Quit) => {
            info!("Quit requested");
            true
        }
        Some(Effect::Persist(request)) => {
            info!("Queueing save #{} ({} items)", request.id, request.items.len());
            if let Err(e) = writer.send(request) {
                warn!("Save #{} dropped: writer task has stopped", e.0.id);
            }
            false
        }
        None => false,
    }
}

/// Start the task that performs saves one at a time, in the order they were
/// queued, and reports each as `PersistResult`.
fn spawn_writer(
    store: Arc<dyn InventoryStore>,
    results: mpsc::Sender<Event>,
) -> UnboundedSender<PersistRequest> {
    let (writer, mut requests) = unbounded_channel::<PersistRequest>();
    tokio::spawn(async move {
        while let Some(PersistRequest { id, items }) = requests.recv().await {
            let event = match store.save(items).await {
                Ok(()) => {
                    info!("Save #{} finished", id);
                    Event::PersistResult {
                        id,
                        ok: true,
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("Save #{} failed: {}", id, e);
                    Event::PersistResult {
                        id,
                        ok: false,
                        error: Some(e.to_string()),
                    }
                }
            };
            if results.send(event).is_err() {
                warn!("Failed to report save #{}: receiver dropped", id);
                break;
            }
        }
        debug!("Writer task finished");
    });
    writer
}
