//! Input handling for the hexcast TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use hexcast_engine::{App, Modal};

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Drain pending terminal events without blocking.
///
/// Returns `true` when the user asked to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        if !event::poll(Duration::ZERO)? {
            break;
        }
        if let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
            && handle_key(app, key)
        {
            return Ok(true);
        }
    }
    Ok(false)
}

fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.modal() {
        Modal::None => handle_main_key(app, key),
        Modal::TrigramDetail { .. } => {
            handle_modal_key(app, key, true);
            false
        }
        Modal::HexagramDetail => {
            handle_modal_key(app, key, false);
            false
        }
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ' | 't') => app.toss(),
        KeyCode::Char(c @ '1'..='8') => {
            let index = (c as usize) - ('1' as usize);
            app.open_trigram_modal(index);
        }
        KeyCode::Enter | KeyCode::Char('h') => app.open_hexagram_modal(),
        _ => {}
    }
    false
}

fn handle_modal_key(app: &mut App, key: KeyEvent, allow_copy: bool) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_modal(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_modal(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_modal(1),
        KeyCode::PageUp => app.scroll_modal(-10),
        KeyCode::PageDown => app.scroll_modal(10),
        KeyCode::Char('y' | 'c') if allow_copy => copy_snippet(app),
        _ => {}
    }
}

/// Copy the open trigram's SuperCollider sketches to the system clipboard.
fn copy_snippet(app: &mut App) {
    let Some(snippet) = app.supercollider_snippet() else {
        return;
    };
    let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(snippet));
    match copied {
        Ok(()) => app.set_status("Código copiado al portapapeles"),
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard copy failed");
            app.set_status("No se pudo copiar al portapapeles");
        }
    }
}
