//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, or to the dashboard
//! bindings when no dialog is open.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => {}
        Event::Tick => app.notifications.remove_expired(),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return;
    }

    handle_normal_key(app, key);
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::BudgetLimit => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::Export => {
            dialogs::export::handle_key(app, key);
        }
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

/// Handle keys on the dashboard
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc => {
            if app.notifications.is_empty() {
                app.quit();
            } else {
                app.notifications.dismiss_current();
            }
        }

        KeyCode::Char('a') | KeyCode::Char('n') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::BudgetLimit),
        KeyCode::Char('d') | KeyCode::Char('e') => app.open_dialog(ActiveDialog::Export),
        KeyCode::Char('r') => app.open_dialog(ActiveDialog::ConfirmReset),
        KeyCode::Char('R') | KeyCode::F(5) => {
            app.reload();
            app.set_status("Reloaded");
        }

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.records.len().saturating_sub(1);
        }

        KeyCode::Char('x') => app.notifications.dismiss_current(),
        _ => {}
    }
}
