//! Reset confirmation dialog
//!
//! Yes/no prompt before wiping the active store.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::{reset_message, ExpenseService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::Notification;

/// Prompt text for the active store
pub fn reset_prompt(app: &App) -> String {
    format!(
        "Delete all {} expense(s) in {}?",
        app.records.len(),
        app.storage.location()
    )
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str) {
    let area = centered_rect_fixed(60, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Reset Expenses ")
        .title_style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key events for the reset confirmation
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.close_dialog();
            match ExpenseService::new(app.storage).reset() {
                Ok(removed) => {
                    let message = reset_message(removed);
                    app.set_status(message);
                    app.notify(Notification::success(message));
                }
                Err(e) => app.notify(Notification::error(e.to_string())),
            }
            app.selected_index = 0;
            app.reload();
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.close_dialog();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{paths::ExpensePaths, settings::Settings};
    use crate::models::{Category, ExpenseRecord, Identity, Money};
    use crate::storage::{MemoryStore, Storage, StoreKind};
    use crate::tui::app::ActiveDialog;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    #[test]
    fn test_confirm_clears_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::with_store(
            paths.clone(),
            Identity::local(),
            StoreKind::Memory,
            Box::new(MemoryStore::new()),
        );
        ExpenseService::new(&storage)
            .add(ExpenseRecord::new(
                "Bus",
                Money::from_cents(300),
                Category::Transport,
                NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            ))
            .unwrap();

        let mut app = App::new(&storage, Settings::default(), &paths);
        assert_eq!(app.records.len(), 1);

        app.open_dialog(ActiveDialog::ConfirmReset);
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE)
        ));

        assert!(!app.has_dialog());
        assert!(app.records.is_empty());
        assert_eq!(app.summary.total, Money::zero());
    }
}
