//! Download dialog: write the current records to a CSV file

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::export::{export_expenses, ExportTarget};
use crate::services::ExpenseService;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, TextInput};

/// Default file name offered by the dialog
pub const DEFAULT_FILE_NAME: &str = "expenses.csv";

#[derive(Debug, Clone, Default)]
pub struct ExportFormState {
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl ExportFormState {
    pub fn new() -> Self {
        Self {
            input: TextInput::new().content(DEFAULT_FILE_NAME),
            error_message: None,
        }
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.export_form;
    let area = centered_rect_fixed(60, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Download CSV ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Count
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let count = Line::from(Span::styled(
        format!("{} expense(s) will be written", app.records.len()),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(count), chunks[0]);
    frame.render_widget(Paragraph::new(state.input.line("File", true)), chunks[1]);

    if let Some(ref error) = state.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            ))),
            chunks[2],
        );
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[4]);
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            save_export(app);
            return true;
        }
        _ => {}
    }

    let input = &mut app.export_form.input;
    match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            app.export_form.error_message = None;
        }
        KeyCode::Backspace => {
            input.backspace();
            app.export_form.error_message = None;
        }
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

/// Export a fresh read of the store, not the cached rows
fn save_export(app: &mut App) {
    let file_name = app.export_form.input.value().trim().to_string();
    if file_name.is_empty() || file_name == "-" {
        app.export_form.error_message = Some("Enter a file name".to_string());
        return;
    }

    let result = ExpenseService::new(app.storage).list().and_then(|records| {
        export_expenses(&records, &ExportTarget::File(Path::new(&file_name)))?;
        Ok(records.len())
    });

    match result {
        Ok(count) => {
            app.close_dialog();
            let message = format!("Downloaded {} expense(s) to {}", count, file_name);
            app.set_status(message.clone());
            app.notify(Notification::success(message));
        }
        Err(e) => {
            app.export_form.error_message = Some(e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_name() {
        let state = ExportFormState::new();
        assert_eq!(state.input.value(), DEFAULT_FILE_NAME);
        assert_eq!(state.input.cursor, DEFAULT_FILE_NAME.len());
    }
}
