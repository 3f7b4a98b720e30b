//! Budget limit dialog
//!
//! Single field for the monthly limit. An empty value or zero clears it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, TextInput};

/// State for the budget limit dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    pub input: TextInput,
    pub error_message: Option<String>,
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            input: TextInput::new().placeholder("no limit"),
            error_message: None,
        }
    }

    /// Prefill with the current limit; zero shows as empty
    pub fn with_limit(limit: Money) -> Self {
        let mut state = Self::new();
        if limit.is_positive() {
            state.input = state.input.content(limit.to_string());
        }
        state
    }

    /// Parse the entered limit
    pub fn parse_limit(&self) -> Result<Money, String> {
        let raw = self.input.value().trim();
        if raw.is_empty() {
            return Ok(Money::zero());
        }
        let limit = Money::parse(raw).map_err(|_| "Invalid amount format".to_string())?;
        if limit.is_negative() {
            return Err("Budget limit cannot be negative".to_string());
        }
        Ok(limit)
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the budget limit dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.budget_form;
    let area = centered_rect_fixed(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Budget Limit ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
            Constraint::Min(0),
        ])
        .split(inner);

    let current = if app.settings.budget_limit.is_positive() {
        app.settings.format_money(app.settings.budget_limit)
    } else {
        "none".to_string()
    };
    let current_line = Line::from(vec![
        Span::styled("Current:   ", Style::default().fg(Color::Yellow)),
        Span::styled(current, Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(current_line), chunks[0]);

    frame.render_widget(
        Paragraph::new(state.input.line("New limit", true)),
        chunks[2],
    );

    if let Some(ref error) = state.error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    let instructions = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel  "),
        Span::styled("[Ctrl+U]", Style::default().fg(Color::Magenta)),
        Span::raw(" Clear"),
    ]);
    frame.render_widget(Paragraph::new(instructions), chunks[5]);
}

/// Handle key events for the budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            if let Err(e) = save_limit(app) {
                app.budget_form.set_error(e);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.budget_form.input.clear();
            app.budget_form.error_message = None;
        }
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            app.budget_form.input.insert(c);
            app.budget_form.error_message = None;
        }
        KeyCode::Backspace => {
            app.budget_form.input.backspace();
            app.budget_form.error_message = None;
        }
        KeyCode::Left => app.budget_form.input.move_left(),
        KeyCode::Right => app.budget_form.input.move_right(),
        _ => return false,
    }
    true
}

fn save_limit(app: &mut App) -> Result<(), String> {
    let limit = app.budget_form.parse_limit()?;

    let previous = app.settings.budget_limit;
    app.settings.budget_limit = limit;
    if let Err(e) = app.settings.save(app.paths) {
        app.settings.budget_limit = previous;
        return Err(e.to_string());
    }

    app.close_dialog();
    let message = if limit.is_zero() {
        "Budget limit cleared".to_string()
    } else {
        format!("Budget limit set to {}", app.settings.format_money(limit))
    };
    app.set_status(message.clone());
    app.notify(Notification::info(message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefill_from_limit() {
        let state = BudgetFormState::with_limit(Money::from_cents(500000));
        assert_eq!(state.input.value(), "5000.00");

        let state = BudgetFormState::with_limit(Money::zero());
        assert_eq!(state.input.value(), "");
    }

    #[test]
    fn test_parse_limit() {
        let mut state = BudgetFormState::new();
        assert_eq!(state.parse_limit().unwrap(), Money::zero());

        state.input = TextInput::new().content("250.5");
        assert_eq!(state.parse_limit().unwrap(), Money::from_cents(25050));

        state.input = TextInput::new().content("abc");
        assert!(state.parse_limit().is_err());
    }
}
