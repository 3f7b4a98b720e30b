//! Expense entry dialog
//!
//! Modal form for the four expense fields with tab navigation. Rejected
//! input keeps the dialog open with a warning; the store is not touched.

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord};
use crate::services::{added_message, parse_amount, ExpenseService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::{Notification, TextInput};

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Name,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Date,
            Self::Amount => Self::Name,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub category: Category,
    pub date_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Empty form dated today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: ExpenseField::Name,
            name_input: TextInput::new().placeholder("What did you buy?"),
            amount_input: TextInput::new().placeholder("0.00"),
            category: Category::default(),
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// The focused text input; `None` on the category selector
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Name => Some(&mut self.name_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Category => None,
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }

    /// Build a record from the form; the service still validates it
    pub fn build_record(&self) -> ExpenseResult<ExpenseRecord> {
        let amount = parse_amount(self.amount_input.value())?;
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| ExpenseError::Validation("Invalid date format. Use YYYY-MM-DD".into()))?;

        Ok(ExpenseRecord::new(
            self.name_input.value(),
            amount,
            self.category,
            date,
        ))
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(64, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
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
            Constraint::Length(1), // Name
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Error
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    let focused = form.focused_field;

    frame.render_widget(
        Paragraph::new(form.name_input.line("Name", focused == ExpenseField::Name)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(form.amount_input.line(
            &format!("Amount ({})", app.settings.currency_symbol.trim()),
            focused == ExpenseField::Amount,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(category_line(form.category, focused == ExpenseField::Category)),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(form.date_input.line("Date", focused == ExpenseField::Date)),
        chunks[3],
    );

    if let Some(ref error) = form.error_message {
        let warning = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Yellow),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(warning, chunks[5]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Category  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

fn category_line(selected: Category, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", "Category"), label_style)];
    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(
        selected.name(),
        if focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Yellow)
        },
    ));
    if focused {
        spans.push(Span::styled(
            format!(" ▶  ({}/{})", selected.index() + 1, Category::ALL.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            save_expense(app);
            return true;
        }
        _ => {}
    }

    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => form.prev_field(),
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left if form.focused_field == ExpenseField::Category => {
            form.category = form.category.prev();
        }
        KeyCode::Right | KeyCode::Char(' ') if form.focused_field == ExpenseField::Category => {
            form.category = form.category.next();
        }
        KeyCode::Backspace => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Left => {
            if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Char(c) => {
            form.clear_error();
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }
        _ => return false,
    }

    true
}

/// Validate, append and reload
fn save_expense(app: &mut App) {
    let result = app
        .expense_form
        .build_record()
        .and_then(|record| ExpenseService::new(app.storage).add(record));

    match result {
        Ok(stored) => {
            app.close_dialog();
            let message = added_message(&stored, &app.settings.currency_symbol);
            app.set_status(message.clone());
            app.notify(Notification::success(message));
            app.reload();
            app.selected_index = app.records.len().saturating_sub(1);
        }
        Err(e) if e.is_validation() => {
            app.expense_form.set_error(e.to_string());
        }
        Err(e) => {
            app.close_dialog();
            app.notify(Notification::error(e.to_string()));
            app.reload();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_field_cycle() {
        assert_eq!(ExpenseField::Name.next(), ExpenseField::Amount);
        assert_eq!(ExpenseField::Date.next(), ExpenseField::Name);
        assert_eq!(ExpenseField::Name.prev(), ExpenseField::Date);
    }

    #[test]
    fn test_build_record() {
        let mut form = ExpenseFormState::new();
        form.name_input = TextInput::new().content("Lunch");
        form.amount_input = TextInput::new().content("12.50");
        form.category = Category::Food;
        form.date_input = TextInput::new().content("2024-01-05");

        let record = form.build_record().unwrap();
        assert_eq!(record.name, "Lunch");
        assert_eq!(record.amount, Money::from_cents(1250));
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_bad_amount_is_validation_error() {
        let mut form = ExpenseFormState::new();
        form.name_input = TextInput::new().content("Lunch");
        form.amount_input = TextInput::new().content("twelve");

        assert!(form.build_record().unwrap_err().is_validation());
    }

    #[test]
    fn test_bad_date_is_validation_error() {
        let mut form = ExpenseFormState::new();
        form.name_input = TextInput::new().content("Lunch");
        form.amount_input = TextInput::new().content("5");
        form.date_input = TextInput::new().content("05/01/2024");

        let err = form.build_record().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_category_selector_has_no_text_input() {
        let mut form = ExpenseFormState::new();
        form.focused_field = ExpenseField::Category;
        assert!(form.focused_input().is_none());
    }
}
