//! Expense table view
//!
//! Rows in insertion order, newest at the bottom.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::display::report::truncate;
use crate::tui::app::App;

/// Render the expense table, or the load error in its place
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.records.len()))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(ref error) = app.load_error {
        let text = Paragraph::new(vec![
            Line::from("Could not read the expense store:"),
            Line::from(""),
            Line::from(error.as_str()),
        ])
        .block(block)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
        frame.render_widget(text, area);
        return;
    }

    if app.records.is_empty() {
        let text = Paragraph::new("No expenses recorded yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(16),    // Name
        Constraint::Length(15), // Category
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let currency = &app.settings.currency_symbol;
    let rows: Vec<Row> = app
        .records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(app.settings.format_date(record.date)),
                Cell::from(truncate(&record.name, 30)),
                Cell::from(record.category.name()),
                Cell::from(record.amount.format_with_symbol(currency))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
