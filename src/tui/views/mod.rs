//! TUI Views module
//!
//! The single dashboard screen: header, expense table, category chart,
//! budget gauge and status bar, with dialogs and notifications on top.

pub mod breakdown;
pub mod budget;
pub mod expenses;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    expenses::render(frame, app, layout.table);
    breakdown::render(frame, app, layout.chart);
    budget::render(frame, app, layout.gauge);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = frame.area();
        let width = 50.min(area.width);
        let rect = Rect::new(
            area.x + area.width.saturating_sub(width),
            area.y,
            width,
            5.min(area.height),
        );
        frame.render_widget(NotificationWidget::new(notification), rect);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(
            " Expense Tracker ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(app.store_description(), Style::default().fg(Color::White)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => dialogs::expense::render(frame, app),
        ActiveDialog::BudgetLimit => dialogs::budget::render(frame, app),
        ActiveDialog::Export => dialogs::export::render(frame, app),
        ActiveDialog::ConfirmReset => {
            dialogs::confirm::render(frame, &dialogs::confirm::reset_prompt(app))
        }
        ActiveDialog::None => {}
    }
}

