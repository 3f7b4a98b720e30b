//! Budget gauge: total against the configured limit

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::services::BudgetStatus;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let total = app.summary.total;
    let status = app.summary.budget_status(app.settings.budget_limit);
    let currency = &app.settings.currency_symbol;

    let border_color = if status.is_exceeded() {
        Color::Red
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(format!(" Total: {} ", total.format_with_symbol(currency)))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.load_error.is_some() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let (gauge_color, label) = match status {
        BudgetStatus::NoLimit => (Color::DarkGray, "no limit".to_string()),
        BudgetStatus::Within { limit, .. } => (
            Color::Green,
            format!("{} / {}", total, limit.format_with_symbol(currency)),
        ),
        BudgetStatus::Exceeded { limit, .. } => (
            Color::Red,
            format!("{} / {}", total, limit.format_with_symbol(currency)),
        ),
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
        .ratio(status.ratio(total))
        .label(label);
    frame.render_widget(gauge, chunks[0]);

    let message_style = match status {
        BudgetStatus::Exceeded { .. } => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        BudgetStatus::Within { .. } => Style::default().fg(Color::Green),
        BudgetStatus::NoLimit => Style::default().fg(Color::DarkGray),
    };
    let message = Paragraph::new(Line::from(Span::styled(
        status.message(currency),
        message_style,
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[1]);
}
