//! Category breakdown chart

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::report::format_percentage;
use crate::models::Category;
use crate::tui::app::App;

fn category_color(category: Category) -> Color {
    match category {
        Category::Food => Color::Green,
        Category::Transport => Color::Blue,
        Category::Shopping => Color::Cyan,
        Category::Bills => Color::Yellow,
        Category::Entertainment => Color::Magenta,
        Category::Other => Color::Gray,
    }
}

/// Horizontal bars, one per category with spending
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" By Category ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.load_error.is_some() || app.summary.is_empty() {
        let text = Paragraph::new("Nothing to chart.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let currency = &app.settings.currency_symbol;
    let bars: Vec<Bar> = app
        .summary
        .breakdown
        .iter()
        .map(|entry| {
            Bar::default()
                .label(Line::from(format!("{:<13}", entry.category.name())))
                .value(entry.amount.cents().max(0) as u64)
                .text_value(format!(
                    "{} ({})",
                    entry.amount.format_with_symbol(currency),
                    format_percentage(entry.percentage)
                ))
                .style(Style::default().fg(category_color(entry.category)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(category_color(entry.category)),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
