//! Layout definitions for the TUI
//!
//! Header on top, expense table on the left, breakdown chart and budget
//! gauge stacked on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and active store
    pub header: Rect,
    /// Expense table
    pub table: Rect,
    /// Category breakdown chart
    pub chart: Rect,
    /// Budget gauge and alert line
    pub gauge: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(8),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),    // Table
                Constraint::Length(44), // Summary column
            ])
            .split(vertical[1]);

        let summary = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Chart
                Constraint::Length(5), // Gauge
            ])
            .split(horizontal[1]);

        Self {
            header: vertical[0],
            table: horizontal[0],
            chart: summary[0],
            gauge: summary[1],
            status_bar: vertical[2],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.chart.width, 44);
        assert_eq!(layout.table.width + layout.chart.width, 120);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect_fixed(64, 12, area);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));
    }
}
