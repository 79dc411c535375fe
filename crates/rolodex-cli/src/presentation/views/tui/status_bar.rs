use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBadge;

/// Bottom bar: status banner on the left, counts and the footer clock on the
/// right. The clock string comes in pre-formatted on a 60-second cadence.
pub struct StatusBarView<'a> {
    badge: Option<&'a StatusBadge>,
    total: usize,
    shown: usize,
    clock: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(badge: Option<&'a StatusBadge>, total: usize, shown: usize, clock: &'a str) -> Self {
        Self {
            badge,
            total,
            shown,
            clock,
        }
    }
}

impl Widget for StatusBarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(inner);

        let status_line = match self.badge {
            Some(badge) => Line::from(Span::styled(
                format!("{} {}", badge.icon(), badge.label),
                Style::default().fg(status_level_to_color(badge.level)),
            )),
            None => Line::from(Span::raw("")),
        };
        Paragraph::new(status_line).render(chunks[0], buf);

        let summary = Line::from(vec![
            Span::raw(format!("Total: {} ", self.total)),
            Span::raw("| "),
            Span::raw(format!("Shown: {} ", self.shown)),
            Span::raw("| "),
            Span::raw(self.clock),
        ]);
        Paragraph::new(summary)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
