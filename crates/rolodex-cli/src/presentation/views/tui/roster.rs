use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::presentation::formatters::text::truncate;
use crate::presentation::view_models::RosterViewModel;

/// The contact list pane. Shows filtered/sorted rows with the selection
/// highlighted, or a single placeholder row when nothing matches.
pub struct RosterView<'a> {
    model: &'a RosterViewModel,
    selected: Option<usize>,
}

impl<'a> RosterView<'a> {
    pub fn new(model: &'a RosterViewModel, selected: Option<usize>) -> Self {
        Self { model, selected }
    }
}

impl Widget for RosterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Contacts {}/{} ", self.model.shown, self.model.total));

        if self.model.rows.is_empty() {
            let placeholder = List::new([ListItem::new(Line::from(Span::styled(
                "No contacts found.",
                Style::default().add_modifier(Modifier::DIM),
            )))])
            .block(block);
            Widget::render(placeholder, area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .model
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<22}", truncate(&row.name, 22)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {:<18}", truncate(&row.phone, 18))),
                    Span::raw(format!(" {}", row.email)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(self.selected);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
