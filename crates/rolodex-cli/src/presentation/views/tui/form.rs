use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;
use crate::presentation::formatters::text::sanitize;
use crate::presentation::view_models::{FormField, FormState};

/// Modal add/edit form. The focused field carries a trailing cursor mark.
pub struct FormView<'a> {
    title: &'a str,
    form: &'a FormState,
}

impl<'a> FormView<'a> {
    pub fn new(title: &'a str, form: &'a FormState) -> Self {
        Self { title, form }
    }
}

impl Widget for FormView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(52, 7, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = Vec::new();
        for field in FormField::ALL {
            let focused = self.form.focused() == field;
            let marker = if focused { "█" } else { "" };
            let label_style = if focused {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<6}", field.label()), label_style),
                Span::raw(sanitize(self.form.value(field))),
                Span::styled(marker, Style::default().fg(Color::Cyan)),
            ]));
        }
        lines.push(Line::from(Span::styled(
            "[Tab] next  [Enter] submit  [Esc] cancel",
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Modal yes/no prompt shown before a delete request is issued.
pub struct ConfirmView<'a> {
    name: &'a str,
}

impl<'a> ConfirmView<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }
}

impl Widget for ConfirmView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(44, 5, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Confirm delete ")
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines = vec![
            Line::from(Span::raw(format!("Delete '{}'?", sanitize(self.name)))),
            Line::from(Span::styled(
                "[y] delete  [n/Esc] cancel",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
