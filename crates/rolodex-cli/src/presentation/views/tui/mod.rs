//! Ratatui widgets for the interactive screen. Each view is a thin wrapper
//! around presentation data; layout and color mapping happen here, nothing
//! else.

pub mod form;
pub mod roster;
pub mod status_bar;

pub use form::{ConfirmView, FormView};
pub use roster::RosterView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

/// Centered overlay area for the edit form and the delete confirmation.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
