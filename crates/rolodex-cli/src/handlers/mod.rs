pub mod add;
pub mod list;
pub mod remove;
pub mod tui;
pub mod update;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResult, ContactListViewModel, StatusBadge};
use crate::presentation::ConsoleRenderer;
use anyhow::Result;

/// Shared tail for one-shot commands: present the (re)loaded list under the
/// operation's badge.
pub(crate) fn render_list(
    view_model: ContactListViewModel,
    badge: StatusBadge,
    format: OutputFormat,
) -> Result<()> {
    let result = CommandResult::new(view_model).with_badge(badge);
    ConsoleRenderer::new(format == OutputFormat::Json).render(result)
}
