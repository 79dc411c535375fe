pub mod common;
pub mod contacts;
pub mod form;

pub use common::{CommandResult, StatusBadge, StatusLevel};
pub use contacts::{ContactListViewModel, ContactRow, RosterViewModel};
pub use form::{ContactDraft, FormField, FormState};
