pub mod contacts;

pub use contacts::{present_contact_list, present_roster};
