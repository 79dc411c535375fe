pub mod contact;
pub mod error;
pub mod filter;

pub use contact::Contact;
pub use error::{Error, Result};
pub use filter::{filter_contacts, sort_by_name};
