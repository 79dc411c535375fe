//! REST client for the contact-list backend.
//!
//! Four operations over a JSON contract rooted at a fixed base path:
//! list (GET), create (POST), update (PUT by current name), delete (DELETE
//! by name). The wire contract is `{success, data, count}` on list and
//! `{success, error?}` on mutations; parsing lives in [`wire`] as pure
//! functions so the error contract is testable without a server.

pub mod api;
pub mod error;
pub mod wire;

pub use api::ApiClient;
pub use error::{Error, Result};
