use crate::args::OutputFormat;
use crate::presentation::presenters::present_contact_list;
use crate::presentation::view_models::StatusBadge;
use anyhow::{anyhow, bail, Result};
use rolodex_client::ApiClient;
use rolodex_types::Contact;

pub fn handle(
    client: &ApiClient,
    name: &str,
    new_name: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    // Pre-fill from the current record, like the edit form in the UI; the
    // backend matches names case-insensitively
    let contacts = client
        .list()
        .map_err(|e| anyhow!("Error connecting to server: {}", e))?;
    let Some(current) = contacts.iter().find(|c| c.is_named(name)) else {
        bail!("Contact '{}' not found", name);
    };

    let Ok(contact) = Contact::new(
        new_name.unwrap_or(&current.name),
        phone.unwrap_or(&current.phone),
        email.unwrap_or(&current.email),
    ) else {
        bail!("All fields are required");
    };

    // Keyed by the current name; a new name in the body re-keys the record
    client.update(&current.name, &contact)?;

    let contacts = client
        .list()
        .map_err(|e| anyhow!("Error connecting to server: {}", e))?;
    let view_model = present_contact_list(&contacts, "");

    super::render_list(view_model, StatusBadge::success("Contact updated"), format)
}
