use crate::args::OutputFormat;
use crate::presentation::presenters::present_contact_list;
use crate::presentation::view_models::StatusBadge;
use anyhow::{anyhow, bail, Result};
use rolodex_client::ApiClient;
use rolodex_types::Contact;

pub fn handle(
    client: &ApiClient,
    name: &str,
    phone: &str,
    email: &str,
    format: OutputFormat,
) -> Result<()> {
    // Validation runs before any request is issued
    let Ok(contact) = Contact::new(name, phone, email) else {
        bail!("All fields are required");
    };

    client.create(&contact)?;

    // Read-after-write: show the state the backend now holds
    let contacts = client
        .list()
        .map_err(|e| anyhow!("Error connecting to server: {}", e))?;
    let view_model = present_contact_list(&contacts, "");

    super::render_list(view_model, StatusBadge::success("Contact added"), format)
}
