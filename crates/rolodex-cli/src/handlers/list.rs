use crate::args::OutputFormat;
use crate::presentation::presenters::present_contact_list;
use crate::presentation::view_models::StatusBadge;
use anyhow::{anyhow, Result};
use rolodex_client::ApiClient;

pub fn handle(client: &ApiClient, query: Option<&str>, format: OutputFormat) -> Result<()> {
    let contacts = client
        .list()
        .map_err(|e| anyhow!("Error connecting to server: {}", e))?;

    let view_model = present_contact_list(&contacts, query.unwrap_or(""));
    let badge = if view_model.shown == 0 {
        StatusBadge::info("No contacts found.")
    } else {
        StatusBadge::success(format!("Loaded {} contacts", view_model.total))
    };

    super::render_list(view_model, badge, format)
}
