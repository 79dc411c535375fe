use crate::args::OutputFormat;
use crate::presentation::presenters::present_contact_list;
use crate::presentation::view_models::StatusBadge;
use anyhow::{anyhow, Result};
use rolodex_client::ApiClient;
use std::io::{BufRead, Write};

pub fn handle(client: &ApiClient, name: &str, yes: bool, format: OutputFormat) -> Result<()> {
    // Confirmation lives here in the UI layer; the client call itself stays
    // side-effect-free to test
    if !yes && !confirm(name)? {
        println!("Aborted.");
        return Ok(());
    }

    // Failure surfaces the server's message verbatim and skips the reload,
    // leaving the last observed state untouched
    client.delete(name)?;

    let contacts = client
        .list()
        .map_err(|e| anyhow!("Error connecting to server: {}", e))?;
    let view_model = present_contact_list(&contacts, "");

    super::render_list(view_model, StatusBadge::success("Contact deleted"), format)
}

fn confirm(name: &str) -> Result<bool> {
    print!("Delete '{}'? [y/N] ", name);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
