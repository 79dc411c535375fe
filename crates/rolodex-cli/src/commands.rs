use crate::args::{Cli, Commands};
use crate::config;
use crate::handlers;
use anyhow::Result;
use rolodex_client::ApiClient;

pub fn run(cli: Cli) -> Result<()> {
    let api_url = config::resolve_api_url(cli.api_url.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&api_url);
        return Ok(());
    };

    let client = ApiClient::new(&api_url)?;

    match command {
        Commands::List { query } => handlers::list::handle(&client, query.as_deref(), cli.format),

        Commands::Add { name, phone, email } => {
            handlers::add::handle(&client, &name, &phone, &email, cli.format)
        }

        Commands::Update {
            name,
            new_name,
            phone,
            email,
        } => handlers::update::handle(
            &client,
            &name,
            new_name.as_deref(),
            phone.as_deref(),
            email.as_deref(),
            cli.format,
        ),

        Commands::Remove { name, yes } => handlers::remove::handle(&client, &name, yes, cli.format),

        Commands::Tui => handlers::tui::handle(client),
    }
}

fn show_guidance(api_url: &str) {
    println!("rolodex - Contact book client\n");
    println!("Backend: {}\n", api_url);
    println!("Quick commands:");
    println!("  rolodex list                      # Show all contacts");
    println!("  rolodex list alice                # Filter by name, phone, or email");
    println!("  rolodex add NAME PHONE EMAIL      # Create a contact");
    println!("  rolodex update NAME --phone 555   # Edit a contact");
    println!("  rolodex remove NAME               # Delete a contact");
    println!("  rolodex tui                       # Interactive screen\n");
    println!("For more commands:");
    println!("  rolodex --help");
}
