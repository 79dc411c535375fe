use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Contact book client for a REST backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// API base URL (overrides ROLODEX_API_URL and the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and display contacts, optionally filtered
    List {
        /// Case-insensitive match against name, phone, or email
        query: Option<String>,
    },

    /// Create a contact
    Add {
        name: String,
        phone: String,
        email: String,
    },

    /// Edit a contact; unspecified fields keep their current value
    Update {
        /// Current name of the contact to edit
        name: String,

        #[arg(long = "name", value_name = "NAME")]
        new_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a contact (asks for confirmation)
    Remove {
        name: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Interactive full-screen browser
    Tui,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}
