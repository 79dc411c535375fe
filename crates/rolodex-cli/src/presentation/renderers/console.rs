use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use crate::presentation::view_models::CommandResult;

/// Prints a command result as badge + content + tips, or as one pretty JSON
/// document in json mode. Styling is dropped when stdout is not a terminal.
pub struct ConsoleRenderer {
    json_mode: bool,
    styled: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            styled: std::io::stdout().is_terminal(),
        }
    }

    pub fn render<T>(&self, result: CommandResult<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            if self.styled {
                println!("{} {}", badge.icon(), badge.label.bold());
            } else {
                println!("{} {}", badge.icon(), badge.label);
            }
            println!();
        }

        print!("{}", result.content);

        if !result.tips.is_empty() {
            println!();
            for tip in &result.tips {
                if self.styled {
                    println!("  • {}", tip.cyan());
                } else {
                    println!("  • {}", tip);
                }
            }
        }

        Ok(())
    }
}
