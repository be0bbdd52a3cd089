//! Command parser for the : command line

use crate::app::Tab;

use super::ExportFormat;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch to a tab
    Tab(Tab),

    /// Select a patient by id
    Open(String),

    /// Snapshot the datasets to a file
    Export(ExportFormat),

    Help,
    Quit,

    /// Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "patients" | "pat" | "p" => Command::Tab(Tab::Patients),
        "reminders" | "rem" | "r" => Command::Tab(Tab::Reminders),
        "schedule" | "sched" | "s" => Command::Tab(Tab::Schedule),

        "open" | "o" => match args {
            Some(id) => Command::Open(id),
            None => Command::Unknown(input.to_string()),
        },

        "export" | "exp" => match args.as_deref().map(str::to_lowercase).as_deref() {
            Some("csv") => Command::Export(ExportFormat::Csv),
            None | Some("json") => Command::Export(ExportFormat::Json),
            Some(_) => Command::Unknown(input.to_string()),
        },

        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
