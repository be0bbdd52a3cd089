//! Actions that panel modules return to the app

use crate::app::Tab;

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Show another tab
    SwitchTab(Tab),

    /// Show a patient in the detail panel
    SelectPatient(&'static str),

    /// "Check" button on a reminder
    AcknowledgeReminder(usize),

    /// "Book" button on a schedule slot
    BookSlot(usize),

    /// Copy text to the system clipboard
    Copy(String),

    /// Show notification in status bar
    Notify(String, NotifyLevel),

    /// Open the command line
    OpenCommand,

    /// Write a snapshot of the datasets to disk
    Export(ExportFormat),

    /// Request quit
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Notification levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
