//! Tab panels and their input handling
//!
//! Each panel implements the Module trait and owns its cursor:
//! - patients: roster, Enter selects the highlighted patient
//! - reminders: reminder cards with a check button
//! - schedule: day slots with a book button on free ones
//!
//! export holds the CSV/JSON snapshot writers.

pub mod export;
pub mod patients;
pub mod reminders;
pub mod schedule;

pub use patients::PatientsPanel;
pub use reminders::RemindersPanel;
pub use schedule::SchedulePanel;

use crossterm::event::KeyCode;

/// Move a list cursor for the usual vim/arrow keys.
/// Returns false when the key is not a movement key.
pub(crate) fn move_cursor(cursor: &mut usize, len: usize, code: KeyCode) -> bool {
    let last = len.saturating_sub(1);
    match code {
        KeyCode::Down | KeyCode::Char('j') => *cursor = (*cursor + 1).min(last),
        KeyCode::Up | KeyCode::Char('k') => *cursor = cursor.saturating_sub(1),
        KeyCode::Home | KeyCode::Char('g') => *cursor = 0,
        KeyCode::End | KeyCode::Char('G') => *cursor = last,
        _ => return false,
    }
    true
}
