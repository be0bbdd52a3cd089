//! Patient roster panel

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};

#[derive(Debug, Clone, Default)]
pub struct PatientsPanel {
    /// Highlighted roster row
    pub cursor: usize,
}

impl Module for PatientsPanel {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let patients = ctx.dataset.patients;
        if super::move_cursor(&mut self.cursor, patients.len(), key.code) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => patients
                .get(self.cursor)
                .map(|patient| Action::SelectPatient(patient.id))
                .unwrap_or(Action::None),
            KeyCode::Char('y') => match self.copy_text(ctx) {
                Some(text) => Action::Copy(text),
                None => Action::Notify("Нечего копировать".to_string(), NotifyLevel::Warn),
            },
            _ => Action::None,
        }
    }

    fn copy_text(&self, ctx: &Context) -> Option<String> {
        // The detail panel wins over the highlighted row.
        let patient = ctx
            .selected_patient()
            .or_else(|| ctx.dataset.patients.get(self.cursor))?;
        Some(format!(
            "{} (ID {}), {}, {}",
            patient.name,
            patient.id,
            patient.age_line(),
            patient.diagnosis
        ))
    }
}
