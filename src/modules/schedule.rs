//! Day schedule panel

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};

#[derive(Debug, Clone, Default)]
pub struct SchedulePanel {
    pub cursor: usize,
}

impl Module for SchedulePanel {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let len = ctx.dataset.schedule.len();
        if super::move_cursor(&mut self.cursor, len, key.code) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('b') if self.cursor < len => {
                Action::BookSlot(self.cursor)
            }
            KeyCode::Char('y') => match self.copy_text(ctx) {
                Some(text) => Action::Copy(text),
                None => Action::Notify("Нечего копировать".to_string(), NotifyLevel::Warn),
            },
            _ => Action::None,
        }
    }

    fn copy_text(&self, ctx: &Context) -> Option<String> {
        let slot = ctx.dataset.schedule.get(self.cursor)?;
        let what = match slot.patient() {
            Some(patient) => patient,
            None if slot.is_bookable() => "Свободное окно",
            None => "Обед",
        };
        Some(format!("{} {}", slot.time, what))
    }
}
