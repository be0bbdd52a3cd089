//! Reminder list panel

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{Action, Context, Module, NotifyLevel};

#[derive(Debug, Clone, Default)]
pub struct RemindersPanel {
    pub cursor: usize,
}

impl Module for RemindersPanel {
    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Action {
        let len = ctx.dataset.reminders.len();
        if super::move_cursor(&mut self.cursor, len, key.code) {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') if self.cursor < len => {
                Action::AcknowledgeReminder(self.cursor)
            }
            KeyCode::Char('y') => match self.copy_text(ctx) {
                Some(text) => Action::Copy(text),
                None => Action::Notify("Нечего копировать".to_string(), NotifyLevel::Warn),
            },
            _ => Action::None,
        }
    }

    fn copy_text(&self, ctx: &Context) -> Option<String> {
        let reminder = ctx.dataset.reminders.get(self.cursor)?;
        Some(format!(
            "{} {}: {}",
            reminder.time, reminder.patient_name, reminder.description
        ))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_check_targets_cursor() {
        let ctx = Context::default();
        let mut panel = RemindersPanel::default();
        panel.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE), &ctx);
        assert_eq!(
            panel.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE), &ctx),
            Action::AcknowledgeReminder(3)
        );
        assert_eq!(
            panel.copy_text(&ctx).as_deref(),
            Some("17:00 Новикова Е.А.: Консультация по анализам")
        );
    }
}
