//! Keyboard and mouse dispatch

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode, Tab};
use crate::core::{Action, Module};
use crate::modules::move_cursor;
use crate::ui::layout::{self, rect_contains};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char('J') | KeyCode::PageDown if app.active_tab == Tab::Patients => {
            app.scroll_detail(true);
        }
        KeyCode::Char('K') | KeyCode::PageUp if app.active_tab == Tab::Patients => {
            app.scroll_detail(false);
        }
        _ => {
            let action = global_action(key).unwrap_or_else(|| dispatch_to_panel(app, key));
            app.apply(action);
        }
    }
}

/// Keys that mean the same thing on every tab
fn global_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(':') | KeyCode::Char('/') => Some(Action::OpenCommand),
        KeyCode::Char(ch @ '1'..='3') => Tab::from_shortcut(ch).map(Action::SwitchTab),
        _ => None,
    }
}

fn dispatch_to_panel(app: &mut App, key: KeyEvent) -> Action {
    match app.active_tab {
        Tab::Patients => app.patients.handle_key(key, &app.ctx),
        Tab::Reminders => app.reminders.handle_key(key, &app.ctx),
        Tab::Schedule => app.schedule.handle_key(key, &app.ctx),
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command_input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command_input.push(ch);
        }
        _ => {}
    }
}

/// `size` is the full terminal area the last frame was drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let areas = layout::areas(size);
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(tab) = layout::tab_at(&areas, col, row) {
                app.select_tab(tab);
                return;
            }
            if app.active_tab == Tab::Patients {
                let count = app.dataset().patients.len();
                let cursor = app.patients.cursor;
                if let Some(index) = layout::patient_index_at(&areas, col, row, count, cursor) {
                    app.select_patient_at(index);
                }
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let down = mouse.kind == MouseEventKind::ScrollDown;
            if !rect_contains(areas.main, col, row) {
                return;
            }
            if app.active_tab == Tab::Patients && rect_contains(areas.detail, col, row) {
                app.scroll_detail(down);
                return;
            }
            let code = if down { KeyCode::Down } else { KeyCode::Up };
            let data = *app.dataset();
            match app.active_tab {
                Tab::Patients => move_cursor(&mut app.patients.cursor, data.patients.len(), code),
                Tab::Reminders => {
                    move_cursor(&mut app.reminders.cursor, data.reminders.len(), code)
                }
                Tab::Schedule => move_cursor(&mut app.schedule.cursor, data.schedule.len(), code),
            };
        }
        _ => {}
    }
}
