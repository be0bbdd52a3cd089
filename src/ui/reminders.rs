//! Reminders tab

use chrono::{Datelike, NaiveDate};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::domain::Reminder;
use crate::ui::theme::{self, badge, BadgeVariant, Icon};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// "Сегодня, 24 ноября 2024"
pub fn today_caption(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("Сегодня, {} {} {}", date.day(), month, date.year())
}

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Напоминания ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            today_caption(app.today),
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let reminders = app.dataset().reminders;
    let items: Vec<ListItem> = reminders.iter().map(reminder_card).collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !reminders.is_empty() {
        state.select(Some(app.reminders.cursor.min(reminders.len() - 1)));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn reminder_card(reminder: &Reminder) -> ListItem<'static> {
    let accent = theme::reminder_accent(reminder.kind);
    let icon = theme::reminder_icon(reminder.kind);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", icon.glyph()),
                Style::default().fg(Color::Black).bg(accent),
            ),
            Span::raw(" "),
            Span::styled(
                reminder.patient_name,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(reminder.time, BadgeVariant::Outline),
            Span::raw("   "),
            Span::styled(
                format!("[{}]", Icon::Check.glyph()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("    {}", reminder.description)),
        Line::from(""),
    ];
    ListItem::new(Text::from(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_caption() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 24).unwrap();
        assert_eq!(today_caption(date), "Сегодня, 24 ноября 2024");
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(today_caption(date), "Сегодня, 1 марта 2025");
    }
}
