//! Schedule tab

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::domain::{ScheduleSlot, SlotStatus};
use crate::ui::theme::Icon;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Расписание ",
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
            "Ваши записи на сегодня",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let schedule = app.dataset().schedule;
    let items: Vec<ListItem> = schedule.iter().map(slot_row).collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !schedule.is_empty() {
        state.select(Some(app.schedule.cursor.min(schedule.len() - 1)));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}

fn slot_row(slot: &ScheduleSlot) -> ListItem<'static> {
    let time = Span::styled(
        format!("{:<7}", slot.time),
        Style::default().add_modifier(Modifier::BOLD),
    );
    let mut spans = vec![time];
    match slot.status {
        SlotStatus::Free => {
            spans.push(Span::styled(
                format!("{} Свободное окно", Icon::CheckCircle.glyph()),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!(" {} Записать ", Icon::Plus.glyph()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        SlotStatus::Busy { patient } => {
            spans.push(Span::styled(
                format!("{} ", Icon::UserCheck.glyph()),
                Style::default().fg(Color::LightBlue),
            ));
            spans.push(Span::styled(
                patient,
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        SlotStatus::Lunch => {
            spans.push(Span::styled(
                format!("{} Обед", Icon::Coffee.glyph()),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    ListItem::new(Text::from(vec![Line::from(spans), Line::from("")]))
}
