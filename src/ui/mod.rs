use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod patients;
pub mod reminders;
pub mod schedule;
pub mod theme;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, Tab};
use theme::Icon;

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_sidebar(f, &areas, app);
    match app.active_tab {
        Tab::Patients => patients::draw(f, &areas, app),
        Tab::Reminders => reminders::draw(f, areas.main, app),
        Tab::Schedule => schedule::draw(f, areas.main, app),
    }
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

pub fn tab_icon(tab: Tab) -> Icon {
    match tab {
        Tab::Patients => Icon::Users,
        Tab::Reminders => Icon::Bell,
        Tab::Schedule => Icon::Calendar,
    }
}

fn draw_sidebar(f: &mut Frame, areas: &layout::UiAreas, app: &App) {
    let brand = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", Icon::Activity.glyph()),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(
                app.clinic.name.clone(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", app.clinic.tagline),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(brand, areas.sidebar_brand);

    // One button per tab with a blank row between; layout::tab_at relies on it.
    let mut lines = Vec::new();
    for tab in Tab::ALL {
        let is_active = tab == app.active_tab;
        let style = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {:<14}", tab_icon(tab).glyph(), tab.title()),
                style,
            ),
            Span::styled(
                format!(" {}", tab.shortcut()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));
    }
    let nav = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(nav, areas.sidebar_nav);

    let doctor = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.doctor.initials()),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                app.doctor.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", app.doctor.specialty),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(doctor, areas.sidebar_doctor);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let selected = app
        .selected_patient()
        .map(|patient| patient.name)
        .unwrap_or("—");
    let mut spans = vec![
        Span::styled("Вкладка ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_tab.title())),
        Span::styled("Пациент ", Style::default().fg(Color::DarkGray)),
        Span::raw(selected.to_string()),
    ];
    if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::Yellow,
            StatusLevel::Error => Color::LightRed,
        };
        spans.push(Span::raw("  │ "));
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(": ", Style::default().fg(Color::Yellow)),
            Span::raw(app.command_input.clone()),
            Span::styled(
                format!("  {}", command_hint(&app.command_input)),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => Line::from(Span::styled(
            "1-3 вкладки  j/k выбор  Enter открыть  J/K прокрутка  y копировать  : команда  ? помощь  q выход",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(content), area);
}

fn command_hint(input: &str) -> &'static str {
    let head = input.split_whitespace().next().unwrap_or("");
    match head {
        "open" | "o" => "open <id>",
        "export" | "exp" => "export csv | json",
        _ => "patients | reminders | schedule | open <id> | export csv|json | quit",
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Навигация"),
        Line::from("  1 / 2 / 3      Пациенты / Напоминания / Расписание"),
        Line::from("  Tab / S-Tab    Следующая / предыдущая вкладка"),
        Line::from("  j / k, ↑ / ↓   Перемещение по списку"),
        Line::from("  g / G          В начало / в конец"),
        Line::from("  Enter          Открыть пациента / отметить / записать"),
        Line::from("  J / K          Прокрутка карты пациента"),
        Line::from("  Мышь           Клик по вкладке или пациенту"),
        Line::from(""),
        Line::from("Действия"),
        Line::from("  y              Копировать строку"),
        Line::from("  :              Командная строка"),
        Line::from("  ?              Помощь"),
        Line::from("  q              Выход"),
        Line::from(""),
        Line::from("Команды"),
        Line::from("  :open 3        Открыть пациента по ID"),
        Line::from("  :export csv    Список пациентов в CSV"),
        Line::from("  :export json   Все данные в JSON"),
    ];

    let block = Block::default()
        .title(" Помощь ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
