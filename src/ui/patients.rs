//! Patients tab: roster on the left, patient card on the right

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::domain::Patient;
use crate::ui::layout::{self, UiAreas, ROSTER_HEADER_HEIGHT};
use crate::ui::theme::{self, badge, BadgeVariant, Icon};
use crate::ui::widgets::VitalsReadout;

pub fn draw(f: &mut Frame, areas: &UiAreas, app: &App) {
    draw_roster(f, areas, app);
    match app.selected_patient() {
        Some(patient) => draw_detail(f, areas.detail, app, patient),
        None => draw_placeholder(f, areas.detail),
    }
}

fn draw_roster(f: &mut Frame, areas: &UiAreas, app: &App) {
    let patients = app.dataset().patients;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Пациенты ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, areas.roster);

    let inner = layout::rect_inner(areas.roster);
    let header = Rect {
        height: ROSTER_HEADER_HEIGHT.min(inner.height),
        ..inner
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Всего активных: {}", patients.len()),
            Style::default().fg(Color::DarkGray),
        ))),
        header,
    );

    let selected_id = app.ctx.selected_patient;
    let items: Vec<ListItem> = patients
        .iter()
        .map(|patient| patient_card(patient, selected_id == Some(patient.id)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let offset = layout::roster_offset(areas, app.patients.cursor, patients.len());
    let mut state = ListState::default().with_offset(offset);
    if !patients.is_empty() {
        state.select(Some(app.patients.cursor.min(patients.len() - 1)));
    }
    f.render_stateful_widget(list, layout::roster_list(areas), &mut state);
}

/// Three text rows plus a blank separator, see layout::PATIENT_CARD_HEIGHT
fn patient_card(patient: &Patient, is_selected: bool) -> ListItem<'static> {
    let name_style = if is_selected {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if is_selected { "▌" } else { " " };
    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(patient.name, name_style),
            Span::raw(" "),
            Span::styled("●", Style::default().fg(theme::status_color(patient.status))),
        ]),
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(patient.age_line(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::raw(patient.diagnosis),
            Span::styled(
                format!(" · Последний визит: {}", patient.last_visit),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];
    ListItem::new(Text::from(lines))
}

fn draw_placeholder(f: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);
    let text = Paragraph::new(vec![
        Line::from(Icon::UserSearch.glyph()),
        Line::from(""),
        Line::from("Выберите пациента для просмотра"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(text, rows[1]);
}

fn draw_detail(f: &mut Frame, area: Rect, app: &App, patient: &Patient) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Карта пациента ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(4),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(detail_header(patient)), chunks[0]);

    let body = Paragraph::new(detail_body(app))
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(body, chunks[1]);

    f.render_widget(
        Paragraph::new(section_title(Icon::Activity, "Текущее состояние")),
        chunks[2],
    );
    f.render_widget(VitalsReadout::new(&app.dataset().vitals), chunks[3]);
}

fn detail_header(patient: &Patient) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            patient.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "ID: {} • {} лет • {}",
                patient.id, patient.age, patient.gender
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(badge(patient.diagnosis, BadgeVariant::Outline)),
        Line::from(""),
    ]
}

fn section_title(icon: Icon, title: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} ", icon.glyph()), Style::default().fg(Color::Cyan)),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

/// Heredity and history are the same for every patient.
fn detail_body(app: &App) -> Vec<Line<'static>> {
    let data = app.dataset();
    let mut lines = vec![section_title(Icon::Dna, "Наследственная предрасположенность")];
    for item in data.heredity {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}  ", item.relative),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            badge(item.severity.label(), theme::severity_badge(item.severity)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.condition),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_title(Icon::FileText, "История болезни"));
    let last = data.medical_history.len().saturating_sub(1);
    for (index, record) in data.medical_history.iter().enumerate() {
        let rail = if index == last { "   " } else { "  │" };
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(Color::Cyan)),
            badge(record.kind, BadgeVariant::Outline),
            Span::styled(format!(" {}", record.date), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(rail, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {}", record.description)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(rail, Style::default().fg(Color::Cyan)),
            Span::styled(format!(" {}", record.doctor), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}
