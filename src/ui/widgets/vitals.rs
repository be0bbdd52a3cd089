//! Three-tile vitals readout for the patient detail panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::domain::Vitals;
use crate::ui::theme::Icon;

pub struct VitalsReadout<'a> {
    vitals: &'a Vitals,
}

impl<'a> VitalsReadout<'a> {
    pub fn new(vitals: &'a Vitals) -> Self {
        Self { vitals }
    }

    fn tiles(&self) -> [(Icon, &'a str, &'static str, Color); 3] {
        [
            (Icon::Heart, self.vitals.blood_pressure, "Давление", Color::LightBlue),
            (Icon::Thermometer, self.vitals.temperature, "Температура", Color::LightGreen),
            (Icon::Activity, self.vitals.pulse, "Пульс", Color::LightMagenta),
        ]
    }
}

impl<'a> Widget for VitalsReadout<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for ((icon, value, label, color), tile) in self.tiles().into_iter().zip(chunks.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    format!("{} {}", icon.glyph(), value),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .render(*tile, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VITALS;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_all_values() {
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        VitalsReadout::new(&VITALS).render(area, &mut buf);
        let values = row_text(&buf, 1);
        assert!(values.contains("140/90"));
        assert!(values.contains("36.6°"));
        assert!(values.contains("72"));
        let labels = row_text(&buf, 2);
        assert!(labels.contains("Давление"));
        assert!(labels.contains("Пульс"));
    }

    #[test]
    fn test_zero_area_is_noop() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        VitalsReadout::new(&VITALS).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(row_text(&buf, 0).trim(), "");
    }
}
