//! Status, icon and badge lookups

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::domain::{PatientStatus, ReminderKind, Severity};

/// Named pictograms drawn as single-width glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Activity,
    Users,
    Bell,
    Calendar,
    Pill,
    FlaskConical,
    Dna,
    FileText,
    Heart,
    Thermometer,
    Check,
    CheckCircle,
    UserCheck,
    Coffee,
    Plus,
    UserSearch,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Activity => "∿",
            Icon::Users => "≡",
            Icon::Bell => "◈",
            Icon::Calendar => "▦",
            Icon::Pill => "◍",
            Icon::FlaskConical => "⚗",
            Icon::Dna => "≋",
            Icon::FileText => "▤",
            Icon::Heart => "♥",
            Icon::Thermometer => "±",
            Icon::Check => "✓",
            Icon::CheckCircle => "✔",
            Icon::UserCheck => "☑",
            Icon::Coffee => "♨",
            Icon::Plus => "+",
            Icon::UserSearch => "⌕",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn style(&self) -> Style {
        match self {
            BadgeVariant::Default => Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
            BadgeVariant::Secondary => Style::default().fg(Color::Black).bg(Color::Gray),
            BadgeVariant::Destructive => Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            BadgeVariant::Outline => Style::default().fg(Color::White),
        }
    }
}

/// `[ text ]` rendered in the variant's colors
pub fn badge(text: impl Into<String>, variant: BadgeVariant) -> Span<'static> {
    let text = text.into();
    let text = match variant {
        BadgeVariant::Outline => format!("[{text}]"),
        _ => format!(" {text} "),
    };
    Span::styled(text, variant.style())
}

pub fn status_color(status: PatientStatus) -> Color {
    match status {
        PatientStatus::Stable => Color::Green,
        PatientStatus::Attention => Color::Yellow,
        PatientStatus::Critical => Color::Red,
    }
}

/// Unrecognized statuses are drawn gray.
pub fn status_color_for(raw: &str) -> Color {
    raw.parse::<PatientStatus>()
        .map(status_color)
        .unwrap_or(Color::Gray)
}

pub fn reminder_icon(kind: ReminderKind) -> Icon {
    match kind {
        ReminderKind::Appointment => Icon::Calendar,
        ReminderKind::Medication => Icon::Pill,
        ReminderKind::Test => Icon::FlaskConical,
    }
}

/// Unrecognized reminder types get the bell.
pub fn reminder_icon_for(raw: &str) -> Icon {
    raw.parse::<ReminderKind>()
        .map(reminder_icon)
        .unwrap_or(Icon::Bell)
}

pub fn reminder_accent(kind: ReminderKind) -> Color {
    match kind {
        ReminderKind::Appointment => Color::Blue,
        ReminderKind::Medication => Color::Green,
        ReminderKind::Test => Color::Magenta,
    }
}

pub fn severity_badge(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::High => BadgeVariant::Destructive,
        Severity::Medium => BadgeVariant::Default,
        Severity::Low => BadgeVariant::Secondary,
    }
}

pub fn severity_badge_for(raw: &str) -> BadgeVariant {
    raw.parse::<Severity>()
        .map(severity_badge)
        .unwrap_or(BadgeVariant::Default)
}
