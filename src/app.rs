use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::config::{ClinicProfile, Config, DoctorProfile};
use crate::core::{parse_command, Action, Command, Context, ExportFormat, NotifyLevel};
use crate::data::Dataset;
use crate::domain::Patient;
use crate::modules::export;
use crate::modules::{PatientsPanel, RemindersPanel, SchedulePanel};

/// Top-level views in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Patients,
    Reminders,
    Schedule,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Patients, Tab::Reminders, Tab::Schedule];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Patients => "Пациенты",
            Tab::Reminders => "Напоминания",
            Tab::Schedule => "Расписание",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Patients => '1',
            Tab::Reminders => '2',
            Tab::Schedule => '3',
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Patients => 0,
            Tab::Reminders => 1,
            Tab::Schedule => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.shortcut() == ch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    level: StatusLevel,
    since: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct App {
    pub active_tab: Tab,
    pub ctx: Context,

    pub doctor: DoctorProfile,
    pub clinic: ClinicProfile,
    pub today: NaiveDate,
    pub export_dir: PathBuf,

    pub patients: PatientsPanel,
    pub reminders: RemindersPanel,
    pub schedule: SchedulePanel,
    pub detail_scroll: u16,

    pub input_mode: InputMode,
    pub command_input: String,
    pub help_open: bool,
    pub should_quit: bool,

    status: Option<StatusMessage>,
    pending_copy: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_dataset(config, Dataset::builtin())
    }

    pub fn with_dataset(config: &Config, dataset: Dataset) -> Self {
        Self {
            active_tab: Tab::Patients,
            ctx: Context::new(dataset),
            doctor: config.doctor.clone(),
            clinic: config.clinic.clone(),
            today: config.today,
            export_dir: config.export_dir(),
            patients: PatientsPanel::default(),
            reminders: RemindersPanel::default(),
            schedule: SchedulePanel::default(),
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            help_open: false,
            should_quit: false,
            status: None,
            pending_copy: None,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.ctx.dataset
    }

    pub fn selected_patient(&self) -> Option<&'static Patient> {
        self.ctx.selected_patient()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!(from = ?self.active_tab, to = ?tab, "switch tab");
        }
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    /// Replace the selection with the patient carrying `id`.
    /// Unknown ids leave the current selection untouched.
    pub fn select_patient(&mut self, id: &str) {
        let Some(index) = self.dataset().patients.iter().position(|p| p.id == id) else {
            warn!(id, "no patient with this id");
            self.set_status(format!("Пациент с ID {id} не найден"), StatusLevel::Warn);
            return;
        };
        self.select_patient_at(index);
    }

    pub fn select_patient_at(&mut self, index: usize) {
        let Some(patient) = self.dataset().patients.get(index) else {
            return;
        };
        if self.ctx.selected_patient != Some(patient.id) {
            self.detail_scroll = 0;
        }
        info!(id = patient.id, "select patient");
        self.ctx.selected_patient = Some(patient.id);
        self.patients.cursor = index;
    }

    /// The reminder "check" button. Reminders are read-only, so this only
    /// reports which reminder was pressed.
    pub fn acknowledge_reminder(&mut self, index: usize) {
        let Some(reminder) = self.dataset().reminders.get(index).copied() else {
            return;
        };
        info!(id = reminder.id, kind = %reminder.kind, "reminder check pressed");
        self.set_status(
            format!(
                "{} {}: отметка не сохраняется",
                reminder.time, reminder.patient_name
            ),
            StatusLevel::Info,
        );
    }

    /// The schedule "book" button. The schedule is read-only.
    pub fn book_slot(&mut self, index: usize) {
        let Some(slot) = self.dataset().schedule.get(index).copied() else {
            return;
        };
        info!(time = slot.time, status = slot.status.as_str(), "book pressed");
        let (text, level) = match slot.patient() {
            Some(patient) => {
                (format!("{}: время занято ({patient})", slot.time), StatusLevel::Warn)
            }
            None if slot.is_bookable() => (
                format!("{}: запись недоступна, расписание только для просмотра", slot.time),
                StatusLevel::Info,
            ),
            None => (format!("{}: обед", slot.time), StatusLevel::Warn),
        };
        self.set_status(text, level);
    }

    pub fn scroll_detail(&mut self, down: bool) {
        if self.selected_patient().is_none() {
            return;
        }
        self.detail_scroll = if down {
            self.detail_scroll.saturating_add(1)
        } else {
            self.detail_scroll.saturating_sub(1)
        };
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::SwitchTab(tab) => self.select_tab(tab),
            Action::SelectPatient(id) => self.select_patient(id),
            Action::AcknowledgeReminder(index) => self.acknowledge_reminder(index),
            Action::BookSlot(index) => self.book_slot(index),
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(text, level) => self.set_status(text, level.into()),
            Action::OpenCommand => self.enter_command(),
            Action::Export(format) => self.export(format),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        match export::export_dataset(self.dataset(), format, &self.export_dir) {
            Ok(path) => {
                info!(path = %path.display(), "export written");
                self.set_status(format!("Экспорт: {}", path.display()), StatusLevel::Info);
            }
            Err(err) => {
                warn!(error = %err, "export failed");
                self.set_status(format!("Ошибка экспорта: {err}"), StatusLevel::Error);
            }
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command_input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command_input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = std::mem::take(&mut self.command_input);
        self.input_mode = InputMode::Normal;
        if input.trim().is_empty() {
            return;
        }
        debug!(input = %input, "command");
        match parse_command(&input) {
            Command::Tab(tab) => self.apply(Action::SwitchTab(tab)),
            Command::Open(id) => {
                self.select_tab(Tab::Patients);
                self.select_patient(&id);
            }
            Command::Export(format) => self.apply(Action::Export(format)),
            Command::Help => self.help_open = true,
            Command::Quit => self.apply(Action::Quit),
            Command::Unknown(raw) => {
                self.set_status(format!("Неизвестная команда: {raw}"), StatusLevel::Warn);
            }
        }
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }
}
