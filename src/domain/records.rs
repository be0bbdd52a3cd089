use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use super::DomainError;

/// Date format used by every literal date in the datasets
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Stable,
    Attention,
    Critical,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [
        PatientStatus::Stable,
        PatientStatus::Attention,
        PatientStatus::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Stable => "stable",
            PatientStatus::Attention => "attention",
            PatientStatus::Critical => "critical",
        }
    }
}

impl FromStr for PatientStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(PatientStatus::Stable),
            "attention" => Ok(PatientStatus::Attention),
            "critical" => Ok(PatientStatus::Critical),
            _ => Err(DomainError::UnknownVariant {
                kind: "patient status",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    Appointment,
    Medication,
    Test,
}

impl ReminderKind {
    pub const ALL: [ReminderKind; 3] = [
        ReminderKind::Appointment,
        ReminderKind::Medication,
        ReminderKind::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Appointment => "appointment",
            ReminderKind::Medication => "medication",
            ReminderKind::Test => "test",
        }
    }
}

impl FromStr for ReminderKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointment" => Ok(ReminderKind::Appointment),
            "medication" => Ok(ReminderKind::Medication),
            "test" => Ok(ReminderKind::Test),
            _ => Err(DomainError::UnknownVariant {
                kind: "reminder type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Badge caption shown next to a heredity record
    pub fn label(&self) -> &'static str {
        match self {
            Severity::High => "Высокий риск",
            Severity::Medium => "Средний",
            Severity::Low => "Низкий",
        }
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(DomainError::UnknownVariant {
                kind: "severity",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Patient {
    pub id: &'static str,
    pub name: &'static str,
    pub age: u8,
    pub gender: &'static str,
    pub last_visit: &'static str,
    pub diagnosis: &'static str,
    pub status: PatientStatus,
}

impl Patient {
    pub fn last_visit_date(&self) -> Result<NaiveDate, DomainError> {
        parse_date(self.last_visit)
    }

    /// "45 лет, М" as printed under the patient name
    pub fn age_line(&self) -> String {
        format!("{} лет, {}", self.age, self.gender)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub id: &'static str,
    pub patient_name: &'static str,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub time: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SlotStatus {
    Free,
    Busy { patient: &'static str },
    Lunch,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Free => "free",
            SlotStatus::Busy { .. } => "busy",
            SlotStatus::Lunch => "lunch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    pub time: &'static str,
    #[serde(flatten)]
    pub status: SlotStatus,
}

impl ScheduleSlot {
    pub fn patient(&self) -> Option<&'static str> {
        match self.status {
            SlotStatus::Busy { patient } => Some(patient),
            SlotStatus::Free | SlotStatus::Lunch => None,
        }
    }

    pub fn is_bookable(&self) -> bool {
        matches!(self.status, SlotStatus::Free)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedicalHistoryRecord {
    pub date: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub doctor: &'static str,
}

impl MedicalHistoryRecord {
    pub fn parsed_date(&self) -> Result<NaiveDate, DomainError> {
        parse_date(self.date)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeredityRecord {
    pub relative: &'static str,
    pub condition: &'static str,
    pub severity: Severity,
}

/// Current-state readout in the patient detail panel.
///
/// The values are fixed and do not follow the selected patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vitals {
    pub blood_pressure: &'static str,
    pub temperature: &'static str,
    pub pulse: &'static str,
}

fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| DomainError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names_round_trip_through_from_str() {
        for status in PatientStatus::ALL {
            assert_eq!(status.as_str().parse::<PatientStatus>(), Ok(status));
        }
        for kind in ReminderKind::ALL {
            assert_eq!(kind.as_str().parse::<ReminderKind>(), Ok(kind));
        }
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let err = "deceased".parse::<PatientStatus>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownVariant {
                kind: "patient status",
                value: "deceased".to_string(),
            }
        );
        assert!("call".parse::<ReminderKind>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_parse_matches_exact_names_only() {
        assert!("Critical".parse::<PatientStatus>().is_err());
        assert!(" stable".parse::<PatientStatus>().is_err());
        assert!(" TEST ".parse::<ReminderKind>().is_err());
        assert!("HIGH".parse::<Severity>().is_err());
    }

    #[test]
    fn test_slot_patient_only_when_busy() {
        let busy = ScheduleSlot {
            time: "10:00",
            status: SlotStatus::Busy { patient: "Васильев И.И." },
        };
        let free = ScheduleSlot {
            time: "09:00",
            status: SlotStatus::Free,
        };
        let lunch = ScheduleSlot {
            time: "13:00",
            status: SlotStatus::Lunch,
        };
        assert_eq!(busy.patient(), Some("Васильев И.И."));
        assert_eq!(free.patient(), None);
        assert_eq!(lunch.patient(), None);
        assert!(free.is_bookable());
        assert!(!busy.is_bookable());
        assert!(!lunch.is_bookable());
    }

    #[test]
    fn test_last_visit_parses_day_first() {
        let patient = Patient {
            id: "9",
            name: "Тестов Т.Т.",
            age: 40,
            gender: "М",
            last_visit: "02.11.2024",
            diagnosis: "—",
            status: PatientStatus::Stable,
        };
        assert_eq!(
            patient.last_visit_date(),
            Ok(NaiveDate::from_ymd_opt(2024, 11, 2).unwrap())
        );
        assert_eq!(patient.age_line(), "40 лет, М");
    }

    #[test]
    fn test_invalid_date_reports_value() {
        let record = MedicalHistoryRecord {
            date: "2024-11-20",
            kind: "Осмотр",
            description: "",
            doctor: "",
        };
        match record.parsed_date() {
            Err(DomainError::InvalidDate { value, .. }) => assert_eq!(value, "2024-11-20"),
            other => panic!("expected invalid date, got {other:?}"),
        }
    }

    #[test]
    fn test_slot_serializes_with_flat_status() {
        let slot = ScheduleSlot {
            time: "12:00",
            status: SlotStatus::Busy { patient: "Петрова М.А." },
        };
        let value = serde_json::to_value(slot).unwrap();
        assert_eq!(value["time"], "12:00");
        assert_eq!(value["status"], "busy");
        assert_eq!(value["patient"], "Петрова М.А.");

        let lunch = serde_json::to_value(ScheduleSlot {
            time: "13:00",
            status: SlotStatus::Lunch,
        })
        .unwrap();
        assert_eq!(lunch["status"], "lunch");
        assert!(lunch.get("patient").is_none());
    }
}
