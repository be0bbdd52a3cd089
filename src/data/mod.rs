//! Built-in mock records.
//!
//! Everything here is fictional and fixed at compile time. Nothing in the
//! crate hands out a mutable reference to these arrays.

use crate::domain::{
    HeredityRecord, MedicalHistoryRecord, Patient, PatientStatus, Reminder, ReminderKind,
    ScheduleSlot, Severity, SlotStatus, Vitals,
};

pub const PATIENTS: [Patient; 4] = [
    Patient {
        id: "1",
        name: "Иванов Петр Сергеевич",
        age: 45,
        gender: "М",
        last_visit: "20.11.2024",
        diagnosis: "Гипертония",
        status: PatientStatus::Stable,
    },
    Patient {
        id: "2",
        name: "Смирнова Анна Ивановна",
        age: 32,
        gender: "Ж",
        last_visit: "22.11.2024",
        diagnosis: "Диабет 2 типа",
        status: PatientStatus::Attention,
    },
    Patient {
        id: "3",
        name: "Козлов Михаил Петрович",
        age: 58,
        gender: "М",
        last_visit: "23.11.2024",
        diagnosis: "ИБС",
        status: PatientStatus::Critical,
    },
    Patient {
        id: "4",
        name: "Новикова Елена Александровна",
        age: 28,
        gender: "Ж",
        last_visit: "21.11.2024",
        diagnosis: "Анемия",
        status: PatientStatus::Stable,
    },
];

pub const REMINDERS: [Reminder; 4] = [
    Reminder {
        id: "1",
        patient_name: "Иванов П.С.",
        kind: ReminderKind::Appointment,
        time: "14:00",
        description: "Контрольный осмотр",
    },
    Reminder {
        id: "2",
        patient_name: "Смирнова А.И.",
        kind: ReminderKind::Medication,
        time: "15:30",
        description: "Напомнить об инсулине перед обедом",
    },
    Reminder {
        id: "3",
        patient_name: "Козлов М.П.",
        kind: ReminderKind::Test,
        time: "16:00",
        description: "Результаты ЭКГ готовы",
    },
    Reminder {
        id: "4",
        patient_name: "Новикова Е.А.",
        kind: ReminderKind::Appointment,
        time: "17:00",
        description: "Консультация по анализам",
    },
];

pub const SCHEDULE: [ScheduleSlot; 9] = [
    ScheduleSlot {
        time: "09:00",
        status: SlotStatus::Free,
    },
    ScheduleSlot {
        time: "10:00",
        status: SlotStatus::Busy {
            patient: "Васильев И.И.",
        },
    },
    ScheduleSlot {
        time: "11:00",
        status: SlotStatus::Free,
    },
    ScheduleSlot {
        time: "12:00",
        status: SlotStatus::Busy {
            patient: "Петрова М.А.",
        },
    },
    ScheduleSlot {
        time: "13:00",
        status: SlotStatus::Lunch,
    },
    ScheduleSlot {
        time: "14:00",
        status: SlotStatus::Busy {
            patient: "Иванов П.С.",
        },
    },
    ScheduleSlot {
        time: "15:00",
        status: SlotStatus::Free,
    },
    ScheduleSlot {
        time: "16:00",
        status: SlotStatus::Free,
    },
    ScheduleSlot {
        time: "17:00",
        status: SlotStatus::Busy {
            patient: "Новикова Е.А.",
        },
    },
];

pub const MEDICAL_HISTORY: [MedicalHistoryRecord; 3] = [
    MedicalHistoryRecord {
        date: "20.11.2024",
        kind: "Осмотр",
        description: "Артериальное давление 140/90. Назначен Эналаприл 10мг",
        doctor: "Др. Соколова",
    },
    MedicalHistoryRecord {
        date: "15.10.2024",
        kind: "Анализы",
        description: "ОАК: Hb 135 г/л, Лейкоциты 6.2",
        doctor: "Др. Соколова",
    },
    MedicalHistoryRecord {
        date: "01.09.2024",
        kind: "Консультация",
        description: "Жалобы на головные боли. ЭКГ без патологии",
        doctor: "Др. Соколова",
    },
];

pub const HEREDITY: [HeredityRecord; 3] = [
    HeredityRecord {
        relative: "Отец",
        condition: "Инфаркт миокарда (62 года)",
        severity: Severity::High,
    },
    HeredityRecord {
        relative: "Мать",
        condition: "Гипертоническая болезнь",
        severity: Severity::Medium,
    },
    HeredityRecord {
        relative: "Дедушка (по отцу)",
        condition: "Сахарный диабет 2 типа",
        severity: Severity::Medium,
    },
];

pub const VITALS: Vitals = Vitals {
    blood_pressure: "140/90",
    temperature: "36.6°",
    pulse: "72",
};

/// Read-only view over every dataset the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dataset {
    pub patients: &'static [Patient],
    pub reminders: &'static [Reminder],
    pub schedule: &'static [ScheduleSlot],
    pub medical_history: &'static [MedicalHistoryRecord],
    pub heredity: &'static [HeredityRecord],
    pub vitals: Vitals,
}

impl Dataset {
    pub fn builtin() -> Self {
        Self {
            patients: &PATIENTS,
            reminders: &REMINDERS,
            schedule: &SCHEDULE,
            medical_history: &MEDICAL_HISTORY,
            heredity: &HEREDITY,
            vitals: VITALS,
        }
    }

    pub fn patient(&self, id: &str) -> Option<&'static Patient> {
        self.patients.iter().find(|patient| patient.id == id)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_builtin_counts() {
        let data = Dataset::builtin();
        assert_eq!(data.patients.len(), 4);
        assert_eq!(data.reminders.len(), 4);
        assert_eq!(data.schedule.len(), 9);
        assert_eq!(data.medical_history.len(), 3);
        assert_eq!(data.heredity.len(), 3);
    }

    #[test]
    fn test_patient_ids_are_unique() {
        let ids: BTreeSet<&str> = PATIENTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PATIENTS.len());
    }

    #[test]
    fn test_all_literal_dates_parse() {
        for patient in PATIENTS.iter() {
            assert!(patient.last_visit_date().is_ok(), "{}", patient.last_visit);
        }
        for record in MEDICAL_HISTORY.iter() {
            assert!(record.parsed_date().is_ok(), "{}", record.date);
        }
    }

    #[test]
    fn test_schedule_is_hourly_with_single_lunch() {
        let lunches = SCHEDULE
            .iter()
            .filter(|slot| slot.status == SlotStatus::Lunch)
            .count();
        assert_eq!(lunches, 1);
        assert_eq!(SCHEDULE.first().map(|s| s.time), Some("09:00"));
        assert_eq!(SCHEDULE.last().map(|s| s.time), Some("17:00"));
        assert_eq!(SCHEDULE.iter().filter(|s| s.is_bookable()).count(), 4);
    }

    #[test]
    fn test_patient_lookup() {
        let data = Dataset::builtin();
        assert_eq!(data.patient("3").map(|p| p.diagnosis), Some("ИБС"));
        assert!(data.patient("42").is_none());
    }
}
