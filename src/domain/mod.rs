//! Clinical record types shown by the dashboard

pub mod error;
pub mod records;

pub use error::DomainError;
pub use records::{
    HeredityRecord, MedicalHistoryRecord, Patient, PatientStatus, Reminder, ReminderKind,
    ScheduleSlot, Severity, SlotStatus, Vitals,
};
