//! JSON Export
//!
//! Writes every dataset to one pretty-printed JSON document.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::data::Dataset;
use crate::domain::{HeredityRecord, MedicalHistoryRecord, Patient, Reminder, ScheduleSlot, Vitals};

/// Patient plus its last visit in ISO form
#[derive(Serialize)]
struct ExportablePatient<'a> {
    #[serde(flatten)]
    patient: &'a Patient,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_visit_iso: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ExportableHistory<'a> {
    #[serde(flatten)]
    record: &'a MedicalHistoryRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    date_iso: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ExportableDataset<'a> {
    patients: Vec<ExportablePatient<'a>>,
    reminders: &'a [Reminder],
    schedule: &'a [ScheduleSlot],
    medical_history: Vec<ExportableHistory<'a>>,
    heredity: &'a [HeredityRecord],
    vitals: &'a Vitals,
}

pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), super::ExportError> {
    let patients = dataset
        .patients
        .iter()
        .map(|patient| ExportablePatient {
            patient,
            last_visit_iso: patient.last_visit_date().ok(),
        })
        .collect();
    let medical_history = dataset
        .medical_history
        .iter()
        .map(|record| ExportableHistory {
            record,
            date_iso: record.parsed_date().ok(),
        })
        .collect();
    let doc = ExportableDataset {
        patients,
        reminders: dataset.reminders,
        schedule: dataset.schedule,
        medical_history,
        heredity: dataset.heredity,
        vitals: &dataset.vitals,
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
