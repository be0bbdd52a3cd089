//! CSV Export
//!
//! Writes the patient roster to a CSV file.

use std::path::Path;

use crate::domain::Patient;

/// Write patients to CSV file
pub fn write_patients(path: &Path, patients: &[Patient]) -> Result<usize, csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "age",
        "gender",
        "last_visit",
        "diagnosis",
        "status",
    ])?;

    for patient in patients {
        let age = patient.age.to_string();
        wtr.write_record([
            patient.id,
            patient.name,
            age.as_str(),
            patient.gender,
            patient.last_visit,
            patient.diagnosis,
            patient.status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(patients.len())
}
