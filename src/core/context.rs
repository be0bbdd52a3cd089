//! Shared context passed to modules

use crate::data::Dataset;
use crate::domain::Patient;

/// Read-only state every panel may look at
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub dataset: Dataset,

    /// Id of the patient shown in the detail panel
    pub selected_patient: Option<&'static str>,
}

impl Context {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            selected_patient: None,
        }
    }

    pub fn selected_patient(&self) -> Option<&'static Patient> {
        self.selected_patient.and_then(|id| self.dataset.patient(id))
    }
}
