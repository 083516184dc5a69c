//! Medication Submission Hook
//!
//! Wraps the API client with loading/error state for the form.

use leptos::*;

use crate::api::{ClientError, CreateMedicationResponse, MedicationApi, MedicationRecord};

/// Handle returned by [`use_medication`].
#[derive(Clone, Copy)]
pub struct MedicationSubmission {
    /// True while a submission is in flight
    pub loading: RwSignal<bool>,
    /// Display message for the last failure, cleared on the next attempt
    pub error: RwSignal<Option<String>>,
}

/// Create submission state scoped to the calling component.
pub fn use_medication() -> MedicationSubmission {
    MedicationSubmission {
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    }
}

impl MedicationSubmission {
    /// Submit a record, tracking loading and error state.
    ///
    /// The failure is also returned so the caller decides what happens to
    /// the form. Nothing here guards against reentrant calls; the submit
    /// button's disabled state does.
    pub async fn create(
        &self,
        api: &MedicationApi,
        record: &MedicationRecord,
    ) -> Result<CreateMedicationResponse, ClientError> {
        self.loading.set(true);
        self.error.set(None);

        let result = api.create(record).await;

        if let Err(e) = &result {
            self.error.set(Some(e.to_string()));
        }
        self.loading.set(false);

        result
    }
}
