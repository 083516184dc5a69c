//! State Management
//!
//! Global notification state and the submission hook.

pub mod global;
pub mod medication;

pub use global::{provide_global_state, GlobalState};
pub use medication::{use_medication, MedicationSubmission};
