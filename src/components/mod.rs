//! UI Components
//!
//! Leptos components for the registration form.

pub mod medication_form;
pub mod toast;

pub use medication_form::MedicationForm;
pub use toast::Toast;
