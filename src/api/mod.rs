//! API Client
//!
//! Wire types and HTTP access to the medication API.

pub mod client;

pub use client::{ClientError, CreateMedicationResponse, MedicationApi, MedicationRecord};
