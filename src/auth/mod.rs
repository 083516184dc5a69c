//! Login SDK Integration
//!
//! Bindings to the messaging-platform login SDK and the identity client used
//! for authenticated submission.

pub mod liff;

pub use liff::IdentityClient;
