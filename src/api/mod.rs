//! LiveDDM API client and wire models
//!
//! This module provides the typed client for the LiveDDM REST surface:
//! vendor authentication plus the three endpoint operations (patient
//! page, appointments by date, appointment upsert), layered on one shared
//! connection context.

pub mod client;
pub mod models;

// Re-export commonly used types
pub use client::LiveDdmClient;
pub use models::{Appointment, Credential, Gender, Patient};
