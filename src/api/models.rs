//! LiveDDM API models
//!
//! This module defines the request and response structures exchanged with
//! the LiveDDM REST API. The JSON field names are fixed wire identifiers;
//! the inconsistent casing (`providerID` next to `procedureCategoryId`) is
//! part of the real contract and is matched exactly, never normalized.
//!
//! All entities are transient value objects reconstructed from each
//! response; the client holds no persistent store and no identity map
//! across calls.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vendor authentication credential
///
/// Produced once by [`LiveDdmClient::authenticate`] by exchanging the
/// vendor API key; read-only afterward. The token is not refreshed
/// automatically.
///
/// [`LiveDdmClient::authenticate`]: crate::api::LiveDdmClient::authenticate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Name of the vendor the key belongs to
    #[serde(rename = "vendorName")]
    pub vendor_name: String,

    /// Bearer token attached to every authenticated request
    pub token: String,

    /// Expiry of the bearer token, as reported by the server
    #[serde(rename = "expiresOn")]
    pub expires_on: NaiveDateTime,
}

/// Patient gender enumeration
///
/// Serialized as a bare integer on the wire (0 = unspecified, 1 = male,
/// 2 = female, 3 = other). Out-of-range values are a decode error, not
/// silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Other,
}

impl TryFrom<u8> for Gender {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Gender::Unspecified),
            1 => Ok(Gender::Male),
            2 => Ok(Gender::Female),
            3 => Ok(Gender::Other),
            other => Err(format!("invalid gender value: {other}")),
        }
    }
}

impl From<Gender> for u8 {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Unspecified => 0,
            Gender::Male => 1,
            Gender::Female => 2,
            Gender::Other => 3,
        }
    }
}

/// Patient identity and demographic record
///
/// Immutable snapshot as returned by the server; the client never mutates
/// it. The responsible-family-member fields are a weak reference by id
/// plus display name, not an ownership relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: i32,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDateTime,

    #[serde(default)]
    pub gender: Gender,

    #[serde(rename = "phoneNumber", default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "cellNumber", default)]
    pub cell_number: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    #[serde(default)]
    pub street1: Option<String>,

    #[serde(default)]
    pub street2: Option<String>,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub province: Option<String>,

    #[serde(rename = "postalCode", default)]
    pub postal_code: Option<String>,

    /// Id of the responsible family member, if any
    #[serde(rename = "rfmId", default)]
    pub rfm_id: Option<i32>,

    /// Display name of the responsible family member, if any
    #[serde(rename = "responsibleFamilyMember", default)]
    pub responsible_family_member: Option<String>,
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Scheduling record for one appointment
///
/// The calendar day and the time of day are stored independently, exactly
/// as the server sends them; [`Appointment::instant`] combines them at
/// read time. The embedded patient snapshot is optional and
/// server-controlled; `patient_id` is the authoritative reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "appointmentId")]
    pub appointment_id: i32,

    #[serde(rename = "patientId")]
    pub patient_id: i32,

    #[serde(default)]
    pub patient: Option<Patient>,

    /// Calendar day of the appointment; the time-of-day portion of this
    /// field is not meaningful
    pub date: NaiveDateTime,

    /// Time of day of the appointment; the calendar-day portion of this
    /// field is not meaningful
    pub time: NaiveDateTime,

    #[serde(rename = "isConfirmed")]
    pub is_confirmed: bool,

    #[serde(rename = "isComplete")]
    pub is_complete: bool,

    /// Whether the patient has arrived
    #[serde(rename = "isHere")]
    pub is_here: bool,

    /// Scheduling unit count
    pub units: i32,

    #[serde(default)]
    pub notes: Option<String>,

    /// Color tag used by the scheduling UI
    #[serde(rename = "appointmentColor")]
    pub appointment_color: i32,

    /// Provider display name
    #[serde(default)]
    pub provider: Option<String>,

    // Capitalized "ID" is the server's spelling for this one field.
    #[serde(rename = "providerID")]
    pub provider_id: i32,

    #[serde(rename = "procedureCategory", default)]
    pub procedure_category: Option<String>,

    #[serde(rename = "procedureCategoryId")]
    pub procedure_category_id: i32,
}

impl Appointment {
    /// Absolute appointment instant: the calendar day of `date` combined
    /// with the time of day of `time`.
    ///
    /// Computed on every call from the two stored fields; never stored
    /// separately, so the components cannot diverge.
    pub fn instant(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date.date(), self.time.time())
    }
}
