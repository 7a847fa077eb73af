//! LiveDDM API client
//!
//! One [`LiveDdmClient`] is the connection context of the whole crate: it
//! holds the base endpoint address and at most one active credential, and
//! every operation reuses both. [`LiveDdmClient::authenticate`] must run
//! first and succeed before any other operation is invoked.
//!
//! The client is designed for a single sequential caller. If it is ever
//! shared across tasks, the caller must serialize access: the credential
//! is written by `authenticate` and read by every other operation.

use crate::api::models::{Appointment, Credential, Patient};
use crate::config::ApiConfig;
use crate::domain::{ApiError, AuthError, LiveDdmError, Result};
use chrono::NaiveDate;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Typed client for the LiveDDM practice management REST API
///
/// # Example
///
/// ```no_run
/// use liveddm_client::api::LiveDdmClient;
/// use liveddm_client::config::{secret_string, ApiConfig};
///
/// # async fn example() -> liveddm_client::domain::Result<()> {
/// let config = ApiConfig {
///     base_url: "https://liveddm.example.com".to_string(),
///     api_key: secret_string("vendor-key".to_string()),
///     timeout_seconds: 30,
///     tls_verify: true,
/// };
///
/// let mut client = LiveDdmClient::new(&config)?;
/// client.authenticate("vendor-key").await?;
///
/// let patients = client.get_patients(0, 20).await?;
/// println!("{} patients", patients.len());
/// # Ok(())
/// # }
/// ```
pub struct LiveDdmClient {
    /// Base URL of the LiveDDM server, without a trailing slash
    base_url: String,

    /// HTTP client shared by all requests
    http: Client,

    /// Active credential, set once by `authenticate`
    credential: Option<Credential>,
}

impl LiveDdmClient {
    /// Create a new client from API configuration
    ///
    /// Builds the shared HTTP connection with the configured per-request
    /// timeout. No request is issued until [`authenticate`] is called.
    ///
    /// [`authenticate`]: LiveDdmClient::authenticate
    ///
    /// # Errors
    ///
    /// Returns `LiveDdmError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10));

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|e| {
            LiveDdmError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            credential: None,
        })
    }

    /// Exchange the vendor API key for a bearer credential
    ///
    /// On success the credential is stored in the client and attached to
    /// every subsequent request. There is no automatic retry; re-invoke on
    /// failure.
    ///
    /// # Errors
    ///
    /// - `AuthError::TransportFailure` on a non-success HTTP status or a
    ///   failure before a response arrives
    /// - `AuthError::InvalidToken` when a success response does not decode
    ///   as a credential, or decodes to an empty token
    pub async fn authenticate(&mut self, api_key: &str) -> Result<Credential> {
        if api_key.is_empty() {
            return Err(LiveDdmError::Configuration(
                "Vendor API key must not be empty".to_string(),
            ));
        }

        let url = format!(
            "{}/api/authentication/authenticatevendor/{}",
            self.base_url, api_key
        );

        tracing::debug!(base_url = %self.base_url, "Authenticating vendor");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AuthError::TransportFailure {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::TransportFailure {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuthError::TransportFailure {
                status: Some(status.as_u16()),
                message: e.to_string(),
            })?;

        let credential: Credential =
            serde_json::from_str(&body).map_err(|_| AuthError::InvalidToken)?;

        if credential.token.is_empty() {
            return Err(AuthError::InvalidToken.into());
        }

        tracing::info!(
            vendor = %credential.vendor_name,
            expires_on = %credential.expires_on,
            "Vendor authentication succeeded"
        );

        self.credential = Some(credential.clone());
        Ok(credential)
    }

    /// Fetch one page of patient records
    ///
    /// `offset` and `limit` are passed through as path parameters; the
    /// server defines the page order and it is preserved as received.
    ///
    /// # Errors
    ///
    /// - `ApiError::Unauthenticated` when no credential is held
    /// - `ApiError::TransportFailure` on HTTP-level failure
    /// - `ApiError::DecodeFailure` when the body is not a well-formed
    ///   array of patient records
    pub async fn get_patients(&self, offset: u32, limit: u32) -> Result<Vec<Patient>> {
        let credential = self.active_credential()?;
        let url = format!(
            "{}/api/liveddm/patients/getpatientinfo/{}/{}",
            self.base_url, offset, limit
        );

        tracing::debug!(offset, limit, "Fetching patient page");

        let body = self.get_authenticated(&url, &credential.token).await?;
        let patients: Vec<Patient> =
            serde_json::from_str(&body).map_err(|e| ApiError::DecodeFailure(e.to_string()))?;

        tracing::info!(count = patients.len(), "Fetched patient page");
        Ok(patients)
    }

    /// Fetch the appointments for one calendar date
    ///
    /// The server provides no ordering guarantee; sort by
    /// [`Appointment::instant`] before assuming chronological order.
    ///
    /// # Errors
    ///
    /// Mirrors [`get_patients`].
    ///
    /// [`get_patients`]: LiveDdmClient::get_patients
    pub async fn get_appointments(&self, date: NaiveDate) -> Result<Vec<Appointment>> {
        let credential = self.active_credential()?;
        let url = format!(
            "{}/api/liveddm/appointments/getappointmentsbydate/{}",
            self.base_url,
            appointment_date_segment(date)
        );

        tracing::debug!(date = %date, "Fetching appointments by date");

        let body = self.get_authenticated(&url, &credential.token).await?;
        let appointments: Vec<Appointment> =
            serde_json::from_str(&body).map_err(|e| ApiError::DecodeFailure(e.to_string()))?;

        tracing::info!(count = appointments.len(), "Fetched appointments");
        Ok(appointments)
    }

    /// Submit a create-or-update request for one appointment
    ///
    /// The full appointment, including the embedded patient snapshot if
    /// present, is serialized as the request body. Whether the server
    /// creates or updates is decided server-side from the payload; the
    /// operation must not be assumed idempotent.
    ///
    /// Returns the resulting appointment id.
    ///
    /// # Errors
    ///
    /// - `ApiError::Unauthenticated` when no credential is held
    /// - `ApiError::TransportFailure` on HTTP-level failure
    /// - `ApiError::DecodeFailure` when the response body is not a bare
    ///   JSON integer
    pub async fn upsert_appointment(&self, appointment: &Appointment) -> Result<i32> {
        let credential = self.active_credential()?;
        let url = format!(
            "{}/api/liveddm/appointments/AddOrUpdateAppointment",
            self.base_url
        );

        tracing::debug!(
            appointment_id = appointment.appointment_id,
            patient_id = appointment.patient_id,
            "Submitting appointment upsert"
        );

        let response = self
            .http
            .post(&url)
            .header("Authorization", format!("Bearer {}", credential.token))
            .json(appointment)
            .send()
            .await
            .map_err(|e| ApiError::TransportFailure {
                status: None,
                message: e.to_string(),
            })?;

        let body = Self::success_body(response).await?;
        let appointment_id: i32 = serde_json::from_str(body.trim())
            .map_err(|e| ApiError::DecodeFailure(e.to_string()))?;

        tracing::info!(appointment_id, "Appointment upsert accepted");
        Ok(appointment_id)
    }

    /// Whether a credential is currently held
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The active credential, if any
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// The base URL of the LiveDDM server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The active credential, or `Unauthenticated`
    ///
    /// Checked client-side so a missing credential fails fast instead of
    /// surfacing as a server-rejected request. Expiry is logged but not
    /// enforced; the token is not refreshed automatically.
    fn active_credential(&self) -> std::result::Result<&Credential, ApiError> {
        let credential = self.credential.as_ref().ok_or(ApiError::Unauthenticated)?;

        if credential.expires_on < chrono::Utc::now().naive_utc() {
            tracing::warn!(
                expires_on = %credential.expires_on,
                "Bearer credential is past its expiry; the server may reject this request"
            );
        }

        Ok(credential)
    }

    /// Issue an authenticated GET and return the success body
    async fn get_authenticated(
        &self,
        url: &str,
        token: &str,
    ) -> std::result::Result<String, ApiError> {
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::TransportFailure {
                status: None,
                message: e.to_string(),
            })?;

        Self::success_body(response).await
    }

    /// Resolve a response into its body text, or a transport failure
    async fn success_body(response: reqwest::Response) -> std::result::Result<String, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::TransportFailure {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::TransportFailure {
                status: Some(status.as_u16()),
                message: e.to_string(),
            })
    }
}

/// Format a calendar date into the wire path segment for the
/// appointments-by-date endpoint
///
/// The two-digit-month, two-digit-day, four-digit-year, hyphen-separated
/// layout is a wire contract with the server.
fn appointment_date_segment(date: NaiveDate) -> String {
    date.format("%m-%d-%Y").to_string()
}
