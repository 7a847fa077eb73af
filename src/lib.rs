// LiveDDM Client - Typed client for the LiveDDM practice management API
// Licensed under the MIT License

//! # LiveDDM Client
//!
//! A typed Rust client for the LiveDDM practice management REST API:
//! vendor authentication plus patient and appointment operations, with a
//! small demonstration CLI.
//!
//! ## Overview
//!
//! This library provides:
//! - **Authenticating** a vendor API key for a bearer credential
//! - **Reading** a page of patient records
//! - **Reading** the appointments for a calendar date
//! - **Writing** an appointment via the server's create-or-update endpoint
//!
//! All four operations share one connection context: the
//! [`api::LiveDdmClient`] holds the base endpoint address and the active
//! credential, and every call reuses both. The flow is fully sequential:
//! authenticate first, then issue calls one at a time.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - The LiveDDM client and the wire data models
//! - [`domain`] - Error taxonomy and the crate result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use liveddm_client::api::LiveDdmClient;
//! use liveddm_client::config::load_config;
//! use secrecy::ExposeSecret;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("liveddm.toml")?;
//!
//!     let mut client = LiveDdmClient::new(&config.api)?;
//!     client
//!         .authenticate(config.api.api_key.expose_secret().as_ref())
//!         .await?;
//!
//!     let patients = client.get_patients(0, 20).await?;
//!     println!("{} patients on the first page", patients.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`domain::Result`]. Authentication failures carry
//! [`domain::AuthError`] and API-call failures carry [`domain::ApiError`],
//! so callers can distinguish a transport failure from an undecodable
//! body. Failures abort the in-progress operation; nothing is retried
//! internally and no partial results are returned.
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate:
//!
//! ```rust,no_run
//! tracing::info!(count = 20, "Fetched patient page");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
