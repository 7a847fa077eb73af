//! Domain types for the LiveDDM client.
//!
//! The domain layer provides the error taxonomy and the crate-wide result
//! alias. The wire-level data models live next to the client that
//! exchanges them, in [`crate::api::models`].
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use liveddm_client::domain::{LiveDdmError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(LiveDdmError::Configuration("missing api_key".to_string()))
//! }
//! ```
//!
//! Authentication failures and API-call failures carry their own enums,
//! [`AuthError`] and [`ApiError`], wrapped by [`LiveDdmError`] so that a
//! `?` in caller code keeps the full failure shape.

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ApiError, AuthError, LiveDdmError};
pub use result::Result;
