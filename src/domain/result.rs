//! Result type alias for the LiveDDM client

use super::errors::LiveDdmError;

/// Result type alias for client operations
///
/// This is a convenience type alias that uses `LiveDdmError` as the error
/// type. Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, LiveDdmError>;
