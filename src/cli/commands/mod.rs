//! CLI command implementations
//!
//! Exit codes shared by all commands: 0 success, 2 configuration error,
//! 4 authentication/connection error, 5 operation error.

pub mod appointments;
pub mod init;
pub mod patients;
pub mod upsert;
pub mod validate;

use crate::api::LiveDdmClient;
use crate::config::load_config;
use secrecy::ExposeSecret;

/// Load configuration and return an authenticated client
///
/// On failure the error is already printed; the returned code is the
/// process exit code the command should use.
pub(crate) async fn authenticated_client(
    config_path: &str,
) -> std::result::Result<LiveDdmClient, i32> {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return Err(2);
        }
    };

    let mut client = match LiveDdmClient::new(&config.api) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to create API client");
            println!("   Error: {e}");
            return Err(5);
        }
    };

    if let Err(e) = client
        .authenticate(config.api.api_key.expose_secret().as_ref())
        .await
    {
        println!("❌ Vendor authentication failed");
        println!("   Error: {e}");
        return Err(4);
    }

    Ok(client)
}
