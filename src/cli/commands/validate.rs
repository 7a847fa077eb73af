//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = %config_path, "Validating configuration");

        println!("🔍 Validating configuration: {config_path}");
        println!();

        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("  Base URL:        {}", config.api.base_url);
                println!("  Request timeout: {}s", config.api.timeout_seconds);
                println!("  TLS verify:      {}", config.api.tls_verify);
                println!("  Log level:       {}", config.application.log_level);
                println!("  File logging:    {}", config.logging.local_enabled);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                Ok(2)
            }
        }
    }
}
