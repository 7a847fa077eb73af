//! Init command implementation
//!
//! Generates a starter configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "liveddm.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing LiveDDM client configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::starter_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set LIVEDDM_API_KEY in your shell or a .env file");
                println!("  2. Adjust base_url if your practice uses a different deployment");
                println!("  3. Validate: liveddm validate-config");
                println!("  4. List today's schedule: liveddm appointments");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Starter configuration template
    fn starter_config() -> &'static str {
        r#"# LiveDDM client configuration

[application]
# trace, debug, info, warn, error
log_level = "info"

[api]
base_url = "https://liveddmmanagementclient.azurewebsites.net"
# The vendor API key is substituted from the environment at load time.
api_key = "${LIVEDDM_API_KEY}"
timeout_seconds = 30
tls_verify = true

[logging]
# Write JSON logs to a rotating file in addition to the console.
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_parses_and_validates() {
        let substituted =
            InitArgs::starter_config().replace("${LIVEDDM_API_KEY}", "starter-test-key");
        let config: crate::config::LiveDdmConfig = toml::from_str(&substituted).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.api.timeout_seconds, 30);
    }
}
