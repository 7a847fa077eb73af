//! Patients command implementation
//!
//! Lists one page of patient records. The page order is whatever the
//! server returned; it is printed as received.

use super::authenticated_client;
use clap::Args;

/// Arguments for the patients command
#[derive(Args, Debug)]
pub struct PatientsArgs {
    /// Page offset
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Page size
    #[arg(long, default_value_t = 20)]
    pub limit: u32,
}

impl PatientsArgs {
    /// Execute the patients command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(offset = self.offset, limit = self.limit, "Listing patients");

        println!("👤 Patients (offset {}, limit {})", self.offset, self.limit);
        println!();

        let client = match authenticated_client(config_path).await {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let patients = match client.get_patients(self.offset, self.limit).await {
            Ok(p) => p,
            Err(e) => {
                println!("❌ Failed to fetch patients");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        if patients.is_empty() {
            println!("No patients returned for this page.");
            return Ok(0);
        }

        for patient in &patients {
            let status = if patient.is_active { "active" } else { "inactive" };
            println!(
                "{:>6}  {:<30}  born {}  [{}]",
                patient.id,
                patient.to_string(),
                patient.birth_date.format("%Y-%m-%d"),
                status
            );
        }

        println!();
        println!("✅ {} patient(s)", patients.len());
        Ok(0)
    }
}
