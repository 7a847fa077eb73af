//! Upsert command implementation
//!
//! Reads one appointment from a JSON file and submits it to the
//! create-or-update endpoint. Create versus update is decided
//! server-side from the payload.

use super::authenticated_client;
use crate::api::Appointment;
use clap::Args;
use std::fs;

/// Arguments for the upsert command
#[derive(Args, Debug)]
pub struct UpsertArgs {
    /// Path to a JSON file containing one appointment
    #[arg(short, long)]
    pub file: String,
}

impl UpsertArgs {
    /// Execute the upsert command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file, "Submitting appointment upsert");

        println!("📤 Upserting appointment from {}", self.file);
        println!();

        let contents = match fs::read_to_string(&self.file) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to read appointment file");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        let appointment: Appointment = match serde_json::from_str(&contents) {
            Ok(a) => a,
            Err(e) => {
                println!("❌ Appointment file is not valid appointment JSON");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        let client = match authenticated_client(config_path).await {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        match client.upsert_appointment(&appointment).await {
            Ok(appointment_id) => {
                println!("✅ Appointment accepted with id {appointment_id}");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Appointment upsert failed");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }
}
