//! Appointments command implementation
//!
//! Lists the appointments for one calendar date. The server gives no
//! ordering guarantee, so the listing is sorted client-side by the
//! computed appointment instant.

use super::authenticated_client;
use chrono::{Local, NaiveDate};
use clap::Args;

/// Arguments for the appointments command
#[derive(Args, Debug)]
pub struct AppointmentsArgs {
    /// Calendar date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl AppointmentsArgs {
    /// Execute the appointments command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        tracing::info!(date = %date, "Listing appointments");

        println!("📅 Appointments for {date}");
        println!();

        let client = match authenticated_client(config_path).await {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let mut appointments = match client.get_appointments(date).await {
            Ok(a) => a,
            Err(e) => {
                println!("❌ Failed to fetch appointments");
                println!("   Error: {e}");
                return Ok(5);
            }
        };

        if appointments.is_empty() {
            println!("No appointments scheduled.");
            return Ok(0);
        }

        appointments.sort_by_key(|a| a.instant());

        for appointment in &appointments {
            let patient = match &appointment.patient {
                Some(p) => p.to_string(),
                None => format!("patient #{}", appointment.patient_id),
            };
            let provider = appointment.provider.as_deref().unwrap_or("-");
            let mut flags = String::new();
            if appointment.is_confirmed {
                flags.push_str(" [confirmed]");
            }
            if appointment.is_here {
                flags.push_str(" [here]");
            }

            println!(
                "{}  {:<30}  {}{}",
                appointment.instant().format("%I:%M %p"),
                patient,
                provider,
                flags
            );
        }

        println!();
        println!("✅ {} appointment(s)", appointments.len());
        Ok(0)
    }
}
