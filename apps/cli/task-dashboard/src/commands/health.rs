use crate::error::DashboardError;
use crate::output::write_health;

use client_core::ApiClient;

use std::io::Write;

use log::{error, info};

/// Print the API's health status.
///
/// A connection failure comes back as an error so the caller can show the
/// "API unavailable" hint and exit non-zero.
pub async fn run<W: Write>(client: &ApiClient, out: &mut W) -> Result<(), DashboardError> {
    let body = client.health_check().await.map_err(|e| {
        error!("Health check failed: {e}");
        DashboardError::from(e)
    })?;

    info!("API responded to health check");
    write_health(out, &body)?;
    Ok(())
}
