// tests/helpers/readiness.rs
// ============================================================================
// Module: Readiness Helpers
// Description: Readiness probes for the invoice service under test.
// Purpose: Ensure the service is reachable without arbitrary sleeps.
// Dependencies: tokio
// ============================================================================

use std::time::Duration;
use std::time::Instant;

use tokio::time::sleep;

use super::api_client::ApiClient;
use super::timeouts;

/// Polls the service until any HTTP response arrives or the timeout expires.
///
/// Readiness means the service is reachable, not that it authorizes the
/// probe; a 401 from the probe endpoint still counts as ready.
pub async fn wait_for_api_ready(client: &ApiClient, timeout: Duration) -> Result<(), String> {
    let timeout = timeouts::resolve_timeout(timeout);
    let start = Instant::now();
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        match client.probe().await {
            Ok(_) => return Ok(()),
            Err(err) => {
                if start.elapsed() > timeout {
                    return Err(format!(
                        "service readiness timeout after {attempts} attempts: {err}"
                    ));
                }
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}
