//! Single-system revenue polling

use anyhow::{anyhow, Result};
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;
use tracing::{error, info, warn};

use super::types::{FetchResult, RevenueReport};
use crate::constants;
use crate::database::SystemRecord;

/// Owns the one outbound HTTP client used for every revenue fetch.
#[derive(Clone)]
pub struct RevenueFetcher {
    client: HttpClient,
}

impl RevenueFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(constants::http::FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }

    /// Poll one system. Never errors: every failure mode collapses into a
    /// failed `FetchResult` after being logged.
    pub async fn fetch(&self, system: &SystemRecord) -> FetchResult {
        match self.request_report(system).await {
            Ok(Ok(report)) => {
                info!("Fetched revenue for {}: {:?}", system.name, report);
                FetchResult::succeeded(&system.id, report)
            }
            Ok(Err(status)) => {
                warn!("Failed to fetch {}: {}", system.name, status);
                FetchResult::failed(&system.id)
            }
            Err(e) => {
                error!("Error fetching {}: {}", system.name, e);
                FetchResult::failed(&system.id)
            }
        }
    }

    /// Outer error: transport or decoding. Inner error: non-200 status.
    async fn request_report(
        &self,
        system: &SystemRecord,
    ) -> Result<std::result::Result<RevenueReport, StatusCode>> {
        let response = self
            .client
            .get(system.revenue_url())
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        if response.status() != StatusCode::OK {
            return Ok(Err(response.status()));
        }

        let report: RevenueReport = response
            .json()
            .await
            .map_err(|e| anyhow!("Failed to parse JSON response: {}", e))?;

        Ok(Ok(report))
    }
}
