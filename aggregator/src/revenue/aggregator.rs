use anyhow::Result;
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

use super::fetcher::RevenueFetcher;
use super::types::{AggregationSummary, FetchResult, RevenueTotals};
use crate::database::Database;

pub struct RevenueAggregator {
    database: Arc<Database>,
    fetcher: RevenueFetcher,
}

impl RevenueAggregator {
    pub fn new(database: Arc<Database>, fetcher: RevenueFetcher) -> Self {
        Self { database, fetcher }
    }

    /// One aggregation run over every active system.
    ///
    /// Fetches run concurrently and all of them are awaited; a failed or
    /// panicked fetch only lowers `systems_reporting`. Database errors
    /// propagate.
    pub async fn aggregate_all(&self) -> Result<AggregationSummary> {
        let systems = self.database.get_all_systems().await?;
        let total_systems = systems.len();

        let tasks = systems.iter().map(|system| {
            let fetcher = self.fetcher.clone();
            let system = system.clone();
            tokio::spawn(async move { fetcher.fetch(&system).await })
        });

        let results: Vec<FetchResult> = join_all(tasks)
            .await
            .into_iter()
            .zip(&systems)
            .map(|(joined, system)| match joined {
                Ok(result) => result,
                Err(e) => {
                    error!("Revenue fetch task for {} panicked: {}", system.name, e);
                    FetchResult::failed(&system.id)
                }
            })
            .collect();

        let totals = RevenueTotals::from_results(&results);

        for snapshot in results.iter().filter_map(FetchResult::to_snapshot) {
            self.database.save_snapshot(&snapshot).await?;
        }

        info!(
            "Aggregated revenue from {}/{} systems: total={} mrr={}",
            totals.systems_reporting, total_systems, totals.total_revenue, totals.total_mrr
        );

        Ok(totals.into_summary(total_systems, Utc::now()))
    }
}
