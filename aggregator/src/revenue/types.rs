use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::database::RevenueSnapshot;

/// Body returned by a system's revenue endpoint. Unknown fields are ignored
/// and any missing figure stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    #[serde(default)]
    pub current_revenue: Option<f64>,
    #[serde(default)]
    pub mrr: Option<f64>,
    #[serde(default)]
    pub arr: Option<f64>,
    #[serde(default)]
    pub growth_rate: Option<f64>,
    #[serde(default)]
    pub active_customers: Option<i64>,
}

/// Outcome of polling one system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult {
    pub system_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RevenueReport>,
    pub success: bool,
}

impl FetchResult {
    pub fn succeeded(system_id: impl Into<String>, data: RevenueReport) -> Self {
        Self {
            system_id: system_id.into(),
            data: Some(data),
            success: true,
        }
    }

    pub fn failed(system_id: impl Into<String>) -> Self {
        Self {
            system_id: system_id.into(),
            data: None,
            success: false,
        }
    }

    /// Snapshot row for a successful fetch; `None` for a failed one.
    pub fn to_snapshot(&self) -> Option<RevenueSnapshot> {
        let data = self.data.as_ref().filter(|_| self.success)?;
        Some(RevenueSnapshot {
            system_id: self.system_id.clone(),
            current_revenue: data.current_revenue.unwrap_or(0.0),
            mrr: data.mrr,
            arr: data.arr,
            growth_rate: data.growth_rate,
            active_customers: data.active_customers,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationSummary {
    pub total_revenue: f64,
    pub total_mrr: f64,
    pub total_arr: f64,
    pub systems_reporting: usize,
    pub total_systems: usize,
    pub timestamp: String,
}

/// Running totals over the successful subset of one aggregation run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RevenueTotals {
    pub total_revenue: f64,
    pub total_mrr: f64,
    pub systems_reporting: usize,
}

impl RevenueTotals {
    pub fn from_results(results: &[FetchResult]) -> Self {
        results
            .iter()
            .filter(|r| r.success)
            .filter_map(|r| r.data.as_ref())
            .fold(Self::default(), |mut totals, data| {
                totals.total_revenue += data.current_revenue.unwrap_or(0.0);
                totals.total_mrr += data.mrr.unwrap_or(0.0);
                totals.systems_reporting += 1;
                totals
            })
    }

    /// ARR is always projected from MRR, never summed from reported ARR.
    pub fn total_arr(&self) -> f64 {
        self.total_mrr * 12.0
    }

    pub fn into_summary(
        self,
        total_systems: usize,
        completed_at: DateTime<Utc>,
    ) -> AggregationSummary {
        AggregationSummary {
            total_revenue: self.total_revenue,
            total_mrr: self.total_mrr,
            total_arr: self.total_arr(),
            systems_reporting: self.systems_reporting,
            total_systems,
            timestamp: completed_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
