//! Mock revenue system for testing the fetcher and aggregator
//!
//! This simulates a system's revenue endpoint without a real service.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const REVENUE_ENDPOINT: &str = "/api/revenue";

/// Mock system that answers GET on its revenue endpoint
pub struct MockRevenueSystem {
    pub server: MockServer,
    pub base_url: String,
}

impl MockRevenueSystem {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mock a healthy system reporting the given figures
    pub async fn mock_revenue(&self, current_revenue: f64, mrr: f64) {
        self.mock_body(json!({
            "current_revenue": current_revenue,
            "mrr": mrr,
            "arr": mrr * 12.0,
            "growth_rate": 0.05,
            "active_customers": 10
        }))
        .await;
    }

    /// Mock a 200 response with an arbitrary JSON body
    pub async fn mock_body(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path(REVENUE_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a non-200 response
    pub async fn mock_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(REVENUE_ENDPOINT))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response whose body is not JSON
    pub async fn mock_garbage(&self) {
        Mock::given(method("GET"))
            .and(path(REVENUE_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }

    /// Mock a healthy response that arrives after `delay`
    pub async fn mock_slow_revenue(&self, current_revenue: f64, mrr: f64, delay: Duration) {
        Mock::given(method("GET"))
            .and(path(REVENUE_ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "current_revenue": current_revenue,
                        "mrr": mrr
                    }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Number of requests this system has received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
