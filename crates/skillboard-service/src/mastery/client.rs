//! HTTP client for the external progress tracker.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use skillboard_core::config::mastery::MasteryConfig;
use skillboard_core::error::{AppError, ErrorKind};
use skillboard_core::result::AppResult;

use super::report::{self, MasteryReport};

/// Thin proxy client for `GET /api/v1/mastery/{student_id}`.
///
/// Every call re-fetches: no caching, no retries. A tracker that has never
/// seen the student yields the synthesized zero-mastery report instead of an
/// error.
#[derive(Debug, Clone)]
pub struct MasteryClient {
    http: reqwest::Client,
    base_url: String,
}

impl MasteryClient {
    /// Creates a new client from configuration.
    pub fn new(config: &MasteryConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build mastery HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the mastery report for a student.
    pub async fn get_mastery(&self, student_id: &str) -> AppResult<MasteryReport> {
        let url = format!("{}/api/v1/mastery/{student_id}", self.base_url);
        debug!(url = %url, "Fetching mastery report");

        let response = self.http.get(&url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to fetch mastery data: {e}"),
                e,
            )
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(report::initial_report(student_id)),
            status if status.is_success() => response.json::<MasteryReport>().await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Invalid mastery payload: {e}"),
                    e,
                )
            }),
            status => Err(AppError::external_service(format!(
                "Failed to fetch mastery data: progress tracker returned {status}"
            ))),
        }
    }
}
