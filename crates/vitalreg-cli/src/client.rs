//! Async HTTP client wrapping the registry JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::de::DeserializeOwned;
use vitalreg_core::{
  dashboard::{Activity, DashboardStats},
  record::RecordsByCategory,
};

/// Connection settings for the registry API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub username: String,
  pub password: String,
}

/// Async HTTP client for the registry JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    if self.config.username.is_empty() {
      req
    } else {
      req.basic_auth(&self.config.username, Some(&self.config.password))
    }
  }

  async fn get_json<T: DeserializeOwned>(
    &self,
    path: &str,
    query: &[(&str, String)],
  ) -> Result<T> {
    let resp = self
      .auth(self.client.get(self.url(path)))
      .query(query)
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET {path} → {}", resp.status()));
    }
    resp
      .json()
      .await
      .with_context(|| format!("deserialising {path}"))
  }

  /// `GET /api/search` with no filters: every record, grouped by category.
  pub async fn all_records(&self) -> Result<RecordsByCategory> {
    self.get_json("/search", &[]).await
  }

  /// `GET /api/dashboard/stats`
  pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
    self.get_json("/dashboard/stats", &[]).await
  }

  /// `GET /api/dashboard/recent?limit=<n>`
  pub async fn recent_activity(&self, limit: usize) -> Result<Vec<Activity>> {
    self
      .get_json("/dashboard/recent", &[("limit", limit.to_string())])
      .await
  }
}
