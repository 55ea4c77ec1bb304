//! Handlers for `/dashboard` endpoints.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;
use vitalreg_core::{
  dashboard::{Activity, DashboardStats, recent_activity},
  page::MAX_LIMIT,
  store::RegistryStore,
};

use crate::{ApiState, error::ApiError, extract::ApiQuery};

const DEFAULT_RECENT: usize = 5;

/// `GET /dashboard/stats`
pub async fn stats<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<DashboardStats>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = state
    .store
    .all_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let persons = state
    .store
    .count_persons()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(DashboardStats::compute(&records, persons, Utc::now())))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
  pub limit: Option<usize>,
}

/// `GET /dashboard/recent[?limit=...]`
pub async fn recent<S>(
  State(state): State<ApiState<S>>,
  ApiQuery(params): ApiQuery<RecentParams>,
) -> Result<Json<Vec<Activity>>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let limit = params.limit.unwrap_or(DEFAULT_RECENT).clamp(1, MAX_LIMIT);
  let records = state
    .store
    .all_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(recent_activity(&records, limit)))
}
