//! Handler for `GET /search`.
//!
//! Query params map directly to [`QueryContext`] fields. The response keeps
//! the per-category grouping, with every list in registration order.

use axum::{Json, extract::State};
use vitalreg_core::{
  filter::{QueryContext, filter_records},
  record::RecordsByCategory,
  store::RegistryStore,
};

use crate::{ApiState, error::ApiError, extract::ApiQuery};

/// `GET /search[?search_term=...][&record_type=...][&status=...]`
pub async fn handler<S>(
  State(state): State<ApiState<S>>,
  ApiQuery(query): ApiQuery<QueryContext>,
) -> Result<Json<RecordsByCategory>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = state
    .store
    .all_records()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let result = filter_records(&records, &query);
  tracing::debug!(
    term = %query.search_term,
    record_type = ?query.record_type,
    status = ?query.status,
    matched = result.len(),
    "search"
  );
  Ok(Json(result))
}
