//! Handlers for the per-category record endpoints.
//!
//! `{category}` is one of `births`, `deaths`, `marriages`, `divorces` (the
//! singular forms are accepted too).
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/{category}` | Optional `?search`, `status`, `page`, `limit` |
//! | `POST` | `/{category}` | Body: record fields; returns 201 + stored record |
//! | `GET`  | `/{category}/{regno}` | 404 if not found |
//! | `POST` | `/{category}/{regno}/status` | Body: `{"status":"Approved"}` |

use axum::{
  Extension, Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use vitalreg_core::{
  filter::{QueryContext, StatusFilter, filter_records},
  page::{Page, paginate},
  record::{RecordCategory, RecordStatus, RecordsByCategory, VitalRecord},
  store::RegistryStore,
};

use crate::{
  ApiState, CurrentUser,
  error::ApiError,
  extract::{ApiJson, ApiPath, ApiQuery},
};

/// Parse the `{category}` path segment; unknown categories are a 404.
pub(crate) fn parse_category(s: &str) -> Result<RecordCategory, ApiError> {
  s.parse()
    .map_err(|_| ApiError::NotFound(format!("no record collection {s:?}")))
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(default)]
  pub search: String,
  #[serde(default)]
  pub status: StatusFilter,
  pub page:   Option<usize>,
  pub limit:  Option<usize>,
}

/// `GET /{category}[?search=...][&status=...][&page=...][&limit=...]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  ApiPath(category): ApiPath<String>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Page<VitalRecord>>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let category = parse_category(&category)?;
  let records: RecordsByCategory = state
    .store
    .list_records(category)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .into_iter()
    .collect();

  let query = QueryContext {
    search_term: params.search,
    record_type: category.into(),
    status:      params.status,
  };
  let matching = filter_records(&records, &query).into_records();
  Ok(Json(paginate(matching, params.page, params.limit)))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /{category}`: the body holds the record's own fields. Any
/// registration number or status in it is replaced by the store.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  ApiPath(category): ApiPath<String>,
  user: Option<Extension<CurrentUser>>,
  ApiJson(body): ApiJson<serde_json::Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let category = parse_category(&category)?;
  let record = VitalRecord::from_parts(category, body)
    .map_err(|e| ApiError::BadRequest(format!("invalid {category} record: {e}")))?;
  let created_by = user.map(|Extension(CurrentUser(name))| name);

  let record = state
    .store
    .register(record, created_by)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /{category}/{regno}`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  ApiPath((category, regno)): ApiPath<(String, String)>,
) -> Result<Json<VitalRecord>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let category = parse_category(&category)?;
  let record = state
    .store
    .get_record(category, &regno)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("{category} {regno} not found")))?;
  Ok(Json(record))
}

// ─── Status ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: RecordStatus,
}

/// `POST /{category}/{regno}/status`: body: `{"status":"Approved"}`
pub async fn set_status<S>(
  State(state): State<ApiState<S>>,
  ApiPath((category, regno)): ApiPath<(String, String)>,
  ApiJson(body): ApiJson<StatusBody>,
) -> Result<Json<VitalRecord>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let category = parse_category(&category)?;
  let record = state
    .store
    .set_status(category, &regno, body.status)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("{category} {regno} not found")))?;
  Ok(Json(record))
}
