//! Handlers for `/persons` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/persons` | Optional `?search`, `page`, `limit` |
//! | `POST` | `/persons` | Body: [`PersonDetails`]; returns 201 + person |
//! | `GET`  | `/persons/{id}` | 404 if not found |
//! | `PUT`  | `/persons/{id}` | Body: [`PersonDetails`]; replaces all fields |

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;
use vitalreg_core::{
  page::{Page, paginate},
  person::{Person, PersonDetails},
  store::RegistryStore,
};

use crate::{
  ApiState,
  error::ApiError,
  extract::{ApiJson, ApiPath, ApiQuery},
};

fn validate(details: &PersonDetails) -> Result<(), ApiError> {
  if details.first_name.trim().is_empty() || details.last_name.trim().is_empty()
  {
    return Err(ApiError::BadRequest(
      "first_name and last_name are required".into(),
    ));
  }
  Ok(())
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub search: Option<String>,
  pub page:   Option<usize>,
  pub limit:  Option<usize>,
}

/// `GET /persons[?search=...][&page=...][&limit=...]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Page<Person>>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let persons = state
    .store
    .list_persons(params.search.as_deref())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(paginate(persons, params.page, params.limit)))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /persons`: returns 201 + the stored [`Person`].
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  ApiJson(body): ApiJson<PersonDetails>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  validate(&body)?;
  let person = state
    .store
    .add_person(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(person)))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /persons/{id}`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<Person>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let person = state
    .store
    .get_person(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /persons/{id}`
pub async fn update<S>(
  State(state): State<ApiState<S>>,
  ApiPath(id): ApiPath<Uuid>,
  ApiJson(body): ApiJson<PersonDetails>,
) -> Result<Json<Person>, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  validate(&body)?;
  let person = state
    .store
    .update_person(id, body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person))
}
