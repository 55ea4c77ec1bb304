//! Handler for `GET /i18n/{lang}`.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use vitalreg_core::{i18n::Language, store::RegistryStore};

use crate::{ApiState, error::ApiError, extract::ApiPath};

/// `GET /i18n/{lang}`: every known key resolved for `lang`, with English
/// standing in for missing translations. Keys are sorted.
pub async fn table<S>(
  State(state): State<ApiState<S>>,
  ApiPath(lang): ApiPath<String>,
) -> Result<Json<BTreeMap<String, String>>, ApiError>
where
  S: RegistryStore,
{
  let language: Language = lang
    .parse()
    .map_err(|_| ApiError::NotFound(format!("no translations for {lang:?}")))?;
  Ok(Json(state.catalog.resolved_table(language).into_iter().collect()))
}
