//! Handler for `GET /certificates/{category}/{regno}`.
//!
//! Returns the localized [`Certificate`] as JSON, or its printable plain-text
//! rendering with `?format=text`.

use axum::{
  Json,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use vitalreg_core::{
  certificate::Certificate,
  i18n::{Language, Localizer},
  store::RegistryStore,
};

use crate::{
  ApiState,
  error::ApiError,
  extract::{ApiPath, ApiQuery},
  records::parse_category,
};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
  #[default]
  Json,
  Text,
}

#[derive(Debug, Deserialize)]
pub struct CertificateParams {
  pub lang:   Option<String>,
  #[serde(default)]
  pub format: Format,
}

/// `GET /certificates/{category}/{regno}[?lang=am][&format=text]`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  ApiPath((category, regno)): ApiPath<(String, String)>,
  ApiQuery(params): ApiQuery<CertificateParams>,
) -> Result<Response, ApiError>
where
  S: RegistryStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let category = parse_category(&category)?;
  let language = match params.lang.as_deref() {
    Some(code) => code
      .parse::<Language>()
      .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    None => state.default_language,
  };

  let record = state
    .store
    .get_record(category, &regno)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("{category} {regno} not found")))?;

  let l10n = Localizer::new(state.catalog.clone(), language);
  let certificate = Certificate::build(&record, &l10n, Utc::now().date_naive());

  Ok(match params.format {
    Format::Json => Json(certificate).into_response(),
    Format::Text => (
      [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
      certificate.to_string(),
    )
      .into_response(),
  })
}
