//! HTTP server for the vital events registry.
//!
//! Wires the JSON API from `vitalreg-api` behind HTTP Basic auth, adds a
//! health probe and request tracing.

pub mod auth;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, middleware, routing::get};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use vitalreg_api::{ApiState, api_router};
use vitalreg_core::{
  i18n::{Catalog, Language},
  store::RegistryStore,
};

use auth::{AuthConfig, require_auth};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `VITALREG_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  pub store_path:         PathBuf,
  pub auth_username:      String,
  pub auth_password_hash: String,
  /// Certificate language when a request does not pass `?lang`.
  #[serde(default)]
  pub default_language:   Language,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Everything the router needs, built once at startup.
pub struct AppState<S> {
  pub store:   Arc<S>,
  pub config:  Arc<ServerConfig>,
  pub auth:    Arc<AuthConfig>,
  pub catalog: Arc<Catalog>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store:   self.store.clone(),
      config:  self.config.clone(),
      auth:    self.auth.clone(),
      catalog: self.catalog.clone(),
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the server's axum [`Router`].
///
/// `/health` is open; everything under `/api` requires Basic credentials.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RegistryStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let api = api_router(
    ApiState::new(state.store.clone(), state.catalog.clone())
      .with_default_language(state.config.default_language),
  )
  .layer(middleware::from_fn_with_state(state.auth.clone(), require_auth));

  Router::new()
    .route("/health", get(health))
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str { "ok" }
