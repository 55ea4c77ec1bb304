//! JSON REST API for the vital events registry.
//!
//! Exposes an axum [`Router`] backed by any
//! [`vitalreg_core::store::RegistryStore`]. Authentication, TLS and transport
//! concerns are the caller's responsibility; an outer layer that has
//! authenticated the caller inserts a [`CurrentUser`] request extension.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", vitalreg_api::api_router(ApiState::new(store, catalog)))
//! ```

pub mod auth;
pub mod certificates;
pub mod dashboard;
pub mod error;
pub mod extract;
pub mod i18n;
pub mod persons;
pub mod records;
pub mod search;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use vitalreg_core::{
  i18n::{Catalog, Language},
  store::RegistryStore,
};

pub use error::ApiError;

/// Shared state threaded through all API handlers.
pub struct ApiState<S> {
  pub store:            Arc<S>,
  pub catalog:          Arc<Catalog>,
  /// Language used when a request does not name one.
  pub default_language: Language,
}

impl<S> ApiState<S> {
  pub fn new(store: Arc<S>, catalog: Arc<Catalog>) -> Self {
    Self { store, catalog, default_language: Language::default() }
  }

  pub fn with_default_language(mut self, language: Language) -> Self {
    self.default_language = language;
    self
  }
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:            self.store.clone(),
      catalog:          self.catalog.clone(),
      default_language: self.default_language,
    }
  }
}

/// The authenticated username, inserted as a request extension by the
/// server's auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: RegistryStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Persons
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persons/{id}",
      get(persons::get_one::<S>).put(persons::update::<S>),
    )
    // Cross-category search
    .route("/search", get(search::handler::<S>))
    // Dashboard
    .route("/dashboard/stats", get(dashboard::stats::<S>))
    .route("/dashboard/recent", get(dashboard::recent::<S>))
    // Certificates
    .route(
      "/certificates/{category}/{regno}",
      get(certificates::get_one::<S>),
    )
    // Translations
    .route("/i18n/{lang}", get(i18n::table::<S>))
    // Session
    .route("/auth/me", get(auth::me))
    // Records: births, deaths, marriages, divorces
    .route(
      "/{category}",
      get(records::list::<S>).post(records::create::<S>),
    )
    .route("/{category}/{regno}", get(records::get_one::<S>))
    .route("/{category}/{regno}/status", post(records::set_status::<S>))
    .with_state(state)
}

#[cfg(test)]
mod tests;
