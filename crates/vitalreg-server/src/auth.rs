//! HTTP Basic-auth extractor, verifier and middleware.

use std::sync::Arc;

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
  extract::{FromRequestParts, Request},
  http::{HeaderMap, request::Parts},
  middleware::Next,
  response::Response,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use vitalreg_api::CurrentUser;

use crate::error::Error;

/// Credentials accepted as valid for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  pub username:      String,
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
}

/// Present in a handler means the request was authenticated; holds the
/// username.
pub struct Authenticated(pub String);

/// Verify credentials from headers and return the authenticated username.
pub fn verify_auth(
  headers: &HeaderMap,
  config: &AuthConfig,
) -> Result<String, Error> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(Error::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(Error::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| Error::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| Error::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(Error::Unauthorized)?;

  if username != config.username {
    return Err(Error::Unauthorized);
  }

  let parsed_hash = PasswordHash::new(&config.password_hash)
    .map_err(|_| Error::Unauthorized)?;

  Argon2::default()
    .verify_password(password.as_bytes(), &parsed_hash)
    .map_err(|_| Error::Unauthorized)?;

  Ok(username.to_owned())
}

impl FromRequestParts<Arc<AuthConfig>> for Authenticated {
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &Arc<AuthConfig>,
  ) -> Result<Self, Self::Rejection> {
    match verify_auth(&parts.headers, state) {
      Ok(username) => Ok(Authenticated(username)),
      Err(e) => {
        tracing::warn!(uri = %parts.uri, "rejected credentials");
        Err(e)
      }
    }
  }
}

/// Middleware: reject unauthenticated requests, and hand the username to
/// the API as a [`CurrentUser`] extension.
pub async fn require_auth(
  Authenticated(username): Authenticated,
  mut req: Request,
  next: Next,
) -> Response {
  req.extensions_mut().insert(CurrentUser(username));
  next.run(req).await
}
