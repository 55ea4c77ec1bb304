//! Handler for `GET /auth/me`.

use axum::{Extension, Json};
use serde::Serialize;

use crate::{CurrentUser, error::ApiError};

#[derive(Debug, Serialize)]
pub struct Me {
  pub username: String,
}

/// `GET /auth/me`: the username the request was authenticated as.
pub async fn me(
  user: Option<Extension<CurrentUser>>,
) -> Result<Json<Me>, ApiError> {
  let Extension(CurrentUser(username)) = user.ok_or(ApiError::Unauthorized)?;
  Ok(Json(Me { username }))
}
