//! Error type for `vitalreg-store-sqlite`.

use thiserror::Error;
use vitalreg_core::record::RecordCategory;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] vitalreg_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// Every candidate registration number was already taken.
  #[error("could not allocate a {0} registration number")]
  RegnoExhausted(RecordCategory),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
