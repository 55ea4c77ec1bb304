//! Error types for `vitalreg-core`.

use thiserror::Error;

use crate::i18n::Language;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown record category: {0:?}")]
  UnknownCategory(String),

  #[error("unknown language code: {0:?}")]
  UnknownLanguage(String),

  #[error("unknown record status: {0:?}")]
  UnknownStatus(String),

  #[error("catalog for {0} could not be parsed: {1}")]
  Catalog(Language, #[source] serde_json::Error),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
