//! Label translation: a static catalog with English fallback.
//!
//! The catalog maps a [`Language`] to a table of `key → string`. Resolution
//! tries the requested language, then English, then returns the key itself,
//! so a missing translation shows the raw key instead of failing.
//!
//! The catalog is immutable once built. The currently selected language is
//! not global: it lives in a [`Localizer`] owned by whoever renders labels.

use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Language ────────────────────────────────────────────────────────────────

/// A supported UI language.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  En,
  /// Amharic.
  Am,
  /// Afaan Oromo.
  Om,
}

impl Language {
  pub const ALL: [Self; 3] = [Self::En, Self::Am, Self::Om];

  /// The catalog every other language falls back to.
  pub const FALLBACK: Self = Self::En;

  pub fn code(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Am => "am",
      Self::Om => "om",
    }
  }

  /// Short label for a language switcher, written in the language itself.
  pub fn native_label(self) -> &'static str {
    match self {
      Self::En => "EN",
      Self::Am => "አማ",
      Self::Om => "AfO",
    }
  }

  /// The next language in switcher order, wrapping around.
  pub fn next(self) -> Self {
    match self {
      Self::En => Self::Am,
      Self::Am => Self::Om,
      Self::Om => Self::En,
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl FromStr for Language {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|l| l.code().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| Error::UnknownLanguage(s.to_owned()))
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Strings for one language.
pub type Table = HashMap<String, String>;

const BUILTIN_EN: &str = include_str!("../locales/en.json");
const BUILTIN_AM: &str = include_str!("../locales/am.json");
const BUILTIN_OM: &str = include_str!("../locales/om.json");

/// Two-level `language → key → string` map.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  tables: HashMap<Language, Table>,
}

impl Catalog {
  /// An empty catalog; every lookup resolves to the key.
  pub fn new() -> Self { Self::default() }

  /// The catalog shipped with the crate (English, Amharic, Afaan Oromo).
  pub fn builtin() -> Result<Self> {
    let mut catalog = Self::new();
    for (language, source) in [
      (Language::En, BUILTIN_EN),
      (Language::Am, BUILTIN_AM),
      (Language::Om, BUILTIN_OM),
    ] {
      let table: Table = serde_json::from_str(source)
        .map_err(|e| Error::Catalog(language, e))?;
      catalog.insert_table(language, table);
    }
    Ok(catalog)
  }

  /// Replace the table for `language`. Only used while building.
  pub fn with_table(mut self, language: Language, table: Table) -> Self {
    self.insert_table(language, table);
    self
  }

  fn insert_table(&mut self, language: Language, table: Table) {
    self.tables.insert(language, table);
  }

  /// Look up `key` in exactly one language, without fallback.
  pub fn get(&self, language: Language, key: &str) -> Option<&str> {
    self
      .tables
      .get(&language)
      .and_then(|t| t.get(key))
      .map(String::as_str)
  }

  /// Resolve `key` for `language`: the language's own string, else the
  /// English string, else `key` unchanged.
  pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
    self
      .get(language, key)
      .or_else(|| self.get(Language::FALLBACK, key))
      .unwrap_or(key)
  }

  /// Keys of the fallback catalog that `language` does not translate,
  /// sorted.
  pub fn missing_keys(&self, language: Language) -> Vec<&str> {
    let Some(fallback) = self.tables.get(&Language::FALLBACK) else {
      return Vec::new();
    };
    let mut missing: Vec<&str> = fallback
      .keys()
      .filter(|k| self.get(language, k).is_none())
      .map(String::as_str)
      .collect();
    missing.sort_unstable();
    missing
  }

  /// Every fallback key resolved for `language`.
  pub fn resolved_table(&self, language: Language) -> Table {
    self
      .tables
      .get(&Language::FALLBACK)
      .into_iter()
      .flat_map(|t| t.keys())
      .map(|k| (k.clone(), self.resolve(language, k).to_owned()))
      .collect()
  }
}

// ─── Localizer ───────────────────────────────────────────────────────────────

/// The active language paired with a shared catalog.
///
/// Cheap to clone. Lookups always go to the catalog with the current
/// language, so switching language takes effect on the next call.
#[derive(Debug, Clone)]
pub struct Localizer {
  catalog:  Arc<Catalog>,
  language: Language,
}

impl Localizer {
  pub fn new(catalog: Arc<Catalog>, language: Language) -> Self {
    Self { catalog, language }
  }

  pub fn language(&self) -> Language { self.language }

  pub fn set_language(&mut self, language: Language) {
    self.language = language;
  }

  /// Resolve `key` in the active language.
  pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
    self.catalog.resolve(self.language, key)
  }

  pub fn catalog(&self) -> &Catalog { &self.catalog }
}
