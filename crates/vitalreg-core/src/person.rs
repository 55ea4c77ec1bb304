//! Person registry entries.
//!
//! Persons are independent of vital-event records; registration forms may
//! look them up to prefill names, but no record references a person by id.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Sex;

/// Editable person fields, accepted by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
  pub first_name:     String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub middle_name:    Option<String>,
  pub last_name:      String,
  pub gender:         Sex,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date_of_birth:  Option<NaiveDate>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub place_of_birth: Option<String>,
  #[serde(default = "default_nationality")]
  pub nationality:    String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub region:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub zone:           Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub woreda:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kebele:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub house_number:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:          Option<String>,
}

fn default_nationality() -> String { "Ethiopian".to_owned() }

impl PersonDetails {
  /// First, middle and last name joined by spaces, skipping blanks.
  pub fn full_name(&self) -> String {
    [
      Some(self.first_name.as_str()),
      self.middle_name.as_deref(),
      Some(self.last_name.as_str()),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
  }

  /// Case-insensitive substring match over the name parts.
  pub fn name_matches(&self, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    needle.is_empty() || self.full_name().to_lowercase().contains(&needle)
  }
}

/// A stored person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub person_id:  Uuid,
  #[serde(flatten)]
  pub details:    PersonDetails,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Person {
  pub fn full_name(&self) -> String { self.details.full_name() }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn details(first: &str, middle: Option<&str>, last: &str) -> PersonDetails {
    PersonDetails {
      first_name:     first.into(),
      middle_name:    middle.map(Into::into),
      last_name:      last.into(),
      gender:         Sex::Female,
      date_of_birth:  None,
      place_of_birth: None,
      nationality:    default_nationality(),
      region:         None,
      zone:           None,
      woreda:         None,
      kebele:         None,
      house_number:   None,
      phone:          None,
    }
  }

  #[test]
  fn full_name_skips_blank_parts() {
    assert_eq!(details("Almaz", None, "Tadesse").full_name(), "Almaz Tadesse");
    assert_eq!(details("Almaz", Some(" "), "Tadesse").full_name(), "Almaz Tadesse");
    assert_eq!(
      details("Almaz", Some("Bekele"), "Tadesse").full_name(),
      "Almaz Bekele Tadesse"
    );
  }

  #[test]
  fn name_search_is_case_insensitive() {
    let d = details("Almaz", Some("Bekele"), "Tadesse");
    assert!(d.name_matches("bekele tad"));
    assert!(d.name_matches(""));
    assert!(!d.name_matches("worku"));
  }

  #[test]
  fn nationality_defaults_on_the_wire() {
    let d: PersonDetails = serde_json::from_str(
      r#"{"first_name":"Liya","last_name":"Girma","gender":"female"}"#,
    )
    .unwrap();
    assert_eq!(d.nationality, "Ethiopian");
    assert_eq!(d.gender, Sex::Female);
  }
}
