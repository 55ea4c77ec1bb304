//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings, UUIDs hyphenated lowercase, and record
//! and person bodies compact JSON.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use vitalreg_core::{
  person::{Person, PersonDetails},
  record::{RecordCategory, VitalRecord},
};

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `records` row.
pub struct RawRecord {
  pub category:    String,
  pub record_json: String,
}

impl RawRecord {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self { category: row.get(0)?, record_json: row.get(1)? })
  }

  pub fn into_record(self) -> Result<VitalRecord> {
    let category: RecordCategory = self.category.parse()?;
    let data: serde_json::Value = serde_json::from_str(&self.record_json)?;
    Ok(VitalRecord::from_parts(category, data)?)
  }
}

/// Raw strings read directly from a `persons` row.
pub struct RawPerson {
  pub person_id:    String,
  pub details_json: String,
  pub created_at:   String,
  pub updated_at:   String,
}

impl RawPerson {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      person_id:    row.get(0)?,
      details_json: row.get(1)?,
      created_at:   row.get(2)?,
      updated_at:   row.get(3)?,
    })
  }

  pub fn into_person(self) -> Result<Person> {
    let details: PersonDetails = serde_json::from_str(&self.details_json)?;
    Ok(Person {
      person_id: decode_uuid(&self.person_id)?,
      details,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
