//! [`SqliteStore`]: the SQLite implementation of [`RegistryStore`].

use std::path::Path;

use chrono::{Duration, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;
use vitalreg_core::{
  person::{Person, PersonDetails},
  record::{
    RecordCategory, RecordStatus, RecordsByCategory, VitalRecord, format_regno,
  },
  store::RegistryStore,
};

use crate::{
  Error, Result,
  encode::{RawPerson, RawRecord, encode_dt, encode_uuid},
  schema::SCHEMA,
};

/// How many successive milliseconds `register` tries before giving up on a
/// free registration number.
const MAX_REGNO_ATTEMPTS: i64 = 1_000;

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registry backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store: useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Insert a prepared record unless its registration number is taken.
  /// Returns whether a row was written.
  async fn try_insert(&self, record: &VitalRecord) -> Result<bool> {
    let category    = record.category().as_str();
    let regno       = record.regno().to_owned();
    let record_json = record.to_json()?.to_string();
    let status      = record.effective_status().as_str();
    let created_at  = encode_dt(record.meta().created_at.unwrap_or_else(Utc::now));
    let updated_at  = encode_dt(record.meta().updated_at.unwrap_or_else(Utc::now));

    let inserted = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "INSERT OR IGNORE INTO records (
             category, regno, record_json, status, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            category,
            regno,
            record_json,
            status,
            created_at,
            updated_at
          ],
        )?;
        Ok(n)
      })
      .await?;
    Ok(inserted == 1)
  }

  async fn query_records(
    &self,
    category: Option<RecordCategory>,
  ) -> Result<Vec<VitalRecord>> {
    let category = category.map(RecordCategory::as_str);
    let raws = self
      .conn
      .call(move |conn| {
        let rows = match category {
          Some(c) => {
            let mut stmt = conn.prepare(
              "SELECT category, record_json FROM records
               WHERE category = ?1 ORDER BY seq",
            )?;
            stmt
              .query_map(rusqlite::params![c], RawRecord::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
          None => {
            let mut stmt = conn
              .prepare("SELECT category, record_json FROM records ORDER BY seq")?;
            stmt
              .query_map([], RawRecord::from_row)?
              .collect::<rusqlite::Result<Vec<_>>>()?
          }
        };
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}

// ─── RegistryStore impl ──────────────────────────────────────────────────────

impl RegistryStore for SqliteStore {
  type Error = Error;

  // ── Records ───────────────────────────────────────────────────────────────

  async fn register(
    &self,
    mut record: VitalRecord,
    created_by: Option<String>,
  ) -> Result<VitalRecord> {
    let category = record.category();
    let now = Utc::now();

    for offset in 0..MAX_REGNO_ATTEMPTS {
      let regno = format_regno(category, now + Duration::milliseconds(offset));
      record.prepare_registration(regno, now, created_by.clone());

      if self.try_insert(&record).await? {
        tracing::info!(
          %category,
          regno = record.regno(),
          created_by = created_by.as_deref().unwrap_or("-"),
          "record registered"
        );
        return Ok(record);
      }
      tracing::debug!(
        %category,
        regno = record.regno(),
        "registration number taken, trying the next millisecond"
      );
    }

    Err(Error::RegnoExhausted(category))
  }

  async fn get_record(
    &self,
    category: RecordCategory,
    regno: &str,
  ) -> Result<Option<VitalRecord>> {
    let cat = category.as_str();
    let regno = regno.to_owned();

    let raw = self
      .conn
      .call(move |conn| {
        let r = conn
          .query_row(
            "SELECT category, record_json FROM records
             WHERE category = ?1 AND regno = ?2",
            rusqlite::params![cat, regno],
            RawRecord::from_row,
          )
          .optional()?;
        Ok(r)
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn list_records(
    &self,
    category: RecordCategory,
  ) -> Result<Vec<VitalRecord>> {
    self.query_records(Some(category)).await
  }

  async fn all_records(&self) -> Result<RecordsByCategory> {
    Ok(self.query_records(None).await?.into_iter().collect())
  }

  async fn set_status(
    &self,
    category: RecordCategory,
    regno: &str,
    status: RecordStatus,
  ) -> Result<Option<VitalRecord>> {
    let Some(mut record) = self.get_record(category, regno).await? else {
      return Ok(None);
    };

    let now = Utc::now();
    let meta = record.meta_mut();
    meta.status = Some(status);
    meta.updated_at = Some(now);

    let cat         = category.as_str();
    let regno       = regno.to_owned();
    let record_json = record.to_json()?.to_string();
    let status_str  = status.as_str();
    let updated_at  = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE records SET record_json = ?1, status = ?2, updated_at = ?3
           WHERE category = ?4 AND regno = ?5",
          rusqlite::params![record_json, status_str, updated_at, cat, regno],
        )?;
        Ok(())
      })
      .await?;

    tracing::info!(%category, regno = record.regno(), %status, "status updated");
    Ok(Some(record))
  }

  // ── Persons ───────────────────────────────────────────────────────────────

  async fn add_person(&self, details: PersonDetails) -> Result<Person> {
    let now = Utc::now();
    let person = Person {
      person_id: Uuid::new_v4(),
      details,
      created_at: now,
      updated_at: now,
    };

    let id_str       = encode_uuid(person.person_id);
    let details_json = serde_json::to_string(&person.details)?;
    let at_str       = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO persons (person_id, details_json, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?3)",
          rusqlite::params![id_str, details_json, at_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::info!(person_id = %person.person_id, "person added");
    Ok(person)
  }

  async fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw = self
      .conn
      .call(move |conn| {
        let r = conn
          .query_row(
            "SELECT person_id, details_json, created_at, updated_at
             FROM persons WHERE person_id = ?1",
            rusqlite::params![id_str],
            RawPerson::from_row,
          )
          .optional()?;
        Ok(r)
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  async fn update_person(
    &self,
    id: Uuid,
    details: PersonDetails,
  ) -> Result<Option<Person>> {
    let Some(mut person) = self.get_person(id).await? else {
      return Ok(None);
    };
    person.details = details;
    person.updated_at = Utc::now();

    let id_str       = encode_uuid(id);
    let details_json = serde_json::to_string(&person.details)?;
    let at_str       = encode_dt(person.updated_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE persons SET details_json = ?1, updated_at = ?2
           WHERE person_id = ?3",
          rusqlite::params![details_json, at_str, id_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(Some(person))
  }

  async fn list_persons(&self, search: Option<&str>) -> Result<Vec<Person>> {
    let raws = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT person_id, details_json, created_at, updated_at
           FROM persons ORDER BY seq",
        )?;
        let rows = stmt
          .query_map([], RawPerson::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    let persons = raws
      .into_iter()
      .map(RawPerson::into_person)
      .collect::<Result<Vec<_>>>()?;

    Ok(match search {
      Some(term) => persons
        .into_iter()
        .filter(|p| p.details.name_matches(term))
        .collect(),
      None => persons,
    })
  }

  async fn count_persons(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| {
        let n = conn.query_row("SELECT COUNT(*) FROM persons", [], |r| r.get(0))?;
        Ok(n)
      })
      .await?;
    Ok(usize::try_from(n).unwrap_or_default())
  }
}
