//! The `RegistryStore` trait.
//!
//! Implemented by storage backends (e.g. `vitalreg-store-sqlite`). The HTTP
//! layers depend on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::{
  person::{Person, PersonDetails},
  record::{RecordCategory, RecordStatus, RecordsByCategory, VitalRecord},
};

/// Abstraction over a registry backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RegistryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Vital-event records ───────────────────────────────────────────────

  /// Persist a new record. The store assigns the registration number
  /// (`PREFIX-<millis>`, unique within the category), sets status to
  /// `Pending` and stamps `created_at`/`updated_at`. Any registration number
  /// or metadata on the input is overwritten.
  fn register(
    &self,
    record: VitalRecord,
    created_by: Option<String>,
  ) -> impl Future<Output = Result<VitalRecord, Self::Error>> + Send + '_;

  /// Retrieve one record. Returns `None` if not found.
  fn get_record<'a>(
    &'a self,
    category: RecordCategory,
    regno: &'a str,
  ) -> impl Future<Output = Result<Option<VitalRecord>, Self::Error>> + Send + 'a;

  /// Every record of one category, in registration order.
  fn list_records(
    &self,
    category: RecordCategory,
  ) -> impl Future<Output = Result<Vec<VitalRecord>, Self::Error>> + Send + '_;

  /// Every record, grouped by category.
  fn all_records(
    &self,
  ) -> impl Future<Output = Result<RecordsByCategory, Self::Error>> + Send + '_;

  /// Set a record's review status and bump `updated_at`. Returns `None` if
  /// the record does not exist.
  fn set_status<'a>(
    &'a self,
    category: RecordCategory,
    regno: &'a str,
    status: RecordStatus,
  ) -> impl Future<Output = Result<Option<VitalRecord>, Self::Error>> + Send + 'a;

  // ── Persons ───────────────────────────────────────────────────────────

  fn add_person(
    &self,
    details: PersonDetails,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  fn get_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Replace the editable fields of a person. Returns `None` if not found.
  fn update_person(
    &self,
    id: Uuid,
    details: PersonDetails,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Persons ordered by creation, optionally restricted to those whose name
  /// contains `search` (case-insensitive).
  fn list_persons<'a>(
    &'a self,
    search: Option<&'a str>,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  fn count_persons(
    &self,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
