//! Vital event records: the four registrable event shapes.
//!
//! Every record carries a category-scoped registration number and a
//! [`RecordMeta`] envelope. Field names match the JSON wire format used by
//! the registration forms, so records round-trip through the API unchanged.

use std::{borrow::Cow, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Category ────────────────────────────────────────────────────────────────

/// The kind of vital event a record registers. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
  Birth,
  Death,
  Marriage,
  Divorce,
}

impl RecordCategory {
  pub const ALL: [Self; 4] =
    [Self::Birth, Self::Death, Self::Marriage, Self::Divorce];

  /// The singular tag used in queries (`record_type=birth`).
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Birth => "birth",
      Self::Death => "death",
      Self::Marriage => "marriage",
      Self::Divorce => "divorce",
    }
  }

  /// The plural collection name used in API paths (`/births`).
  pub fn collection(self) -> &'static str {
    match self {
      Self::Birth => "births",
      Self::Death => "deaths",
      Self::Marriage => "marriages",
      Self::Divorce => "divorces",
    }
  }

  /// Prefix of every registration number issued in this category.
  pub fn regno_prefix(self) -> &'static str {
    match self {
      Self::Birth => "BRT",
      Self::Death => "DTH",
      Self::Marriage => "MAR",
      Self::Divorce => "DIV",
    }
  }
}

impl fmt::Display for RecordCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Accepts both the singular tag and the plural collection name.
impl FromStr for RecordCategory {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|c| c.as_str() == s || c.collection() == s)
      .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Review state of a record. A record without a status is `Pending`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum RecordStatus {
  #[default]
  #[serde(alias = "pending")]
  Pending,
  #[serde(alias = "approved")]
  Approved,
  #[serde(alias = "rejected")]
  Rejected,
}

impl RecordStatus {
  pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "Pending",
      Self::Approved => "Approved",
      Self::Rejected => "Rejected",
    }
  }

  /// Catalog key of the human-readable label.
  pub fn label_key(self) -> &'static str {
    match self {
      Self::Pending => "search.form.status.pending",
      Self::Approved => "search.form.status.approved",
      Self::Rejected => "search.form.status.rejected",
    }
  }
}

impl fmt::Display for RecordStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for RecordStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|st| st.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| Error::UnknownStatus(s.to_owned()))
  }
}

// ─── Small enumerations ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
  #[serde(alias = "male")]
  Male,
  #[serde(alias = "female")]
  Female,
}

impl Sex {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Male => "Male",
      Self::Female => "Female",
    }
  }
}

/// Which party requested a divorce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivorceRequester {
  Husband,
  Wife,
  Both,
}

impl DivorceRequester {
  pub fn label_key(self) -> &'static str {
    match self {
      Self::Husband => "divorce.form.requester.husband",
      Self::Wife => "divorce.form.requester.wife",
      Self::Both => "divorce.form.requester.both",
    }
  }
}

// ─── Meta ────────────────────────────────────────────────────────────────────

/// Bookkeeping shared by all record shapes. Every field is optional on the
/// wire; records created through [`VitalRecord::prepare_registration`] have
/// all of them set except possibly `created_by`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:     Option<RecordStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_by: Option<String>,
}

impl RecordMeta {
  /// The record's status, or `Pending` when none was recorded.
  pub fn effective_status(&self) -> RecordStatus {
    self.status.unwrap_or_default()
  }
}

// ─── Record shapes ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
  #[serde(default)]
  pub birth_regno:       String,
  pub child_name:        String,
  pub mother_name:       String,
  pub father_name:       String,
  pub date_of_birth:     NaiveDate,
  pub sex:               Sex,
  pub city:              String,
  pub kebele:            String,
  pub house_number:      String,
  pub nationality:       String,
  pub registration_date: NaiveDate,
  #[serde(flatten)]
  pub meta:              RecordMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathRecord {
  #[serde(default)]
  pub death_regno:       String,
  pub name:              String,
  pub date_of_birth:     NaiveDate,
  pub date_of_death:     NaiveDate,
  pub cause_of_death:    String,
  pub sex:               Sex,
  pub city:              String,
  pub kebele:            String,
  pub house_number:      String,
  pub nationality:       String,
  /// Registration number of the deceased's birth record, when known.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub birth_regno:       Option<String>,
  pub registration_date: NaiveDate,
  #[serde(flatten)]
  pub meta:              RecordMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarriageRecord {
  #[serde(default)]
  pub marriage_regno:      String,
  pub husband_name:        String,
  pub husband_age:         u8,
  pub husband_nationality: String,
  pub wife_name:           String,
  pub wife_age:            u8,
  pub wife_nationality:    String,
  pub date_of_marriage:    NaiveDate,
  pub city:                String,
  pub kebele:              String,
  pub house_number:        String,
  pub registration_date:   NaiveDate,
  #[serde(flatten)]
  pub meta:                RecordMeta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivorceRecord {
  #[serde(default)]
  pub divorce_regno:       String,
  pub husband_name:        String,
  pub husband_age:         u8,
  pub husband_nationality: String,
  pub wife_name:           String,
  pub wife_age:            u8,
  pub wife_nationality:    String,
  pub date_of_divorce:     NaiveDate,
  pub requester:           DivorceRequester,
  pub city:                String,
  pub kebele:              String,
  pub house_number:        String,
  pub registration_date:   NaiveDate,
  #[serde(flatten)]
  pub meta:                RecordMeta,
}

// ─── Record trait ────────────────────────────────────────────────────────────

/// Behaviour shared by the four record shapes.
pub trait Record: Clone {
  const CATEGORY: RecordCategory;

  fn regno(&self) -> &str;
  fn set_regno(&mut self, regno: String);
  fn meta(&self) -> &RecordMeta;
  fn meta_mut(&mut self) -> &mut RecordMeta;
  fn registration_date(&self) -> NaiveDate;

  /// Name shown in list rows and activity feeds.
  fn display_name(&self) -> Cow<'_, str>;

  /// Every string-typed field of the record, in declaration order.
  ///
  /// Dates are included in their ISO `YYYY-MM-DD` form. Numbers, enums and
  /// the [`RecordMeta`] envelope are not.
  fn searchable_fields(&self) -> Vec<Cow<'_, str>>;

  fn effective_status(&self) -> RecordStatus { self.meta().effective_status() }
}

fn date(d: NaiveDate) -> Cow<'static, str> { Cow::Owned(d.to_string()) }

impl Record for BirthRecord {
  const CATEGORY: RecordCategory = RecordCategory::Birth;

  fn regno(&self) -> &str { &self.birth_regno }

  fn set_regno(&mut self, regno: String) { self.birth_regno = regno; }

  fn meta(&self) -> &RecordMeta { &self.meta }

  fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }

  fn registration_date(&self) -> NaiveDate { self.registration_date }

  fn display_name(&self) -> Cow<'_, str> { Cow::Borrowed(&self.child_name) }

  fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
    vec![
      Cow::Borrowed(self.birth_regno.as_str()),
      Cow::Borrowed(self.child_name.as_str()),
      Cow::Borrowed(self.mother_name.as_str()),
      Cow::Borrowed(self.father_name.as_str()),
      date(self.date_of_birth),
      Cow::Borrowed(self.city.as_str()),
      Cow::Borrowed(self.kebele.as_str()),
      Cow::Borrowed(self.house_number.as_str()),
      Cow::Borrowed(self.nationality.as_str()),
      date(self.registration_date),
    ]
  }
}

impl Record for DeathRecord {
  const CATEGORY: RecordCategory = RecordCategory::Death;

  fn regno(&self) -> &str { &self.death_regno }

  fn set_regno(&mut self, regno: String) { self.death_regno = regno; }

  fn meta(&self) -> &RecordMeta { &self.meta }

  fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }

  fn registration_date(&self) -> NaiveDate { self.registration_date }

  fn display_name(&self) -> Cow<'_, str> { Cow::Borrowed(&self.name) }

  fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
    let mut fields = vec![
      Cow::Borrowed(self.death_regno.as_str()),
      Cow::Borrowed(self.name.as_str()),
      date(self.date_of_birth),
      date(self.date_of_death),
      Cow::Borrowed(self.cause_of_death.as_str()),
      Cow::Borrowed(self.city.as_str()),
      Cow::Borrowed(self.kebele.as_str()),
      Cow::Borrowed(self.house_number.as_str()),
      Cow::Borrowed(self.nationality.as_str()),
    ];
    if let Some(birth_regno) = &self.birth_regno {
      fields.push(Cow::Borrowed(birth_regno.as_str()));
    }
    fields.push(date(self.registration_date));
    fields
  }
}

impl Record for MarriageRecord {
  const CATEGORY: RecordCategory = RecordCategory::Marriage;

  fn regno(&self) -> &str { &self.marriage_regno }

  fn set_regno(&mut self, regno: String) { self.marriage_regno = regno; }

  fn meta(&self) -> &RecordMeta { &self.meta }

  fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }

  fn registration_date(&self) -> NaiveDate { self.registration_date }

  fn display_name(&self) -> Cow<'_, str> {
    Cow::Owned(format!("{} & {}", self.husband_name, self.wife_name))
  }

  fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
    vec![
      Cow::Borrowed(self.marriage_regno.as_str()),
      Cow::Borrowed(self.husband_name.as_str()),
      Cow::Borrowed(self.husband_nationality.as_str()),
      Cow::Borrowed(self.wife_name.as_str()),
      Cow::Borrowed(self.wife_nationality.as_str()),
      date(self.date_of_marriage),
      Cow::Borrowed(self.city.as_str()),
      Cow::Borrowed(self.kebele.as_str()),
      Cow::Borrowed(self.house_number.as_str()),
      date(self.registration_date),
    ]
  }
}

impl Record for DivorceRecord {
  const CATEGORY: RecordCategory = RecordCategory::Divorce;

  fn regno(&self) -> &str { &self.divorce_regno }

  fn set_regno(&mut self, regno: String) { self.divorce_regno = regno; }

  fn meta(&self) -> &RecordMeta { &self.meta }

  fn meta_mut(&mut self) -> &mut RecordMeta { &mut self.meta }

  fn registration_date(&self) -> NaiveDate { self.registration_date }

  fn display_name(&self) -> Cow<'_, str> {
    Cow::Owned(format!("{} & {}", self.husband_name, self.wife_name))
  }

  fn searchable_fields(&self) -> Vec<Cow<'_, str>> {
    vec![
      Cow::Borrowed(self.divorce_regno.as_str()),
      Cow::Borrowed(self.husband_name.as_str()),
      Cow::Borrowed(self.husband_nationality.as_str()),
      Cow::Borrowed(self.wife_name.as_str()),
      Cow::Borrowed(self.wife_nationality.as_str()),
      date(self.date_of_divorce),
      Cow::Borrowed(self.city.as_str()),
      Cow::Borrowed(self.kebele.as_str()),
      Cow::Borrowed(self.house_number.as_str()),
      date(self.registration_date),
    ]
  }
}

// ─── VitalRecord ─────────────────────────────────────────────────────────────

/// Any registrable record. The `category` tag is the discriminant on the wire
/// and in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum VitalRecord {
  Birth(BirthRecord),
  Death(DeathRecord),
  Marriage(MarriageRecord),
  Divorce(DivorceRecord),
}

impl VitalRecord {
  pub fn category(&self) -> RecordCategory {
    match self {
      Self::Birth(_) => RecordCategory::Birth,
      Self::Death(_) => RecordCategory::Death,
      Self::Marriage(_) => RecordCategory::Marriage,
      Self::Divorce(_) => RecordCategory::Divorce,
    }
  }

  pub fn regno(&self) -> &str {
    match self {
      Self::Birth(r) => r.regno(),
      Self::Death(r) => r.regno(),
      Self::Marriage(r) => r.regno(),
      Self::Divorce(r) => r.regno(),
    }
  }

  pub fn meta(&self) -> &RecordMeta {
    match self {
      Self::Birth(r) => &r.meta,
      Self::Death(r) => &r.meta,
      Self::Marriage(r) => &r.meta,
      Self::Divorce(r) => &r.meta,
    }
  }

  pub fn meta_mut(&mut self) -> &mut RecordMeta {
    match self {
      Self::Birth(r) => &mut r.meta,
      Self::Death(r) => &mut r.meta,
      Self::Marriage(r) => &mut r.meta,
      Self::Divorce(r) => &mut r.meta,
    }
  }

  pub fn display_name(&self) -> Cow<'_, str> {
    match self {
      Self::Birth(r) => r.display_name(),
      Self::Death(r) => r.display_name(),
      Self::Marriage(r) => r.display_name(),
      Self::Divorce(r) => r.display_name(),
    }
  }

  pub fn registration_date(&self) -> NaiveDate {
    match self {
      Self::Birth(r) => r.registration_date,
      Self::Death(r) => r.registration_date,
      Self::Marriage(r) => r.registration_date,
      Self::Divorce(r) => r.registration_date,
    }
  }

  pub fn effective_status(&self) -> RecordStatus {
    self.meta().effective_status()
  }

  /// Stamp a freshly submitted record: assign its registration number,
  /// materialise `Pending` and set both timestamps to `now`.
  pub fn prepare_registration(
    &mut self,
    regno: String,
    now: DateTime<Utc>,
    created_by: Option<String>,
  ) {
    match self {
      Self::Birth(r) => r.set_regno(regno),
      Self::Death(r) => r.set_regno(regno),
      Self::Marriage(r) => r.set_regno(regno),
      Self::Divorce(r) => r.set_regno(regno),
    }
    *self.meta_mut() = RecordMeta {
      status: Some(RecordStatus::Pending),
      created_at: Some(now),
      updated_at: Some(now),
      created_by,
    };
  }

  /// Serialise the record without its category tag, for storage in a
  /// per-category column.
  pub fn to_json(&self) -> Result<serde_json::Value> {
    let value = match self {
      Self::Birth(r) => serde_json::to_value(r)?,
      Self::Death(r) => serde_json::to_value(r)?,
      Self::Marriage(r) => serde_json::to_value(r)?,
      Self::Divorce(r) => serde_json::to_value(r)?,
    };
    Ok(value)
  }

  /// Inverse of [`VitalRecord::to_json`].
  pub fn from_parts(
    category: RecordCategory,
    data: serde_json::Value,
  ) -> Result<Self> {
    let record = match category {
      RecordCategory::Birth => Self::Birth(serde_json::from_value(data)?),
      RecordCategory::Death => Self::Death(serde_json::from_value(data)?),
      RecordCategory::Marriage => {
        Self::Marriage(serde_json::from_value(data)?)
      }
      RecordCategory::Divorce => Self::Divorce(serde_json::from_value(data)?),
    };
    Ok(record)
  }
}

impl From<BirthRecord> for VitalRecord {
  fn from(r: BirthRecord) -> Self { Self::Birth(r) }
}

impl From<DeathRecord> for VitalRecord {
  fn from(r: DeathRecord) -> Self { Self::Death(r) }
}

impl From<MarriageRecord> for VitalRecord {
  fn from(r: MarriageRecord) -> Self { Self::Marriage(r) }
}

impl From<DivorceRecord> for VitalRecord {
  fn from(r: DivorceRecord) -> Self { Self::Divorce(r) }
}

/// Build a registration number: category prefix plus a millisecond
/// timestamp, e.g. `BRT-1736942400000`.
pub fn format_regno(category: RecordCategory, at: DateTime<Utc>) -> String {
  format!("{}-{}", category.regno_prefix(), at.timestamp_millis())
}

// ─── RecordsByCategory ───────────────────────────────────────────────────────

/// The full record set, partitioned by category. Order within each list is
/// significant and preserved by every operation in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsByCategory {
  #[serde(default)]
  pub births:    Vec<BirthRecord>,
  #[serde(default)]
  pub deaths:    Vec<DeathRecord>,
  #[serde(default)]
  pub marriages: Vec<MarriageRecord>,
  #[serde(default)]
  pub divorces:  Vec<DivorceRecord>,
}

impl RecordsByCategory {
  pub fn count(&self, category: RecordCategory) -> usize {
    match category {
      RecordCategory::Birth => self.births.len(),
      RecordCategory::Death => self.deaths.len(),
      RecordCategory::Marriage => self.marriages.len(),
      RecordCategory::Divorce => self.divorces.len(),
    }
  }

  pub fn len(&self) -> usize {
    RecordCategory::ALL.into_iter().map(|c| self.count(c)).sum()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Append a record to the list for its category.
  pub fn push(&mut self, record: VitalRecord) {
    match record {
      VitalRecord::Birth(r) => self.births.push(r),
      VitalRecord::Death(r) => self.deaths.push(r),
      VitalRecord::Marriage(r) => self.marriages.push(r),
      VitalRecord::Divorce(r) => self.divorces.push(r),
    }
  }

  /// Look up a record by category and registration number.
  pub fn find(
    &self,
    category: RecordCategory,
    regno: &str,
  ) -> Option<VitalRecord> {
    fn find_in<R: Record + Into<VitalRecord>>(
      list: &[R],
      regno: &str,
    ) -> Option<VitalRecord> {
      list.iter().find(|r| r.regno() == regno).cloned().map(Into::into)
    }
    match category {
      RecordCategory::Birth => find_in(&self.births, regno),
      RecordCategory::Death => find_in(&self.deaths, regno),
      RecordCategory::Marriage => find_in(&self.marriages, regno),
      RecordCategory::Divorce => find_in(&self.divorces, regno),
    }
  }

  /// Flatten into tagged records, births first, then deaths, marriages and
  /// divorces.
  pub fn into_records(self) -> Vec<VitalRecord> {
    let mut out = Vec::with_capacity(self.len());
    out.extend(self.births.into_iter().map(VitalRecord::Birth));
    out.extend(self.deaths.into_iter().map(VitalRecord::Death));
    out.extend(self.marriages.into_iter().map(VitalRecord::Marriage));
    out.extend(self.divorces.into_iter().map(VitalRecord::Divorce));
    out
  }
}

impl FromIterator<VitalRecord> for RecordsByCategory {
  fn from_iter<I: IntoIterator<Item = VitalRecord>>(iter: I) -> Self {
    let mut out = Self::default();
    for record in iter {
      out.push(record);
    }
    out
  }
}

// ─── Test fixtures ───────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod fixtures {
  use chrono::NaiveDate;

  use super::*;

  pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  pub fn birth(
    regno: &str,
    child: &str,
    status: Option<RecordStatus>,
  ) -> BirthRecord {
    BirthRecord {
      birth_regno:       regno.into(),
      child_name:        child.into(),
      mother_name:       "Almaz Tadesse".into(),
      father_name:       "Kebede Worku".into(),
      date_of_birth:     day(2025, 1, 15),
      sex:               Sex::Male,
      city:              "Jimma".into(),
      kebele:            "Hermata Merkato".into(),
      house_number:      "123".into(),
      nationality:       "Ethiopian".into(),
      registration_date: day(2025, 1, 20),
      meta:              RecordMeta { status, ..Default::default() },
    }
  }

  pub fn death(regno: &str, name: &str) -> DeathRecord {
    DeathRecord {
      death_regno:       regno.into(),
      name:              name.into(),
      date_of_birth:     day(1950, 5, 20),
      date_of_death:     day(2025, 1, 10),
      cause_of_death:    "Natural causes".into(),
      sex:               Sex::Male,
      city:              "Jimma".into(),
      kebele:            "Hermata Merkato".into(),
      house_number:      "789".into(),
      nationality:       "Ethiopian".into(),
      birth_regno:       None,
      registration_date: day(2025, 1, 12),
      meta:              RecordMeta {
        status: Some(RecordStatus::Approved),
        ..Default::default()
      },
    }
  }

  pub fn marriage(regno: &str, husband: &str, wife: &str) -> MarriageRecord {
    MarriageRecord {
      marriage_regno:      regno.into(),
      husband_name:        husband.into(),
      husband_age:         28,
      husband_nationality: "Ethiopian".into(),
      wife_name:           wife.into(),
      wife_age:            25,
      wife_nationality:    "Ethiopian".into(),
      date_of_marriage:    day(2024, 12, 25),
      city:                "Jimma".into(),
      kebele:              "Hermata Merkato".into(),
      house_number:        "321".into(),
      registration_date:   day(2024, 12, 26),
      meta:                RecordMeta {
        status: Some(RecordStatus::Approved),
        ..Default::default()
      },
    }
  }

  pub fn divorce(regno: &str, husband: &str, wife: &str) -> DivorceRecord {
    DivorceRecord {
      divorce_regno:       regno.into(),
      husband_name:        husband.into(),
      husband_age:         35,
      husband_nationality: "Ethiopian".into(),
      wife_name:           wife.into(),
      wife_age:            32,
      wife_nationality:    "Ethiopian".into(),
      date_of_divorce:     day(2025, 1, 5),
      requester:           DivorceRequester::Both,
      city:                "Jimma".into(),
      kebele:              "Hermata Merkato".into(),
      house_number:        "654".into(),
      registration_date:   day(2025, 1, 7),
      meta:                RecordMeta {
        status: Some(RecordStatus::Pending),
        ..Default::default()
      },
    }
  }

  /// One record per category, plus a second birth.
  pub fn sample() -> RecordsByCategory {
    RecordsByCategory {
      births:    vec![
        birth("BRT-001", "Abebe Kebede", Some(RecordStatus::Approved)),
        birth("BRT-002", "Hanna Tesfaye", Some(RecordStatus::Pending)),
      ],
      deaths:    vec![death("DTH-001", "Girma Haile")],
      marriages: vec![marriage("MAR-001", "Samuel Desta", "Meron Yohannes")],
      divorces:  vec![divorce("DIV-001", "Daniel Mulugeta", "Sara Tekle")],
    }
  }
}
