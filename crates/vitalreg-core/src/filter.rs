//! Record search: category, status and free-text filtering.
//!
//! Filtering is a pure function of the record set and a [`QueryContext`].
//! It never reorders or mutates records, so applying the same query twice is
//! a no-op.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordCategory, RecordStatus, RecordsByCategory};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Which categories a query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordTypeFilter {
  #[default]
  All,
  Birth,
  Death,
  Marriage,
  Divorce,
}

impl RecordTypeFilter {
  pub const ALL: [Self; 5] =
    [Self::All, Self::Birth, Self::Death, Self::Marriage, Self::Divorce];

  /// Catalog key of the human-readable label.
  pub fn label_key(self) -> &'static str {
    match self {
      Self::All => "search.form.recordType.all",
      Self::Birth => "search.form.recordType.birth",
      Self::Death => "search.form.recordType.death",
      Self::Marriage => "search.form.recordType.marriage",
      Self::Divorce => "search.form.recordType.divorce",
    }
  }

  /// The next option in selector order, wrapping around.
  pub fn next(self) -> Self {
    let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }

  pub fn includes(self, category: RecordCategory) -> bool {
    match self {
      Self::All => true,
      Self::Birth => category == RecordCategory::Birth,
      Self::Death => category == RecordCategory::Death,
      Self::Marriage => category == RecordCategory::Marriage,
      Self::Divorce => category == RecordCategory::Divorce,
    }
  }
}

impl From<RecordCategory> for RecordTypeFilter {
  fn from(c: RecordCategory) -> Self {
    match c {
      RecordCategory::Birth => Self::Birth,
      RecordCategory::Death => Self::Death,
      RecordCategory::Marriage => Self::Marriage,
      RecordCategory::Divorce => Self::Divorce,
    }
  }
}

/// Which review states a query accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
  #[default]
  #[serde(rename = "all")]
  All,
  #[serde(alias = "pending")]
  Pending,
  #[serde(alias = "approved")]
  Approved,
  #[serde(alias = "rejected")]
  Rejected,
}

impl StatusFilter {
  pub const ALL: [Self; 4] =
    [Self::All, Self::Pending, Self::Approved, Self::Rejected];

  /// Catalog key of the human-readable label.
  pub fn label_key(self) -> &'static str {
    match self {
      Self::All => "search.form.status.all",
      Self::Pending => "search.form.status.pending",
      Self::Approved => "search.form.status.approved",
      Self::Rejected => "search.form.status.rejected",
    }
  }

  /// The next option in selector order, wrapping around.
  pub fn next(self) -> Self {
    let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }

  pub fn accepts(self, status: RecordStatus) -> bool {
    match self {
      Self::All => true,
      Self::Pending => status == RecordStatus::Pending,
      Self::Approved => status == RecordStatus::Approved,
      Self::Rejected => status == RecordStatus::Rejected,
    }
  }
}

impl From<RecordStatus> for StatusFilter {
  fn from(s: RecordStatus) -> Self {
    match s {
      RecordStatus::Pending => Self::Pending,
      RecordStatus::Approved => Self::Approved,
      RecordStatus::Rejected => Self::Rejected,
    }
  }
}

/// Parameters for [`filter_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryContext {
  /// Free text matched as a case-insensitive substring of any string field.
  #[serde(default)]
  pub search_term: String,
  #[serde(default)]
  pub record_type: RecordTypeFilter,
  #[serde(default)]
  pub status:      StatusFilter,
}

impl QueryContext {
  /// The lowercased needle, or `None` when the term is blank.
  fn needle(&self) -> Option<String> {
    if self.search_term.trim().is_empty() {
      None
    } else {
      Some(self.search_term.to_lowercase())
    }
  }
}

// ─── Predicates ──────────────────────────────────────────────────────────────

fn matches_text<R: Record>(record: &R, needle: Option<&str>) -> bool {
  let Some(needle) = needle else {
    return true;
  };
  record
    .searchable_fields()
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Whether `record` passes both the status and the text predicate of
/// `query`. Category inclusion is not considered.
pub fn matches<R: Record>(record: &R, query: &QueryContext) -> bool {
  query.status.accepts(record.effective_status())
    && matches_text(record, query.needle().as_deref())
}

/// Filter a single category's records, preserving order.
///
/// Returns an empty list when the query's record type excludes `R`.
pub fn filter_slice<'a, R: Record>(
  records: &'a [R],
  query: &QueryContext,
) -> Vec<&'a R> {
  if !query.record_type.includes(R::CATEGORY) {
    return Vec::new();
  }
  let needle = query.needle();
  records
    .iter()
    .filter(|r| {
      query.status.accepts(r.effective_status())
        && matches_text(*r, needle.as_deref())
    })
    .collect()
}

fn filter_owned<R: Record>(records: &[R], query: &QueryContext) -> Vec<R> {
  filter_slice(records, query).into_iter().cloned().collect()
}

/// Apply `query` to every category of `records`.
pub fn filter_records(
  records: &RecordsByCategory,
  query: &QueryContext,
) -> RecordsByCategory {
  RecordsByCategory {
    births:    filter_owned(&records.births, query),
    deaths:    filter_owned(&records.deaths, query),
    marriages: filter_owned(&records.marriages, query),
    divorces:  filter_owned(&records.divorces, query),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::record::fixtures::*;

  fn query(term: &str, record_type: RecordTypeFilter, status: StatusFilter) -> QueryContext {
    QueryContext { search_term: term.into(), record_type, status }
  }

  fn regnos<R: Record>(list: &[R]) -> Vec<&str> {
    list.iter().map(Record::regno).collect()
  }

  #[test]
  fn selectors_cycle_back_to_all() {
    let mut t = RecordTypeFilter::All;
    for _ in 0..RecordTypeFilter::ALL.len() {
      t = t.next();
    }
    assert_eq!(t, RecordTypeFilter::All);
    assert_eq!(StatusFilter::Rejected.next(), StatusFilter::All);
    assert_eq!(StatusFilter::All.next(), StatusFilter::Pending);
  }

  #[test]
  fn pass_all_query_is_identity() {
    let all = sample();
    assert_eq!(filter_records(&all, &QueryContext::default()), all);
  }

  #[test]
  fn empty_input_yields_empty_output() {
    let q = query("abebe", RecordTypeFilter::All, StatusFilter::Pending);
    assert!(filter_records(&RecordsByCategory::default(), &q).is_empty());
  }

  #[test]
  fn record_type_excludes_other_categories() {
    let all = sample();
    for category in RecordCategory::ALL {
      let out = filter_records(
        &all,
        &query("", category.into(), StatusFilter::All),
      );
      for other in RecordCategory::ALL {
        if other == category {
          assert_eq!(out.count(other), all.count(other));
        } else {
          assert_eq!(out.count(other), 0, "{other} leaked into {category}");
        }
      }
    }
  }

  #[test]
  fn absent_status_counts_as_pending() {
    let all = RecordsByCategory {
      births: vec![birth("BRT-010", "Liya Girma", None)],
      ..Default::default()
    };
    let pending = filter_records(&all, &query("", RecordTypeFilter::All, StatusFilter::Pending));
    assert_eq!(regnos(&pending.births), ["BRT-010"]);

    for status in [StatusFilter::Approved, StatusFilter::Rejected] {
      let out = filter_records(&all, &query("", RecordTypeFilter::All, status));
      assert!(out.births.is_empty());
    }
  }

  #[test]
  fn text_match_is_case_insensitive_substring() {
    let all = RecordsByCategory {
      births: vec![birth("BRT-001", "Abebe Kebede", None)],
      ..Default::default()
    };
    for term in ["abebe", "KEBEDE", "be Ke"] {
      let out = filter_records(&all, &query(term, RecordTypeFilter::All, StatusFilter::All));
      assert_eq!(out.births.len(), 1, "term {term:?} should match");
    }
    let out = filter_records(&all, &query("Abbee", RecordTypeFilter::All, StatusFilter::All));
    assert!(out.births.is_empty());
  }

  #[test]
  fn whitespace_term_matches_everything() {
    let all = sample();
    let out = filter_records(&all, &query("   ", RecordTypeFilter::All, StatusFilter::All));
    assert_eq!(out, all);
  }

  #[test]
  fn numeric_fields_are_not_searched() {
    let all = sample();
    // Marriage ages are 28 and 25; no string field contains "28".
    let out = filter_records(&all, &query("28", RecordTypeFilter::Marriage, StatusFilter::All));
    assert!(out.marriages.is_empty());
  }

  #[test]
  fn dates_are_searched_as_iso_strings() {
    let all = sample();
    let out = filter_records(&all, &query("2024-12", RecordTypeFilter::All, StatusFilter::All));
    assert_eq!(regnos(&out.marriages), ["MAR-001"]);
    assert!(out.births.is_empty());
  }

  #[test]
  fn unmatched_term_yields_empty_results() {
    let all = sample();
    let out = filter_records(&all, &query("zzzz", RecordTypeFilter::All, StatusFilter::All));
    assert!(out.is_empty());
  }

  #[test]
  fn both_predicates_must_pass() {
    let all = sample();
    // "Jimma" matches every record; only the divorce and BRT-002 are Pending.
    let out = filter_records(&all, &query("jimma", RecordTypeFilter::All, StatusFilter::Pending));
    assert_eq!(regnos(&out.births), ["BRT-002"]);
    assert_eq!(regnos(&out.divorces), ["DIV-001"]);
    assert!(out.deaths.is_empty());
    assert!(out.marriages.is_empty());
  }

  #[test]
  fn order_is_preserved() {
    let all = RecordsByCategory {
      births: vec![
        birth("BRT-003", "Chala", None),
        birth("BRT-001", "Abebe", None),
        birth("BRT-002", "Bontu", None),
      ],
      ..Default::default()
    };
    let out = filter_records(&all, &query("", RecordTypeFilter::Birth, StatusFilter::Pending));
    assert_eq!(regnos(&out.births), ["BRT-003", "BRT-001", "BRT-002"]);
  }

  #[test]
  fn filtering_is_idempotent() {
    let all = sample();
    let queries = [
      QueryContext::default(),
      query("kebede", RecordTypeFilter::All, StatusFilter::All),
      query("", RecordTypeFilter::Birth, StatusFilter::Approved),
      query("e", RecordTypeFilter::All, StatusFilter::Pending),
    ];
    for q in &queries {
      let once = filter_records(&all, q);
      assert_eq!(filter_records(&once, q), once, "query {q:?}");
    }
  }

  #[test]
  fn pending_births_scenario() {
    let all = RecordsByCategory {
      births: vec![
        birth("BRT-001", "Abebe Kebede", Some(RecordStatus::Approved)),
        birth("BRT-002", "Hanna Tesfaye", Some(RecordStatus::Pending)),
      ],
      ..Default::default()
    };
    let out = filter_records(&all, &query("", RecordTypeFilter::Birth, StatusFilter::Pending));
    assert_eq!(regnos(&out.births), ["BRT-002"]);
    assert_eq!(out.len(), 1);
  }

  #[test]
  fn query_context_deserialises_wire_values() {
    let q: QueryContext = serde_json::from_str(
      r#"{"search_term":"abebe","record_type":"birth","status":"Pending"}"#,
    )
    .unwrap();
    assert_eq!(q.record_type, RecordTypeFilter::Birth);
    assert_eq!(q.status, StatusFilter::Pending);

    let q: QueryContext = serde_json::from_str(r#"{"status":"all"}"#).unwrap();
    assert_eq!(q, QueryContext::default());
  }
}
