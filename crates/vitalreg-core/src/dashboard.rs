//! Dashboard counters and the recent-activity feed.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordCategory, RecordsByCategory};

/// Records created within this many days count as "recent".
pub const RECENT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
  pub total_persons:    usize,
  pub total_births:     usize,
  pub total_deaths:     usize,
  pub total_marriages:  usize,
  pub total_divorces:   usize,
  pub recent_births:    usize,
  pub recent_deaths:    usize,
  pub recent_marriages: usize,
  pub recent_divorces:  usize,
}

impl DashboardStats {
  /// Count records per category, and those created in the last
  /// [`RECENT_WINDOW_DAYS`] days before `now`. Records without `created_at`
  /// are counted in the totals only.
  pub fn compute(
    records: &RecordsByCategory,
    total_persons: usize,
    now: DateTime<Utc>,
  ) -> Self {
    let since = now - Duration::days(RECENT_WINDOW_DAYS);
    Self {
      total_persons,
      total_births: records.births.len(),
      total_deaths: records.deaths.len(),
      total_marriages: records.marriages.len(),
      total_divorces: records.divorces.len(),
      recent_births: count_since(&records.births, since),
      recent_deaths: count_since(&records.deaths, since),
      recent_marriages: count_since(&records.marriages, since),
      recent_divorces: count_since(&records.divorces, since),
    }
  }

  pub fn total(&self, category: RecordCategory) -> usize {
    match category {
      RecordCategory::Birth => self.total_births,
      RecordCategory::Death => self.total_deaths,
      RecordCategory::Marriage => self.total_marriages,
      RecordCategory::Divorce => self.total_divorces,
    }
  }
}

fn count_since<R: Record>(records: &[R], since: DateTime<Utc>) -> usize {
  records
    .iter()
    .filter(|r| r.meta().created_at.is_some_and(|at| at >= since))
    .count()
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
  pub category:          RecordCategory,
  pub regno:             String,
  pub name:              String,
  pub registration_date: NaiveDate,
  pub created_at:        Option<DateTime<Utc>>,
  pub created_by:        Option<String>,
}

fn push_activity<R: Record>(records: &[R], out: &mut Vec<Activity>) {
  out.extend(records.iter().map(|r| Activity {
    category:          R::CATEGORY,
    regno:             r.regno().to_owned(),
    name:              r.display_name().into_owned(),
    registration_date: r.registration_date(),
    created_at:        r.meta().created_at,
    created_by:        r.meta().created_by.clone(),
  }));
}

/// The `limit` most recently created records across all categories, newest
/// first. Records without `created_at` sort last, ordered by registration
/// date.
pub fn recent_activity(
  records: &RecordsByCategory,
  limit: usize,
) -> Vec<Activity> {
  let mut feed = Vec::with_capacity(records.len());
  push_activity(&records.births, &mut feed);
  push_activity(&records.deaths, &mut feed);
  push_activity(&records.marriages, &mut feed);
  push_activity(&records.divorces, &mut feed);

  // Stable sort: ties keep category order.
  feed.sort_by(|a, b| {
    b.created_at
      .cmp(&a.created_at)
      .then(b.registration_date.cmp(&a.registration_date))
  });
  feed.truncate(limit);
  feed
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;
  use crate::record::fixtures::*;

  #[test]
  fn totals_match_record_counts() {
    let all = sample();
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let stats = DashboardStats::compute(&all, 7, now);
    assert_eq!(stats.total_persons, 7);
    assert_eq!(stats.total_births, 2);
    assert_eq!(stats.total(RecordCategory::Divorce), 1);
    // Fixtures carry no created_at.
    assert_eq!(stats.recent_births, 0);
  }

  #[test]
  fn recent_window_is_thirty_days() {
    let now = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap();
    let mut fresh = birth("BRT-1", "A", None);
    fresh.meta.created_at = Some(now - Duration::days(2));
    let mut stale = birth("BRT-2", "B", None);
    stale.meta.created_at = Some(now - Duration::days(45));
    let all = RecordsByCategory { births: vec![fresh, stale], ..Default::default() };

    let stats = DashboardStats::compute(&all, 0, now);
    assert_eq!(stats.total_births, 2);
    assert_eq!(stats.recent_births, 1);
  }

  #[test]
  fn recent_activity_is_newest_first_and_truncated() {
    let base = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let mut b = birth("BRT-1", "Abebe", None);
    b.meta.created_at = Some(base);
    let mut d = death("DTH-1", "Girma");
    d.meta.created_at = Some(base + Duration::hours(1));
    let mut m = marriage("MAR-1", "Samuel", "Meron");
    m.meta.created_at = Some(base + Duration::hours(2));
    let all = RecordsByCategory {
      births: vec![b],
      deaths: vec![d],
      marriages: vec![m],
      divorces: vec![divorce("DIV-1", "Daniel", "Sara")],
    };

    let feed = recent_activity(&all, 3);
    let regnos: Vec<_> = feed.iter().map(|a| a.regno.as_str()).collect();
    assert_eq!(regnos, ["MAR-1", "DTH-1", "BRT-1"]);
    assert_eq!(feed[0].name, "Samuel & Meron");
    assert_eq!(feed[0].category, RecordCategory::Marriage);
  }
}
