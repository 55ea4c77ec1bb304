//! Page/limit slicing for list endpoints.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Position of a [`Page`] within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
  /// 1-based page number.
  pub page:  usize,
  pub limit: usize,
  pub total: usize,
  pub pages: usize,
}

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
  pub items:      Vec<T>,
  pub pagination: Pagination,
}

impl<T> Page<T> {
  pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
    Page {
      items:      self.items.into_iter().map(f).collect(),
      pagination: self.pagination,
    }
  }
}

/// Slice `items` into the requested page.
///
/// `page` defaults to 1 and is floored at 1; `limit` defaults to
/// [`DEFAULT_LIMIT`] and is clamped to `1..=MAX_LIMIT`. A page past the end
/// is empty but still reports the true totals.
pub fn paginate<T>(
  items: Vec<T>,
  page: Option<usize>,
  limit: Option<usize>,
) -> Page<T> {
  let page  = page.unwrap_or(1).max(1);
  let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
  let total = items.len();
  let pages = total.div_ceil(limit);

  let items = items
    .into_iter()
    .skip((page - 1).saturating_mul(limit))
    .take(limit)
    .collect();

  Page { items, pagination: Pagination { page, limit, total, pages } }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_page_uses_defaults() {
    let p = paginate((1..=25).collect::<Vec<_>>(), None, None);
    assert_eq!(p.items, (1..=10).collect::<Vec<_>>());
    assert_eq!(p.pagination, Pagination { page: 1, limit: 10, total: 25, pages: 3 });
  }

  #[test]
  fn last_page_is_partial() {
    let p = paginate((1..=25).collect::<Vec<_>>(), Some(3), Some(10));
    assert_eq!(p.items, vec![21, 22, 23, 24, 25]);
  }

  #[test]
  fn page_past_end_is_empty() {
    let p = paginate(vec![1, 2, 3], Some(9), Some(2));
    assert!(p.items.is_empty());
    assert_eq!(p.pagination.total, 3);
    assert_eq!(p.pagination.pages, 2);
  }

  #[test]
  fn limit_and_page_are_clamped() {
    let p = paginate((0..500).collect::<Vec<_>>(), Some(0), Some(1000));
    assert_eq!(p.pagination.page, 1);
    assert_eq!(p.pagination.limit, MAX_LIMIT);
    assert_eq!(p.items.len(), MAX_LIMIT);

    let p = paginate(vec!['a', 'b'], None, Some(0));
    assert_eq!(p.pagination.limit, 1);
    assert_eq!(p.items, vec!['a']);
  }

  #[test]
  fn empty_list_has_zero_pages() {
    let p = paginate(Vec::<u8>::new(), None, None);
    assert_eq!(p.pagination.pages, 0);
    assert!(p.items.is_empty());
  }
}
