//! Application state machine and event dispatcher.

use std::sync::Arc;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vitalreg_core::{
  certificate::Certificate,
  dashboard::{Activity, DashboardStats},
  filter::{QueryContext, filter_records},
  i18n::Localizer,
  record::{RecordsByCategory, VitalRecord},
};

use crate::client::ApiClient;

/// How many entries the dashboard's recent-registrations panel asks for.
const RECENT_LIMIT: usize = 8;

// ─── Screen ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Counters and the recent-registrations feed.
  Dashboard,
  /// Filterable record table.
  Search,
  /// Printable certificate for the selected record.
  Certificate,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
  Continue,
  Reload,
  Quit,
}

// ─── App ─────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Active language plus the shared catalog. Every label is resolved
  /// through this on each draw.
  pub l10n: Localizer,

  /// Current search term and selectors.
  pub query: QueryContext,

  /// Whether the user is typing into the search term.
  pub input_active: bool,

  /// All records fetched from the server; filtered locally.
  records: RecordsByCategory,

  /// `records` filtered by `query`, refreshed whenever either changes.
  filtered: Vec<VitalRecord>,

  pub stats: DashboardStats,

  pub recent: Vec<Activity>,

  /// Cursor position within the *filtered* result list.
  pub cursor: usize,

  /// Record shown on the certificate screen.
  pub selected: Option<VitalRecord>,

  /// Scroll offset within the certificate.
  pub cert_scroll: u16,

  /// Rows of certificate text visible at once, kept in step with the
  /// terminal size by the event loop.
  pub cert_viewport: u16,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient, l10n: Localizer) -> Self {
    Self {
      screen: Screen::Dashboard,
      l10n,
      query: QueryContext::default(),
      input_active: false,
      records: RecordsByCategory::default(),
      filtered: Vec::new(),
      stats: DashboardStats::default(),
      recent: Vec::new(),
      cursor: 0,
      selected: None,
      cert_scroll: 0,
      cert_viewport: u16::MAX,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch records, counters and the activity feed from the server.
  pub async fn load(&mut self) -> anyhow::Result<()> {
    self.status_msg = "Loading records…".into();
    let fetched = async {
      let records = self.client.all_records().await?;
      let stats = self.client.dashboard_stats().await?;
      let recent = self.client.recent_activity(RECENT_LIMIT).await?;
      anyhow::Ok((records, stats, recent))
    }
    .await;

    match fetched {
      Ok((records, stats, recent)) => {
        tracing::info!(records = records.len(), "loaded records");
        self.set_records(records);
        self.stats = stats;
        self.recent = recent;
        self.status_msg = String::new();
        Ok(())
      }
      Err(e) => {
        tracing::warn!(error = %e, "load failed");
        self.status_msg = format!("Error: {e}");
        Err(e)
      }
    }
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// Replace the record set and re-apply the current query.
  pub fn set_records(&mut self, records: RecordsByCategory) {
    self.records = records;
    self.refilter();
  }

  /// Records passing the current query, births first, then deaths,
  /// marriages and divorces.
  pub fn results(&self) -> &[VitalRecord] { &self.filtered }

  /// The record under the cursor in the filtered view, if any.
  pub fn cursor_record(&self) -> Option<&VitalRecord> {
    self.filtered.get(self.cursor)
  }

  /// The selected record's certificate in the active language.
  pub fn certificate(&self) -> Option<Certificate> {
    self
      .selected
      .as_ref()
      .map(|r| Certificate::build(r, &self.l10n, Local::now().date_naive()))
  }

  /// Shorthand for a label in the active language.
  pub fn t<'a>(&'a self, key: &'a str) -> &'a str { self.l10n.t(key) }

  /// Furthest the certificate can scroll while its last line stays on
  /// screen.
  pub fn max_cert_scroll(&self) -> u16 {
    let lines = self
      .certificate()
      .map_or(0, |c| c.to_string().lines().count());
    u16::try_from(lines)
      .unwrap_or(u16::MAX)
      .saturating_sub(self.cert_viewport)
  }

  /// Re-run the query after the search term, a selector or the record set
  /// changed, keeping the cursor inside the new result list.
  fn refilter(&mut self) {
    self.filtered = filter_records(&self.records, &self.query).into_records();
    self.cursor = self.cursor.min(self.filtered.len().saturating_sub(1));
  }

  fn cycle_language(&mut self) {
    let next = self.l10n.language().next();
    self.l10n.set_language(next);
    tracing::debug!(language = %next, "language switched");
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match self.apply_key(key) {
      Action::Quit => Ok(false),
      Action::Reload => {
        // A failed reload is reported in the status bar; keep running.
        let _ = self.load().await;
        Ok(true)
      }
      Action::Continue => Ok(true),
    }
  }

  /// Update state for one key press.
  pub fn apply_key(&mut self, key: KeyEvent) -> Action {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return Action::Quit;
    }
    // Global: F2 cycles the language, even while typing.
    if key.code == KeyCode::F(2) {
      self.cycle_language();
      return Action::Continue;
    }

    if self.input_active {
      self.handle_input_key(key);
      return Action::Continue;
    }

    match key.code {
      KeyCode::Char('q') => return Action::Quit,
      KeyCode::Char('L') => {
        self.cycle_language();
        return Action::Continue;
      }
      KeyCode::Char('r') => return Action::Reload,
      KeyCode::Char('1') => {
        self.screen = Screen::Dashboard;
        return Action::Continue;
      }
      KeyCode::Char('2') => {
        self.screen = Screen::Search;
        return Action::Continue;
      }
      _ => {}
    }

    match self.screen {
      Screen::Dashboard => self.handle_dashboard_key(key),
      Screen::Search => self.handle_search_key(key),
      Screen::Certificate => self.handle_certificate_key(key),
    }
    Action::Continue
  }

  fn handle_input_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.input_active = false;
        self.query.search_term.clear();
        self.cursor = 0;
        self.refilter();
      }
      KeyCode::Enter => {
        self.input_active = false;
      }
      KeyCode::Backspace => {
        self.query.search_term.pop();
        self.cursor = 0;
        self.refilter();
      }
      KeyCode::Char(c) => {
        self.query.search_term.push(c);
        self.cursor = 0;
        self.refilter();
      }
      _ => {}
    }
  }

  fn handle_dashboard_key(&mut self, key: KeyEvent) {
    if matches!(key.code, KeyCode::Tab | KeyCode::Enter | KeyCode::Char('/')) {
      self.screen = Screen::Search;
      if key.code == KeyCode::Char('/') {
        self.input_active = true;
      }
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Tab | KeyCode::Esc => self.screen = Screen::Dashboard,

      // Filters
      KeyCode::Char('/') => self.input_active = true,
      KeyCode::Char('s') => {
        self.query.status = self.query.status.next();
        self.cursor = 0;
        self.refilter();
      }
      KeyCode::Char('t') => {
        self.query.record_type = self.query.record_type.next();
        self.cursor = 0;
        self.refilter();
      }

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if self.cursor + 1 < self.filtered.len() {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }

      // Open certificate
      KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
        if let Some(record) = self.cursor_record() {
          self.selected = Some(record.clone());
          self.cert_scroll = 0;
          self.screen = Screen::Certificate;
        }
      }

      _ => {}
    }
  }

  fn handle_certificate_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.screen = Screen::Search;
        self.selected = None;
      }
      KeyCode::Down | KeyCode::Char('j') => {
        self.cert_scroll =
          self.cert_scroll.saturating_add(1).min(self.max_cert_scroll());
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cert_scroll = self.cert_scroll.saturating_sub(1);
      }
      _ => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use vitalreg_core::{
    filter::{RecordTypeFilter, StatusFilter},
    i18n::{Catalog, Language},
    record::{BirthRecord, RecordMeta, RecordStatus, Sex},
  };

  use super::*;
  use crate::client::ApiConfig;

  fn birth(regno: &str, child: &str, status: RecordStatus) -> BirthRecord {
    let day = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    BirthRecord {
      birth_regno:       regno.into(),
      child_name:        child.into(),
      mother_name:       "Almaz Tadesse".into(),
      father_name:       "Kebede Worku".into(),
      date_of_birth:     day,
      sex:               Sex::Female,
      city:              "Jimma".into(),
      kebele:            "Hermata Merkato".into(),
      house_number:      "123".into(),
      nationality:       "Ethiopian".into(),
      registration_date: day,
      meta:              RecordMeta { status: Some(status), ..Default::default() },
    }
  }

  fn app() -> App {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:8080".into(),
      username: String::new(),
      password: String::new(),
    })
    .unwrap();
    let l10n = Localizer::new(Arc::new(Catalog::builtin().unwrap()), Language::En);
    let mut app = App::new(client, l10n);
    app.set_records(RecordsByCategory {
      births: vec![
        birth("BRT-1", "Abebe Kebede", RecordStatus::Approved),
        birth("BRT-2", "Hanna Tesfaye", RecordStatus::Pending),
      ],
      ..Default::default()
    });
    app
  }

  fn press(app: &mut App, code: KeyCode) -> Action {
    app.apply_key(KeyEvent::new(code, KeyModifiers::NONE))
  }

  fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
      press(app, KeyCode::Char(c));
    }
  }

  #[test]
  fn language_cycles_and_wraps() {
    let mut app = app();
    assert_eq!(app.t("page.search"), "Search Records");
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.l10n.language(), Language::Am);
    press(&mut app, KeyCode::Char('L'));
    assert_eq!(app.l10n.language(), Language::Om);
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.l10n.language(), Language::En);
  }

  #[test]
  fn typing_filters_results() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('/'));
    assert!(app.input_active);

    // Letters bound to commands are plain text while typing.
    type_str(&mut app, "hannaq");
    assert_eq!(press(&mut app, KeyCode::Backspace), Action::Continue);
    assert_eq!(app.query.search_term, "hanna");
    let results = app.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].regno(), "BRT-2");

    press(&mut app, KeyCode::Esc);
    assert!(!app.input_active);
    assert!(app.query.search_term.is_empty());
    assert_eq!(app.results().len(), 2);
  }

  #[test]
  fn selectors_narrow_results() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.query.status, StatusFilter::Pending);
    assert_eq!(app.results().len(), 1);

    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('t'));
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.query.record_type, RecordTypeFilter::Death);
    assert!(app.results().is_empty());
  }

  #[test]
  fn enter_opens_certificate_for_cursor_record() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Certificate);

    let cert = app.certificate().unwrap();
    assert_eq!(cert.regno, "BRT-2");
    assert_eq!(cert.title, "BIRTH CERTIFICATE");

    // Labels follow the language on the next build.
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.certificate().unwrap().language, Language::Am);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen, Screen::Search);
    assert!(app.selected.is_none());
  }

  #[test]
  fn cursor_stays_in_bounds() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    for _ in 0..5 {
      press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.cursor, 1);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.cursor, 0);
  }

  #[test]
  fn certificate_scroll_stops_at_last_line() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Enter);
    let lines = app.certificate().unwrap().to_string().lines().count() as u16;
    assert!(lines > 10);

    // Until the event loop reports a viewport, nothing scrolls.
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.cert_scroll, 0);

    app.cert_viewport = 10;
    for _ in 0..200 {
      press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.cert_scroll, lines - 10);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.cert_scroll, lines - 11);
  }

  #[test]
  fn reload_keeps_cursor_within_new_results() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.cursor_record().unwrap().regno(), "BRT-2");

    app.set_records(RecordsByCategory {
      births: vec![birth("BRT-3", "Liya Girma", RecordStatus::Pending)],
      ..Default::default()
    });
    assert_eq!(app.cursor, 0);
    assert_eq!(app.results().len(), 1);
    assert_eq!(app.cursor_record().unwrap().regno(), "BRT-3");
  }

  #[test]
  fn quit_and_reload_actions() {
    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Char('r')), Action::Reload);
    assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(app.apply_key(ctrl_c), Action::Quit);
  }
}
