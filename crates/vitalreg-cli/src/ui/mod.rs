//! TUI rendering: orchestrates all panes.
//!
//! Nothing here caches translated text: every label goes through
//! [`App::t`] on each frame, so a language switch shows up on the next draw.

pub mod certificate;
pub mod dashboard;
pub mod search;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};

// ─── Root draw ───────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  match app.screen {
    Screen::Dashboard => dashboard::draw(f, rows[1], app),
    Screen::Search => search::draw(f, rows[1], app),
    Screen::Certificate => certificate::draw(f, rows[1], app),
  }
  draw_status(f, rows[2], app);
}

// ─── Header ──────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();
  let page_key = match app.screen {
    Screen::Dashboard => "page.dashboard",
    Screen::Search => "page.search",
    Screen::Certificate => "page.certificates",
  };

  let left = Span::styled(
    format!(" {} ", app.t(page_key)),
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  // Language switcher: the active language is highlighted.
  let mut switcher = vec![Span::styled(
    format!("{}: ", app.t("layout.language")),
    Style::default().fg(Color::Gray),
  )];
  for language in vitalreg_core::i18n::Language::ALL {
    let style = if language == app.l10n.language() {
      Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
      Style::default().fg(Color::Gray)
    };
    switcher.push(Span::styled(format!(" {} ", language.native_label()), style));
  }
  let right = Span::styled(
    format!("  {date} "),
    Style::default().fg(Color::Gray),
  );

  // Simple left-right header: pad the middle.
  let used: usize = std::iter::once(&left)
    .chain(switcher.iter())
    .chain(std::iter::once(&right))
    .map(Span::width)
    .sum();
  let pad = (area.width as usize).saturating_sub(used);

  let mut spans = vec![left, Span::raw(" ".repeat(pad))];
  spans.extend(switcher);
  spans.push(right);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

// ─── Status bar ──────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match &app.screen {
    Screen::Search if app.input_active => (
      "SEARCH",
      "Type to filter  Esc clear  Enter done  F2 language",
    ),
    Screen::Dashboard => (
      "HOME",
      "Tab records  / search  L language  r reload  q quit",
    ),
    Screen::Search => (
      "RECORDS",
      "↑↓/jk navigate  / search  s status  t type  Enter certificate  L language  q quit",
    ),
    Screen::Certificate => (
      "CERTIFICATE",
      "↑↓/jk scroll  Esc back  L language  q quit",
    ),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
