//! Dashboard screen: counters and recent registrations.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use vitalreg_core::record::RecordCategory;

use crate::app::App;

fn stat_key(category: RecordCategory) -> &'static str {
  match category {
    RecordCategory::Birth => "dashboard.stats.births",
    RecordCategory::Death => "dashboard.stats.deaths",
    RecordCategory::Marriage => "dashboard.stats.marriages",
    RecordCategory::Divorce => "dashboard.stats.divorces",
  }
}

/// Render the dashboard into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(4), // welcome
      Constraint::Length(5), // counters
      Constraint::Min(0),    // recent
    ])
    .split(area);

  draw_welcome(f, rows[0], app);
  draw_counters(f, rows[1], app);
  draw_recent(f, rows[2], app);
}

fn draw_welcome(f: &mut Frame, area: Rect, app: &App) {
  let lines = vec![
    Line::from(Span::styled(
      app.t("dashboard.welcomeTitle"),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(
      app.t("layout.subtitle"),
      Style::default().fg(Color::Cyan),
    )),
    Line::from(Span::styled(
      app.t("dashboard.welcomeBody"),
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: true }),
    area.inner(ratatui::layout::Margin::new(1, 0)),
  );
}

fn draw_counters(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Ratio(1, 5); 5])
    .split(area);

  let mut cards = vec![(
    app.t("dashboard.stats.persons"),
    app.stats.total_persons,
    None,
  )];
  for category in RecordCategory::ALL {
    let recent = match category {
      RecordCategory::Birth => app.stats.recent_births,
      RecordCategory::Death => app.stats.recent_deaths,
      RecordCategory::Marriage => app.stats.recent_marriages,
      RecordCategory::Divorce => app.stats.recent_divorces,
    };
    cards.push((app.t(stat_key(category)), app.stats.total(category), Some(recent)));
  }

  for ((label, total, recent), col) in cards.into_iter().zip(cols.iter()) {
    let block = Block::default()
      .title(format!(" {label} "))
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Color::DarkGray));
    let mut lines = vec![Line::from(Span::styled(
      total.to_string(),
      Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD),
    ))];
    if let Some(recent) = recent {
      lines.push(Line::from(Span::styled(
        format!("+{recent} / 30d"),
        Style::default().fg(Color::Green),
      )));
    }
    f.render_widget(Paragraph::new(lines).block(block), *col);
  }
}

fn draw_recent(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" {} ", app.t("dashboard.recent.title")))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if app.recent.is_empty() {
    f.render_widget(
      Paragraph::new(app.t("search.results.empty"))
        .style(Style::default().fg(Color::DarkGray))
        .block(block),
      area,
    );
    return;
  }

  let items: Vec<ListItem> = app
    .recent
    .iter()
    .map(|a| {
      ListItem::new(Line::from(vec![
        Span::styled(format!("{:<18}", a.regno), Style::default().fg(Color::Cyan)),
        Span::raw(format!("{:<32}", a.name)),
        Span::styled(
          a.registration_date.to_string(),
          Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
          a.created_by
            .as_deref()
            .map(|by| format!("  {by}"))
            .unwrap_or_default(),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  f.render_widget(List::new(items).block(block), area);
}
