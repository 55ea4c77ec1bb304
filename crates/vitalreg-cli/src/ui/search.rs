//! Search screen: filter line plus the result table.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use vitalreg_core::record::{RecordCategory, RecordStatus, VitalRecord};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(3), Constraint::Min(0)])
    .split(area);

  draw_filters(f, rows[0], app);
  draw_results(f, rows[1], app);
}

fn draw_filters(f: &mut Frame, area: Rect, app: &App) {
  let border_color = if app.input_active {
    Color::Cyan
  } else {
    Color::DarkGray
  };

  let term = if app.query.search_term.is_empty() && !app.input_active {
    Span::styled(
      app.t("search.form.placeholder"),
      Style::default().fg(Color::DarkGray),
    )
  } else {
    Span::raw(app.query.search_term.clone())
  };
  let cursor = if app.input_active { "█" } else { "" };

  let line = Line::from(vec![
    Span::styled("/ ", Style::default().fg(Color::Cyan)),
    term,
    Span::raw(cursor),
    Span::styled(
      format!("   {}: ", app.t("search.form.status")),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(
      app.t(app.query.status.label_key()),
      Style::default().fg(Color::Yellow),
    ),
    Span::styled(
      format!("   {}: ", app.t("search.form.recordType")),
      Style::default().fg(Color::Gray),
    ),
    Span::styled(
      app.t(app.query.record_type.label_key()),
      Style::default().fg(Color::Yellow),
    ),
  ]);

  let block = Block::default()
    .title(format!(" {} ", app.t("search.form.title")))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border_color));
  f.render_widget(Paragraph::new(line).block(block), area);
}

fn category_key(category: RecordCategory) -> &'static str {
  match category {
    RecordCategory::Birth => "search.form.recordType.birth",
    RecordCategory::Death => "search.form.recordType.death",
    RecordCategory::Marriage => "search.form.recordType.marriage",
    RecordCategory::Divorce => "search.form.recordType.divorce",
  }
}

fn status_color(status: RecordStatus) -> Color {
  match status {
    RecordStatus::Pending => Color::Yellow,
    RecordStatus::Approved => Color::Green,
    RecordStatus::Rejected => Color::Red,
  }
}

fn result_row<'a>(app: &'a App, record: &VitalRecord) -> Row<'a> {
  let status = record.effective_status();
  Row::new(vec![
    Cell::from(record.regno().to_owned()).style(Style::default().fg(Color::Cyan)),
    Cell::from(app.t(category_key(record.category()))),
    Cell::from(record.display_name().into_owned()),
    Cell::from(record.registration_date().to_string()),
    Cell::from(app.t(status.label_key())).style(Style::default().fg(status_color(status))),
  ])
}

fn draw_results(f: &mut Frame, area: Rect, app: &App) {
  let results = app.results();
  let block = Block::default()
    .title(format!(" {} ({}) ", app.t("page.search"), results.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  if results.is_empty() {
    f.render_widget(
      Paragraph::new(app.t("search.results.empty"))
        .style(Style::default().fg(Color::DarkGray))
        .block(block),
      area,
    );
    return;
  }

  let header = Row::new(vec![
    app.t("search.table.column.regNo"),
    app.t("search.form.recordType"),
    app.t("search.table.column.name"),
    app.t("search.table.column.date"),
    app.t("search.table.column.status"),
  ])
  .style(Style::default().add_modifier(Modifier::BOLD));

  let rows: Vec<Row> = results.iter().map(|r| result_row(app, r)).collect();

  let table = Table::new(rows, [
    Constraint::Length(20),
    Constraint::Length(12),
    Constraint::Min(20),
    Constraint::Length(12),
    Constraint::Length(10),
  ])
  .header(header)
  .block(block)
  .row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  )
  .highlight_symbol("▶ ");

  let mut state = TableState::default();
  state.select(Some(app.cursor));
  f.render_stateful_widget(table, area, &mut state);
}
