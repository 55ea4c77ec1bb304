//! Certificate screen.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Rows of certificate text that fit in a terminal `height` rows tall:
/// everything but the header, the status bar and the pane borders.
pub fn visible_rows(height: u16) -> u16 { height.saturating_sub(4) }

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(cert) = app.certificate() else {
    f.render_widget(
      Paragraph::new(app.t("search.results.empty"))
        .style(Style::default().fg(Color::DarkGray)),
      area,
    );
    return;
  };

  let block = Block::default()
    .title(format!(" {} · {} ", cert.title, cert.regno))
    .title_bottom(format!(" {} ", cert.print_label))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  // A resize can leave the stored offset past the end.
  let text = cert.to_string();
  let lines = u16::try_from(text.lines().count()).unwrap_or(u16::MAX);
  let scroll = app
    .cert_scroll
    .min(lines.saturating_sub(block.inner(area).height));

  f.render_widget(
    Paragraph::new(text).block(block).scroll((scroll, 0)),
    area,
  );
}
